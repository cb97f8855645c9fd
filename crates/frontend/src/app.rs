use crate::components::{CatalogView, Footer, Header, LoginPage};
use holocron_core::{AppConfig, CatalogConfig};
use holocron_frontend_common::{AuthProvider, use_auth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <AuthProvider config={props.config.auth.clone()}>
            <AppContent catalog={props.config.catalog.clone()} />
        </AuthProvider>
    }
}

#[derive(Properties, PartialEq)]
struct AppContentProps {
    catalog: CatalogConfig,
}

/// Signed out shows the login page. Signed in mounts the catalog, so
/// logging out unmounts it and drops every search and filter choice.
#[function_component(AppContent)]
fn app_content(props: &AppContentProps) -> Html {
    let auth = use_auth();

    let Some(user) = auth.user().cloned() else {
        return html! { <LoginPage /> };
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |()| auth.logout())
    };

    html! {
        <div class="min-h-screen bg-black flex flex-col">
            <Header user={user} on_logout={on_logout} />
            <main class="container mx-auto px-4 py-8 flex-1">
                <CatalogView config={props.catalog.clone()} />
            </main>
            <Footer />
        </div>
    }
}
