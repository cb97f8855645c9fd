//! Top bar with the signed-in user and logout

use holocron_core::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: User,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-black border-b border-cyan-500 shadow-lg">
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <h1 class="text-2xl md:text-3xl font-extrabold tracking-widest text-yellow-400">{"STAR WARS"}</h1>
                    <LogoutButton user={props.user.clone()} on_logout={props.on_logout.clone()} />
                </div>
            </div>
        </header>
    }
}

#[function_component(LogoutButton)]
fn logout_button(props: &HeaderProps) -> Html {
    let onclick = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <div class="flex items-center gap-4">
            <span class="text-sm text-gray-300 hidden md:inline">
                {format!("Welcome, {}", props.user.username)}
            </span>
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 rounded-full bg-cyan-500 flex items-center justify-center border-2 border-cyan-400">
                    <span class="text-black font-bold text-lg">{props.user.initial().to_string()}</span>
                </div>
                <button
                    {onclick}
                    class="px-4 py-2 text-sm bg-gray-800 hover:bg-gray-700 text-cyan-400 border border-gray-700 hover:border-cyan-500 rounded-lg transition-colors"
                >
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}
