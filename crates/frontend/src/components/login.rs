//! Login form

use holocron_frontend_common::use_auth;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-700 rounded-lg bg-gray-800 text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-cyan-500 focus:border-transparent";

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let pending = auth.is_pending();

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !auth.is_pending() {
                auth.login((*username).clone(), (*password).clone());
            }
        })
    };

    html! {
        <div class="min-h-screen bg-black flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="bg-gray-900 border border-cyan-500 rounded-lg p-8 shadow-2xl">
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-extrabold tracking-widest text-yellow-400 mb-4">{"STAR WARS"}</h1>
                        <h2 class="text-2xl font-bold text-cyan-400">{"Login"}</h2>
                        <p class="text-gray-400 text-sm mt-2">
                            {"Enter your credentials to access the Star Wars Character App"}
                        </p>
                    </div>

                    if let Some(error) = auth.error() {
                        <div class="mb-4 p-3 bg-red-900 border border-red-700 rounded-lg">
                            <p class="text-red-300 text-sm">{error.to_string()}</p>
                        </div>
                    }

                    <form onsubmit={on_submit} class="space-y-4">
                        <div>
                            <label for="username" class="block text-sm font-medium text-gray-300 mb-2">
                                {"Username"}
                            </label>
                            <input
                                id="username"
                                type="text"
                                value={(*username).clone()}
                                oninput={on_username}
                                placeholder="Enter username"
                                required=true
                                disabled={pending}
                                class={INPUT_CLASS}
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-300 mb-2">
                                {"Password"}
                            </label>
                            <input
                                id="password"
                                type="password"
                                value={(*password).clone()}
                                oninput={on_password}
                                placeholder="Enter password"
                                required=true
                                disabled={pending}
                                class={INPUT_CLASS}
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={pending}
                            class="w-full py-3 bg-cyan-500 hover:bg-cyan-600 text-black font-semibold rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            { if pending { "Logging in..." } else { "Login" } }
                        </button>
                    </form>

                    <div class="mt-6 p-4 bg-gray-800 border border-gray-700 rounded-lg">
                        <p class="text-xs text-gray-400 mb-2">{"Demo Credentials:"}</p>
                        <p class="text-xs text-cyan-400">
                            {"Username: "}<span class="text-white">{"admin"}</span>
                        </p>
                        <p class="text-xs text-cyan-400">
                            {"Password: "}<span class="text-white">{"password123"}</span>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
