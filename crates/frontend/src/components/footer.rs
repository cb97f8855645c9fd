use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-800 text-gray-300 py-6 mt-12">
            <div class="container mx-auto px-4 text-center">
                <p class="text-sm">{"Character data from the Star Wars API"}</p>
                <p class="text-xs mt-1 text-gray-400">{"Built with Rust, Yew & Tailwind CSS"}</p>
            </div>
        </footer>
    }
}
