//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Inline spinners skip the tall centering wrapper
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    if props.compact {
        return html! {
            <div class="text-center py-4">
                <div class="inline-block animate-spin rounded-full h-6 w-6 border-b-2 border-cyan-500"></div>
                if let Some(text) = &props.text {
                    <p class="text-gray-300 mt-2">{text.clone()}</p>
                }
            </div>
        };
    }

    html! {
        <div class="flex justify-center items-center py-12 min-h-[60vh]">
            <div class="text-center">
                <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-cyan-500 mb-4"></div>
                if let Some(text) = &props.text {
                    <p class="text-cyan-400 text-lg">{text.clone()}</p>
                }
            </div>
        </div>
    }
}
