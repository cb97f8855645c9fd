//! Error state with an optional retry action

use yew::prelude::*;

const DEFAULT_MESSAGE: &str = "Failed to load characters. Please try again.";

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorPanelProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| AttrValue::from(DEFAULT_MESSAGE));

    html! {
        <div class="flex justify-center items-center py-12 min-h-[60vh] px-4">
            <div class="text-center max-w-md">
                <div class="text-red-500 text-6xl mb-4">{"⚠️"}</div>
                <h2 class="text-2xl font-bold text-cyan-400 mb-2">{"Oops! Something went wrong"}</h2>
                <p class="text-gray-300 mb-6">{message}</p>
                if let Some(on_retry) = &props.on_retry {
                    <button
                        onclick={on_retry.reform(|_: MouseEvent| ())}
                        class="bg-cyan-500 hover:bg-cyan-600 text-black font-semibold py-2 px-6 rounded-lg transition-colors"
                    >
                        {"Retry"}
                    </button>
                }
            </div>
        </div>
    }
}
