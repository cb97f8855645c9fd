use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
}

fn button_class(enabled: bool) -> &'static str {
    if enabled {
        "px-4 py-2 rounded-lg font-semibold transition-colors bg-cyan-500 hover:bg-cyan-600 text-black"
    } else {
        "px-4 py-2 rounded-lg font-semibold transition-colors bg-gray-800 text-gray-500 cursor-not-allowed border border-gray-700"
    }
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <div class="flex justify-center items-center gap-4 mt-8 mb-4">
            <button
                onclick={props.on_previous.reform(|_: MouseEvent| ())}
                disabled={!props.has_previous}
                class={button_class(props.has_previous)}
            >
                {"Previous"}
            </button>
            <span class="text-cyan-400 font-medium">{format!("Page {}", props.page)}</span>
            <button
                onclick={props.on_next.reform(|_: MouseEvent| ())}
                disabled={!props.has_next}
                class={button_class(props.has_next)}
            >
                {"Next"}
            </button>
        </div>
    }
}
