//! Relation filter selects

use holocron_core::filter::{FilterOptionSet, FilterSelection, RelationKind};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub selection: FilterSelection,
    pub options: FilterOptionSet,
    /// An empty reference clears that filter
    pub on_change: Callback<(RelationKind, String)>,
    pub on_clear: Callback<()>,
}

fn placeholder(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::Homeworld => "All Homeworlds",
        RelationKind::Film => "All Films",
        RelationKind::Species => "All Species",
    }
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let selects = RelationKind::ALL.into_iter().map(|kind| {
        let selected = props.selection.get(kind).unwrap_or_default().to_string();
        let onchange = props.on_change.reform(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            (kind, select.value())
        });

        html! {
            <div key={kind.label()} class="flex-1 min-w-[200px]">
                <label class="block text-sm font-medium text-gray-300 mb-2">{kind.label()}</label>
                <select
                    {onchange}
                    class="w-full px-4 py-2 border border-gray-700 rounded-lg bg-gray-900 text-white focus:outline-none focus:ring-2 focus:ring-cyan-500 focus:border-transparent"
                >
                    <option value="" selected={selected.is_empty()}>{placeholder(kind)}</option>
                    { for props.options.options(kind).iter().map(|option| html! {
                        <option
                            key={option.url.clone()}
                            value={option.url.clone()}
                            selected={option.url == selected}
                        >
                            {option.name.clone()}
                        </option>
                    }) }
                </select>
            </div>
        }
    });

    let on_clear = props.on_clear.reform(|_: MouseEvent| ());

    html! {
        <div class="mb-6">
            <div class="flex flex-col md:flex-row gap-4 items-start md:items-end justify-between">
                <div class="flex flex-wrap gap-4 flex-1">
                    { for selects }
                </div>
                if !props.selection.is_empty() {
                    <div class="w-full md:w-auto">
                        <button
                            onclick={on_clear}
                            class="w-full md:w-auto px-4 py-2 text-cyan-400 hover:text-cyan-300 border border-cyan-500 hover:border-cyan-400 rounded-lg transition-colors mt-6 md:mt-0"
                        >
                            {"Clear Filters"}
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
