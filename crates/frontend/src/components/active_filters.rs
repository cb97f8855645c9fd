//! Badges for the active query and filters

use holocron_core::filter::{FilterOptionSet, FilterSelection, RelationKind, ResultSummary};
use yew::prelude::*;

const BADGE_CLASS: &str = "inline-flex items-center gap-1 px-3 py-1 bg-cyan-900 border border-cyan-700 rounded-full text-sm text-cyan-300";

#[derive(Properties, PartialEq)]
pub struct ActiveFiltersProps {
    pub query: AttrValue,
    pub selection: FilterSelection,
    pub options: FilterOptionSet,
    pub summary: ResultSummary,
    pub on_clear_search: Callback<()>,
    pub on_clear_filter: Callback<RelationKind>,
    pub on_clear_all: Callback<()>,
}

#[function_component(ActiveFilters)]
pub fn active_filters(props: &ActiveFiltersProps) -> Html {
    let query = props.query.trim();
    let has_search = !query.is_empty();
    let has_filters = !props.selection.is_empty();

    if !has_search && !has_filters {
        return html! {};
    }

    let badges = props.selection.active().map(|(kind, reference)| {
        let name = props.options.display_name(kind, reference).to_string();
        let onclick = props.on_clear_filter.reform(move |_: MouseEvent| kind);
        let label = format!("Clear {} filter", kind.label().to_lowercase());

        html! {
            <span key={kind.label()} class={BADGE_CLASS}>
                <span>{format!("{kind}: {name}")}</span>
                <button {onclick} class="hover:text-cyan-100 transition-colors" aria-label={label}>
                    {"×"}
                </button>
            </span>
        }
    });

    html! {
        <div class="mb-4 p-4 bg-gray-900 border border-gray-700 rounded-lg">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm text-gray-400">{"Active:"}</span>
                    if has_search {
                        <span class={BADGE_CLASS}>
                            <span>{format!("Search: \"{query}\"")}</span>
                            <button
                                onclick={props.on_clear_search.reform(|_: MouseEvent| ())}
                                class="hover:text-cyan-100 transition-colors"
                                aria-label="Clear search"
                            >
                                {"×"}
                            </button>
                        </span>
                    }
                    { for badges }
                    <span class="text-sm text-gray-400 ml-2">{props.summary.to_string()}</span>
                </div>
                if has_search && has_filters {
                    <button
                        onclick={props.on_clear_all.reform(|_: MouseEvent| ())}
                        class="px-4 py-1.5 text-sm text-cyan-400 hover:text-cyan-300 border border-cyan-500 hover:border-cyan-400 rounded-lg transition-colors whitespace-nowrap"
                    >
                        {"Clear All"}
                    </button>
                }
            </div>
        </div>
    }
}
