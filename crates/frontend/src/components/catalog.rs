//! The character catalog: paging, search and filters over the loaded page

use super::{ActiveFilters, CharacterCard, CharacterDetails, FilterPanel, Pagination, SearchBar};
use holocron_core::filter::{
    FilterOptionSet, FilterSelection, RelationKind, ResultSummary, apply_filters,
    derive_filter_options, is_filtering,
};
use holocron_core::{CatalogConfig, Character, LoadState, Page, PageCursor};
use holocron_frontend_common::{ErrorPanel, Spinner, catalog_client};
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Remote paging state
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    cursor: PageCursor,
    page: LoadState<Rc<Vec<Character>>>,
    /// Bumped by a retry so the same URL is fetched again
    attempt: u32,
}

pub enum CatalogAction {
    Next,
    Previous,
    Retry,
    Loaded { url: String, page: Page<Character> },
    Failed { url: String, message: String },
}

impl CatalogState {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            cursor: PageCursor::new(url),
            page: LoadState::Loading,
            attempt: 0,
        }
    }

    /// Identity of the fetch this state is waiting for
    fn request(&self) -> (String, u32) {
        (self.cursor.url().to_string(), self.attempt)
    }
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            CatalogAction::Next => {
                if !next.cursor.go_next() {
                    return self;
                }
                next.page = LoadState::Loading;
            }
            CatalogAction::Previous => {
                if !next.cursor.go_previous() {
                    return self;
                }
                next.page = LoadState::Loading;
            }
            CatalogAction::Retry => {
                next.attempt = next.attempt.wrapping_add(1);
                next.page = LoadState::Loading;
            }
            // Responses for a page we have already left are dropped
            CatalogAction::Loaded { url, page } => {
                if url != next.cursor.url() {
                    return self;
                }
                next.cursor.update_links(&page);
                next.page = LoadState::Loaded(Rc::new(page.results));
            }
            CatalogAction::Failed { url, message } => {
                if url != next.cursor.url() {
                    return self;
                }
                next.page = LoadState::Failed(message);
            }
        }

        Rc::new(next)
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogViewProps {
    pub config: CatalogConfig,
}

#[function_component(CatalogView)]
pub fn catalog_view(props: &CatalogViewProps) -> Html {
    let client = use_memo(props.config.clone(), |config| {
        catalog_client(config).map_err(|err| err.user_message())
    });
    let state = use_reducer({
        let url = props.config.people_url();
        move || CatalogState::new(url)
    });
    let query = use_state(String::new);
    let selection = use_state(FilterSelection::default);
    let options = use_state(FilterOptionSet::default);
    let selected = use_state(|| None::<Character>);
    let derivation = use_mut_ref(|| 0_u32);

    // Fetch whenever the cursor moves or a retry is requested
    {
        let client = Rc::clone(&client);
        let dispatcher = state.dispatcher();
        use_effect_with(state.request(), move |(url, _)| {
            if let Ok(client) = client.as_ref().clone() {
                let url = url.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match client.fetch_page(&url).await {
                        Ok(page) => dispatcher.dispatch(CatalogAction::Loaded { url, page }),
                        Err(err) => {
                            tracing::warn!(%url, error = %err, "Failed to load characters");
                            dispatcher.dispatch(CatalogAction::Failed {
                                url,
                                message: err.user_message(),
                            });
                        }
                    }
                });
            }
        });
    }

    // Rebuild the filter options for every newly loaded page
    {
        let client = Rc::clone(&client);
        let options = options.clone();
        let derivation = derivation.clone();
        let characters = state.page.loaded().cloned();
        use_effect_with(characters, move |characters| {
            let generation = {
                let mut counter = derivation.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            options.set(FilterOptionSet::default());

            if let (Some(characters), Ok(client)) = (characters.clone(), client.as_ref().clone()) {
                wasm_bindgen_futures::spawn_local(async move {
                    let derived = derive_filter_options(&characters, &client).await;
                    if *derivation.borrow() == generation {
                        options.set(derived);
                    }
                });
            }
        });
    }

    if let Err(message) = client.as_ref() {
        return html! { <ErrorPanel message={Some(AttrValue::from(message.clone()))} /> };
    }

    let on_next = {
        let state = state.clone();
        Callback::from(move |()| {
            state.dispatch(CatalogAction::Next);
            scroll_to_top();
        })
    };
    let on_previous = {
        let state = state.clone();
        Callback::from(move |()| {
            state.dispatch(CatalogAction::Previous);
            scroll_to_top();
        })
    };
    let on_retry = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(CatalogAction::Retry))
    };

    let characters = match &state.page {
        LoadState::Loading => {
            return html! { <Spinner text={Some(AttrValue::from("Loading characters..."))} /> };
        }
        LoadState::Failed(message) => {
            return html! {
                <ErrorPanel message={Some(AttrValue::from(message.clone()))} on_retry={Some(on_retry)} />
            };
        }
        LoadState::Loaded(characters) => Rc::clone(characters),
    };

    let pagination = html! {
        <Pagination
            page={state.cursor.page()}
            has_next={state.cursor.has_next()}
            has_previous={state.cursor.has_previous()}
            {on_next}
            {on_previous}
        />
    };

    if characters.is_empty() {
        return html! {
            <>
                <div class="text-center py-12">
                    <p class="text-gray-300 text-lg">{"No characters found."}</p>
                </div>
                { pagination }
            </>
        };
    }

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_clear_search = {
        let query = query.clone();
        Callback::from(move |()| query.set(String::new()))
    };
    let on_filter_change = {
        let selection = selection.clone();
        Callback::from(move |(kind, reference): (RelationKind, String)| {
            let mut next = (*selection).clone();
            next.set(kind, reference);
            selection.set(next);
        })
    };
    let on_clear_filter = {
        let selection = selection.clone();
        Callback::from(move |kind: RelationKind| {
            let mut next = (*selection).clone();
            next.clear(kind);
            selection.set(next);
        })
    };
    let on_clear_filters = {
        let selection = selection.clone();
        Callback::from(move |()| selection.set(FilterSelection::default()))
    };
    let on_clear_all = {
        let query = query.clone();
        let selection = selection.clone();
        Callback::from(move |()| {
            query.set(String::new());
            selection.set(FilterSelection::default());
        })
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |character: Character| selected.set(Some(character)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let visible = apply_filters(&characters, &query, &selection);
    let filtering = is_filtering(&query, &selection);
    let summary = ResultSummary {
        shown: visible.len(),
        total: characters.len(),
    };

    html! {
        <>
            <SearchBar query={AttrValue::from((*query).clone())} on_change={on_query} on_clear={on_clear_search.clone()} />
            <FilterPanel
                selection={(*selection).clone()}
                options={(*options).clone()}
                on_change={on_filter_change}
                on_clear={on_clear_filters}
            />
            <ActiveFilters
                query={AttrValue::from((*query).clone())}
                selection={(*selection).clone()}
                options={(*options).clone()}
                {summary}
                {on_clear_search}
                {on_clear_filter}
                {on_clear_all}
            />

            if visible.is_empty() {
                <div class="text-center py-12">
                    <p class="text-gray-300 text-lg">{"No characters match your search or filters."}</p>
                </div>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    { for visible.iter().map(|character| html! {
                        <CharacterCard
                            key={character.url.clone()}
                            character={(*character).clone()}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
            }

            // Filtering only sees the loaded page, so paging is hidden meanwhile
            if !filtering {
                { pagination }
            }

            if let Some(character) = &*selected {
                <CharacterDetails
                    key={character.url.clone()}
                    character={character.clone()}
                    config={props.config.clone()}
                    {on_close}
                />
            }
        </>
    }
}
