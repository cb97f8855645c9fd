//! Modal with a character's attributes and homeworld

use holocron_core::{CatalogConfig, Character, LoadState, Planet};
use holocron_frontend_common::{Spinner, catalog_client};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CharacterDetailsProps {
    pub character: Character,
    pub config: CatalogConfig,
    pub on_close: Callback<()>,
}

/// `Loaded(None)` means the character has no homeworld reference
#[hook]
fn use_homeworld(url: Option<String>, config: CatalogConfig) -> LoadState<Option<Planet>> {
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with(url, move |url| {
            match url.clone() {
                None => state.set(LoadState::Loaded(None)),
                Some(url) => {
                    state.set(LoadState::Loading);
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = match catalog_client(&config) {
                            Ok(client) => client.fetch_homeworld(&url).await,
                            Err(err) => Err(err),
                        };
                        match result {
                            Ok(planet) => state.set(LoadState::Loaded(Some(planet))),
                            Err(err) => {
                                tracing::warn!(%url, error = %err, "Failed to load homeworld");
                                state.set(LoadState::Failed(err.user_message()));
                            }
                        }
                    });
                }
            }
        });
    }

    (*state).clone()
}

fn stat(label: &'static str, value: String) -> Html {
    html! {
        <div class="bg-gray-800 border border-gray-700 p-4 rounded-lg">
            <p class="text-sm text-gray-400">{label}</p>
            <p class="text-lg font-semibold text-cyan-400 capitalize">{value}</p>
        </div>
    }
}

#[function_component(CharacterDetails)]
pub fn character_details(props: &CharacterDetailsProps) -> Html {
    let character = &props.character;
    let homeworld = use_homeworld(character.homeworld.clone(), props.config.clone());

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let homeworld_view = match &homeworld {
        LoadState::Loading => html! {
            <Spinner compact=true text={Some(AttrValue::from("Loading homeworld details..."))} />
        },
        LoadState::Failed(message) => html! {
            <div class="bg-red-900 border border-red-700 rounded-lg p-4">
                <p class="text-red-300">{format!("Failed to load homeworld: {message}")}</p>
            </div>
        },
        LoadState::Loaded(Some(planet)) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { stat("Name", planet.name.clone()) }
                { stat("Terrain", planet.terrain_label().to_string()) }
                { stat("Climate", planet.climate_label().to_string()) }
                { stat("Population", planet.population_label().to_string()) }
            </div>
        },
        LoadState::Loaded(None) => html! {
            <div class="bg-gray-800 border border-gray-700 p-4 rounded-lg">
                <p class="text-gray-300">{"No homeworld information available"}</p>
            </div>
        },
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-80 flex items-center justify-center z-50 p-4" onclick={on_backdrop}>
            <div
                class="bg-gray-900 border border-cyan-500 rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto shadow-2xl"
                onclick={stop}
            >
                <div class="bg-gradient-to-r from-cyan-500 to-cyan-600 p-6">
                    <div class="flex justify-between items-center">
                        <h2 class="text-3xl font-bold text-black">{character.name.clone()}</h2>
                        <button
                            onclick={on_close}
                            class="text-black hover:text-gray-800 text-2xl font-bold transition-colors"
                            aria-label="Close"
                        >
                            {"×"}
                        </button>
                    </div>
                </div>

                <div class="p-6 space-y-4 bg-gray-900">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { stat("Height", character.height_label()) }
                        { stat("Mass", character.mass_label()) }
                        { stat("Birth Year", character.birth_year.clone()) }
                        { stat("Gender", character.gender_label()) }
                        { stat("Number of Films", character.film_count().to_string()) }
                        { stat("Date Added", character.created_label()) }
                    </div>

                    <div class="border-t border-gray-700 pt-4">
                        <h3 class="text-xl font-bold text-cyan-400 mb-4">{"Homeworld"}</h3>
                        { homeworld_view }
                    </div>
                </div>
            </div>
        </div>
    }
}
