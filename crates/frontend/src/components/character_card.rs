use holocron_core::Character;
use yew::prelude::*;

const FALLBACK_IMAGE: &str = "https://via.placeholder.com/400x500?text=No+Image";

#[derive(Properties, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
    pub on_select: Callback<Character>,
}

#[function_component(CharacterCard)]
pub fn character_card(props: &CharacterCardProps) -> Html {
    let character = &props.character;
    let onclick = {
        let character = character.clone();
        props.on_select.reform(move |_: MouseEvent| character.clone())
    };
    let onerror = Callback::from(|e: Event| {
        let image: web_sys::HtmlImageElement = e.target_unchecked_into();
        if image.src() != FALLBACK_IMAGE {
            image.set_src(FALLBACK_IMAGE);
        }
    });

    html! {
        <div
            {onclick}
            class={classes!(character.accent().gradient(), "rounded-lg", "shadow-lg", "overflow-hidden", "cursor-pointer", "transform", "transition-all", "hover:scale-105", "hover:shadow-xl")}
        >
            <div class="relative h-64 overflow-hidden">
                <img
                    src={character.portrait_url()}
                    alt={character.name.clone()}
                    {onerror}
                    class="w-full h-full object-cover"
                />
            </div>
            <div class="p-4 bg-gray-900 bg-opacity-95">
                <h3 class="text-xl font-bold text-cyan-400 truncate">{character.name.clone()}</h3>
                <p class="text-sm text-gray-300 mt-1">{character.birth_year_label()}</p>
            </div>
        </div>
    }
}
