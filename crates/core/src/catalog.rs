//! Catalog entities and their display helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "unknown";

/// One page of a paginated collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

/// A person from the people collection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: Option<String>,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    /// Canonical resource URL, unique per character
    pub url: String,
}

/// Card accent derived from the species list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Blue,
    Green,
    Purple,
    Red,
    Indigo,
}

impl Accent {
    const CYCLE: [Self; 5] = [Self::Blue, Self::Green, Self::Purple, Self::Red, Self::Indigo];

    /// Tailwind gradient classes for the card background
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Cyan => "bg-gradient-to-br from-cyan-400 to-cyan-600",
            Self::Blue => "bg-gradient-to-br from-blue-400 to-blue-600",
            Self::Green => "bg-gradient-to-br from-green-400 to-green-600",
            Self::Purple => "bg-gradient-to-br from-purple-400 to-purple-600",
            Self::Red => "bg-gradient-to-br from-red-400 to-red-600",
            Self::Indigo => "bg-gradient-to-br from-indigo-400 to-indigo-600",
        }
    }
}

impl Character {
    pub fn height_label(&self) -> String {
        measured(&self.height, "cm")
    }

    pub fn mass_label(&self) -> String {
        measured(&self.mass, "kg")
    }

    pub fn gender_label(&self) -> String {
        if self.gender.eq_ignore_ascii_case("n/a") || self.gender.is_empty() {
            "N/A".to_string()
        } else {
            self.gender.clone()
        }
    }

    pub fn birth_year_label(&self) -> String {
        if self.birth_year.is_empty() || self.birth_year == UNKNOWN {
            "Birth year unknown".to_string()
        } else {
            format!("Born: {}", self.birth_year)
        }
    }

    /// Creation date as `dd-MM-yyyy` (UTC)
    pub fn created_label(&self) -> String {
        self.created
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map_or_else(
                || "N/A".to_string(),
                |date| date.with_timezone(&Utc).format("%d-%m-%Y").to_string(),
            )
    }

    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    /// Stable seed for the placeholder portrait
    pub fn portrait_seed(&self) -> u32 {
        self.name.encode_utf16().map(u32::from).sum()
    }

    pub fn portrait_url(&self) -> String {
        format!("https://picsum.photos/seed/{}/400/500", self.portrait_seed())
    }

    pub fn accent(&self) -> Accent {
        if self.species.is_empty() {
            Accent::Cyan
        } else {
            Accent::CYCLE[self.species.len() % Accent::CYCLE.len()]
        }
    }
}

/// A homeworld
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub terrain: String,
    pub climate: String,
    pub population: String,
    pub url: String,
}

impl Planet {
    pub fn terrain_label(&self) -> &str {
        or_na(&self.terrain)
    }

    pub fn climate_label(&self) -> &str {
        or_na(&self.climate)
    }

    pub fn population_label(&self) -> &str {
        if self.population.is_empty() || self.population == UNKNOWN {
            "Unknown"
        } else {
            &self.population
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub director: String,
    pub release_date: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub language: String,
    pub url: String,
}

/// Position in the remote collection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor {
    url: String,
    page: u32,
    next: Option<String>,
    previous: Option<String>,
}

impl PageCursor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            page: 1,
            next: None,
            previous: None,
        }
    }

    /// URL of the page currently shown; retrying re-fetches it
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Record the neighbours reported by a freshly loaded page
    pub fn update_links<T>(&mut self, page: &Page<T>) {
        self.next.clone_from(&page.next);
        self.previous.clone_from(&page.previous);
    }

    /// Move forward; returns false at the last page
    pub fn go_next(&mut self) -> bool {
        match self.next.take() {
            Some(next) => {
                self.url = next;
                self.page += 1;
                self.previous = None;
                true
            }
            None => false,
        }
    }

    /// Move back; returns false at the first page
    pub fn go_previous(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.url = previous;
                self.page = self.page.saturating_sub(1).max(1);
                self.next = None;
                true
            }
            None => false,
        }
    }
}

/// Asynchronous load status for a view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

fn measured(value: &str, unit: &str) -> String {
    if value.is_empty() || value == UNKNOWN {
        "Unknown".to_string()
    } else {
        format!("{value} {unit}")
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Character {
        serde_json::from_value(serde_json::json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "created": "2014-12-09T13:50:51.644000Z",
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap()
    }

    #[test]
    fn test_character_labels() {
        let luke = luke();
        assert_eq!(luke.height_label(), "172 cm");
        assert_eq!(luke.mass_label(), "77 kg");
        assert_eq!(luke.gender_label(), "male");
        assert_eq!(luke.birth_year_label(), "Born: 19BBY");
        assert_eq!(luke.created_label(), "09-12-2014");
        assert_eq!(luke.film_count(), 1);
    }

    #[test]
    fn test_unknown_values() {
        let droid = Character {
            name: "R2-D2".to_string(),
            height: "unknown".to_string(),
            mass: "unknown".to_string(),
            birth_year: "unknown".to_string(),
            gender: "n/a".to_string(),
            ..Character::default()
        };
        assert_eq!(droid.height_label(), "Unknown");
        assert_eq!(droid.mass_label(), "Unknown");
        assert_eq!(droid.gender_label(), "N/A");
        assert_eq!(droid.birth_year_label(), "Birth year unknown");
        assert_eq!(droid.created_label(), "N/A");
    }

    #[test]
    fn test_portrait_seed_is_stable() {
        let luke = luke();
        let expected: u32 = "Luke Skywalker".bytes().map(u32::from).sum();
        assert_eq!(luke.portrait_seed(), expected);
        assert_eq!(
            luke.portrait_url(),
            format!("https://picsum.photos/seed/{expected}/400/500")
        );
    }

    #[test]
    fn test_accent_by_species_count() {
        let mut character = luke();
        assert_eq!(character.accent(), Accent::Cyan);
        character.species = vec!["s1".to_string()];
        assert_eq!(character.accent(), Accent::Green);
        character.species = vec!["s1".to_string(); 5];
        assert_eq!(character.accent(), Accent::Blue);
    }

    #[test]
    fn test_null_homeworld_and_missing_fields() {
        let character: Character = serde_json::from_str(
            r#"{"name": "Ghost", "homeworld": null, "url": "https://swapi.dev/api/people/99/"}"#,
        )
        .unwrap();
        assert_eq!(character.homeworld, None);
        assert!(character.films.is_empty());
    }

    #[test]
    fn test_planet_labels() {
        let planet = Planet {
            name: "Tatooine".to_string(),
            terrain: "desert".to_string(),
            climate: String::new(),
            population: "unknown".to_string(),
            ..Planet::default()
        };
        assert_eq!(planet.terrain_label(), "desert");
        assert_eq!(planet.climate_label(), "N/A");
        assert_eq!(planet.population_label(), "Unknown");
    }

    #[test]
    fn test_page_parses_collection_envelope() {
        let page: Page<Character> = serde_json::from_str(
            r#"{"count": 82, "next": "https://swapi.dev/api/people/?page=2", "previous": null, "results": [{"name": "Luke Skywalker"}]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 82);
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut cursor = PageCursor::new("https://swapi.dev/api/people/?format=json");
        assert_eq!(cursor.page(), 1);
        assert!(!cursor.go_previous());

        cursor.update_links(&Page::<Character> {
            next: Some("https://swapi.dev/api/people/?page=2".to_string()),
            ..Page::default()
        });
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());

        assert!(cursor.go_next());
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.url(), "https://swapi.dev/api/people/?page=2");
        // Links are unknown until the new page arrives
        assert!(!cursor.go_next());

        cursor.update_links(&Page::<Character> {
            previous: Some("https://swapi.dev/api/people/?page=1".to_string()),
            ..Page::default()
        });
        assert!(cursor.go_previous());
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.url(), "https://swapi.dev/api/people/?page=1");
    }

    #[test]
    fn test_load_state() {
        let state: LoadState<Vec<u8>> = LoadState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);
        assert_eq!(LoadState::Loaded(vec![1]).loaded(), Some(&vec![1]));
    }
}
