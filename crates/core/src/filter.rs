//! Client-side search and relation filters over the loaded page

use crate::catalog::Character;
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashSet;
use std::fmt;

/// Display name used when a reference cannot be resolved
pub const UNKNOWN_NAME: &str = "Unknown";

/// Which relation of a character a filter targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Homeworld,
    Film,
    Species,
}

impl RelationKind {
    pub const ALL: [Self; 3] = [Self::Homeworld, Self::Film, Self::Species];

    pub fn label(self) -> &'static str {
        match self {
            Self::Homeworld => "Homeworld",
            Self::Film => "Film",
            Self::Species => "Species",
        }
    }

    /// References of this kind held by `character`
    pub fn references(self, character: &Character) -> Vec<&str> {
        match self {
            Self::Homeworld => character.homeworld.as_deref().into_iter().collect(),
            Self::Film => character.films.iter().map(String::as_str).collect(),
            Self::Species => character.species.iter().map(String::as_str).collect(),
        }
    }

    fn matches(self, character: &Character, reference: &str) -> bool {
        match self {
            Self::Homeworld => character.homeworld.as_deref() == Some(reference),
            Self::Film => character.films.iter().any(|film| film == reference),
            Self::Species => character.species.iter().any(|s| s == reference),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selectable reference with its resolved display name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub url: String,
    pub name: String,
}

/// Options for every relation kind, sorted by display name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptionSet {
    pub homeworlds: Vec<FilterOption>,
    pub films: Vec<FilterOption>,
    pub species: Vec<FilterOption>,
}

impl FilterOptionSet {
    pub fn options(&self, kind: RelationKind) -> &[FilterOption] {
        match kind {
            RelationKind::Homeworld => &self.homeworlds,
            RelationKind::Film => &self.films,
            RelationKind::Species => &self.species,
        }
    }

    fn options_mut(&mut self, kind: RelationKind) -> &mut Vec<FilterOption> {
        match kind {
            RelationKind::Homeworld => &mut self.homeworlds,
            RelationKind::Film => &mut self.films,
            RelationKind::Species => &mut self.species,
        }
    }

    pub fn display_name(&self, kind: RelationKind, url: &str) -> &str {
        self.options(kind)
            .iter()
            .find(|option| option.url == url)
            .map_or(UNKNOWN_NAME, |option| option.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        RelationKind::ALL
            .iter()
            .all(|kind| self.options(*kind).is_empty())
    }
}

/// The structured part of the user's filter choice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub homeworld: Option<String>,
    pub film: Option<String>,
    pub species: Option<String>,
}

impl FilterSelection {
    pub fn get(&self, kind: RelationKind) -> Option<&str> {
        match kind {
            RelationKind::Homeworld => self.homeworld.as_deref(),
            RelationKind::Film => self.film.as_deref(),
            RelationKind::Species => self.species.as_deref(),
        }
    }

    /// Select `reference`; an empty string clears the slot
    pub fn set(&mut self, kind: RelationKind, reference: impl Into<String>) {
        let reference = reference.into();
        *self.slot(kind) = (!reference.is_empty()).then_some(reference);
    }

    pub fn clear(&mut self, kind: RelationKind) {
        *self.slot(kind) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.homeworld.is_none() && self.film.is_none() && self.species.is_none()
    }

    /// Selected references paired with their kind
    pub fn active(&self) -> impl Iterator<Item = (RelationKind, &str)> {
        RelationKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|reference| (kind, reference)))
    }

    fn slot(&mut self, kind: RelationKind) -> &mut Option<String> {
        match kind {
            RelationKind::Homeworld => &mut self.homeworld,
            RelationKind::Film => &mut self.film,
            RelationKind::Species => &mut self.species,
        }
    }
}

/// Whether a query or any selection narrows the page
pub fn is_filtering(query: &str, selection: &FilterSelection) -> bool {
    !query.trim().is_empty() || !selection.is_empty()
}

/// Narrow `characters` by name query and selected references
///
/// Order-preserving and free of side effects. An empty query with an empty
/// selection returns every character.
pub fn apply_filters<'a>(
    characters: &'a [Character],
    query: &str,
    selection: &FilterSelection,
) -> Vec<&'a Character> {
    let needle = query.trim().to_lowercase();

    characters
        .iter()
        .filter(|character| needle.is_empty() || character.name.to_lowercase().contains(&needle))
        .filter(|character| {
            selection
                .active()
                .all(|(kind, reference)| kind.matches(character, reference))
        })
        .collect()
}

/// Resolves a relation reference to its display name
#[async_trait(?Send)]
pub trait RelatedResolver {
    type Error: fmt::Display;

    /// `Ok(None)` when the resource exists but carries no name
    async fn resolve_name(&self, kind: RelationKind, url: &str)
    -> Result<Option<String>, Self::Error>;
}

/// Collect, resolve and sort the filter options for a page
///
/// Every reference is resolved concurrently. A failed or nameless
/// resolution becomes [`UNKNOWN_NAME`] and never aborts the derivation.
pub async fn derive_filter_options<R>(characters: &[Character], resolver: &R) -> FilterOptionSet
where
    R: RelatedResolver + ?Sized,
{
    let mut set = FilterOptionSet::default();

    for kind in RelationKind::ALL {
        let references = distinct_references(characters, kind);
        let names = join_all(
            references
                .iter()
                .map(|url| resolve_or_unknown(resolver, kind, url)),
        )
        .await;

        let options = set.options_mut(kind);
        options.extend(
            references
                .into_iter()
                .zip(names)
                .map(|(url, name)| FilterOption { url, name }),
        );
        options.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.url.cmp(&b.url)));
    }

    set
}

fn distinct_references(characters: &[Character], kind: RelationKind) -> Vec<String> {
    let mut seen = HashSet::new();
    characters
        .iter()
        .flat_map(|character| kind.references(character))
        .filter(|reference| !reference.is_empty() && seen.insert(*reference))
        .map(str::to_string)
        .collect()
}

async fn resolve_or_unknown<R>(resolver: &R, kind: RelationKind, url: &str) -> String
where
    R: RelatedResolver + ?Sized,
{
    match resolver.resolve_name(kind, url).await {
        Ok(Some(name)) if !name.is_empty() => name,
        Ok(_) => {
            tracing::warn!(%kind, url, "Related resource has no name");
            UNKNOWN_NAME.to_string()
        }
        Err(err) => {
            tracing::warn!(%kind, url, error = %err, "Failed to resolve related resource");
            UNKNOWN_NAME.to_string()
        }
    }
}

/// Result count shown next to the active filters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.shown == 1 { "result" } else { "results" };
        if self.shown == self.total {
            write!(f, "({} {noun})", self.shown)
        } else {
            write!(f, "({} {noun} of {})", self.shown, self.total)
        }
    }
}
