//! Page components for the catalog viewer

mod active_filters;
mod catalog;
mod character_card;
mod character_details;
mod filters;
mod footer;
mod header;
mod login;
mod pagination;
mod search;

pub use active_filters::ActiveFilters;
pub use catalog::CatalogView;
pub use character_card::CharacterCard;
pub use character_details::CharacterDetails;
pub use filters::FilterPanel;
pub use footer::Footer;
pub use header::Header;
pub use login::LoginPage;
pub use pagination::Pagination;
pub use search::SearchBar;
