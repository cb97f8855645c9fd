mod error_panel;
mod spinner;

pub use error_panel::ErrorPanel;
pub use spinner::LoadingSpinner as Spinner;
