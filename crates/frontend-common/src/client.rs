//! Shared catalog client instance

pub use holocron_http::ClientError;
use holocron_core::CatalogConfig;
use holocron_http::CatalogClient;
use once_cell::unsync::OnceCell;

thread_local! {
    static CATALOG_CLIENT: OnceCell<CatalogClient> = const { OnceCell::new() };
}

/// Get the catalog client, building it from `config` on first use
///
/// The first successful call wins; later calls reuse that client whatever
/// `config` they pass.
pub fn catalog_client(config: &CatalogConfig) -> Result<CatalogClient, ClientError> {
    CATALOG_CLIENT.with(|cell| {
        cell.get_or_try_init(|| {
            tracing::debug!(base_url = %config.base_url, "Creating catalog client");
            CatalogClient::from_config(config)
        })
        .cloned()
    })
}
