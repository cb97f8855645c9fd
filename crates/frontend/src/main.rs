mod app;
mod components;

use app::{App, AppProps};
use holocron_core::AppConfig;
use holocron_frontend_common::config;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_tracing(level: Level) {
    // No wall clock in the browser; the console stamps entries itself.
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(level));

    tracing_subscriber::registry().with(console).init();
}

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded.as_ref().map_or_else(|_| AppConfig::default(), Clone::clone);
    init_tracing(config.log.level());

    if let Err(err) = loaded {
        tracing::warn!(error = %err, "Ignoring embedded configuration");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
