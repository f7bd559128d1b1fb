mod components;
mod config;
mod models;
mod router;
mod services;
mod state;
mod utils;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Video Analyzer iniciando (entorno: {})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
