// ============================================================================
// BENCH PSU DASHBOARD - FRONTEND RUST/WASM
// ============================================================================
// Núcleo del front-end del monitor de alimentación:
// - Config: resolución del endpoint del backend según el entorno
// - Services: construcción de URLs hacia el dispositivo
// - Models: estructuras compartidas con el firmware
// El árbol de vistas se monta aparte; aquí solo se inicializa el runtime.
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Bench PSU Dashboard iniciando...");

    let endpoint = config::API_ENDPOINT.as_str();
    if endpoint.is_empty() {
        log::info!("🔌 Backend: mismo origen que la página");
    } else {
        log::info!("🔌 Backend de desarrollo: {}", endpoint);
    }

    Ok(())
}
