// ============================================================================
// STATUS SERVICE - Resolución de URLs hacia el dispositivo (stateless)
// ============================================================================
// NO hace peticiones HTTP, solo decide a qué URL deben ir
// ============================================================================

use crate::config::API_ENDPOINT;
use crate::utils::constants::STATUS_PATH;

/// Servicio de estado: conoce el prefijo del backend y arma las URLs
#[derive(Debug, Clone)]
pub struct StatusService {
    base_url: String,
}

impl StatusService {
    /// El prefijo se captura una sola vez, del endpoint global resuelto
    /// al arrancar
    pub fn new() -> Self {
        Self {
            base_url: API_ENDPOINT.clone(),
        }
    }

    /// Construir el servicio con un prefijo explícito
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL del recurso de estado; con prefijo vacío la petición va al
    /// mismo origen que la página
    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url, STATUS_PATH)
    }
}
