// ============================================================================
// CONFIG - Resolución del endpoint del backend
// ============================================================================
// El mismo artefacto compilado funciona contra dos backends:
// - Desarrollo: la página se carga desde localhost y el backend es la
//   alimentación en la red local
// - Producción: la página se sirve desde el propio dispositivo, las
//   peticiones van al mismo origen (prefijo vacío)
// ============================================================================

use crate::utils::constants::{DEV_BACKEND_URL, DEV_HOST_TRIGGER};

/// Resuelve el prefijo del backend a partir del hostname de la página.
///
/// Función total: solo `localhost` (comparación exacta, sensible a
/// mayúsculas) activa el backend de desarrollo; cualquier otro valor,
/// incluida la ausencia de hostname, cae en la rama same-origin.
pub fn resolve_backend_endpoint(hostname: Option<&str>) -> &'static str {
    match hostname {
        Some(host) if host == DEV_HOST_TRIGGER => DEV_BACKEND_URL,
        _ => "",
    }
}

/// Hostname de la página actual (`window.location.hostname`).
/// Devuelve `None` si el global no está disponible.
#[cfg(target_arch = "wasm32")]
pub fn current_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

/// Fuera del navegador no hay `window`, el resolver degrada a same-origin
#[cfg(not(target_arch = "wasm32"))]
pub fn current_hostname() -> Option<String> {
    None
}

// Endpoint global: se calcula una sola vez en el primer acceso y queda
// congelado para el resto del proceso
lazy_static::lazy_static! {
    pub static ref API_ENDPOINT: String =
        resolve_backend_endpoint(current_hostname().as_deref()).to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_resolves_to_dev_backend() {
        assert_eq!(
            resolve_backend_endpoint(Some("localhost")),
            "http://192.168.15.64"
        );
    }

    #[test]
    fn test_other_hosts_resolve_to_same_origin() {
        assert_eq!(resolve_backend_endpoint(Some("myapp.example.com")), "");
        assert_eq!(resolve_backend_endpoint(Some("127.0.0.1")), "");
        assert_eq!(resolve_backend_endpoint(Some("benchpsu.local")), "");
    }

    #[test]
    fn test_empty_hostname_resolves_to_same_origin() {
        assert_eq!(resolve_backend_endpoint(Some("")), "");
    }

    #[test]
    fn test_missing_hostname_resolves_to_same_origin() {
        assert_eq!(resolve_backend_endpoint(None), "");
    }

    #[test]
    fn test_trigger_is_case_sensitive() {
        assert_eq!(resolve_backend_endpoint(Some("LOCALHOST")), "");
        assert_eq!(resolve_backend_endpoint(Some("Localhost")), "");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve_backend_endpoint(Some("localhost"));
        let second = resolve_backend_endpoint(Some("localhost"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_global_endpoint_outside_browser_is_same_origin() {
        // Sin window, current_hostname() es None y el global queda vacío
        assert_eq!(API_ENDPOINT.as_str(), "");
    }
}
