/// Hostname desde el que se sirve el front-end en desarrollo (dev server local)
pub const DEV_HOST_TRIGGER: &str = "localhost";

/// URL base del backend según el entorno:
/// - Desarrollo: la alimentación en la red local (http://192.168.15.64)
/// - Producción: el propio dispositivo sirve el front-end, así que el
///   prefijo queda vacío y las peticiones van al mismo origen
pub const DEV_BACKEND_URL: &str = "http://192.168.15.64";

/// Ruta del recurso de estado que expone el firmware
pub const STATUS_PATH: &str = "/current-status";
