// ============================================================================
// CURRENT STATUS - Estado instantáneo publicado por el firmware
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado actual de la alimentación, tal como lo sirve el dispositivo
/// en /current-status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatus {
    pub version: String,
    pub device_name: String,
    pub current_in: f64,
    pub current_out: f64,
}

impl CurrentStatus {
    /// Parsear la respuesta JSON del dispositivo
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_status() {
        let json = r#"{
            "version": "V1",
            "deviceName": "BenchPSU",
            "currentIn": 0.42,
            "currentOut": 1.87
        }"#;

        let status = CurrentStatus::from_json(json).unwrap();
        assert_eq!(status.version, "V1");
        assert_eq!(status.device_name, "BenchPSU");
        assert_eq!(status.current_in, 0.42);
        assert_eq!(status.current_out, 1.87);
    }

    #[test]
    fn test_parse_malformed_status_fails() {
        let err = CurrentStatus::from_json("not json").unwrap_err();
        assert!(err.starts_with("Parse error"));
    }
}
