// ============================================================================
// API ERROR - Clasificación de fallos del cliente HTTP
// ============================================================================
// Todo fallo de red/HTTP/JSON acaba en una de estas variantes; el viewmodel
// decide la política (aviso al usuario o solo log) según is_recoverable().
// ============================================================================

use std::fmt;

/// Fallos del `ApiClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// La petición nunca produjo una respuesta HTTP (red caída, CORS, DNS)
    Network(String),

    /// El servidor respondió con un status no-2xx
    Server { status: u16 },

    /// El cuerpo de la respuesta no se pudo deserializar como JSON
    Decode(String),

    /// El payload de la petición no se pudo serializar a JSON
    Serialize(String),
}

impl ApiError {
    /// Un fallo recuperable (red o 5xx) se muestra al usuario como aviso;
    /// el resto (4xx, JSON inválido) solo se loguea. En ambos casos la
    /// mutación optimista local se revierte.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Server { status } => *status >= 500,
            ApiError::Decode(_) | ApiError::Serialize(_) => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Server { status } => write!(f, "HTTP {status}"),
            ApiError::Decode(msg) => write!(f, "invalid response body: {msg}"),
            ApiError::Serialize(msg) => write!(f, "could not encode request: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_and_5xx_are_recoverable() {
        assert!(ApiError::Network("timeout".into()).is_recoverable());
        assert!(ApiError::Server { status: 500 }.is_recoverable());
        assert!(ApiError::Server { status: 503 }.is_recoverable());
    }

    #[test]
    fn client_errors_and_bad_json_are_not_recoverable() {
        assert!(!ApiError::Server { status: 404 }.is_recoverable());
        assert!(!ApiError::Server { status: 400 }.is_recoverable());
        assert!(!ApiError::Decode("eof".into()).is_recoverable());
        assert!(!ApiError::Serialize("bad".into()).is_recoverable());
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Server { status: 502 };
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
