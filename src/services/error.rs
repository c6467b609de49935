use thiserror::Error;

/// Fallo del gateway HTTP: red, estado no-2xx, cuerpo no parseable o
/// tiempo agotado. Quien llama decide la recuperación; aquí no hay
/// reintentos.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("error de red: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("respuesta no parseable: {0}")]
    Parse(String),
    #[error("la petición superó los {0} ms")]
    Timeout(u32),
    #[error("{0}")]
    Rejected(String),
}

/// Fallo leyendo la sesión local. Se recupera tratándola como ausente;
/// nunca llega al caller como excepción.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("registro de sesión malformado: {0}")]
    Malformed(String),
    #[error("sesión expirada")]
    Expired,
}

/// Fallo del watch de geolocalización. Solo se informa: el último
/// marcador conocido se conserva.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeolocationError {
    #[error("permiso de ubicación denegado")]
    PermissionDenied,
    #[error("posición no disponible")]
    Unavailable,
    #[error("timeout obteniendo posición")]
    Timeout,
    #[error("geolocalización no soportada en este navegador")]
    Unsupported,
}

impl GeolocationError {
    /// Mapea los códigos del API de geolocalización del navegador
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::Unavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codigos_del_navegador() {
        assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(2), GeolocationError::Unavailable);
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
        assert_eq!(GeolocationError::from_code(99), GeolocationError::Unavailable);
    }
}
