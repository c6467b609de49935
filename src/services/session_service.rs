// ============================================================================
// SESSION SERVICE - Acceso a la sesión persistida
// ============================================================================
// Lee/escribe el registro {token, user, saved_at} en localStorage.
// Nunca lanza hacia el caller: un registro malformado o vencido se trata
// como sesión ausente (estado logged-out válido). Cero red.
// ============================================================================

use crate::models::{LoginData, StoredSession};
use crate::services::error::SessionError;
use crate::utils::constants::SESSION_STORAGE_KEY;
use crate::utils::storage;

pub struct SessionService;

impl SessionService {
    /// `None` cubre ausencia, JSON malformado y expiración
    pub fn load() -> Option<StoredSession> {
        let raw = storage::load_raw(SESSION_STORAGE_KEY)?;
        match Self::parse(&raw, chrono::Utc::now().timestamp_millis()) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("⚠️ Sesión local descartada: {}", err);
                let _ = storage::remove(SESSION_STORAGE_KEY);
                None
            }
        }
    }

    /// Parseo puro, separado del navegador para poder probarlo
    pub fn parse(raw: &str, now_ms: i64) -> Result<StoredSession, SessionError> {
        let session: StoredSession =
            serde_json::from_str(raw).map_err(|e| SessionError::Malformed(e.to_string()))?;
        if session.is_expired_at(now_ms) {
            return Err(SessionError::Expired);
        }
        Ok(session)
    }

    pub fn save(data: &LoginData) -> StoredSession {
        let session = StoredSession::new(data.token.clone(), data.user.clone());
        if let Err(e) = storage::save_json(SESSION_STORAGE_KEY, &session) {
            // La sesión vive en memoria aunque no se pueda persistir
            log::error!("❌ No se pudo persistir la sesión: {}", e);
        }
        session
    }

    pub fn clear() {
        let _ = storage::remove(SESSION_STORAGE_KEY);
        log::info!("👋 Sesión local eliminada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::SESSION_TTL_DAYS;

    const NOW: i64 = 1_700_000_000_000;

    fn raw_session(saved_at: i64) -> String {
        format!(
            r#"{{"token":"tok","user":{{"driverId":"d1","name":"Ana","email":"a@b.c"}},"saved_at":{}}}"#,
            saved_at
        )
    }

    #[test]
    fn registro_valido() {
        let session = SessionService::parse(&raw_session(NOW), NOW).unwrap();
        assert_eq!(session.user.driver_id, "d1");
        assert_eq!(session.token, "tok");
    }

    #[test]
    fn registro_malformado_es_error_recuperable() {
        let err = SessionService::parse("{no es json", NOW).unwrap_err();
        assert!(matches!(err, SessionError::Malformed(_)));

        let err = SessionService::parse(r#"{"token":"tok"}"#, NOW).unwrap_err();
        assert!(matches!(err, SessionError::Malformed(_)));
    }

    #[test]
    fn registro_vencido() {
        let ttl_ms = SESSION_TTL_DAYS * 24 * 60 * 60 * 1000;
        let err = SessionService::parse(&raw_session(NOW - ttl_ms - 1), NOW).unwrap_err();
        assert_eq!(err, SessionError::Expired);
    }
}
