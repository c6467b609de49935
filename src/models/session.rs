use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::auth::User;
use crate::utils::constants::SESSION_TTL_DAYS;

/// Sesión autenticada persistida en localStorage. `saved_at` (epoch ms)
/// fija la vigencia: pasado el plazo el registro se trata como ausente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
    pub saved_at: i64,
}

impl StoredSession {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user,
            saved_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms - self.saved_at > SESSION_TTL_DAYS * 24 * 60 * 60 * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(saved_at: i64) -> StoredSession {
        StoredSession {
            token: "tok".to_string(),
            user: User {
                driver_id: "d1".to_string(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                avatar: None,
            },
            saved_at,
        }
    }

    #[test]
    fn expira_pasados_los_dias_configurados() {
        let ttl_ms = SESSION_TTL_DAYS * 24 * 60 * 60 * 1000;
        let s = session(1_000_000);

        assert!(!s.is_expired_at(1_000_000));
        assert!(!s.is_expired_at(1_000_000 + ttl_ms));
        assert!(s.is_expired_at(1_000_000 + ttl_ms + 1));
    }
}
