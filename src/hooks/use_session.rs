// ============================================================================
// USE SESSION HOOK - Sesión del conductor como contexto explícito
// ============================================================================
// Único punto que toca SessionService; el resto de la app recibe la
// identidad inyectada por ContextProvider, nunca parseando storage por
// su cuenta.
// ============================================================================

use yew::prelude::*;

use crate::models::{LoginData, StoredSession};
use crate::services::session_service::SessionService;

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Option<StoredSession>,
    on_login: Callback<LoginData>,
    on_logout: Callback<()>,
}

impl SessionHandle {
    pub fn driver_id(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.user.driver_id.clone())
    }

    pub fn login(&self, data: LoginData) {
        self.on_login.emit(data);
    }

    pub fn logout(&self) {
        self.on_logout.emit(());
    }
}

/// Crea el estado de sesión en la raíz de la app. La lectura inicial es
/// síncrona; un registro malformado o vencido equivale a logged-out.
#[hook]
pub fn use_session_provider() -> SessionHandle {
    let session = use_state(SessionService::load);

    let on_login = {
        let session = session.clone();
        Callback::from(move |data: LoginData| {
            let stored = SessionService::save(&data);
            log::info!("✅ Sesión iniciada: {}", stored.user.name);
            session.set(Some(stored));
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            SessionService::clear();
            session.set(None);
        })
    };

    SessionHandle {
        session: (*session).clone(),
        on_login,
        on_logout,
    }
}

/// Acceso al contexto; todo componente vive bajo el provider
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionHandle sin ContextProvider montado")
}
