pub mod api_client;
pub mod error;
pub mod session_service;

pub use api_client::ApiClient;
pub use error::{GatewayError, GeolocationError, SessionError};
pub use session_service::SessionService;
