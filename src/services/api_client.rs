// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Envuelve los recursos /packages, /orders y /auth del backend remoto.
// Una operación = un round-trip acotado en tiempo; sin reintentos. La
// validación de reglas de negocio vive en el backend, no aquí.
// ============================================================================

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{LoginData, LoginRequest, LoginResponse, Order, OrderStatus, Package};
use crate::services::error::GatewayError;
use crate::utils::constants::{BACKEND_URL, REQUEST_TIMEOUT_MS};

/// Envoltura `{ data: [...] }` de los listados del backend
#[derive(Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

#[derive(Serialize)]
struct CreateOrderRequest {
    #[serde(rename = "packageId")]
    package_id: String,
    #[serde(rename = "driverId")]
    driver_id: String,
}

#[derive(Serialize)]
struct UpdateOrderRequest {
    #[serde(rename = "driverId")]
    driver_id: String,
    status: OrderStatus,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar paquetes
    pub async fn get_packages(&self) -> Result<Vec<Package>, GatewayError> {
        let url = format!("{}/api/v1/packages", self.base_url);
        let response = bounded(Request::get(&url).send()).await?;
        check_status(&response)?;

        let list: ListResponse<Package> = parse_json(response).await?;
        log::info!("📦 Paquetes recibidos: {}", list.data.len());
        Ok(list.data)
    }

    /// Actualizar un paquete. El backend hace reemplazo completo del
    /// registro, así que el cuerpo lleva cada campo tal como llegó.
    pub async fn update_package(&self, package: &Package) -> Result<Package, GatewayError> {
        let url = format!("{}/api/v1/packages/{}", self.base_url, package.id);
        let request = Request::put(&url)
            .json(package)
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        let response = bounded(request.send()).await?;
        check_status(&response)?;
        parse_json(response).await
    }

    /// Listar órdenes
    pub async fn get_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let url = format!("{}/api/v1/orders", self.base_url);
        let response = bounded(Request::get(&url).send()).await?;
        check_status(&response)?;

        let list: ListResponse<Order> = parse_json(response).await?;
        log::info!("📋 Órdenes recibidas: {}", list.data.len());
        Ok(list.data)
    }

    /// Crear la orden que une paquete y conductor
    pub async fn create_order(
        &self,
        package_id: &str,
        driver_id: &str,
    ) -> Result<Order, GatewayError> {
        let url = format!("{}/api/v1/orders", self.base_url);
        let body = CreateOrderRequest {
            package_id: package_id.to_string(),
            driver_id: driver_id.to_string(),
        };
        let request = Request::post(&url)
            .json(&body)
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        let response = bounded(request.send()).await?;
        check_status(&response)?;
        parse_json(response).await
    }

    /// Actualizar el estado de una orden (el driverId autoriza el cambio)
    pub async fn update_order(
        &self,
        order_id: &str,
        driver_id: &str,
        status: OrderStatus,
    ) -> Result<Order, GatewayError> {
        let url = format!("{}/api/v1/orders/{}", self.base_url, order_id);
        let body = UpdateOrderRequest {
            driver_id: driver_id.to_string(),
            status,
        };
        let request = Request::put(&url)
            .json(&body)
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        let response = bounded(request.send()).await?;
        check_status(&response)?;
        parse_json(response).await
    }

    /// Autenticar al conductor
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, GatewayError> {
        let url = format!("{}/api/v1/auth/login", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Autenticando conductor: {}", email);

        let request = Request::post(&url)
            .json(&body)
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        let response = bounded(request.send()).await?;
        check_status(&response)?;

        let result: LoginResponse = parse_json(response).await?;
        if !result.status {
            return Err(GatewayError::Rejected(
                result
                    .message
                    .unwrap_or_else(|| "Autenticación fallida".to_string()),
            ));
        }

        result
            .data
            .ok_or_else(|| GatewayError::Parse("respuesta de login sin datos".to_string()))
    }
}

/// Acota la petición con REQUEST_TIMEOUT_MS; el gateway nunca deja una
/// vista cargando indefinidamente.
async fn bounded<F>(request: F) -> Result<Response, GatewayError>
where
    F: std::future::Future<Output = Result<Response, gloo_net::Error>>,
{
    match select(Box::pin(request), Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS))).await {
        Either::Left((result, _)) => result.map_err(|e| GatewayError::Network(e.to_string())),
        Either::Right(_) => Err(GatewayError::Timeout(REQUEST_TIMEOUT_MS)),
    }
}

fn check_status(response: &Response) -> Result<(), GatewayError> {
    if response.ok() {
        Ok(())
    } else {
        Err(GatewayError::Http {
            status: response.status(),
            message: response.status_text(),
        })
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Parse(e.to_string()))
}
