use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::package::parse_coord;

/// Estado de una orden: subconjunto del estado del paquete. Una orden
/// nace shipping y termina done; nunca se borra desde este cliente.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Shipping,
    Done,
    #[serde(other)]
    Unknown,
}

/// Snapshot del paquete embebido en una orden. El backend lo expone bajo
/// la clave `packages` (plural en el nombre, singular en el contenido).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct OrderPackage {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub sender_phone: String,
    #[serde(default)]
    pub sender_address: String,
    #[serde(default)]
    pub receiver_name: String,
    #[serde(default)]
    pub receiver_phone: String,
    #[serde(default)]
    pub receiver_address: String,
    #[serde(default)]
    pub receiver_latitude: Option<Value>,
    #[serde(default)]
    pub receiver_longitude: Option<Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    #[serde(rename = "driverId", default)]
    pub driver_id: String,
    #[serde(rename = "startedAt", default)]
    pub started_at: Option<String>,
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<String>,
    #[serde(rename = "packages", default)]
    pub package: OrderPackage,
}

impl Order {
    /// Destino de la entrega, si las coordenadas son parseables
    pub fn receiver_coords(&self) -> Option<(f64, f64)> {
        let lat = parse_coord(self.package.receiver_latitude.as_ref())?;
        let lng = parse_coord(self.package.receiver_longitude.as_ref())?;
        Some((lat, lng))
    }
}

/// Toda lista presentada al conductor pasa por aquí: solo sus órdenes y
/// solo en el estado pedido.
pub fn orders_for_driver(orders: &[Order], driver_id: &str, status: OrderStatus) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.status == status && order.driver_id == driver_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: &str, status: &str, driver_id: &str) -> Order {
        serde_json::from_value(json!({
            "id": id,
            "status": status,
            "driverId": driver_id,
            "packages": { "description": "algo" }
        }))
        .unwrap()
    }

    #[test]
    fn filtra_por_conductor_y_estado() {
        let orders = vec![
            order("o1", "shipping", "d1"),
            order("o2", "shipping", "d2"),
            order("o3", "done", "d1"),
        ];

        let mine = orders_for_driver(&orders, "d1", OrderStatus::Shipping);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "o1");

        let done = orders_for_driver(&orders, "d1", OrderStatus::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, "o3");
    }

    #[test]
    fn destino_sin_coordenadas_validas() {
        let with_coords: Order = serde_json::from_value(json!({
            "id": "o1",
            "status": "shipping",
            "driverId": "d1",
            "packages": {
                "receiver_latitude": -7.25,
                "receiver_longitude": "112.76"
            }
        }))
        .unwrap();
        assert_eq!(with_coords.receiver_coords(), Some((-7.25, 112.76)));

        let without: Order = serde_json::from_value(json!({
            "id": "o2",
            "status": "shipping",
            "driverId": "d1",
            "packages": { "receiver_latitude": "", "receiver_longitude": "" }
        }))
        .unwrap();
        assert_eq!(without.receiver_coords(), None);
    }
}
