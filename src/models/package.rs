use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Estado de un paquete. Solo avanza: pending → shipping → done;
/// este cliente nunca emite una transición inversa.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    Pending,
    Shipping,
    Done,
    #[serde(other)]
    Unknown,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Pending => "pending",
            PackageStatus::Shipping => "shipping",
            PackageStatus::Done => "done",
            PackageStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Package {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub status: PackageStatus,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_phone: Option<String>,
    #[serde(default)]
    pub sender_address: Option<String>,
    #[serde(default)]
    pub sender_latitude: Option<Value>,
    #[serde(default)]
    pub sender_longitude: Option<Value>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub receiver_phone: Option<String>,
    #[serde(default)]
    pub receiver_address: Option<String>,
    #[serde(default)]
    pub receiver_latitude: Option<Value>,
    #[serde(default)]
    pub receiver_longitude: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// El PUT de actualización es un reemplazo completo del registro; los
    /// campos que este cliente no modela viajan aquí para no perderlos.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Package {
    /// Coordenadas del remitente, si son parseables
    pub fn sender_coords(&self) -> Option<(f64, f64)> {
        let lat = parse_coord(self.sender_latitude.as_ref())?;
        let lng = parse_coord(self.sender_longitude.as_ref())?;
        Some((lat, lng))
    }

    /// Copia con el estado cambiado y todos los demás campos intactos
    pub fn with_status(&self, status: PackageStatus) -> Package {
        let mut updated = self.clone();
        updated.status = status;
        updated
    }
}

/// Parseo defensivo de coordenadas: el backend las envía como número o
/// como string (a veces vacío). Todo lo que no sea un f64 finito queda
/// descartado; un paquete sin coordenadas existe pero no se mapea.
pub fn parse_coord(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_coord_acepta_numero_y_string() {
        assert_eq!(parse_coord(Some(&json!(1.5))), Some(1.5));
        assert_eq!(parse_coord(Some(&json!("-7.250445"))), Some(-7.250445));
        assert_eq!(parse_coord(Some(&json!(" 2.0 "))), Some(2.0));
    }

    #[test]
    fn parse_coord_descarta_basura() {
        assert_eq!(parse_coord(None), None);
        assert_eq!(parse_coord(Some(&json!(""))), None);
        assert_eq!(parse_coord(Some(&json!("abc"))), None);
        assert_eq!(parse_coord(Some(&json!(null))), None);
        assert_eq!(parse_coord(Some(&json!(true))), None);
        // "NaN" e "inf" parsean como f64 pero no son finitos
        assert_eq!(parse_coord(Some(&json!("NaN"))), None);
        assert_eq!(parse_coord(Some(&json!("inf"))), None);
    }

    #[test]
    fn status_desconocido_no_rompe_el_parseo() {
        let pkg: Package = serde_json::from_value(json!({
            "id": "p1",
            "status": "lost_in_transit"
        }))
        .unwrap();
        assert_eq!(pkg.status, PackageStatus::Unknown);
    }

    #[test]
    fn with_status_conserva_los_campos_no_modelados() {
        // El backend hace full replace: un campo desconocido omitido en el
        // PUT se perdería. Tiene que sobrevivir al viaje por `extra`.
        let pkg: Package = serde_json::from_value(json!({
            "id": "p1",
            "description": "Cajas de libros",
            "status": "pending",
            "weight": "2.5",
            "sender_name": "Ana",
            "priority": "high",
            "courier_notes": "fragil"
        }))
        .unwrap();

        let updated = pkg.with_status(PackageStatus::Shipping);
        let body = serde_json::to_value(&updated).unwrap();

        assert_eq!(body["status"], "shipping");
        assert_eq!(body["description"], "Cajas de libros");
        assert_eq!(body["weight"], "2.5");
        assert_eq!(body["sender_name"], "Ana");
        assert_eq!(body["priority"], "high");
        assert_eq!(body["courier_notes"], "fragil");
    }

    #[test]
    fn sender_coords_requiere_ambas_componentes() {
        let pkg: Package = serde_json::from_value(json!({
            "id": "p1",
            "status": "pending",
            "sender_latitude": "1.0"
        }))
        .unwrap();
        assert_eq!(pkg.sender_coords(), None);
    }
}
