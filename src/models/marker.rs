use super::package::{Package, PackageStatus};

/// Proyección geocodificada de un paquete, solo para render. Se
/// reconstruye completa en cada pasada; nunca es autoritativa.
#[derive(Clone, PartialEq, Debug)]
pub struct MarkerEntity {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub status: PackageStatus,
    pub description: String,
    pub sender_address: String,
    pub receiver_address: String,
}

impl MarkerEntity {
    /// `None` si las coordenadas del remitente no parsean: el paquete
    /// existe pero no produce marcador.
    pub fn from_package(pkg: &Package) -> Option<Self> {
        let (lat, lng) = pkg.sender_coords()?;
        Some(Self {
            id: pkg.id.clone(),
            lat,
            lng,
            status: pkg.status,
            description: pkg.description.clone(),
            sender_address: pkg.sender_address.clone().unwrap_or_default(),
            receiver_address: pkg.receiver_address.clone().unwrap_or_default(),
        })
    }
}

/// Proyecta la colección completa descartando en silencio los paquetes
/// sin coordenadas válidas; geodata malformada jamás tumba el render.
pub fn project_markers(packages: &[Package]) -> Vec<MarkerEntity> {
    packages.iter().filter_map(MarkerEntity::from_package).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn packages_from(value: serde_json::Value) -> Vec<Package> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn solo_los_paquetes_con_coordenadas_producen_marcador() {
        let packages = packages_from(json!([
            {
                "id": "p1",
                "status": "pending",
                "sender_latitude": "1.0",
                "sender_longitude": "2.0"
            },
            {
                "id": "p2",
                "status": "pending",
                "sender_latitude": "",
                "sender_longitude": ""
            }
        ]));

        let markers = project_markers(&packages);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, "p1");
        assert_eq!((markers[0].lat, markers[0].lng), (1.0, 2.0));
    }

    #[test]
    fn coleccion_solo_invalida_equivale_a_vacia() {
        let packages = packages_from(json!([
            { "id": "p1", "status": "pending" },
            {
                "id": "p2",
                "status": "pending",
                "sender_latitude": "x",
                "sender_longitude": "y"
            }
        ]));

        assert!(project_markers(&packages).is_empty());
        assert!(project_markers(&[]).is_empty());
    }

    #[test]
    fn la_proyeccion_copia_los_campos_del_detalle() {
        let packages = packages_from(json!([
            {
                "id": "p9",
                "description": "Repuestos",
                "status": "pending",
                "sender_address": "Calle 1",
                "receiver_address": "Calle 2",
                "sender_latitude": -7.25,
                "sender_longitude": 112.76
            }
        ]));

        let markers = project_markers(&packages);
        assert_eq!(markers[0].description, "Repuestos");
        assert_eq!(markers[0].sender_address, "Calle 1");
        assert_eq!(markers[0].receiver_address, "Calle 2");
    }
}
