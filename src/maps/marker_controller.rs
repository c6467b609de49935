// ============================================================================
// MARKER CONTROLLER - Ciclo de vida de los marcadores de paquetes
// ============================================================================
// Reconcilia el set de marcadores del mapa con la colección geocodificada.
// Ante cada cambio de colección: derribar todo lo propio, reconstruir
// todo. Un marcador de un render anterior que sobrevive es un leak y
// pinta datos viejos. El controller solo toca marcadores que él creó;
// los de otros dueños del mapa (ubicación en vivo) no son suyos.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use super::ffi;
use crate::models::{project_markers, MarkerEntity, Package};

/// Plan de reconciliación, calculado en puro para poder probar el
/// invariante sin navegador: se quita todo lo previo y se crea un
/// marcador por entidad con coordenadas válidas.
#[derive(Debug, PartialEq)]
pub struct ReconcilePlan {
    pub remove: Vec<String>,
    pub create: Vec<MarkerEntity>,
}

pub fn plan(previous_ids: &[String], packages: &[Package]) -> ReconcilePlan {
    ReconcilePlan {
        remove: previous_ids.to_vec(),
        create: project_markers(packages),
    }
}

/// Un marcador vivo con el handler de click que le pertenece, atado por
/// la identidad del paquete (nunca por índice de iteración). El closure
/// queda anclado aquí, no en `forget`: muere junto con el marcador.
struct OwnedMarker {
    id: String,
    marker: ffi::JsMarker,
    _on_click: Closure<dyn FnMut()>,
}

pub struct MarkerController {
    map: ffi::JsMap,
    markers: Vec<OwnedMarker>,
    cluster: Option<ffi::Clusterer>,
}

impl MarkerController {
    pub fn new(map: ffi::JsMap) -> Self {
        Self {
            map,
            markers: Vec::new(),
            cluster: None,
        }
    }

    pub fn marker_ids(&self) -> Vec<String> {
        self.markers.iter().map(|m| m.id.clone()).collect()
    }

    /// Aplica el plan de forma atómica: teardown completo y después
    /// reconstrucción con capa de clusters nueva. Ningún frame ve
    /// marcadores viejos y nuevos a la vez.
    pub fn sync(&mut self, packages: &[Package], on_click: Callback<String>) {
        let plan = plan(&self.marker_ids(), packages);
        self.clear();

        if plan.create.is_empty() {
            log::info!("🗺️ Sin paquetes mapeables; mapa sin marcadores");
            return;
        }

        let cluster_markers = js_sys::Array::new();
        for entity in &plan.create {
            let marker = ffi::JsMarker::new(&ffi::marker_options(entity.lat, entity.lng, &self.map));

            let id = entity.id.clone();
            let on_click = on_click.clone();
            let handler = Closure::wrap(Box::new(move || {
                on_click.emit(id.clone());
            }) as Box<dyn FnMut()>);
            marker.add_listener("click", handler.as_ref().unchecked_ref());

            cluster_markers.push(marker.as_ref());
            self.markers.push(OwnedMarker {
                id: entity.id.clone(),
                marker,
                _on_click: handler,
            });
        }

        self.cluster = Some(ffi::Clusterer::new(&ffi::clusterer_options(
            &self.map,
            &cluster_markers,
        )));
        log::info!(
            "📍 Marcadores renderizados: {} de {} paquetes",
            self.markers.len(),
            packages.len()
        );
    }

    /// Derriba la capa de clusters y todos los marcadores propios
    pub fn clear(&mut self) {
        if let Some(cluster) = self.cluster.take() {
            cluster.clear_markers();
        }
        for owned in self.markers.drain(..) {
            owned.marker.set_map(None);
        }
    }
}

impl Drop for MarkerController {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn packages(value: serde_json::Value) -> Vec<Package> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn primer_render_sin_nada_que_quitar() {
        let update = packages(json!([
            { "id": "p1", "status": "pending", "sender_latitude": "1.0", "sender_longitude": "2.0" },
            { "id": "p2", "status": "pending", "sender_latitude": "", "sender_longitude": "" }
        ]));

        let plan = plan(&[], &update);
        assert!(plan.remove.is_empty());
        assert_eq!(plan.create.len(), 1);
        assert_eq!(plan.create[0].id, "p1");
    }

    #[test]
    fn cada_update_descarta_todos_los_marcadores_previos() {
        let first = packages(json!([
            { "id": "p1", "status": "pending", "sender_latitude": 1.0, "sender_longitude": 2.0 },
            { "id": "p2", "status": "pending", "sender_latitude": 3.0, "sender_longitude": 4.0 }
        ]));
        let first_plan = plan(&[], &first);
        let attached: Vec<String> = first_plan.create.iter().map(|m| m.id.clone()).collect();
        assert_eq!(attached, vec!["p1", "p2"]);

        // Segundo update: p1 desapareció, p3 llegó sin coordenadas
        let second = packages(json!([
            { "id": "p2", "status": "pending", "sender_latitude": 3.0, "sender_longitude": 4.0 },
            { "id": "p3", "status": "pending" }
        ]));
        let second_plan = plan(&attached, &second);

        // Se quita todo lo previo, incluso lo que sigue presente
        assert_eq!(second_plan.remove, attached);
        assert_eq!(second_plan.create.len(), 1);
        assert_eq!(second_plan.create[0].id, "p2");
    }

    #[test]
    fn coleccion_vacia_solo_limpia() {
        let previous = vec!["p1".to_string(), "p2".to_string()];
        let plan = plan(&previous, &[]);
        assert_eq!(plan.remove, previous);
        assert!(plan.create.is_empty());
    }
}
