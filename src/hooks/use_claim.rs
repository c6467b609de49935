// ============================================================================
// USE CLAIM HOOK - Workflow de reclamo de un paquete
// ============================================================================
// Máquina de estados por intento:
//   Idle → UpdatingPackage → CreatingOrder → Refreshing → Idle | Failed
// Dos escrituras estrictamente secuenciales (update del paquete, alta de
// la orden) y un refetch. Sin rollback: el backend es dueño de la
// consistencia; un fallo se registra, se muestra y deja el paquete
// reclamable de nuevo.
// ============================================================================

use std::collections::HashSet;

use yew::prelude::*;

use crate::hooks::use_pending_packages::pending_only;
use crate::models::{Package, PackageStatus};
use crate::services::api_client::ApiClient;
use crate::services::error::GatewayError;

#[derive(Clone, PartialEq, Debug)]
pub enum ClaimPhase {
    Idle,
    UpdatingPackage,
    CreatingOrder,
    Refreshing,
    Failed(String),
}

/// Un paquete con reclamo en vuelo no puede reclamarse otra vez hasta
/// volver a Idle/Failed.
pub fn can_claim(in_flight: &HashSet<String>, package_id: &str) -> bool {
    !in_flight.contains(package_id)
}

/// Cuerpo del PUT de reclamo: el registro completo con el estado volcado
/// a shipping. El backend hace full replace; omitir campos los anularía.
pub fn claim_update(package: &Package) -> Package {
    package.with_status(PackageStatus::Shipping)
}

#[derive(Clone, PartialEq)]
pub struct ClaimHandle {
    pub phase: UseStateHandle<ClaimPhase>,
    pub in_flight: UseStateHandle<HashSet<String>>,
    pub claim: Callback<Package>,
}

#[hook]
pub fn use_claim(driver_id: Option<String>, on_refreshed: Callback<Vec<Package>>) -> ClaimHandle {
    let phase = use_state(|| ClaimPhase::Idle);
    let in_flight = use_state(HashSet::new);

    let claim = {
        let phase = phase.clone();
        let in_flight = in_flight.clone();

        Callback::from(move |package: Package| {
            let Some(driver_id) = driver_id.clone() else {
                log::warn!("⚠️ Reclamo sin sesión activa; ignorado");
                return;
            };
            if !can_claim(&in_flight, &package.id) {
                log::warn!("⚠️ Reclamo ya en vuelo para {}; ignorado", package.id);
                return;
            }

            let mut flights = (*in_flight).clone();
            flights.insert(package.id.clone());
            in_flight.set(flights);

            let phase = phase.clone();
            let in_flight = in_flight.clone();
            let on_refreshed = on_refreshed.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let package_id = package.id.clone();
                log::info!("🚚 Reclamando paquete {}", package_id);

                match run_writes(&api, &package, &driver_id, &phase).await {
                    Ok(()) => {
                        // Refetch para que el paquete reclamado desaparezca
                        // de la colección presentada
                        phase.set(ClaimPhase::Refreshing);
                        match api.get_packages().await {
                            Ok(all) => on_refreshed.emit(pending_only(all)),
                            Err(e) => log::warn!(
                                "⚠️ Refetch tras reclamo falló: {} (se conserva la lista previa)",
                                e
                            ),
                        }
                        phase.set(ClaimPhase::Idle);
                        log::info!("✅ Paquete {} reclamado", package_id);
                    }
                    Err(e) => {
                        // Sin rollback: si la orden no llegó a crearse el
                        // paquete puede quedar shipping en el backend; aquí
                        // solo se surfacea y se permite reintentar.
                        log::error!("❌ Reclamo de {} fallido: {}", package_id, e);
                        phase.set(ClaimPhase::Failed(e.to_string()));
                    }
                }

                let mut flights = (*in_flight).clone();
                flights.remove(&package_id);
                in_flight.set(flights);
            });
        })
    };

    ClaimHandle {
        phase,
        in_flight,
        claim,
    }
}

/// Las dos escrituras del reclamo, en orden estricto: la orden solo se
/// crea si el update del paquete resolvió bien.
async fn run_writes(
    api: &ApiClient,
    package: &Package,
    driver_id: &str,
    phase: &UseStateHandle<ClaimPhase>,
) -> Result<(), GatewayError> {
    phase.set(ClaimPhase::UpdatingPackage);
    api.update_package(&claim_update(package)).await?;

    phase.set(ClaimPhase::CreatingOrder);
    api.create_order(&package.id, driver_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn un_reclamo_en_vuelo_bloquea_el_retrigger() {
        let mut in_flight = HashSet::new();
        assert!(can_claim(&in_flight, "p1"));

        in_flight.insert("p1".to_string());
        assert!(!can_claim(&in_flight, "p1"));
        // Otros paquetes no quedan bloqueados
        assert!(can_claim(&in_flight, "p2"));

        in_flight.remove("p1");
        assert!(can_claim(&in_flight, "p1"));
    }

    #[test]
    fn el_cuerpo_del_reclamo_solo_cambia_el_estado() {
        let package: Package = serde_json::from_value(json!({
            "id": "p1",
            "description": "Documentos",
            "status": "pending",
            "price": 15000,
            "receiver_address": "Calle 2",
            "warehouse_code": "W-7"
        }))
        .unwrap();

        let body = serde_json::to_value(claim_update(&package)).unwrap();
        assert_eq!(body["status"], "shipping");
        assert_eq!(body["description"], "Documentos");
        assert_eq!(body["price"], 15000);
        assert_eq!(body["receiver_address"], "Calle 2");
        assert_eq!(body["warehouse_code"], "W-7");
    }
}
