use yew::prelude::*;

use crate::models::{Package, PackageStatus};
use crate::services::api_client::ApiClient;

/// Filtro de la vista de mapa: solo paquetes pendientes de reclamo
pub fn pending_only(packages: Vec<Package>) -> Vec<Package> {
    packages
        .into_iter()
        .filter(|p| p.status == PackageStatus::Pending)
        .collect()
}

#[derive(Clone, PartialEq)]
pub struct PendingPackagesHandle {
    pub packages: UseStateHandle<Vec<Package>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

/// Trae la colección de pendientes al montar. En fallo de red la lista
/// queda como el último fetch exitoso y el error se expone inerte.
#[hook]
pub fn use_pending_packages() -> PendingPackagesHandle {
    let packages = use_state(Vec::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let packages = packages.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_packages().await {
                    Ok(all) => {
                        let pending = pending_only(all);
                        log::info!("📦 Paquetes pendientes: {}", pending.len());
                        error.set(None);
                        packages.set(pending);
                    }
                    Err(e) => {
                        log::error!("❌ Error obteniendo paquetes: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    PendingPackagesHandle {
        packages,
        loading,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn solo_pasan_los_pendientes() {
        let all: Vec<Package> = serde_json::from_value(json!([
            { "id": "p1", "status": "pending" },
            { "id": "p2", "status": "shipping" },
            { "id": "p3", "status": "done" },
            { "id": "p4", "status": "pending" }
        ]))
        .unwrap();

        let pending = pending_only(all);
        let ids: Vec<&str> = pending.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p4"]);
    }
}
