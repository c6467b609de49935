// ============================================================================
// MAP VIEW - Mapa de paquetes pendientes + workflow de reclamo
// ============================================================================
// La superficie del mapa se comparte entre dos dueños: MarkerController
// (marcadores de paquetes) y LiveLocationTracker (posición propia). Cada
// uno derriba solo lo suyo al desmontar.
// ============================================================================

use yew::prelude::*;

use super::PackageModal;
use crate::hooks::use_claim::can_claim;
use crate::hooks::{use_claim, use_pending_packages, use_session, ClaimPhase};
use crate::maps::{ffi, LiveLocationTracker, MarkerController};
use crate::models::Package;
use crate::services::error::GeolocationError;
use crate::utils::constants::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};

const MAP_CONTAINER_ID: &str = "map";

#[function_component(MapView)]
pub fn map_view() -> Html {
    let session = use_session();
    let pending = use_pending_packages();
    let selected = use_state(|| None::<Package>);
    let geo_error = use_state(|| None::<String>);
    let map_ready = use_state(|| false);

    // Recursos con ciclo de vida manual, fuera del render
    let controller = use_mut_ref(|| None::<MarkerController>);
    let tracker = use_mut_ref(|| None::<LiveLocationTracker>);
    let map_handle = use_mut_ref(|| None::<ffi::JsMap>);

    let on_refreshed = {
        let packages = pending.packages.clone();
        Callback::from(move |list: Vec<Package>| packages.set(list))
    };
    let claim = use_claim(session.driver_id(), on_refreshed);

    // Inicialización del mapa y del tracker al montar
    {
        let map_handle = map_handle.clone();
        let tracker = tracker.clone();
        let controller = controller.clone();
        let map_ready = map_ready.clone();
        let geo_error = geo_error.clone();

        use_effect_with((), move |_| {
            if let Err(e) = ffi::inject_maps_script() {
                log::error!("❌ No se pudo inyectar el SDK de mapas: {:?}", e);
            }

            {
                let map_handle = map_handle.clone();
                let tracker = tracker.clone();
                let map_ready = map_ready.clone();
                let geo_error = geo_error.clone();

                ffi::with_maps_api(move || {
                    let Some(container) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(MAP_CONTAINER_ID))
                    else {
                        log::error!("❌ Contenedor del mapa no encontrado");
                        return;
                    };

                    let (lat, lng) = DEFAULT_MAP_CENTER;
                    let map =
                        ffi::JsMap::new(&container, &ffi::map_options(lat, lng, DEFAULT_MAP_ZOOM, true));
                    log::info!("🗺️ Mapa inicializado");

                    // Ubicación en vivo: falla suave, el mapa sigue sirviendo
                    let on_geo_error = {
                        let geo_error = geo_error.clone();
                        Callback::from(move |e: GeolocationError| geo_error.set(Some(e.to_string())))
                    };
                    match LiveLocationTracker::start(map.clone(), on_geo_error) {
                        Ok(live) => *tracker.borrow_mut() = Some(live),
                        Err(e) => {
                            log::warn!("⚠️ Sin ubicación en vivo: {}", e);
                            geo_error.set(Some(e.to_string()));
                        }
                    }

                    *map_handle.borrow_mut() = Some(map);
                    map_ready.set(true);
                });
            }

            // Teardown: cada dueño libera sus marcadores y su watch
            move || {
                controller.borrow_mut().take();
                tracker.borrow_mut().take();
            }
        });
    }

    // Reconciliar marcadores en cada cambio de colección
    {
        let controller = controller.clone();
        let map_handle = map_handle.clone();
        let selected = selected.clone();

        use_effect_with(
            ((*pending.packages).clone(), *map_ready),
            move |(packages, ready)| {
                if *ready {
                    let mut slot = controller.borrow_mut();
                    if slot.is_none() {
                        if let Some(map) = map_handle.borrow().as_ref() {
                            *slot = Some(MarkerController::new(map.clone()));
                        }
                    }
                    if let Some(ctrl) = slot.as_mut() {
                        // Handler por identidad estable del paquete, nunca
                        // por índice capturado de un loop
                        let on_click = {
                            let selected = selected.clone();
                            let packages = packages.clone();
                            Callback::from(move |package_id: String| {
                                if let Some(pkg) = packages.iter().find(|p| p.id == package_id) {
                                    selected.set(Some(pkg.clone()));
                                }
                            })
                        };
                        ctrl.sync(packages, on_click);
                    }
                }
                || ()
            },
        );
    }

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let on_claim = {
        let claim_cb = claim.claim.clone();
        let selected = selected.clone();
        Callback::from(move |package: Package| {
            claim_cb.emit(package);
            selected.set(None);
        })
    };

    let claim_status = match &*claim.phase {
        ClaimPhase::Idle => html! {},
        ClaimPhase::UpdatingPackage => html! { <div class="claim-chip">{"🚚 Reclamando paquete..."}</div> },
        ClaimPhase::CreatingOrder => html! { <div class="claim-chip">{"📝 Creando orden..."}</div> },
        ClaimPhase::Refreshing => html! { <div class="claim-chip">{"🔄 Actualizando lista..."}</div> },
        ClaimPhase::Failed(message) => {
            html! { <div class="claim-banner error">{format!("Reclamo fallido: {}", message)}</div> }
        }
    };

    html! {
        <div class="map-view">
            <div id={MAP_CONTAINER_ID} class="map-container"></div>

            { claim_status }

            if *pending.loading {
                <div class="map-loading">{"Cargando paquetes..."}</div>
            }
            if let Some(message) = &*pending.error {
                <div class="map-error">{format!("No se pudo cargar la lista: {}", message)}</div>
            }
            if let Some(message) = &*geo_error {
                <div class="geo-notice">{format!("Ubicación no disponible: {}", message)}</div>
            }
            if let Some(package) = &*selected {
                <PackageModal
                    package={package.clone()}
                    claiming={!can_claim(&claim.in_flight, &package.id)}
                    on_claim={on_claim}
                    on_close={on_close}
                />
            }
        </div>
    }
}
