use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::maps::ffi;
use crate::utils::constants::DEFAULT_MAP_ZOOM;

#[derive(Properties, PartialEq)]
pub struct OrderMiniMapProps {
    pub lat: f64,
    pub lng: f64,
}

/// Mini-mapa estático por orden: un solo marcador, sin UI del SDK. El
/// marcador pertenece a esta vista y se libera al desmontar.
#[function_component(OrderMiniMap)]
pub fn order_mini_map(props: &OrderMiniMapProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let lat = props.lat;
        let lng = props.lng;

        use_effect_with((props.lat, props.lng), move |_| {
            if let Err(e) = ffi::inject_maps_script() {
                log::error!("❌ No se pudo inyectar el SDK de mapas: {:?}", e);
            }

            let slot: Rc<RefCell<Option<ffi::JsMarker>>> = Rc::new(RefCell::new(None));

            {
                let slot = slot.clone();
                let container_ref = container_ref.clone();
                ffi::with_maps_api(move || {
                    let Some(container) = container_ref.cast::<web_sys::Element>() else {
                        return;
                    };
                    let map = ffi::JsMap::new(
                        &container,
                        &ffi::map_options(lat, lng, DEFAULT_MAP_ZOOM, false),
                    );
                    let marker = ffi::JsMarker::new(&ffi::marker_options(lat, lng, &map));
                    *slot.borrow_mut() = Some(marker);
                });
            }

            move || {
                if let Some(marker) = slot.borrow_mut().take() {
                    marker.set_map(None);
                }
            }
        });
    }

    html! { <div ref={container_ref} class="order-mini-map"></div> }
}
