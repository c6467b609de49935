// ============================================================================
// LIVE LOCATION TRACKER - Posición del conductor en tiempo real
// ============================================================================
// watchPosition con alta precisión y un único marcador distinguido. El
// viewport solo se mueve con el primer fix; los siguientes reposicionan
// el marcador sin pelear contra el pan/zoom manual del conductor. En
// error se conserva el último fix conocido.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Position, PositionError, PositionOptions};
use yew::Callback;

use super::ffi;
use crate::services::error::GeolocationError;
use crate::utils::constants::{GEO_MAXIMUM_AGE_MS, GEO_TIMEOUT_MS};

pub struct LiveLocationTracker {
    watch_id: i32,
    marker: Rc<RefCell<Option<ffi::JsMarker>>>,
    _on_fix: Closure<dyn FnMut(Position)>,
    _on_error: Closure<dyn FnMut(PositionError)>,
}

impl LiveLocationTracker {
    pub fn start(
        map: ffi::JsMap,
        on_error: Callback<GeolocationError>,
    ) -> Result<Self, GeolocationError> {
        let geolocation = web_sys::window()
            .and_then(|w| w.navigator().geolocation().ok())
            .ok_or(GeolocationError::Unsupported)?;

        let marker: Rc<RefCell<Option<ffi::JsMarker>>> = Rc::new(RefCell::new(None));
        let first_fix = Rc::new(Cell::new(true));

        let on_fix = {
            let marker = marker.clone();
            let first_fix = first_fix.clone();
            let map = map.clone();
            Closure::wrap(Box::new(move |position: Position| {
                let coords = position.coords();
                let lat_lng = ffi::lat_lng(coords.latitude(), coords.longitude());

                let mut current = marker.borrow_mut();
                match current.as_ref() {
                    Some(existing) => existing.set_position(&lat_lng),
                    None => {
                        *current = Some(ffi::JsMarker::new(&ffi::driver_marker_options(
                            &lat_lng, &map,
                        )));
                    }
                }

                // Solo el primer fix mueve el viewport
                if first_fix.replace(false) {
                    log::info!("📍 Primer fix de ubicación; centrando mapa");
                    map.pan_to(&lat_lng);
                }
            }) as Box<dyn FnMut(Position)>)
        };

        let on_error_closure = Closure::wrap(Box::new(move |err: PositionError| {
            let mapped = GeolocationError::from_code(err.code());
            log::warn!("⚠️ Watch de ubicación falló: {} (se conserva el último fix)", mapped);
            on_error.emit(mapped);
        }) as Box<dyn FnMut(PositionError)>);

        let options = PositionOptions::new();
        options.set_enable_high_accuracy(true);
        options.set_maximum_age(GEO_MAXIMUM_AGE_MS);
        options.set_timeout(GEO_TIMEOUT_MS);

        let watch_id = geolocation
            .watch_position_with_error_callback_and_options(
                on_fix.as_ref().unchecked_ref(),
                Some(on_error_closure.as_ref().unchecked_ref()),
                &options,
            )
            .map_err(|_| GeolocationError::Unsupported)?;

        log::info!("🛰️ Watch de geolocalización iniciado (id {})", watch_id);

        Ok(Self {
            watch_id,
            marker,
            _on_fix: on_fix,
            _on_error: on_error_closure,
        })
    }
}

impl Drop for LiveLocationTracker {
    /// Liberar el watch es obligatorio: sin esto los callbacks siguen
    /// disparando contra una vista desmontada.
    fn drop(&mut self) {
        if let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) {
            geolocation.clear_watch(self.watch_id);
        }
        if let Some(marker) = self.marker.borrow_mut().take() {
            marker.set_map(None);
        }
        log::info!("🛰️ Watch de geolocalización liberado");
    }
}
