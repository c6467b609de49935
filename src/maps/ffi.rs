// ============================================================================
// MAPS FFI - Bindings tipados del SDK de Google Maps
// ============================================================================
// Solo wrappers sobre el API JS y builders de sus objetos de opciones.
// Sin estado, sin lógica de ciclo de vida (eso es del MarkerController).
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::utils::constants::{MAPS_API_KEY, MAPS_MAP_ID, PACKAGE_MARKER_ICON, PACKAGE_MARKER_SIZE};

const SDK_POLL_INTERVAL_MS: u32 = 200;
const SDK_POLL_MAX_ATTEMPTS: u32 = 50;

#[wasm_bindgen]
extern "C" {
    /// google.maps.Map
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Clone)]
    pub type JsMap;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> JsMap;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &JsMap, lat_lng: &JsValue);

    /// google.maps.Marker
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type JsMarker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> JsMarker;

    /// `None` desengancha el marcador del mapa
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &JsMarker, map: Option<&JsMap>);

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &JsMarker, lat_lng: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &JsMarker, event: &str, handler: &js_sys::Function);

    /// google.maps.Size (para escalar iconos)
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Size)]
    pub type JsSize;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Size")]
    pub fn new(width: f64, height: f64) -> JsSize;

    /// Capa de clustering: global UMD de @googlemaps/markerclusterer
    #[wasm_bindgen(js_namespace = markerClusterer, js_name = MarkerClusterer)]
    pub type Clusterer;

    #[wasm_bindgen(constructor, js_namespace = markerClusterer, js_class = "MarkerClusterer")]
    pub fn new(options: &JsValue) -> Clusterer;

    #[wasm_bindgen(method, js_name = clearMarkers)]
    pub fn clear_markers(this: &Clusterer);
}

/// window.google.maps, si el script del SDK ya terminó de cargar
fn maps_namespace() -> Option<JsValue> {
    let window = web_sys::window()?;
    let google = js_sys::Reflect::get(&window, &JsValue::from_str("google")).ok()?;
    if google.is_undefined() {
        return None;
    }
    let maps = js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok()?;
    (!maps.is_undefined()).then_some(maps)
}

pub fn maps_api_ready() -> bool {
    maps_namespace().is_some()
}

/// Inyecta el script del SDK una sola vez; la key viene compilada de .env
pub fn inject_maps_script() -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or("sin window")?
        .document()
        .ok_or("sin document")?;

    if document.get_element_by_id("maps-sdk").is_some() {
        return Ok(());
    }
    if MAPS_API_KEY.is_empty() {
        log::warn!("⚠️ MAPS_API_KEY vacía; el SDK de mapas va a rechazar la carga");
    }

    let script = document.create_element("script")?;
    script.set_id("maps-sdk");
    script.set_attribute(
        "src",
        &format!(
            "https://maps.googleapis.com/maps/api/js?key={}&loading=async",
            MAPS_API_KEY
        ),
    )?;
    document.head().ok_or("sin head")?.append_child(&script)?;
    Ok(())
}

/// Ejecuta `f` cuando el SDK esté disponible, reintentando con Timeout
pub fn with_maps_api<F: FnOnce() + 'static>(f: F) {
    with_maps_api_attempt(f, 0);
}

fn with_maps_api_attempt<F: FnOnce() + 'static>(f: F, attempt: u32) {
    if maps_api_ready() {
        f();
        return;
    }
    if attempt >= SDK_POLL_MAX_ATTEMPTS {
        log::error!("❌ El SDK de mapas nunca terminó de cargar");
        return;
    }
    Timeout::new(SDK_POLL_INTERVAL_MS, move || {
        with_maps_api_attempt(f, attempt + 1);
    })
    .forget();
}

/// Literal `{lat, lng}` del SDK
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"lat".into(), &JsValue::from_f64(lat));
    let _ = js_sys::Reflect::set(&obj, &"lng".into(), &JsValue::from_f64(lng));
    obj.into()
}

/// Opciones del mapa; `with_ui` en false deja un mapa estático (mini-mapas)
pub fn map_options(lat: f64, lng: f64, zoom: f64, with_ui: bool) -> JsValue {
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"center".into(), &lat_lng(lat, lng));
    let _ = js_sys::Reflect::set(&obj, &"zoom".into(), &JsValue::from_f64(zoom));
    let _ = js_sys::Reflect::set(&obj, &"mapId".into(), &JsValue::from_str(MAPS_MAP_ID));
    let _ = js_sys::Reflect::set(&obj, &"disableDefaultUI".into(), &JsValue::from_bool(!with_ui));
    let _ = js_sys::Reflect::set(&obj, &"gestureHandling".into(), &JsValue::from_str("greedy"));
    obj.into()
}

/// Marcador de paquete con el icono escalado
pub fn marker_options(lat: f64, lng: f64, map: &JsMap) -> JsValue {
    let icon = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&icon, &"url".into(), &JsValue::from_str(PACKAGE_MARKER_ICON));
    let scaled = JsSize::new(PACKAGE_MARKER_SIZE, PACKAGE_MARKER_SIZE);
    let _ = js_sys::Reflect::set(&icon, &"scaledSize".into(), scaled.as_ref());

    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"position".into(), &lat_lng(lat, lng));
    let _ = js_sys::Reflect::set(&obj, &"map".into(), map.as_ref());
    let _ = js_sys::Reflect::set(&obj, &"icon".into(), &icon);
    obj.into()
}

/// Punto azul distinguido para la posición del conductor
pub fn driver_marker_options(position: &JsValue, map: &JsMap) -> JsValue {
    let icon = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&icon, &"path".into(), &symbol_path_circle());
    let _ = js_sys::Reflect::set(&icon, &"scale".into(), &JsValue::from_f64(8.0));
    let _ = js_sys::Reflect::set(&icon, &"fillColor".into(), &JsValue::from_str("#4285F4"));
    let _ = js_sys::Reflect::set(&icon, &"fillOpacity".into(), &JsValue::from_f64(1.0));
    let _ = js_sys::Reflect::set(&icon, &"strokeWeight".into(), &JsValue::from_f64(2.0));
    let _ = js_sys::Reflect::set(&icon, &"strokeColor".into(), &JsValue::from_str("white"));

    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"position".into(), position);
    let _ = js_sys::Reflect::set(&obj, &"map".into(), map.as_ref());
    let _ = js_sys::Reflect::set(&obj, &"icon".into(), &icon);
    obj.into()
}

/// google.maps.SymbolPath.CIRCLE, resuelto en runtime
fn symbol_path_circle() -> JsValue {
    maps_namespace()
        .and_then(|maps| js_sys::Reflect::get(&maps, &"SymbolPath".into()).ok())
        .and_then(|sp| js_sys::Reflect::get(&sp, &"CIRCLE".into()).ok())
        .unwrap_or_else(|| JsValue::from_f64(0.0))
}

/// Opciones de la capa de clustering
pub fn clusterer_options(map: &JsMap, markers: &js_sys::Array) -> JsValue {
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"map".into(), map.as_ref());
    let _ = js_sys::Reflect::set(&obj, &"markers".into(), markers.as_ref());
    obj.into()
}
