/// URL base del backend de paquetes y órdenes
/// Configurada en tiempo de compilación via BACKEND_URL (.env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "https://api.dynamits.id",
};

/// API key de Google Maps; sin ella el mapa no carga
pub const MAPS_API_KEY: &str = match option_env!("MAPS_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Map ID que define el estilo del mapa
pub const MAPS_MAP_ID: &str = match option_env!("MAPS_MAP_ID") {
    Some(id) => id,
    None => "bd607af67d5b8861",
};

/// Clave de localStorage para la sesión del conductor
pub const SESSION_STORAGE_KEY: &str = "dispatchDriver_session";

/// Vigencia de la sesión persistida (días)
pub const SESSION_TTL_DAYS: i64 = 7;

/// Centro inicial del mapa (Surabaya) y zoom por defecto
pub const DEFAULT_MAP_CENTER: (f64, f64) = (-7.250445, 112.768845);
pub const DEFAULT_MAP_ZOOM: f64 = 13.0;

/// Cota superior para llamadas al gateway (ms); una petición colgada no
/// puede dejar la vista cargando para siempre
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Opciones del watch de geolocalización (ms)
pub const GEO_MAXIMUM_AGE_MS: u32 = 10_000;
pub const GEO_TIMEOUT_MS: u32 = 5_000;

/// Icono de los marcadores de paquetes
pub const PACKAGE_MARKER_ICON: &str = "https://cdn-icons-png.flaticon.com/128/679/679821.png";
pub const PACKAGE_MARKER_SIZE: f64 = 25.0;
