/// Claves de localStorage
pub const USER_STORAGE_KEY: &str = "user";
pub const JWT_STORAGE_KEY: &str = "jwt";

/// Colores de fondo del body
pub const LOGIN_BACKGROUND: &str = "#0E5AE5";
pub const APP_BACKGROUND: &str = "#fff";

/// Contenedor raíz donde el router pinta cada página
pub const ROOT_SELECTOR: &str = "#root";
