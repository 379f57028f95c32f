use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Cuentas de prueba que el dashboard admin no muestra
    pub test_accounts: Vec<String>,
}

const DEFAULT_API_URL: &str = "http://localhost:5678";
const DEFAULT_TEST_ACCOUNTS: &str = "johndoe@email.com,employee@test.tld,admin@test.tld";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            test_accounts: parse_accounts(DEFAULT_TEST_ACCOUNTS),
        }
    }
}

fn parse_accounts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("BILLED_API_URL")
                .unwrap_or(DEFAULT_API_URL).trim_end_matches('/').to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            test_accounts: parse_accounts(option_env!("BILLED_TEST_ACCOUNTS").unwrap_or(DEFAULT_TEST_ACCOUNTS)),
        }
    }

    /// Nivel de log para wasm_logger (Off si el logging está deshabilitado)
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
