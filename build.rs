use std::env;
use std::fs;
use std::path::Path;

/// Variables que se leen con option_env! en src/config.rs
const FORWARDED_KEYS: [&str; 5] = [
    "BILLED_API_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "BILLED_TEST_ACCOUNTS",
];

fn main() {
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Cargar variables desde .env si existe
    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env no se pudo leer, usando valores por defecto");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // Solo las claves conocidas, y sin pisar el entorno real
        if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
