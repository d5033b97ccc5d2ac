use std::{net::SocketAddr, str::FromStr, time::Duration};

use fintrack_core::auth::DemoAccount;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub demo: DemoAccount,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: "./db/app.db".into(),
            cors_allow: vec!["*".into()],
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            static_dir: "dist".into(),
            demo: DemoAccount {
                user_id: "demo-user".into(),
                email: "test@example.com".into(),
                password: "password".into(),
                full_name: "Alex Jordan".into(),
            },
        }
    }
}

/// Reads `key` and parses it, keeping `default` when unset or unparsable.
fn parsed_var<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {}={:?}, using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn string_var(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr = parsed_var("FT_LISTEN_ADDR", defaults.listen_addr);
        let db_path = string_var("FT_DB_PATH", defaults.db_path);
        let cors_allow = std::env::var("FT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = parsed_var("FT_REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);
        let static_dir = string_var("FT_STATIC_DIR", defaults.static_dir);
        let demo = DemoAccount {
            user_id: string_var("FT_DEMO_USER_ID", defaults.demo.user_id),
            email: string_var("FT_DEMO_EMAIL", defaults.demo.email),
            password: string_var("FT_DEMO_PASSWORD", defaults.demo.password),
            full_name: string_var("FT_DEMO_NAME", defaults.demo.full_name),
        };

        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            demo,
        }
    }
}
