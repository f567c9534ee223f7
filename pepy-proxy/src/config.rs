use std::env;
use std::fmt;

pub const DEFAULT_PEPY_API_URL: &str = "https://api.pepy.tech";

/// Process configuration, read once at startup and handed to the router.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub pepy_api_url: String,
    /// Upstream credential. Empty means requests go out unauthenticated.
    pub pepy_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(p) => p.parse().map_err(|_| format!("PORT must be a valid port number, got {:?}", p))?,
            Err(_) => 8080,
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            pepy_api_url: env::var("PEPY_API_URL")
                .unwrap_or_else(|_| DEFAULT_PEPY_API_URL.to_string()),
            pepy_api_key: env::var("PEPY_API_KEY").unwrap_or_default(),
        })
    }

    /// `host:port` for the listener. Hostnames are resolved at bind time;
    /// bare IPv6 literals get bracketed.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.pepy_api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("pepy_api_url", &self.pepy_api_url)
            .field("pepy_api_key", &key)
            .finish()
    }
}
