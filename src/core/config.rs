use std::env;
use std::time::Duration;

use crate::features::scan::EvaluatorKind;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub admin: AdminConfig,
    pub birdeye: BirdeyeConfig,
    pub gem_cache: GemCacheConfig,
    pub scan: ScanConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Moderation credentials and session lifetime
#[derive(Clone)]
pub struct AdminConfig {
    pub password: String,
    pub session_ttl: Duration,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"***")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

/// Birdeye trending API configuration
#[derive(Clone)]
pub struct BirdeyeConfig {
    /// API key; gem lookups degrade to empty results without it
    pub api_key: Option<String>,
    pub base_url: String,
    pub chain: String,
    /// Number of trending tokens requested per refresh
    pub limit: usize,
    pub timeout: Duration,
}

impl std::fmt::Debug for BirdeyeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BirdeyeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("chain", &self.chain)
            .field("limit", &self.limit)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GemCacheConfig {
    pub ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub evaluator: EvaluatorKind,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            birdeye: BirdeyeConfig::from_env()?,
            gem_cache: GemCacheConfig::from_env()?,
            scan: ScanConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB, images arrive inline

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AdminConfig {
    pub const DEFAULT_PASSWORD: &'static str = "GOLD";
    const DEFAULT_SESSION_TTL_SECS: u64 = 12 * 60 * 60;

    pub fn from_env() -> Result<Self, String> {
        let password = env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PASSWORD.to_string());

        let session_ttl_secs = env::var("ADMIN_SESSION_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_SESSION_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "ADMIN_SESSION_TTL_SECS must be a valid number".to_string())?;

        Ok(Self {
            password,
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }

    pub fn uses_default_password(&self) -> bool {
        self.password == Self::DEFAULT_PASSWORD
    }
}

impl BirdeyeConfig {
    const DEFAULT_BASE_URL: &'static str = "https://public-api.birdeye.so";
    const DEFAULT_CHAIN: &'static str = "solana";
    const DEFAULT_LIMIT: usize = 10;
    const DEFAULT_TIMEOUT_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("BIRDEYE_KEY").ok().filter(|s| !s.is_empty());

        let base_url = env::var("BIRDEYE_API_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let chain = env::var("BIRDEYE_CHAIN").unwrap_or_else(|_| Self::DEFAULT_CHAIN.to_string());

        let limit = env::var("GEM_LIMIT")
            .unwrap_or_else(|_| Self::DEFAULT_LIMIT.to_string())
            .parse::<usize>()
            .map_err(|_| "GEM_LIMIT must be a valid number".to_string())?;

        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "UPSTREAM_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            api_key,
            base_url,
            chain,
            limit,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl GemCacheConfig {
    const DEFAULT_TTL_MS: u64 = 5000;

    pub fn from_env() -> Result<Self, String> {
        let ttl_ms = env::var("GEM_CACHE_TTL_MS")
            .unwrap_or_else(|_| Self::DEFAULT_TTL_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "GEM_CACHE_TTL_MS must be a valid number".to_string())?;

        Ok(Self {
            ttl: Duration::from_millis(ttl_ms),
        })
    }
}

impl ScanConfig {
    pub fn from_env() -> Result<Self, String> {
        let evaluator = env::var("SCAN_EVALUATOR")
            .unwrap_or_else(|_| "simulated".to_string())
            .parse::<EvaluatorKind>()?;

        Ok(Self { evaluator })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Gold Guard API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Scam reports, moderation and trending token lookups".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("ops".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("ops:secret".to_string()));
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let admin = AdminConfig {
            password: "hunter2".to_string(),
            session_ttl: Duration::from_secs(60),
        };
        let birdeye = BirdeyeConfig {
            api_key: Some("live-key".to_string()),
            base_url: "http://localhost".to_string(),
            chain: "solana".to_string(),
            limit: 10,
            timeout: Duration::from_secs(5),
        };

        assert!(!format!("{:?}", admin).contains("hunter2"));
        assert!(!format!("{:?}", birdeye).contains("live-key"));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024,
        };
        assert_eq!(app.server_address(), "0.0.0.0:3000");
    }
}
