use serde::Deserialize;

/// Lifetime of an access token, carried in the Authorization header.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
/// Lifetime of a refresh token, carried in an HTTP-only cookie. 720 hours = 30 days.
pub const REFRESH_TOKEN_TTL_HOURS: i64 = 720;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);
        let database_url = std::env::var("DATABASE_URL")?;

        // Two independent secrets so one leaked token family cannot be used
        // to forge the other.
        let jwt = JwtConfig {
            access_secret: std::env::var("JWT_ACCESS_SECRET")?,
            refresh_secret: std::env::var("JWT_REFRESH_SECRET")?,
        };

        let mut allowed_origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
        ];
        if let Ok(origin) = std::env::var("ALLOWED_ORIGIN") {
            allowed_origins.push(origin);
        }

        Ok(Self {
            host,
            port,
            database_url,
            allowed_origins,
            jwt,
        })
    }
}
