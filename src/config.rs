use std::env;

/// Process configuration, loaded once from the environment at startup.
/// Site copy does not live here; it is persisted per slug and edited at
/// runtime through the admin API.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_allow_origin: String,
    /// Admin credentials for the Basic gate. Leaving either unset blocks
    /// the whole admin surface.
    pub admin_user: Option<String>,
    pub admin_pass: Option<String>,
    /// Directory uploaded images are written to.
    pub upload_dir: String,
    /// Prefix joined onto stored object paths to build public URLs.
    pub public_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?;

        Ok(AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url,
            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            admin_user: env::var("ADMIN_USER").ok().filter(|v| !v.is_empty()),
            admin_pass: env::var("ADMIN_PASS").ok().filter(|v| !v.is_empty()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            public_url: env::var("PUBLIC_URL").unwrap_or_else(|_| "/uploads".to_string()),
        })
    }
}
