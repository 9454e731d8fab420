use anyhow::{bail, Context, Result};

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/portfolio.db?mode=rwc";

/// How the admin password is supplied. A plain password is hashed once at
/// startup and then dropped.
#[derive(Clone)]
pub enum AdminPassword {
    Plain(String),
    Hash(String),
}

impl std::fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminPassword::Plain(_) => f.write_str("Plain(<redacted>)"),
            AdminPassword::Hash(_) => f.write_str("Hash(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub admin_email: String,
    pub admin_password: AdminPassword,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_env_files() {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_email = get("ADMIN_EMAIL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .context("Required environment variable 'ADMIN_EMAIL' is not set")?;

        if !email_address::EmailAddress::is_valid(&admin_email) {
            bail!("ADMIN_EMAIL is not a valid email address");
        }

        let admin_password = match (get("ADMIN_PASSWORD_HASH"), get("ADMIN_PASSWORD")) {
            (Some(hash), _) if !hash.trim().is_empty() => AdminPassword::Hash(hash.trim().to_string()),
            (_, Some(plain)) if !plain.is_empty() => AdminPassword::Plain(plain),
            _ => bail!("Either ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set"),
        };

        Ok(Self {
            environment: get("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            admin_email,
            admin_password,
            jwt: JwtConfig::from_source(&get)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
