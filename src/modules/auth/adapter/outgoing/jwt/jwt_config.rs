use anyhow::{bail, Context};

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret_key: String, issuer: String, access_token_expiry: i64) -> anyhow::Result<Self> {
        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            bail!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256");
        }

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            bail!("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY} seconds");
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }

    /// Load JWT configuration through `get`, normally an environment lookup
    pub fn from_source<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = get("JWT_SECRET").context("JWT_SECRET must be set")?;

        let access_token_expiry = get("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|| "28800".to_string()) // 8 hours
            .parse::<i64>()
            .context("Invalid JWT_ACCESS_EXPIRY value")?;

        let issuer = get("JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string());

        Self::new(secret_key, issuer, access_token_expiry)
    }
}
