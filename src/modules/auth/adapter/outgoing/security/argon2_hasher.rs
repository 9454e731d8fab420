use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

/// Argon2id hasher for the admin credential. Runs on the blocking pool so a
/// login never stalls the actix workers.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    /// 4 MiB, 3 passes, 1 lane
    pub fn new() -> Self {
        let params = Params::new(4 * 1024, 3, 1, None).unwrap_or_default();

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

async fn blocking<T, F>(work: F) -> Result<T, HashError>
where
    F: FnOnce() -> Result<T, HashError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|_| HashError::TaskFailed)?
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|phc| phc.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
    }

    /// Cost parameters are read from the PHC string, so hashes produced by
    /// other tools with different settings still verify.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let hash = hash.to_owned();

        blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
    }
}
