use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::error::SiteError;

pub fn hash_password(plain: &str) -> Result<String, SiteError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .inspect_err(|e| error!(error = %e, "argon2 hash_password error"))?
        .to_string();
    Ok(hash)
}

/// Argon2 verification compares digests in constant time.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, SiteError> {
    let parsed = PasswordHash::new(hash)
        .inspect_err(|e| error!(error = %e, "argon2 parse hash error"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
