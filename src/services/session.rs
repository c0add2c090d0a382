//! Admin session management.
//!
//! TRADE-OFFS
//! ==========
//! The login gate is a single configured username/password pair, not an
//! identity system; it exists to keep the admin surface off the public
//! internet, nothing more. What it grants, though, is a server-verified
//! session token rather than a client-side flag, so possession of the
//! cookie is checked on every admin request.

use std::fmt::Write;

use rand::Rng;
use sqlx::PgPool;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// The configured admin login pair.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into()),
        }
    }

    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// True when running on the out-of-the-box admin/admin pair.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.username == DEFAULT_ADMIN_USERNAME && self.password == DEFAULT_ADMIN_PASSWORD
    }
}

/// Create an admin session, returning the token.
pub async fn create_session(pool: &PgPool) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO admin_sessions (token) VALUES ($1)")
        .bind(&token)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Check whether a session token is present and unexpired.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM admin_sessions WHERE token = $1 AND expires_at > now()")
        .bind(token)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
