//! Hero profile service — the singleton landing-section row.
//!
//! Exactly one row is expected (id pinned to 1 by the schema). Saving is
//! always an upsert so a fresh deployment can write the first row through
//! the same path.

use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum HeroError {
    #[error("hero profile not configured")]
    Missing,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeroProfile {
    pub name: String,
    /// Rotating taglines; entered one per line in the admin form.
    pub roles: Vec<String>,
    pub description: String,
    pub linkedin_url: String,
    pub email: String,
    pub resume_url: String,
    pub profile_image_url: String,
}

/// Fetch the singleton hero row.
///
/// # Errors
///
/// Returns `Missing` when the row has never been written.
pub async fn fetch_hero(pool: &PgPool) -> Result<HeroProfile, HeroError> {
    let row = sqlx::query_as::<_, (String, Vec<String>, String, String, String, String, String)>(
        "SELECT name, roles, description, linkedin_url, email, resume_url, profile_image_url
         FROM hero WHERE id = 1",
    )
    .fetch_optional(pool)
    .await?
    .ok_or(HeroError::Missing)?;

    Ok(HeroProfile {
        name: row.0,
        roles: row.1,
        description: row.2,
        linkedin_url: row.3,
        email: row.4,
        resume_url: row.5,
        profile_image_url: row.6,
    })
}

/// Write the singleton hero row, creating it if absent.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn upsert_hero(pool: &PgPool, hero: &HeroProfile) -> Result<(), HeroError> {
    sqlx::query(
        "INSERT INTO hero (id, name, roles, description, linkedin_url, email, resume_url, profile_image_url)
         VALUES (1, $1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (id) DO UPDATE SET
             name = EXCLUDED.name, roles = EXCLUDED.roles, description = EXCLUDED.description,
             linkedin_url = EXCLUDED.linkedin_url, email = EXCLUDED.email,
             resume_url = EXCLUDED.resume_url, profile_image_url = EXCLUDED.profile_image_url",
    )
    .bind(&hero.name)
    .bind(&hero.roles)
    .bind(&hero.description)
    .bind(&hero.linkedin_url)
    .bind(&hero.email)
    .bind(&hero.resume_url)
    .bind(&hero.profile_image_url)
    .execute(pool)
    .await?;
    Ok(())
}

/// Split the admin form's one-role-per-line text into a role list.
#[must_use]
pub fn split_roles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "hero_test.rs"]
mod tests;
