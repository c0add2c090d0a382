//! Contact form service — append-only submissions.

use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Presence check mirroring the public form: subject is the only
/// optional field.
///
/// # Errors
///
/// Returns `MissingField` for the first blank required field.
pub fn validate(submission: &ContactSubmission) -> Result<(), ContactError> {
    if submission.name.trim().is_empty() {
        return Err(ContactError::MissingField("name"));
    }
    if submission.email.trim().is_empty() {
        return Err(ContactError::MissingField("email"));
    }
    if submission.message.trim().is_empty() {
        return Err(ContactError::MissingField("message"));
    }
    Ok(())
}

/// Validate and append one submission. Submissions are never read back
/// through this API; the table is a drop box.
///
/// # Errors
///
/// Returns `MissingField` before any database call, or a database error
/// if the insert fails.
pub async fn submit(pool: &PgPool, submission: &ContactSubmission) -> Result<(), ContactError> {
    validate(submission)?;
    sqlx::query("INSERT INTO contact_form (name, email, subject, message) VALUES ($1, $2, $3, $4)")
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.subject)
        .bind(&submission.message)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
