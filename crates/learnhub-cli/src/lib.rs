//! Administrative operations behind the `learnhub-cli` binary.
//!
//! Kept separate from argument parsing and prompting so they can run
//! against any [`UserDirectory`].

use anyhow::{Context, Result};
use learnhub_auth::{Role, SignedTokenCodec};
use learnhub_core::hash_password;
use learnhub_db::{NewUser, UserDirectory, UserRecord};
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub async fn create_user(
    directory: &dyn UserDirectory,
    email: &str,
    name: &str,
    role: Role,
    password: &str,
) -> Result<UserRecord> {
    if password.len() < MIN_PASSWORD_LENGTH {
        anyhow::bail!("password must be at least {MIN_PASSWORD_LENGTH} characters");
    }

    let password_hash = hash_password(password).map_err(|e| e.error)?;

    let user = directory
        .create_user(NewUser {
            email: email.to_string(),
            name: name.to_string(),
            role,
            password_hash,
        })
        .await
        .context("failed to create user")?;

    Ok(user)
}

/// Mints a session token without a login, for debugging and scripted
/// access. The token is indistinguishable from one issued by the server.
pub fn issue_token(
    codec: &SignedTokenCodec,
    subject: Uuid,
    email: &str,
    role: Role,
    ttl_seconds: i64,
) -> Result<String> {
    codec
        .issue(subject, email, role, ttl_seconds)
        .context("failed to issue token")
}

/// Human-readable verification report. Unlike the HTTP surface, this names
/// the exact reason a token was rejected.
pub fn describe_token(codec: &SignedTokenCodec, token: &str) -> String {
    match codec.verify(token.trim()) {
        Ok(user) => format!("valid: {} <{}> role={}", user.id, user.email, user.role),
        Err(e) => format!("invalid ({}): {}", e.kind(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_config::JwtConfig;
    use learnhub_db::InMemoryUserDirectory;

    fn codec() -> SignedTokenCodec {
        let config = JwtConfig::new("cli-test-secret-that-is-long-enough-1234", 3600).unwrap();
        SignedTokenCodec::new(&config)
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let directory = InMemoryUserDirectory::new();
        let user = create_user(&directory, "Ada@Example.com", "Ada", Role::Admin, "s3cret-pass")
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role, Role::Admin);

        let credentials = directory
            .find_credentials_by_email("ada@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(credentials.password_hash, "s3cret-pass");
    }

    #[tokio::test]
    async fn test_create_user_rejects_short_password() {
        let directory = InMemoryUserDirectory::new();
        let err = create_user(&directory, "a@example.com", "A", Role::Student, "short")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at least"));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let directory = InMemoryUserDirectory::new();
        create_user(&directory, "dup@example.com", "One", Role::Student, "password-1")
            .await
            .unwrap();
        assert!(
            create_user(&directory, "DUP@example.com", "Two", Role::Student, "password-2")
                .await
                .is_err()
        );
    }

    #[test]
    fn test_issue_then_describe() {
        let codec = codec();
        let id = Uuid::new_v4();
        let token = issue_token(&codec, id, "s@example.com", Role::Student, 600).unwrap();

        let report = describe_token(&codec, &token);
        assert!(report.starts_with("valid:"));
        assert!(report.contains(&id.to_string()));
        assert!(report.contains("role=student"));
    }

    #[test]
    fn test_issue_token_with_oversized_ttl_fails() {
        let err = issue_token(&codec(), Uuid::new_v4(), "s@example.com", Role::Student, i64::MAX)
            .unwrap_err();
        assert!(err.to_string().contains("failed to issue token"));
    }

    #[test]
    fn test_describe_names_rejection_reason() {
        let codec = codec();
        let token = issue_token(&codec, Uuid::new_v4(), "s@example.com", Role::Student, 0).unwrap();
        assert!(describe_token(&codec, &token).starts_with("invalid (expired)"));
        assert!(describe_token(&codec, "nope").starts_with("invalid (malformed)"));
    }
}
