//! Authentication operations - register and login against the Users sheet.
//!
//! Validation mirrors the backend's account rules and runs before anything
//! is sent; messages are user-facing and shown verbatim.

use crate::api::ApiClient;
use crate::api::envelope::UserEnvelope;
use crate::entities::{NewUser, UserProfile};
use crate::errors::{Error, Result};

/// A successful authentication: the decoded profile plus the landing route
/// the backend suggests for the user's role.
#[derive(Clone, Debug)]
pub struct AuthGrant {
    /// The signed-in user's profile
    pub profile: UserProfile,
    /// Suggested landing route (`/buyer` or `/seller`)
    pub redirect: Option<String>,
}

impl ApiClient {
    /// Creates an account and signs the new user in.
    ///
    /// # Errors
    /// Returns a validation error for malformed input, or a backend error
    /// (e.g. "Email already exists") if the endpoint rejects the call.
    pub async fn register(&self, new_user: &NewUser) -> Result<AuthGrant> {
        validate_registration(new_user)?;
        let response = self.call(&UserEnvelope::register(new_user)).await.into_result()?;
        decode_grant(response)
    }

    /// Authenticates an existing account.
    ///
    /// # Errors
    /// Returns a validation error for empty input, or a backend error
    /// ("Email not found", "Invalid password") if authentication fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthGrant> {
        if !looks_like_email(email) {
            return Err(Error::Validation {
                message: "Email tidak valid".to_string(),
            });
        }
        if password.is_empty() {
            return Err(Error::Validation {
                message: "Password wajib diisi".to_string(),
            });
        }
        let response = self.call(&UserEnvelope::login(email, password)).await.into_result()?;
        decode_grant(response)
    }
}

fn decode_grant(response: crate::api::ApiResponse) -> Result<AuthGrant> {
    let data = response.data.ok_or_else(|| Error::Backend {
        message: "missing profile in auth response".to_string(),
    })?;
    let profile: UserProfile = serde_json::from_value(data).map_err(|e| Error::Backend {
        message: format!("unreadable profile in auth response: {e}"),
    })?;
    Ok(AuthGrant {
        profile,
        redirect: response.redirect,
    })
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn validate_registration(new_user: &NewUser) -> Result<()> {
    if !looks_like_email(&new_user.email) {
        return Err(Error::Validation {
            message: "Email tidak valid".to_string(),
        });
    }
    if new_user.password.len() < 6 {
        return Err(Error::Validation {
            message: "Password minimal 6 karakter".to_string(),
        });
    }
    if new_user.full_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Nama lengkap wajib diisi".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Role;

    fn valid_new_user() -> NewUser {
        NewUser {
            email: "budi@kampus.ac.id".to_string(),
            password: "rahasia123".to_string(),
            full_name: "Budi Santoso".to_string(),
            phone: None,
            department: None,
            role: Role::Seller,
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("budi@kampus.ac.id"));
        assert!(!looks_like_email("budi"));
        assert!(!looks_like_email("@kampus.ac.id"));
        assert!(!looks_like_email("budi@nodot"));
        assert!(!looks_like_email("budi@.start"));
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration(&valid_new_user()).is_ok());

        let mut bad_email = valid_new_user();
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(
            validate_registration(&bad_email).unwrap_err(),
            Error::Validation { .. }
        ));

        let mut short_password = valid_new_user();
        short_password.password = "12345".to_string();
        assert!(validate_registration(&short_password).is_err());

        let mut no_name = valid_new_user();
        no_name.full_name = "   ".to_string();
        assert!(validate_registration(&no_name).is_err());
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password_before_any_request() {
        // The URL is unreachable on purpose; validation must fail first.
        let client = ApiClient::new("http://127.0.0.1:9/exec");
        let err = client.login("budi@kampus.ac.id", "").await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_decode_grant_requires_profile_payload() {
        let response = crate::api::ApiResponse {
            success: true,
            ..crate::api::ApiResponse::default()
        };
        assert!(matches!(
            decode_grant(response).unwrap_err(),
            Error::Backend { .. }
        ));
    }
}
