//! Session identity for the signed-in user.
//!
//! The session is a plain value constructed from a successful auth call and
//! passed explicitly to whatever needs it - there is no ambient global
//! store. Dropping the value is logging out.

use crate::api::AuthGrant;
use crate::entities::{Role, UserProfile};

/// The signed-in user's identity.
#[derive(Clone, Debug)]
pub struct Session {
    user: UserProfile,
}

impl Session {
    /// Wraps a profile in a session.
    #[must_use]
    pub const fn new(user: UserProfile) -> Self {
        Self { user }
    }

    /// Builds a session from a successful login or registration.
    #[must_use]
    pub fn from_grant(grant: AuthGrant) -> Self {
        Self::new(grant.profile)
    }

    /// The full profile.
    #[must_use]
    pub const fn user(&self) -> &UserProfile {
        &self.user
    }

    /// The email identifying this user everywhere in the backend.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Display name for greetings.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.user.full_name
    }

    /// The user's marketplace role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }

    /// Whether this user lists products.
    #[must_use]
    pub const fn is_seller(&self) -> bool {
        matches!(self.user.role, Role::Seller)
    }

    /// Whether this user places orders.
    #[must_use]
    pub const fn is_buyer(&self) -> bool {
        matches!(self.user.role, Role::Buyer)
    }

    /// Landing route for this role, matching what the backend suggests.
    #[must_use]
    pub const fn landing_route(&self) -> &'static str {
        match self.user.role {
            Role::Buyer => "/buyer",
            Role::Seller => "/seller",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_profile;

    #[test]
    fn test_session_exposes_identity() {
        let session = Session::new(test_profile("budi@kampus.ac.id", "Budi Santoso", Role::Seller));
        assert_eq!(session.email(), "budi@kampus.ac.id");
        assert_eq!(session.display_name(), "Budi Santoso");
        assert!(session.is_seller());
        assert!(!session.is_buyer());
        assert_eq!(session.landing_route(), "/seller");
    }

    #[test]
    fn test_buyer_lands_on_buyer_route() {
        let session = Session::new(test_profile("sari@kampus.ac.id", "Sari", Role::Buyer));
        assert!(session.is_buyer());
        assert_eq!(session.landing_route(), "/buyer");
    }

    #[test]
    fn test_session_from_grant() {
        let grant = AuthGrant {
            profile: test_profile("sari@kampus.ac.id", "Sari", Role::Buyer),
            redirect: Some("/buyer".to_string()),
        };
        let session = Session::from_grant(grant);
        assert_eq!(session.email(), "sari@kampus.ac.id");
    }
}
