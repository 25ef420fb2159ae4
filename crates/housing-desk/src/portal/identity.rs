//! Caller identity read from gateway-stamped request headers.
//!
//! The portal sits behind an authenticating gateway that verifies the session
//! and forwards the caller's id and role as plain headers. Handlers resolve
//! the identity up front and reject the request before touching the ledger.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::applications::domain::UserId;

pub const USER_HEADER: &str = "x-user-id";
pub const ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub role: Role,
}

impl Identity {
    /// Reads the identity headers stamped on the request by the gateway.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, IdentityError> {
        let user = headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(IdentityError::MissingUser)?;
        let role_token = headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(IdentityError::MissingRole)?;
        let role = Role::parse(role_token)
            .ok_or_else(|| IdentityError::UnknownRole(role_token.trim().to_string()))?;

        Ok(Identity {
            user_id: UserId(user.to_string()),
            role,
        })
    }

    /// Rejects callers whose role does not match the endpoint's requirement.
    pub fn require(&self, role: Role) -> Result<(), IdentityError> {
        if self.role == role {
            Ok(())
        } else {
            Err(IdentityError::Forbidden(role.label()))
        }
    }
}

/// Resolves the caller and enforces the endpoint's role in one step.
pub fn require_role(headers: &HeaderMap, role: Role) -> Result<Identity, IdentityError> {
    let identity = Identity::from_headers(headers)?;
    identity.require(role)?;
    Ok(identity)
}

#[derive(Debug, PartialEq, Eq)]
pub enum IdentityError {
    MissingUser,
    MissingRole,
    UnknownRole(String),
    Forbidden(&'static str),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            IdentityError::MissingUser => (
                StatusCode::UNAUTHORIZED,
                format!("missing {USER_HEADER} header"),
            ),
            IdentityError::MissingRole => (
                StatusCode::UNAUTHORIZED,
                format!("missing {ROLE_HEADER} header"),
            ),
            IdentityError::UnknownRole(token) => (
                StatusCode::UNAUTHORIZED,
                format!("unknown role '{token}'"),
            ),
            IdentityError::Forbidden(required) => (
                StatusCode::FORBIDDEN,
                format!("this endpoint requires the {required} role"),
            ),
        };
        let payload = json!({
            "error": message,
        });
        (status, axum::Json(payload)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(user: &'static str, role: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static(user));
        headers.insert(ROLE_HEADER, HeaderValue::from_static(role));
        headers
    }

    #[test]
    fn resolves_student_identity() {
        let identity = Identity::from_headers(&headers("stu-401", "student")).expect("identity");
        assert_eq!(identity.user_id, UserId("stu-401".to_string()));
        assert_eq!(identity.role, Role::Student);
    }

    #[test]
    fn role_tokens_are_case_insensitive() {
        let identity = Identity::from_headers(&headers("ops-1", " Admin ")).expect("identity");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn missing_user_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("student"));
        assert_eq!(
            Identity::from_headers(&headers),
            Err(IdentityError::MissingUser)
        );
    }

    #[test]
    fn blank_user_header_is_rejected() {
        assert_eq!(
            Identity::from_headers(&headers("   ", "student")),
            Err(IdentityError::MissingUser)
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            Identity::from_headers(&headers("stu-401", "janitor")),
            Err(IdentityError::UnknownRole("janitor".to_string()))
        );
    }

    #[test]
    fn require_enforces_role_match() {
        let identity = Identity::from_headers(&headers("stu-401", "student")).expect("identity");
        assert!(identity.require(Role::Student).is_ok());
        assert_eq!(
            identity.require(Role::Admin),
            Err(IdentityError::Forbidden("admin"))
        );
    }
}
