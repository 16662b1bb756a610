//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use pfetrack_domain::role::{Role, RoleSet};

/// Principal identity injected by the gateway via `x-pfetrack-user-id` and
/// `x-pfetrack-user-roles` headers.
///
/// The roles header is a comma-separated list of role names. An absent or
/// unparseable header rejects with 401; role enforcement (403) belongs to the
/// handlers and the authorization policy, after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub roles: RoleSet,
}

impl IdentityHeaders {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously, return a 'static async block, to avoid the E0195
    // lifetime-capture mismatch under Rust 1.82+ precise capturing.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-pfetrack-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let roles = parts
            .headers
            .get("x-pfetrack-user-roles")
            .and_then(|v| v.to_str().ok())
            .and_then(RoleSet::parse);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let roles = roles.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id, roles })
        }
    }
}
