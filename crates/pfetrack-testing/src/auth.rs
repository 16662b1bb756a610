//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive `x-pfetrack-user-id` +
//! `x-pfetrack-user-roles` headers injected by the gateway. In tests,
//! [`MockAuth`] fabricates these headers directly so no real gateway or
//! session is needed.

use http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use pfetrack_domain::role::{Role, RoleSet};

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub roles: RoleSet,
}

impl MockAuth {
    pub fn new(user_id: Uuid, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            user_id,
            roles: RoleSet::new(roles),
        }
    }

    /// A fresh student principal.
    pub fn student() -> Self {
        Self::new(Uuid::new_v4(), [Role::Student])
    }

    /// A fresh supervisor principal.
    pub fn supervisor() -> Self {
        Self::new(Uuid::new_v4(), [Role::Supervisor])
    }

    /// A fresh admin principal.
    pub fn admin() -> Self {
        Self::new(Uuid::new_v4(), [Role::Admin])
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-pfetrack-user-id"),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static("x-pfetrack-user-roles"),
            HeaderValue::from_str(&self.roles.to_header_value()).unwrap(),
        );
        map
    }
}
