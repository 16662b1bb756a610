//! Principal roles.

use serde::{Deserialize, Serialize};

/// A role granted to an authenticated principal.
///
/// Wire format: lowercase name (`"student"`, `"supervisor"`, `"admin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Supervisor,
    Admin,
}

impl Role {
    /// Parse from the wire name. Returns `None` for unknown names.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Self::Student),
            "supervisor" => Some(Self::Supervisor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        }
    }
}

/// The set of roles attached to a principal.
///
/// A principal carries at least one role; a set may combine roles
/// (e.g. a supervisor who is also an admin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    /// Build a set from roles, dropping duplicates. Order is not significant.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut inner: Vec<Role> = Vec::new();
        for role in roles {
            if !inner.contains(&role) {
                inner.push(role);
            }
        }
        Self(inner)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    /// Parse a comma-separated role list (`"student,supervisor"`).
    ///
    /// Returns `None` if the list is empty or contains an unknown name.
    pub fn parse(s: &str) -> Option<Self> {
        let mut roles = Vec::new();
        for part in s.split(',') {
            roles.push(Role::from_str_name(part.trim())?);
        }
        if roles.is_empty() {
            return None;
        }
        Some(Self::new(roles))
    }

    /// Comma-separated wire form, the inverse of [`RoleSet::parse`].
    pub fn to_header_value(&self) -> String {
        self.0
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
