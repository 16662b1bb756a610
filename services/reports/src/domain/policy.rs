//! Shared authorization predicate for report access.
//!
//! Every operation states its requirement as a [`Relationship`] instead of
//! an ad-hoc conditional, so the access rules live in one place. The upload
//! operation deliberately passes only the ownership requirement and no draft
//! gate; that asymmetry is visible at its call site rather than buried here.

use uuid::Uuid;

use pfetrack_auth_types::identity::IdentityHeaders;
use pfetrack_domain::role::{Role, RoleSet};

use crate::domain::types::Report;
use crate::error::ReportsServiceError;

/// Who the caller must be, relative to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// The caller must own the report.
    Owner,
    /// Callers whose role set contains Student must own the report; any
    /// other role may access it.
    OwnerIfStudent,
}

/// Authenticated caller identity.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub roles: RoleSet,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}

impl From<IdentityHeaders> for Principal {
    fn from(identity: IdentityHeaders) -> Self {
        Self {
            user_id: identity.user_id,
            roles: identity.roles,
        }
    }
}

/// Check the caller's relationship to a report.
///
/// Callers must establish existence first: a missing report is NotFound, not
/// Forbidden, so this runs only on a loaded record.
pub fn authorize(
    principal: &Principal,
    report: &Report,
    relationship: Relationship,
) -> Result<(), ReportsServiceError> {
    let owns = report.student_id == principal.user_id;
    let allowed = match relationship {
        Relationship::Owner => owns,
        Relationship::OwnerIfStudent => owns || !principal.has_role(Role::Student),
    };
    if allowed {
        Ok(())
    } else {
        Err(ReportsServiceError::Forbidden)
    }
}

/// Gate for operations only valid while the report is a draft.
pub fn require_draft(report: &Report) -> Result<(), ReportsServiceError> {
    if report.status.is_draft() {
        Ok(())
    } else {
        Err(ReportsServiceError::NotDraft)
    }
}

/// Endpoint-level role requirement.
pub fn require_role(roles: &RoleSet, role: Role) -> Result<(), ReportsServiceError> {
    if roles.contains(role) {
        Ok(())
    } else {
        Err(ReportsServiceError::Forbidden)
    }
}

/// Endpoint-level requirement for any of the given roles.
pub fn require_any_role(roles: &RoleSet, allowed: &[Role]) -> Result<(), ReportsServiceError> {
    if allowed.iter().any(|role| roles.contains(*role)) {
        Ok(())
    } else {
        Err(ReportsServiceError::Forbidden)
    }
}
