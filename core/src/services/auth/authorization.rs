//! Role-based authorization predicate
//!
//! Authorization is an explicit function over validated claims, evaluated
//! per route by the caller. No attribute or reflection machinery.

use crate::domain::entities::role::Role;
use crate::domain::entities::token::Claims;

/// Check whether validated claims carry the given role
///
/// # Example
///
/// ```
/// use sd_core::domain::entities::{role::Role, token::Claims};
/// use sd_core::services::auth::requires_role;
/// use uuid::Uuid;
///
/// let claims = Claims::new_access_token(
///     Uuid::new_v4(),
///     "a@x.com",
///     vec!["USER".to_string()],
///     "staffdesk",
///     "staffdesk-api",
///     30,
/// );
/// assert!(requires_role(&claims, Role::User));
/// assert!(!requires_role(&claims, Role::Admin));
/// ```
pub fn requires_role(claims: &Claims, role: Role) -> bool {
    claims.has_role(role.as_str())
}
