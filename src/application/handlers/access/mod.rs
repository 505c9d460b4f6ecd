//! Identity and role checks run before guarded handlers.

mod guards;
mod resolve_role;

pub use guards::{authenticate, bearer_token, require_role, FORBIDDEN_MESSAGE, UNAUTHORIZED_MESSAGE};
pub use resolve_role::ResolveRoleHandler;
