mod authorizer;
mod check_is_admin;

pub use authorizer::{can_transition, DenialReason, TransitionDecision};
pub use check_is_admin::CheckIsAdmin;
