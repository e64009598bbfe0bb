use disapprove_host_interface::types::UserPermission;
use disapprove_models::{DisapprovalChange, DisapprovalState, PullRequestHandle, Username};

use crate::errors::AuthorizationError;

/// Outcome of a transition authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionDecision {
    Allowed(DisapprovalChange),
    Denied(DenialReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Mark is already set.
    AlreadyDisapproved,
    /// Nothing to clear.
    NotDisapproved,
    /// Setting the mark needs read permission.
    MissingReadPermission,
    /// Clearing the mark is reserved to its author and repository admins.
    NotDisapproverOrAdmin,
}

impl DenialReason {
    /// A no-op request is not an error for the caller.
    pub fn is_no_op(self) -> bool {
        matches!(self, Self::AlreadyDisapproved | Self::NotDisapproved)
    }

    /// Convert a non no-op denial to an authorization error.
    pub fn to_error(
        self,
        handle: PullRequestHandle,
        acting_user: &Username,
    ) -> Option<AuthorizationError> {
        match self {
            Self::AlreadyDisapproved | Self::NotDisapproved => None,
            Self::MissingReadPermission => Some(AuthorizationError::MissingPermission {
                username: acting_user.to_string(),
                repository_id: handle.repository_id(),
                permission: UserPermission::Read,
            }),
            Self::NotDisapproverOrAdmin => Some(AuthorizationError::NotDisapproverOrAdmin {
                username: acting_user.to_string(),
                handle,
            }),
        }
    }
}

impl TransitionDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

/// Decide whether `acting_user` may move the mark from `current` to `requested_disapproved`.
///
/// Setting needs read permission. Clearing needs to be the user who set the mark
/// (case-insensitive) or a repository admin.
pub fn can_transition(
    current: &DisapprovalState,
    requested_disapproved: bool,
    acting_user: &Username,
    permission: UserPermission,
) -> TransitionDecision {
    match (current, requested_disapproved) {
        (DisapprovalState::Disapproved { .. }, true) => {
            TransitionDecision::Denied(DenialReason::AlreadyDisapproved)
        }
        (DisapprovalState::NotDisapproved, false) => {
            TransitionDecision::Denied(DenialReason::NotDisapproved)
        }
        (DisapprovalState::NotDisapproved, true) => {
            if permission.can_read() {
                TransitionDecision::Allowed(DisapprovalChange::Set {
                    by: acting_user.clone(),
                })
            } else {
                TransitionDecision::Denied(DenialReason::MissingReadPermission)
            }
        }
        (DisapprovalState::Disapproved { by }, false) => {
            if by.is_same_user(acting_user) || permission.is_admin() {
                TransitionDecision::Allowed(DisapprovalChange::Clear)
            } else {
                TransitionDecision::Denied(DenialReason::NotDisapproverOrAdmin)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    fn disapproved_by(name: &str) -> DisapprovalState {
        DisapprovalState::Disapproved { by: user(name) }
    }

    #[test]
    fn set_needs_read_permission() {
        assert_eq!(
            can_transition(
                &DisapprovalState::NotDisapproved,
                true,
                &user("bob"),
                UserPermission::Read
            ),
            TransitionDecision::Allowed(DisapprovalChange::Set { by: user("bob") })
        );
        assert_eq!(
            can_transition(
                &DisapprovalState::NotDisapproved,
                true,
                &user("bob"),
                UserPermission::None
            ),
            TransitionDecision::Denied(DenialReason::MissingReadPermission)
        );
    }

    #[test]
    fn redundant_requests_are_no_ops() {
        for permission in [UserPermission::Admin, UserPermission::None] {
            let decision = can_transition(&disapproved_by("alice"), true, &user("alice"), permission);
            assert_eq!(
                decision,
                TransitionDecision::Denied(DenialReason::AlreadyDisapproved)
            );

            let decision =
                can_transition(&DisapprovalState::NotDisapproved, false, &user("alice"), permission);
            assert_eq!(decision, TransitionDecision::Denied(DenialReason::NotDisapproved));
        }

        assert!(DenialReason::AlreadyDisapproved.is_no_op());
        assert!(DenialReason::NotDisapproved.is_no_op());
        assert!(!DenialReason::MissingReadPermission.is_no_op());
        assert!(!DenialReason::NotDisapproverOrAdmin.is_no_op());
    }

    #[test]
    fn clear_by_setter() {
        // Even without any permission left on the repository.
        assert_eq!(
            can_transition(&disapproved_by("alice"), false, &user("Alice"), UserPermission::None),
            TransitionDecision::Allowed(DisapprovalChange::Clear)
        );
    }

    #[test]
    fn clear_by_admin() {
        assert_eq!(
            can_transition(&disapproved_by("alice"), false, &user("carol"), UserPermission::Admin),
            TransitionDecision::Allowed(DisapprovalChange::Clear)
        );
    }

    #[test]
    fn clear_by_other_user() {
        for permission in [UserPermission::Write, UserPermission::Read] {
            assert_eq!(
                can_transition(&disapproved_by("alice"), false, &user("bob"), permission),
                TransitionDecision::Denied(DenialReason::NotDisapproverOrAdmin)
            );
        }
    }

    #[test]
    fn denial_errors() {
        let handle = PullRequestHandle::new(1, 2);
        assert_eq!(
            DenialReason::NotDisapproverOrAdmin.to_error(handle, &user("bob")),
            Some(AuthorizationError::NotDisapproverOrAdmin {
                username: "bob".into(),
                handle
            })
        );
        assert_eq!(
            DenialReason::MissingReadPermission.to_error(handle, &user("bob")),
            Some(AuthorizationError::MissingPermission {
                username: "bob".into(),
                repository_id: 1,
                permission: UserPermission::Read
            })
        );
        assert_eq!(DenialReason::NotDisapproved.to_error(handle, &user("bob")), None);
    }
}
