use crate::Username;

/// Placeholder stored as disapprover when no disapproval is set.
pub const NO_DISAPPROVER: &str = "none";

/// Disapproval mark of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisapprovalState {
    /// No disapproval set.
    #[default]
    NotDisapproved,
    /// Disapproval set by a user.
    Disapproved {
        /// User who set the mark.
        by: Username,
    },
}

/// Requested change on a disapproval mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisapprovalChange {
    /// Set the mark on behalf of a user.
    Set { by: Username },
    /// Clear the mark.
    Clear,
}

impl DisapprovalState {
    pub fn is_disapproved(&self) -> bool {
        matches!(self, Self::Disapproved { .. })
    }

    /// Disapprover username, or the placeholder.
    pub fn disapproved_by(&self) -> &str {
        match self {
            Self::NotDisapproved => NO_DISAPPROVER,
            Self::Disapproved { by } => by.as_str(),
        }
    }

    pub fn disapprover(&self) -> Option<&Username> {
        match self {
            Self::NotDisapproved => None,
            Self::Disapproved { by } => Some(by),
        }
    }

    /// Compute the state resulting from a change.
    ///
    /// Returns `None` when the change would leave the mark as it is.
    pub fn apply(&self, change: &DisapprovalChange) -> Option<DisapprovalState> {
        match (self, change) {
            (Self::NotDisapproved, DisapprovalChange::Set { by }) => {
                Some(Self::Disapproved { by: by.clone() })
            }
            (Self::Disapproved { .. }, DisapprovalChange::Clear) => Some(Self::NotDisapproved),
            (Self::Disapproved { .. }, DisapprovalChange::Set { .. })
            | (Self::NotDisapproved, DisapprovalChange::Clear) => None,
        }
    }
}
