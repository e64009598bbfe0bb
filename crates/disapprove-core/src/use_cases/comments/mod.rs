mod audit_comments;
pub(crate) mod post_audit_comment;

pub use audit_comments::{disapproval_comment, disapproval_removed_comment};
#[cfg(any(test, feature = "testkit"))]
pub use post_audit_comment::MockPostAuditCommentInterface;
pub use post_audit_comment::PostAuditCommentInterface;
