pub mod auth;
pub mod comments;
pub mod disapprovals;
pub mod pulls;
pub mod repositories;
