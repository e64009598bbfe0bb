mod testcase;

#[cfg(test)]
mod exchange;
#[cfg(test)]
mod pull_request_disapproval;
#[cfg(test)]
mod repository_configuration;

pub use testcase::{db_test_case, db_test_case_pg};
