pub(crate) mod get_or_create_repository_configuration;
pub(crate) mod get_repository_configuration;
pub(crate) mod update_repository_configuration;

pub use get_or_create_repository_configuration::GetOrCreateRepositoryConfigurationInterface;
pub use get_repository_configuration::GetRepositoryConfigurationInterface;
pub use update_repository_configuration::UpdateRepositoryConfigurationInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    get_or_create_repository_configuration::MockGetOrCreateRepositoryConfigurationInterface,
    get_repository_configuration::MockGetRepositoryConfigurationInterface,
    update_repository_configuration::MockUpdateRepositoryConfigurationInterface,
};
