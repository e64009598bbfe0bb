use disapprove_config::Config;
use disapprove_database_interface::DbService;
use disapprove_host_interface::HostService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub host_service: &'a (dyn HostService + 'a),
    pub db_service: &'a (dyn DbService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use disapprove_config::Config;
    use disapprove_database_interface::MockDbService;
    use disapprove_database_memory::MemoryDb;
    use disapprove_host_interface::MockHostService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub host_service: MockHostService,
        pub db_service: MemoryDb,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                host_service: MockHostService::new(),
                db_service: MemoryDb::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                host_service: &self.host_service,
                db_service: &self.db_service,
            }
        }
    }

    /// Same as [`CoreContextTest`], with a mocked store.
    #[allow(dead_code)]
    pub struct CoreContextMockDbTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub host_service: MockHostService,
        pub db_service: MockDbService,
    }

    impl CoreContextMockDbTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                host_service: MockHostService::new(),
                db_service: MockDbService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                host_service: &self.host_service,
                db_service: &self.db_service,
            }
        }
    }
}
