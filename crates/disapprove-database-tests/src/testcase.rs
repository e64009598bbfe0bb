use std::sync::Arc;

use disapprove_config::Config;
use disapprove_database_interface::DbService;
use disapprove_database_memory::MemoryDb;
use disapprove_database_pg::{
    create_db_pool_connection, create_db_url, get_base_url, setup_test_db, teardown_test_db,
    PostgresDb,
};
use futures::Future;
use tracing::info;

/// Run a test block against every database driver.
///
/// The Postgres run is skipped when `DISAPPROVE_DATABASE_PG_URL` is not set.
pub async fn db_test_case<F, Fut>(test_name: &str, block: F)
where
    F: Fn(Arc<dyn DbService>) -> Fut,
    Fut: Future<Output = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>>,
{
    {
        // In memory
        let mem_db = Arc::new(MemoryDb::new());
        info!("running memory test {test_name} ...");
        block(mem_db).await.unwrap();
    }

    db_test_case_pg(test_name, block).await;
}

pub async fn db_test_case_pg<F, Fut>(test_name: &str, block: F)
where
    F: Fn(Arc<dyn DbService>) -> Fut,
    Fut: Future<Output = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>>,
{
    let mut config = Config::from_env_no_version();
    if config.database.pg.url.is_empty() {
        info!("skipping postgres test {test_name}, no database URL");
        return;
    }

    let full_name = format!("test-disapprove-{test_name}");
    let base_url = get_base_url(&config.database.pg.url);
    let new_url = create_db_url(&base_url, &full_name);
    config.database.pg.url.clone_from(&new_url);
    config.database.pg.pool_size = 8;
    config.database.pg.connection_timeout = 5;

    {
        // Postgres
        setup_test_db(&base_url, &full_name).await;

        let pool = create_db_pool_connection(&config, &base_url, &full_name).await;
        let pg_db = Arc::new(PostgresDb::new(pool));
        info!("running postgres test {full_name} ...");
        block(pg_db).await.unwrap();

        teardown_test_db(&base_url, &full_name).await;
    }
}
