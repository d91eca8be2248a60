mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::LoggingDriver;

use ormlet::{db::Connect, Db};

/// Open a fresh in-memory database.
pub async fn setup() -> Db {
    init_logging();
    Db::connect("sqlite::memory:").await.unwrap()
}

/// Open a fresh in-memory database whose connection records every
/// operation it runs.
pub async fn setup_logged() -> (Db, ExecLog) {
    init_logging();

    let driver = LoggingDriver::new(Box::new(Connect::new("sqlite::memory:").unwrap()));
    let log = ExecLog::new(driver.ops_log_handle());
    let db = Db::builder().build(driver).await.unwrap();

    (db, log)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
