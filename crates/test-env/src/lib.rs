use anyhow::Context as _;
use migration::MigratorTrait as _;
use sea_orm::{ConnectOptions, DbConn};
use tracing_subscriber::fmt::TestWriter;

/// The URL of a private SQLite database living in memory.
const IN_MEMORY_DB_URL: &str = "sqlite::memory:";

pub trait IntoResult {
    type Out;

    fn into_result(self) -> anyhow::Result<Self::Out>;
}

impl IntoResult for () {
    type Out = ();

    fn into_result(self) -> anyhow::Result<Self::Out> {
        Ok(())
    }
}

impl<T, E> IntoResult for Result<T, E>
where
    anyhow::Error: From<E>,
{
    type Out = T;

    fn into_result(self) -> anyhow::Result<Self::Out> {
        self.map_err(From::from)
    }
}

pub fn init_env() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(TestWriter::new())
        .try_init();

    Ok(())
}

/// Runs the provided test with a fresh, migrated database.
///
/// Every call gets its own database, which is dropped with its last connection once
/// the test returns.
pub async fn wrap<F, R>(test: F) -> anyhow::Result<<R as IntoResult>::Out>
where
    F: AsyncFnOnce(DbConn) -> R,
    R: IntoResult,
{
    init_env()?;

    // Each connection to an in-memory SQLite database opens a distinct database,
    // so the pool must keep exactly one connection alive.
    let mut options = ConnectOptions::new(IN_MEMORY_DB_URL);
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = sea_orm::Database::connect(options)
        .await
        .context("cannot open the in-memory database")?;
    tracing::debug!("Opened in-memory database");

    migration::Migrator::up(&db, None).await?;

    test(db).await.into_result()
}
