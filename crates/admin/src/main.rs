use clap::Parser;
use conference_lib::{Database, DbEnv};
use migration::MigratorTrait as _;
use mkenv::prelude::*;

use self::{delete::DeleteCommand, populate::PopulateCommand};

mod delete;
mod populate;

#[derive(clap::Parser)]
enum Command {
    /// Loads events, sessions and speakers from a JSON fixture.
    Populate(PopulateCommand),
    /// Deletes a row along with the rows it owns.
    #[clap(subcommand)]
    Delete(DeleteCommand),
}

mkenv::make_config! {
    struct Env {
        db_env: { DbEnv },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err.into()),
        _ => (),
    }
    tracing_subscriber::fmt()
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("unable to init tracing_subscriber: {e}"))?;
    let env = Env::define();
    env.init();

    let db = Database::from_db_url(env.db_env.db_url.get()).await?;
    migration::Migrator::up(&db.sql_conn, None).await?;

    let cmd = Command::parse();

    match cmd {
        Command::Populate(cmd) => populate::populate(db, cmd).await,
        Command::Delete(cmd) => delete::delete(db, cmd).await,
    }
}
