//! The conference scheduling API program.
//!
//! The program also includes a [library](conference_api_lib). Overall, it uses the
//! [`conference_lib`] crate as a main dependency.

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use conference_api_lib::configure::{self, CustomRootSpanBuilder};
use conference_lib::Database;
use migration::MigratorTrait;
use mkenv::prelude::*;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// The main entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }
    conference_api_lib::init_env()?;
    let env = conference_api_lib::env();

    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let db = Database::from_db_url(env.db_env.db_url.get())
        .await
        .context("Cannot connect to the database")?;

    migration::Migrator::up(&db.sql_conn, None).await?;

    let port = env.port.get();
    tracing::info!("Serving the API on port {port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec!["accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::<CustomRootSpanBuilder>::new())
            .configure(|cfg| configure::configure(cfg, db.clone()))
    })
    .bind(("0.0.0.0", port))
    .context("Cannot bind 0.0.0.0 address")?
    .run()
    .await
    .context("Cannot create actix-web server")?;

    Ok(())
}
