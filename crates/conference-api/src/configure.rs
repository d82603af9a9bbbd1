use actix_web::{Responder, web};
use conference_lib::Database;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

use crate::{ApiErrorKind, ApiResult};

/// The actix route handler for the Not Found response.
async fn not_found() -> ApiResult<impl Responder> {
    Err::<String, _>(ApiErrorKind::EndpointNotFound)
}

/// Opens the span of each request, with the state of the connection pool.
pub struct CustomRootSpanBuilder;

impl RootSpanBuilder for CustomRootSpanBuilder {
    fn on_request_start(request: &actix_web::dev::ServiceRequest) -> tracing::Span {
        let (pool_size, pool_num_idle) = match request.app_data::<Database>() {
            Some(db) => {
                match db.sql_conn {
                    sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(_) => {
                        let pool = db.sql_conn.get_sqlite_connection_pool();
                        (pool.size(), pool.num_idle())
                    }
                    #[cfg(feature = "postgres")]
                    sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(_) => {
                        let pool = db.sql_conn.get_postgres_connection_pool();
                        (pool.size(), pool.num_idle())
                    }
                    _ => (0, 0),
                }
            }
            None => (0, 0),
        };

        tracing_actix_web::root_span!(
            request,
            pool_size = pool_size,
            pool_num_idle = pool_num_idle,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<actix_web::dev::ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

/// Registers the routes of the API and the database on the app.
///
/// The environment must be initialized with [`init_env`](crate::init_env) before the app serves
/// any request.
pub fn configure(cfg: &mut web::ServiceConfig, db: Database) {
    cfg.app_data(db)
        .service(crate::api_route())
        .default_service(web::to(not_found));
}
