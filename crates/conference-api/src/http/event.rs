use actix_web::{
    Responder, Scope,
    web::{self, Path},
};
use conference_lib::{Database, EntityKind};
use entity::{event, session};
use serde::Serialize;

use crate::{ApiErrorKind, ApiResult, Res, utils::json};

use super::EntityId;

pub fn event_scope() -> Scope {
    web::scope("/events")
        .route("", web::get().to(event_list))
        .route("/{event_id}/sessions", web::get().to(event_sessions))
}

#[derive(Serialize)]
struct EventResponse {
    id: i32,
    name: String,
    location: String,
}

impl From<event::Model> for EventResponse {
    fn from(event: event::Model) -> Self {
        Self {
            id: event.id,
            name: event.name,
            location: event.location,
        }
    }
}

#[derive(Serialize)]
struct SessionResponse {
    id: i32,
    title: String,
    start_time: Option<chrono::NaiveDateTime>,
}

impl From<session::Model> for SessionResponse {
    fn from(session: session::Model) -> Self {
        Self {
            id: session.id,
            title: session.title,
            start_time: session.start_time,
        }
    }
}

async fn event_list(db: Res<Database>) -> ApiResult<impl Responder> {
    let events = conference_lib::event::list_events(&db.sql_conn).await?;
    json(
        events
            .into_iter()
            .map(EventResponse::from)
            .collect::<Vec<_>>(),
    )
}

async fn event_sessions(db: Res<Database>, event_id: Path<EntityId>) -> ApiResult<impl Responder> {
    let event = match event_id.key() {
        Some(event_id) => conference_lib::event::get_event(&db.sql_conn, event_id).await?,
        None => None,
    }
    .ok_or(ApiErrorKind::NotFound(EntityKind::Event))?;

    let sessions = conference_lib::event::event_sessions(&db.sql_conn, &event).await?;

    json(
        sessions
            .into_iter()
            .map(SessionResponse::from)
            .collect::<Vec<_>>(),
    )
}
