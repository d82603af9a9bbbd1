use actix_web::{
    Responder, Scope,
    web::{self, Path},
};
use conference_lib::{Database, EntityKind};

use crate::{ApiErrorKind, ApiResult, Res, utils::json};

use super::{EntityId, speaker::SpeakerResponse};

pub fn session_scope() -> Scope {
    web::scope("/sessions").route("/{session_id}/speakers", web::get().to(session_speakers))
}

async fn session_speakers(
    db: Res<Database>,
    session_id: Path<EntityId>,
) -> ApiResult<impl Responder> {
    let session = match session_id.key() {
        Some(session_id) => conference_lib::session::get_session(&db.sql_conn, session_id).await?,
        None => None,
    }
    .ok_or(ApiErrorKind::NotFound(EntityKind::Session))?;

    let speakers = conference_lib::session::session_speakers(&db.sql_conn, &session).await?;
    tracing::debug!(
        "Session {} has {} speaker(s)",
        session.id,
        speakers.len()
    );

    json(
        speakers
            .into_iter()
            .map(|(speaker, bio)| SpeakerResponse::new(speaker, bio))
            .collect::<Vec<_>>(),
    )
}
