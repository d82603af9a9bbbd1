use actix_web::{
    Responder, Scope,
    web::{self, Path},
};
use conference_lib::{Database, EntityKind};
use entity::speaker;
use serde::Serialize;

use crate::{ApiErrorKind, ApiResult, Res, utils::json};

use super::{EntityId, bio_text};

pub fn speaker_scope() -> Scope {
    web::scope("/speakers")
        .route("", web::get().to(speaker_list))
        .route("/{speaker_id}", web::get().to(speaker_info))
}

#[derive(Serialize)]
struct SpeakerListItem {
    id: i32,
    name: String,
}

/// A speaker with the text of their bio.
///
/// This is also used by the speakers of a session.
#[derive(Serialize)]
pub(super) struct SpeakerResponse {
    id: i32,
    name: String,
    bio_text: String,
}

impl SpeakerResponse {
    pub(super) fn new(speaker: speaker::Model, bio: Option<entity::bio::Model>) -> Self {
        Self {
            id: speaker.id,
            name: speaker.name,
            bio_text: bio_text(bio),
        }
    }
}

async fn speaker_list(db: Res<Database>) -> ApiResult<impl Responder> {
    let speakers = conference_lib::speaker::list_speakers(&db.sql_conn).await?;
    json(
        speakers
            .into_iter()
            .map(|speaker| SpeakerListItem {
                id: speaker.id,
                name: speaker.name,
            })
            .collect::<Vec<_>>(),
    )
}

async fn speaker_info(db: Res<Database>, speaker_id: Path<EntityId>) -> ApiResult<impl Responder> {
    let (speaker, bio) = match speaker_id.key() {
        Some(speaker_id) => {
            conference_lib::speaker::get_speaker_with_bio(&db.sql_conn, speaker_id).await?
        }
        None => None,
    }
    .ok_or(ApiErrorKind::NotFound(EntityKind::Speaker))?;

    json(SpeakerResponse::new(speaker, bio))
}
