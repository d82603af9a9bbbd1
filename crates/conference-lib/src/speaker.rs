//! This module contains the queries related to speakers and their bios.

use entity::{bio, session_speakers, speaker};
use sea_orm::{
    ColumnTrait as _, ConnectionTrait, EntityTrait as _, ModelTrait as _, QueryFilter as _,
    QueryOrder as _, TransactionTrait,
};

use crate::{
    EntityKind,
    error::{ConferenceError, ConferenceResult},
    find_by_id,
};

/// Returns all the speakers, ordered by their ID.
pub async fn list_speakers<C: ConnectionTrait>(
    conn: &C,
) -> ConferenceResult<Vec<speaker::Model>> {
    let speakers = speaker::Entity::find()
        .order_by_asc(speaker::Column::Id)
        .all(conn)
        .await?;
    Ok(speakers)
}

/// Returns the optional speaker with the provided ID.
pub async fn get_speaker<C: ConnectionTrait>(
    conn: &C,
    speaker_id: i32,
) -> ConferenceResult<Option<speaker::Model>> {
    find_by_id::<speaker::Entity, _>(conn, speaker_id).await
}

/// Returns the optional speaker with the provided ID, along with their optional bio.
pub async fn get_speaker_with_bio<C: ConnectionTrait>(
    conn: &C,
    speaker_id: i32,
) -> ConferenceResult<Option<(speaker::Model, Option<bio::Model>)>> {
    let r = speaker::Entity::find_by_id(speaker_id)
        .find_also_related(bio::Entity)
        .one(conn)
        .await?;
    Ok(r)
}

/// Returns the bio of the provided speaker, if they have one.
pub async fn speaker_bio<C: ConnectionTrait>(
    conn: &C,
    speaker: &speaker::Model,
) -> ConferenceResult<Option<bio::Model>> {
    let bio = speaker.find_related(bio::Entity).one(conn).await?;
    Ok(bio)
}

/// Deletes the speaker with the provided ID, with their bio and their session associations.
#[tracing::instrument(skip(conn))]
pub async fn delete_speaker<C: TransactionTrait>(
    conn: &C,
    speaker_id: i32,
) -> ConferenceResult<()> {
    conn.transaction::<_, _, ConferenceError>(|txn| {
        Box::pin(async move {
            let speaker = get_speaker(txn, speaker_id)
                .await?
                .ok_or(ConferenceError::NotFound(EntityKind::Speaker, speaker_id))?;

            let links = session_speakers::Entity::delete_many()
                .filter(session_speakers::Column::SpeakerId.eq(speaker_id))
                .exec(txn)
                .await?;
            let bios = bio::Entity::delete_many()
                .filter(bio::Column::SpeakerId.eq(speaker_id))
                .exec(txn)
                .await?;
            speaker.delete(txn).await?;

            tracing::info!(
                "Deleted speaker {speaker_id} with {} bio and {} session link(s)",
                bios.rows_affected,
                links.rows_affected,
            );

            Ok(())
        })
    })
    .await?;

    Ok(())
}
