//! This module contains the queries related to sessions and their speakers.

use entity::{bio, session, session_speakers, speaker};
use sea_orm::{
    ColumnTrait as _, ConnectionTrait, EntityTrait as _, ModelTrait as _, QueryFilter as _,
    QueryOrder as _, TransactionTrait,
};

use crate::{
    EntityKind,
    error::{ConferenceError, ConferenceResult},
    find_by_id,
};

/// Returns the optional session with the provided ID.
pub async fn get_session<C: ConnectionTrait>(
    conn: &C,
    session_id: i32,
) -> ConferenceResult<Option<session::Model>> {
    find_by_id::<session::Entity, _>(conn, session_id).await
}

/// Returns the speakers of the provided session, each with their optional bio.
///
/// The speakers are ordered by their ID.
pub async fn session_speakers<C: ConnectionTrait>(
    conn: &C,
    session: &session::Model,
) -> ConferenceResult<Vec<(speaker::Model, Option<bio::Model>)>> {
    let speakers = session
        .find_related(speaker::Entity)
        .find_also_related(bio::Entity)
        .order_by_asc(speaker::Column::Id)
        .all(conn)
        .await?;
    Ok(speakers)
}

/// Deletes the session with the provided ID, and its associations with speakers.
#[tracing::instrument(skip(conn))]
pub async fn delete_session<C: TransactionTrait>(
    conn: &C,
    session_id: i32,
) -> ConferenceResult<()> {
    conn.transaction::<_, _, ConferenceError>(|txn| {
        Box::pin(async move {
            let session = get_session(txn, session_id)
                .await?
                .ok_or(ConferenceError::NotFound(EntityKind::Session, session_id))?;

            let links = session_speakers::Entity::delete_many()
                .filter(session_speakers::Column::SessionId.eq(session_id))
                .exec(txn)
                .await?;
            session.delete(txn).await?;

            tracing::info!(
                "Deleted session {session_id} with {} speaker link(s)",
                links.rows_affected,
            );

            Ok(())
        })
    })
    .await?;

    Ok(())
}
