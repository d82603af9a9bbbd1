//! This module contains the queries related to events and their sessions.

use entity::{event, session, session_speakers};
use sea_orm::{
    ColumnTrait as _, ConnectionTrait, EntityTrait as _, ModelTrait as _, QueryFilter as _,
    QueryOrder as _, TransactionTrait,
};

use crate::{
    EntityKind,
    error::{ConferenceError, ConferenceResult},
    find_by_id,
};

/// Returns all the events, ordered by their ID.
pub async fn list_events<C: ConnectionTrait>(conn: &C) -> ConferenceResult<Vec<event::Model>> {
    let events = event::Entity::find()
        .order_by_asc(event::Column::Id)
        .all(conn)
        .await?;
    Ok(events)
}

/// Returns the optional event with the provided ID.
pub async fn get_event<C: ConnectionTrait>(
    conn: &C,
    event_id: i32,
) -> ConferenceResult<Option<event::Model>> {
    find_by_id::<event::Entity, _>(conn, event_id).await
}

/// Returns the sessions of the provided event, ordered by their ID.
pub async fn event_sessions<C: ConnectionTrait>(
    conn: &C,
    event: &event::Model,
) -> ConferenceResult<Vec<session::Model>> {
    let sessions = event
        .find_related(session::Entity)
        .order_by_asc(session::Column::Id)
        .all(conn)
        .await?;
    Ok(sessions)
}

/// Deletes the event with the provided ID, with all of its sessions.
///
/// The speakers of the sessions are kept, only their association with the deleted sessions
/// is removed.
#[tracing::instrument(skip(conn))]
pub async fn delete_event<C: TransactionTrait>(conn: &C, event_id: i32) -> ConferenceResult<()> {
    conn.transaction::<_, _, ConferenceError>(|txn| {
        Box::pin(async move {
            let event = get_event(txn, event_id)
                .await?
                .ok_or(ConferenceError::NotFound(EntityKind::Event, event_id))?;

            let session_ids: Vec<i32> = event_sessions(txn, &event)
                .await?
                .into_iter()
                .map(|session| session.id)
                .collect();

            let links = session_speakers::Entity::delete_many()
                .filter(session_speakers::Column::SessionId.is_in(session_ids.iter().copied()))
                .exec(txn)
                .await?;
            let sessions = session::Entity::delete_many()
                .filter(session::Column::Id.is_in(session_ids))
                .exec(txn)
                .await?;
            event.delete(txn).await?;

            tracing::info!(
                "Deleted event {event_id} with {} session(s) and {} speaker link(s)",
                sessions.rows_affected,
                links.rows_affected,
            );

            Ok(())
        })
    })
    .await?;

    Ok(())
}
