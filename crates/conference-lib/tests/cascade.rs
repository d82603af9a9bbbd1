use conference_lib::{EntityKind, error::ConferenceError, event, session, speaker};
use entity::{bio, session_speakers};
use sea_orm::{ActiveValue::Set, DbConn, EntityTrait, PaginatorTrait as _};

async fn insert_fixture(conn: &DbConn) -> anyhow::Result<()> {
    entity::event::Entity::insert_many((1..=2).map(|id| entity::event::ActiveModel {
        id: Set(id),
        name: Set(format!("event_{id}")),
        location: Set(format!("location_{id}")),
    }))
    .exec(conn)
    .await?;

    // Sessions 11 and 12 belong to event 1, session 21 to event 2.
    entity::session::Entity::insert_many([(11, 1), (12, 1), (21, 2)].map(|(id, event_id)| {
        entity::session::ActiveModel {
            id: Set(id),
            title: Set(format!("session_{id}")),
            start_time: Set(None),
            event_id: Set(Some(event_id)),
        }
    }))
    .exec(conn)
    .await?;

    entity::speaker::Entity::insert_many((1..=2).map(|id| entity::speaker::ActiveModel {
        id: Set(id),
        name: Set(format!("speaker_{id}")),
    }))
    .exec(conn)
    .await?;

    bio::Entity::insert_many((1..=2).map(|speaker_id| bio::ActiveModel {
        speaker_id: Set(speaker_id),
        bio_text: Set(format!("bio_{speaker_id}")),
        ..Default::default()
    }))
    .exec(conn)
    .await?;

    session_speakers::Entity::insert_many([(11, 1), (12, 2), (21, 1), (21, 2)].map(
        |(session_id, speaker_id)| session_speakers::ActiveModel {
            session_id: Set(session_id),
            speaker_id: Set(speaker_id),
        },
    ))
    .exec_without_returning(conn)
    .await?;

    Ok(())
}

async fn links(conn: &DbConn) -> anyhow::Result<Vec<(i32, i32)>> {
    let mut links = session_speakers::Entity::find()
        .all(conn)
        .await?
        .into_iter()
        .map(|link| (link.session_id, link.speaker_id))
        .collect::<Vec<_>>();
    links.sort_unstable();
    Ok(links)
}

#[tokio::test]
async fn delete_event_removes_its_sessions() -> anyhow::Result<()> {
    test_env::wrap(async |conn| {
        insert_fixture(&conn).await?;

        event::delete_event(&conn, 1).await?;

        assert_eq!(event::get_event(&conn, 1).await?, None);
        assert!(event::get_event(&conn, 2).await?.is_some());

        let remaining = entity::session::Entity::find().all(&conn).await?;
        assert_eq!(
            remaining.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![21]
        );

        // Speakers survive, only their links to the deleted sessions are gone.
        assert_eq!(links(&conn).await?, vec![(21, 1), (21, 2)]);
        assert_eq!(entity::speaker::Entity::find().count(&conn).await?, 2);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn delete_speaker_removes_their_bio() -> anyhow::Result<()> {
    test_env::wrap(async |conn| {
        insert_fixture(&conn).await?;

        speaker::delete_speaker(&conn, 1).await?;

        assert_eq!(speaker::get_speaker(&conn, 1).await?, None);
        let bios = bio::Entity::find().all(&conn).await?;
        assert_eq!(
            bios.iter().map(|b| b.speaker_id).collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(links(&conn).await?, vec![(12, 2), (21, 2)]);
        assert_eq!(entity::session::Entity::find().count(&conn).await?, 3);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn delete_session_keeps_its_speakers() -> anyhow::Result<()> {
    test_env::wrap(async |conn| {
        insert_fixture(&conn).await?;

        session::delete_session(&conn, 21).await?;

        assert_eq!(session::get_session(&conn, 21).await?, None);
        assert_eq!(links(&conn).await?, vec![(11, 1), (12, 2)]);
        assert_eq!(entity::speaker::Entity::find().count(&conn).await?, 2);
        assert_eq!(bio::Entity::find().count(&conn).await?, 2);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn deleting_unknown_rows_is_not_found() -> anyhow::Result<()> {
    test_env::wrap(async |conn| {
        insert_fixture(&conn).await?;

        let err = event::delete_event(&conn, 999).await.unwrap_err();
        assert!(matches!(
            err,
            ConferenceError::NotFound(EntityKind::Event, 999)
        ));

        let err = speaker::delete_speaker(&conn, 999).await.unwrap_err();
        assert!(matches!(
            err,
            ConferenceError::NotFound(EntityKind::Speaker, 999)
        ));

        let err = session::delete_session(&conn, 999).await.unwrap_err();
        assert_eq!(err.to_string(), "Session with id `999` not found");

        // Nothing was touched.
        assert_eq!(links(&conn).await?.len(), 4);

        anyhow::Ok(())
    })
    .await
}
