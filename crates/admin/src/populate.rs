use std::{collections::HashSet, fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use conference_lib::Database;
use entity::{bio, event, session, session_speakers, speaker};
use sea_orm::{ActiveValue::Set, ConnectionTrait, EntityTrait as _, TransactionTrait as _};

#[derive(clap::Args, Debug)]
pub struct PopulateCommand {
    /// The path to the JSON fixture.
    fixture_file: PathBuf,
}

#[derive(serde::Deserialize, Debug, Default)]
pub struct Fixture {
    #[serde(default)]
    events: Vec<EventRow>,
    #[serde(default)]
    speakers: Vec<SpeakerRow>,
}

#[derive(serde::Deserialize, Debug)]
struct EventRow {
    id: i32,
    name: String,
    location: String,
    #[serde(default)]
    sessions: Vec<SessionRow>,
}

#[derive(serde::Deserialize, Debug)]
struct SessionRow {
    id: i32,
    title: String,
    #[serde(default)]
    start_time: Option<chrono::NaiveDateTime>,
    /// The IDs of the speakers of the session.
    #[serde(default)]
    speakers: Vec<i32>,
}

#[derive(serde::Deserialize, Debug)]
struct SpeakerRow {
    id: i32,
    name: String,
    #[serde(default)]
    bio: Option<String>,
}

impl Fixture {
    /// Checks that every speaker referenced by a session is part of the fixture.
    fn check_speaker_refs(&self) -> anyhow::Result<()> {
        let speaker_ids = self.speakers.iter().map(|s| s.id).collect::<HashSet<_>>();

        for session in self.events.iter().flat_map(|e| &e.sessions) {
            if let Some(unknown) = session
                .speakers
                .iter()
                .find(|&&id| !speaker_ids.contains(&id))
            {
                anyhow::bail!(
                    "session `{}` references unknown speaker `{unknown}`",
                    session.id
                );
            }
        }

        Ok(())
    }
}

#[tracing::instrument(skip(conn, fixture))]
pub async fn populate_content<C: ConnectionTrait>(
    conn: &C,
    fixture: Fixture,
) -> anyhow::Result<()> {
    fixture.check_speaker_refs()?;

    let mut speakers = Vec::with_capacity(fixture.speakers.len());
    let mut bios = Vec::new();
    for row in fixture.speakers {
        speakers.push(speaker::ActiveModel {
            id: Set(row.id),
            name: Set(row.name),
        });
        if let Some(bio_text) = row.bio {
            bios.push(bio::ActiveModel {
                bio_text: Set(bio_text),
                speaker_id: Set(row.id),
                ..Default::default()
            });
        }
    }

    let mut events = Vec::with_capacity(fixture.events.len());
    let mut sessions = Vec::new();
    let mut links = Vec::new();
    for row in fixture.events {
        events.push(event::ActiveModel {
            id: Set(row.id),
            name: Set(row.name),
            location: Set(row.location),
        });
        for session in row.sessions {
            let session_id = session.id;
            links.extend(
                session
                    .speakers
                    .into_iter()
                    .map(|speaker_id| session_speakers::ActiveModel {
                        session_id: Set(session_id),
                        speaker_id: Set(speaker_id),
                    }),
            );
            sessions.push(session::ActiveModel {
                id: Set(session_id),
                title: Set(session.title),
                start_time: Set(session.start_time),
                event_id: Set(Some(row.id)),
            });
        }
    }

    tracing::info!(
        "Inserting {} event(s), {} session(s), {} speaker(s), {} bio(s), {} link(s)",
        events.len(),
        sessions.len(),
        speakers.len(),
        bios.len(),
        links.len(),
    );

    if !speakers.is_empty() {
        speaker::Entity::insert_many(speakers).exec(conn).await?;
    }
    if !bios.is_empty() {
        bio::Entity::insert_many(bios).exec(conn).await?;
    }
    if !events.is_empty() {
        event::Entity::insert_many(events).exec(conn).await?;
    }
    if !sessions.is_empty() {
        session::Entity::insert_many(sessions).exec(conn).await?;
    }
    if !links.is_empty() {
        session_speakers::Entity::insert_many(links)
            .exec_without_returning(conn)
            .await?;
    }

    Ok(())
}

pub async fn populate(
    db: Database,
    PopulateCommand { fixture_file }: PopulateCommand,
) -> anyhow::Result<()> {
    let file = File::open(&fixture_file)
        .with_context(|| format!("cannot open fixture file `{}`", fixture_file.display()))?;
    let fixture: Fixture = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid fixture file `{}`", fixture_file.display()))?;

    let txn = db.sql_conn.begin().await?;
    populate_content(&txn, fixture).await?;
    txn.commit().await?;

    Ok(())
}
