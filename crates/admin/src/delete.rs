use conference_lib::{Database, event, session, speaker};

#[derive(clap::Subcommand, Debug)]
pub enum DeleteCommand {
    /// Deletes an event and all of its sessions.
    Event { id: i32 },
    /// Deletes a session, unlinking its speakers.
    Session { id: i32 },
    /// Deletes a speaker and their bio, unlinking their sessions.
    Speaker { id: i32 },
}

pub async fn delete(db: Database, cmd: DeleteCommand) -> anyhow::Result<()> {
    match cmd {
        DeleteCommand::Event { id } => event::delete_event(&db.sql_conn, id).await?,
        DeleteCommand::Session { id } => session::delete_session(&db.sql_conn, id).await?,
        DeleteCommand::Speaker { id } => speaker::delete_speaker(&db.sql_conn, id).await?,
    }

    Ok(())
}
