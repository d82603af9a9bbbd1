//! The main crate of the conference scheduling API.
//!
//! This crate holds the database handle, the environment needed to connect to the database, and
//! the queries used to read events, sessions, speakers and their bios. It also contains the
//! cascading deletions used by the administration tool, as the API itself never writes.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the [`conference_api`](../conference_api_lib/index.html) package.

#![warn(missing_docs)]

mod env;

pub mod error;
pub mod event;
pub mod session;
pub mod speaker;

use std::fmt;

pub use env::*;
use sea_orm::{ConnectionTrait, DbConn, EntityTrait, PrimaryKeyTrait};

use crate::error::ConferenceResult;

/// Represents the database of the API.
///
/// The inner connection is a pool, so cloning this type is cheap, and each query acquires
/// a connection only for its own duration.
#[derive(Clone)]
pub struct Database {
    /// The SQL database connection pool.
    pub sql_conn: DbConn,
}

impl From<DbConn> for Database {
    fn from(sql_conn: DbConn) -> Self {
        Self { sql_conn }
    }
}

impl Database {
    /// Returns the database from the provided URL.
    pub async fn from_db_url(db_url: String) -> Result<Self, sea_orm::DbErr> {
        let sql_conn = sea_orm::Database::connect(db_url).await?;
        Ok(Self { sql_conn })
    }
}

/// The kinds of entity that can be looked up by their ID from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// An [`entity::event`].
    Event,
    /// An [`entity::session`].
    Session,
    /// An [`entity::speaker`].
    Speaker,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Event => f.write_str("Event"),
            EntityKind::Session => f.write_str("Session"),
            EntityKind::Speaker => f.write_str("Speaker"),
        }
    }
}

/// Returns the optional row of the entity `E` with the provided primary key.
///
/// An unknown ID isn't an error, it only results in `None`.
pub async fn find_by_id<E, C>(conn: &C, id: i32) -> ConferenceResult<Option<E::Model>>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    let r = E::find_by_id(id).one(conn).await?;
    Ok(r)
}
