//! The entities of the conference scheduling database.
//!
//! Events own sessions, speakers own at most one bio, and sessions and speakers are associated
//! through the [`session_speakers`] join table.

mod entities;
pub use entities::*;

pub mod prelude {
    pub use super::entities::prelude::*;
}
