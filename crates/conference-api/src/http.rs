//! Module used to serve the routes of the API. Each submodule is specific for a route segment.

use std::fmt;

use actix_web::{Scope, web};
use serde::Deserialize;

use self::event::event_scope;
use self::session::session_scope;
use self::speaker::speaker_scope;
use crate::ApiErrorKind;

mod event;
mod session;
mod speaker;

/// The fallback of a missing bio in the speaker responses.
const NO_BIO: &str = "No bio available";

pub fn api_route() -> Scope {
    // A segment that isn't an integer doesn't address anything.
    let path_config = web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!("Invalid path `{}`: {err}", req.path());
        ApiErrorKind::EndpointNotFound.into()
    });

    web::scope("")
        .app_data(path_config)
        .service(event_scope())
        .service(speaker_scope())
        .service(session_scope())
}

/// The ID of an entity, parsed from a path segment.
///
/// The segment must be an integer written with digits only, with an optional leading minus sign.
/// An integer that doesn't fit in the primary key type is still accepted, but addresses no row.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "String")]
struct EntityId(Option<i32>);

impl EntityId {
    /// Returns the primary key addressed by this ID, if it can exist at all.
    fn key(self) -> Option<i32> {
        self.0
    }
}

#[derive(Debug)]
struct InvalidEntityId(String);

impl fmt::Display for InvalidEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not an integer", self.0)
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidEntityId;

    fn try_from(segment: String) -> Result<Self, Self::Error> {
        let digits = segment.strip_prefix('-').unwrap_or(&segment);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidEntityId(segment));
        }
        Ok(Self(segment.parse().ok()))
    }
}

/// Returns the text of the provided bio, or the fallback text if it's missing.
fn bio_text(bio: Option<entity::bio::Model>) -> String {
    bio.map(|bio| bio.bio_text)
        .unwrap_or_else(|| NO_BIO.to_owned())
}

#[cfg(test)]
mod tests {
    use super::EntityId;

    fn parse(segment: &str) -> Option<Option<i32>> {
        EntityId::try_from(segment.to_owned()).ok().map(EntityId::key)
    }

    #[test]
    fn integer_segments() {
        assert_eq!(parse("1"), Some(Some(1)));
        assert_eq!(parse("007"), Some(Some(7)));
        assert_eq!(parse("-1"), Some(Some(-1)));
        assert_eq!(parse("2147483647"), Some(Some(i32::MAX)));
    }

    #[test]
    fn out_of_range_segments_address_nothing() {
        assert_eq!(parse("2147483648"), Some(None));
        assert_eq!(parse("99999999999"), Some(None));
        assert_eq!(parse("123456789012345678901234567890"), Some(None));
    }

    #[test]
    fn rejected_segments() {
        for segment in ["", "-", "+1", " 1", "1.5", "one", "0x10", "1e3"] {
            assert_eq!(parse(segment), None, "{segment:?}");
        }
    }
}
