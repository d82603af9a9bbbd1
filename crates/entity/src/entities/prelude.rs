pub use super::bio::Entity as Bio;
pub use super::event::Entity as Event;
pub use super::session::Entity as Session;
pub use super::session_speakers::Entity as SessionSpeakers;
pub use super::speaker::Entity as Speaker;
