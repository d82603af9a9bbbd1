pub mod prelude;

pub mod bio;
pub mod event;
pub mod session;
pub mod session_speakers;
pub mod speaker;
