//! The library of the conference scheduling API.
//!
//! It exposes the read-only routes over events, sessions, speakers and bios, built on top
//! of the [`conference_lib`] crate. The server program itself only sets up the environment,
//! runs the migrations and serves the [`api_route`].

mod env;
mod error;
mod http;
mod utils;

pub mod configure;

pub use env::*;
pub use error::*;
pub use http::api_route;
pub use utils::*;
