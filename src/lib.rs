//! In-memory attendance and roster state for a martial-arts school, plus the
//! JSON-lines protocol a presentation shell uses to drive it.

pub mod app;
pub mod attendance;
pub mod config;
pub mod directory;
pub mod error;
pub mod ids;
pub mod ipc;
pub mod model;
pub mod seed;
pub mod session;

pub use app::{App, Policy};
pub use directory::Outcome;
pub use error::StoreError;
