//! Platform-agnostic navbar logic. Nothing here touches signals or the DOM, so it
//! can be exercised directly from unit tests.

pub mod auth;
pub mod config;
pub mod dismiss;
pub mod logout;
pub mod nav;
pub mod state;
pub mod user;
