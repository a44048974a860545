//! Shared UI crate for the Publikasi desk. Navigation chrome, auth glue and the
//! route views live here; the platform crates only declare routes and launch.

pub mod auth;
pub mod core;
pub mod dom;
pub mod views;

pub mod components {
    // Top navigation bar with profile dropdown (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{AppNavbar, ChangePhotoRequest};

    pub mod avatar;
    pub use avatar::ProfileAvatar;
}
