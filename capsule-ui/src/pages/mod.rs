//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod landing;

pub use home::Home;
pub use landing::Landing;
