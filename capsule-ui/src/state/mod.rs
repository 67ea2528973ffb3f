//! State Management
//!
//! Global application state shared by the views.

pub mod global;
