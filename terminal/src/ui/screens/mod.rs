//! # Screens
//!
//! Screen-specific rendering. Every screen exposes
//! `render(ui, &AppState, &mut App)`: the state snapshot is read-only, user
//! actions go through the app's handler methods.

pub mod account;
pub mod dashboard;
pub mod discover;
pub mod trade;
pub mod wallet;
