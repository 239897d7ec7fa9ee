//! # UI Widgets
//!
//! Reusable components shared by the screens.
//!
//! - **[`forms`]**: Text inputs, buttons, headings, inline errors
//! - **[`nav_bar`]**: Top navigation bar with screen buttons
//! - **[`status_bar`]**: Bottom status line
//! - **[`tables`]**: Shared table helpers and empty states
//! - **[`asset_card`]**: Asset row card with price change coloring
//! - **[`notifications`]**: Toast notifications (egui-notify)

pub mod asset_card;
pub mod forms;
pub mod nav_bar;
pub mod notifications;
pub mod status_bar;
pub mod tables;
