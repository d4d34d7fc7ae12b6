// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between the renderer and the services
// - Translates UI events into service calls
// - Hands back computed views, never the services themselves

pub mod commands;
pub mod controller;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use controller::MovieClubController;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
