// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI events and services
// - Each command mutates exactly one owner (or the filter)
// - Commands NEVER compute views; the controller does that afterwards

pub mod catalog_commands;
pub mod export_commands;
pub mod filter_commands;
pub mod preference_commands;
pub mod selection_commands;

pub use catalog_commands::*;
pub use export_commands::*;
pub use filter_commands::*;
pub use preference_commands::*;
pub use selection_commands::*;
