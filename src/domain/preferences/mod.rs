pub mod entity;

pub use entity::{Preferences, Theme};
