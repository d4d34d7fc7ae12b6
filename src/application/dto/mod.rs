// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Inbound DTOs carry primitive values exactly as the UI reports them

use serde::{Deserialize, Serialize};

use crate::application::error_handling::ErrorResponse;
use crate::services::{AddMovieRequest, ViewSnapshot};

// ============================================================================
// INBOUND: UI EVENTS
// ============================================================================

/// Primitive events reported by the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserAction {
    /// Search form submitted
    Search { query: String, genre: String },
    ResetFilters,
    ToggleSelection { id: String },
    /// Checkbox changed to `checked`
    CheckboxChanged { id: String, checked: bool },
    /// Select every row currently shown
    SelectAllVisible,
    ClearSelection,
    AddMovie(AddMovieDto),
    Export,
    ToggleTheme,
    ToggleReduceMotion,
}

/// Add-movie form fields, untrimmed and unparsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMovieDto {
    pub title: String,
    pub year: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub runtime: String,
}

impl From<AddMovieDto> for AddMovieRequest {
    fn from(dto: AddMovieDto) -> Self {
        AddMovieRequest::new(dto.title, dto.year, dto.genre, dto.runtime)
    }
}

// ============================================================================
// OUTBOUND: RENDER STATE
// ============================================================================

/// Result of dispatching one action.
/// `view` is always a full recompute, even when the action failed.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub view: ViewSnapshot,
    pub error: Option<ErrorResponse>,
}

impl ActionResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_deserialize_from_ui_json() {
        let action: UserAction =
            serde_json::from_str(r#"{"type":"checkbox_changed","id":"tt0133093","checked":true}"#)
                .unwrap();
        assert_eq!(
            action,
            UserAction::CheckboxChanged {
                id: "tt0133093".to_string(),
                checked: true
            }
        );

        let action: UserAction = serde_json::from_str(r#"{"type":"select_all_visible"}"#).unwrap();
        assert_eq!(action, UserAction::SelectAllVisible);
    }

    #[test]
    fn test_add_movie_fields_default_to_empty() {
        let action: UserAction =
            serde_json::from_str(r#"{"type":"add_movie","title":"Heat","year":"1995"}"#).unwrap();
        match action {
            UserAction::AddMovie(dto) => {
                assert_eq!(dto.title, "Heat");
                assert_eq!(dto.genre, "");
                assert_eq!(dto.runtime, "");
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
