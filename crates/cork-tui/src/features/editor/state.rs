//! Editor state machine.
//!
//! Two modes: `Create` (no target) and `Edit { id }`. Entering edit copies
//! the target's fields into the draft; cancel clears the draft and returns
//! to create. Transitions are purely local.

use cork_types::{Post, PostPayload};

/// Editor intent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Submitting creates a new post.
    #[default]
    Create,
    /// Submitting updates the referenced post.
    Edit { id: String },
}

/// Fields of the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Description,
}

#[derive(Debug, Default)]
pub struct EditorState {
    pub title: String,
    pub description: String,
    pub mode: EditorMode,
    pub focus: EditorField,
}

impl EditorState {
    /// Copies the target into the draft and switches to edit intent.
    pub fn begin_edit(&mut self, post: &Post) {
        self.mode = EditorMode::Edit {
            id: post.id.clone(),
        };
        self.title = post.title.clone();
        self.description = post.description.clone();
        self.focus = EditorField::Title;
    }

    /// Clears the draft and returns to create intent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Title => &mut self.title,
            EditorField::Description => &mut self.description,
        }
    }

    /// Returns the payload if both fields are filled.
    ///
    /// Rejecting here keeps empty submissions local: no network call is
    /// made for a draft that fails validation.
    pub fn validate(&self) -> Result<PostPayload, &'static str> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Title and description are required");
        }
        Ok(PostPayload {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: "p1".to_string(),
            title: "Hello".to_string(),
            description: "World".to_string(),
        }
    }

    #[test]
    fn begin_edit_copies_the_target() {
        let mut editor = EditorState::default();
        editor.begin_edit(&post());

        assert_eq!(editor.title, "Hello");
        assert_eq!(editor.description, "World");
        assert_eq!(
            editor.mode,
            EditorMode::Edit {
                id: "p1".to_string()
            }
        );
    }

    #[test]
    fn reset_returns_to_create() {
        let mut editor = EditorState::default();
        editor.begin_edit(&post());
        editor.reset();

        assert_eq!(editor.mode, EditorMode::Create);
        assert!(editor.title.is_empty());
        assert!(editor.description.is_empty());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let mut editor = EditorState::default();
        assert!(editor.validate().is_err());

        editor.title = "only a title".to_string();
        assert!(editor.validate().is_err());

        editor.description = "and a description".to_string();
        let payload = editor.validate().unwrap();
        assert_eq!(payload.title, "only a title");
    }

    #[test]
    fn whitespace_only_fields_are_empty() {
        let editor = EditorState {
            title: "   ".to_string(),
            description: "desc".to_string(),
            ..EditorState::default()
        };
        assert!(editor.validate().is_err());
    }
}
