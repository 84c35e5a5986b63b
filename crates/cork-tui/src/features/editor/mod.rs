//! Post editor: a draft plus create/edit intent.

mod state;

pub use state::{EditorField, EditorMode, EditorState};
