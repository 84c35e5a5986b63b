//! Board feature reducer.
//!
//! Key handling for the board screen and processing of async board results.
//! Screen switches and overlay opening are returned as `BoardAction` values
//! for the main reducer to interpret.

use cork_types::Post;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::BoardUiEvent;
use crate::features::editor::{EditorField, EditorMode};
use crate::state::{BoardFocus, BoardScreen};

/// Actions the main reducer interprets after a board key.
#[derive(Debug)]
pub enum BoardAction {
    None,
    /// Clear the session and return to login.
    Logout,
    /// Open the detail modal for one post.
    OpenDetail(Post),
}

/// Handles a key on the board screen.
pub fn handle_board_key(screen: &mut BoardScreen, key: KeyEvent) -> (Vec<UiEffect>, BoardAction) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('l') {
        return (vec![], BoardAction::Logout);
    }

    match screen.focus {
        BoardFocus::List => handle_list_key(screen, key),
        BoardFocus::Editor => handle_editor_key(screen, key, ctrl),
    }
}

fn handle_list_key(screen: &mut BoardScreen, key: KeyEvent) -> (Vec<UiEffect>, BoardAction) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            screen.board.select_prev();
            (vec![], BoardAction::None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            screen.board.select_next();
            (vec![], BoardAction::None)
        }
        KeyCode::Tab => {
            screen.focus = BoardFocus::Editor;
            (vec![], BoardAction::None)
        }
        KeyCode::Enter => match screen.board.selected_post() {
            Some(post) => (vec![], BoardAction::OpenDetail(post.clone())),
            None => (vec![], BoardAction::None),
        },
        KeyCode::Char('e') => {
            if let Some(post) = screen.board.selected_post() {
                let post = post.clone();
                screen.editor.begin_edit(&post);
                screen.focus = BoardFocus::Editor;
            }
            (vec![], BoardAction::None)
        }
        KeyCode::Char('d') => match screen.board.selected_post() {
            Some(post) => (
                vec![UiEffect::DeletePost {
                    id: post.id.clone(),
                }],
                BoardAction::None,
            ),
            None => (vec![], BoardAction::None),
        },
        KeyCode::Char('r') => (
            vec![UiEffect::FetchUser, UiEffect::FetchPosts],
            BoardAction::None,
        ),
        _ => (vec![], BoardAction::None),
    }
}

fn handle_editor_key(
    screen: &mut BoardScreen,
    key: KeyEvent,
    ctrl: bool,
) -> (Vec<UiEffect>, BoardAction) {
    match key.code {
        KeyCode::Tab => {
            match screen.editor.focus {
                EditorField::Title => screen.editor.focus = EditorField::Description,
                EditorField::Description => {
                    screen.editor.focus = EditorField::Title;
                    screen.focus = BoardFocus::List;
                }
            }
            (vec![], BoardAction::None)
        }
        KeyCode::Esc => {
            // Cancel is meaningful only in edit mode; it clears the draft
            // and returns the editor to create intent.
            if screen.editor.is_editing() {
                screen.editor.reset();
            } else {
                screen.focus = BoardFocus::List;
            }
            (vec![], BoardAction::None)
        }
        KeyCode::Enter => (submit_editor(screen), BoardAction::None),
        KeyCode::Backspace => {
            screen.editor.field_mut().pop();
            (vec![], BoardAction::None)
        }
        KeyCode::Char(c) if !ctrl => {
            screen.board.clear_notice();
            screen.editor.field_mut().push(c);
            (vec![], BoardAction::None)
        }
        _ => (vec![], BoardAction::None),
    }
}

fn submit_editor(screen: &mut BoardScreen) -> Vec<UiEffect> {
    let payload = match screen.editor.validate() {
        Ok(payload) => payload,
        Err(message) => {
            screen.board.set_error(message);
            return vec![];
        }
    };

    match &screen.editor.mode {
        EditorMode::Create => vec![UiEffect::CreatePost { payload }],
        EditorMode::Edit { id } => vec![UiEffect::UpdatePost {
            id: id.clone(),
            payload,
        }],
    }
}

/// Applies an async board result to the store.
///
/// Create and update resync by re-fetching the collection; delete patches
/// the local sequence in place. Failures become notices.
pub fn handle_board_event(screen: &mut BoardScreen, event: BoardUiEvent) -> Vec<UiEffect> {
    match event {
        BoardUiEvent::UserLoaded { user } => {
            screen.board.set_user(user);
            vec![]
        }
        BoardUiEvent::UserFailed { error } => {
            screen.board.set_error(format!("Could not load profile: {error}"));
            vec![]
        }
        BoardUiEvent::PostsLoaded { posts } => {
            screen.board.replace_posts(posts);
            vec![]
        }
        BoardUiEvent::PostsFailed { error } => {
            screen.board.set_error(format!("Could not load posts: {error}"));
            vec![]
        }
        BoardUiEvent::Created { .. } => {
            screen.editor.reset();
            vec![UiEffect::FetchPosts]
        }
        BoardUiEvent::CreateFailed { error } => {
            screen.board.set_error(format!("Could not create post: {error}"));
            vec![]
        }
        BoardUiEvent::Updated { .. } => {
            screen.editor.reset();
            vec![UiEffect::FetchPosts]
        }
        BoardUiEvent::UpdateFailed { error } => {
            screen.board.set_error(format!("Could not update post: {error}"));
            vec![]
        }
        BoardUiEvent::Deleted { id } => {
            screen.board.remove_post(&id);
            vec![]
        }
        BoardUiEvent::DeleteFailed { id, error } => {
            screen
                .board
                .set_error(format!("Could not delete post {id}: {error}"));
            vec![]
        }
    }
}
