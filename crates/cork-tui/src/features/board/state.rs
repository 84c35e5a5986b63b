//! Board state: the signed-in user and the local post cache.
//!
//! The post sequence is a cache of the server's collection. Fetches replace
//! it wholesale; a successful delete removes the matching entry in place.

use cork_types::{Post, User};

/// Severity of a board notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient message shown above the post list (validation and sync
/// failures are surfaced here instead of being dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct BoardState {
    /// Signed-in user, shown in the header once loaded.
    pub user: Option<User>,
    /// Local cache of the server's post collection.
    pub posts: Vec<Post>,
    /// Index of the selected card.
    pub selected: usize,
    /// Transient notice, cleared on the next input.
    pub notice: Option<Notice>,
}

impl BoardState {
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Replaces the sequence wholesale with the server's collection.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.clamp_selection();
    }

    /// Removes the first (and only) entry with a matching id, preserving
    /// the relative order of everything else.
    pub fn remove_post(&mut self, id: &str) {
        if let Some(idx) = self.posts.iter().position(|p| p.id == id) {
            self.posts.remove(idx);
        }
        self.clamp_selection();
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.posts.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            text: text.into(),
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn clamp_selection(&mut self) {
        if self.posts.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.posts.len() {
            self.selected = self.posts.len() - 1;
        }
    }
}
