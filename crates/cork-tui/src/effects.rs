//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (network requests, credential persistence).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use cork_types::PostPayload;

/// Navigation commands produced by screen handlers and interpreted by the
/// reducer's dispatcher. Handlers never switch screens themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Login,
    Register,
    Board,
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist the token after a successful login.
    SaveCredentials { token: String },

    /// Delete the stored token at logout.
    ClearCredentials,

    /// Exchange credentials for a token.
    SubmitLogin { email: String, password: String },

    /// Create an account.
    SubmitRegister {
        name: String,
        email: String,
        password: String,
    },

    /// Fetch the signed-in user's profile.
    FetchUser,

    /// Fetch the full post collection.
    FetchPosts,

    /// Create a post.
    CreatePost { payload: PostPayload },

    /// Update a post.
    UpdatePost { id: String, payload: PostPayload },

    /// Delete a post.
    DeletePost { id: String },
}
