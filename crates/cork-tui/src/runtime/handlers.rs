//! Effect handler implementations.
//!
//! Each handler is a pure async function that performs one API call and
//! returns the result event for the inbox. Failures are logged here and
//! carried in the event so the reducer can surface them.

use std::sync::Arc;

use cork_client::{ApiClient, Session};
use cork_types::PostPayload;

use crate::events::{AuthUiEvent, BoardUiEvent, UiEvent};

pub async fn submit_login(api: Arc<ApiClient>, email: String, password: String) -> UiEvent {
    let result = api.login(&email, &password).await.map_err(|err| {
        tracing::warn!(error = %err, "login failed");
        err.user_message("Login failed")
    });
    UiEvent::Auth(AuthUiEvent::LoginResult { result })
}

pub async fn submit_register(
    api: Arc<ApiClient>,
    name: String,
    email: String,
    password: String,
) -> UiEvent {
    let result = api
        .register(&name, &email, &password)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "registration failed");
            err.user_message("Registration failed")
        });
    UiEvent::Auth(AuthUiEvent::RegisterResult { result })
}

pub async fn fetch_user(api: Arc<ApiClient>, session: Session) -> UiEvent {
    match api.fetch_user(&session).await {
        Ok(user) => UiEvent::Board(BoardUiEvent::UserLoaded { user }),
        Err(err) => {
            tracing::warn!(error = %err, "user fetch failed");
            UiEvent::Board(BoardUiEvent::UserFailed {
                error: err.to_string(),
            })
        }
    }
}

pub async fn fetch_posts(api: Arc<ApiClient>, session: Session) -> UiEvent {
    match api.list_posts(&session).await {
        Ok(posts) => UiEvent::Board(BoardUiEvent::PostsLoaded { posts }),
        Err(err) => {
            tracing::warn!(error = %err, "posts fetch failed");
            UiEvent::Board(BoardUiEvent::PostsFailed {
                error: err.to_string(),
            })
        }
    }
}

pub async fn create_post(api: Arc<ApiClient>, session: Session, payload: PostPayload) -> UiEvent {
    match api.create_post(&session, &payload).await {
        Ok(post) => UiEvent::Board(BoardUiEvent::Created { post }),
        Err(err) => {
            tracing::warn!(error = %err, "post create failed");
            UiEvent::Board(BoardUiEvent::CreateFailed {
                error: err.to_string(),
            })
        }
    }
}

pub async fn update_post(
    api: Arc<ApiClient>,
    session: Session,
    id: String,
    payload: PostPayload,
) -> UiEvent {
    match api.update_post(&session, &id, &payload).await {
        Ok(post) => UiEvent::Board(BoardUiEvent::Updated { post }),
        Err(err) => {
            tracing::warn!(error = %err, post_id = %id, "post update failed");
            UiEvent::Board(BoardUiEvent::UpdateFailed {
                error: err.to_string(),
            })
        }
    }
}

pub async fn delete_post(api: Arc<ApiClient>, session: Session, id: String) -> UiEvent {
    match api.delete_post(&session, &id).await {
        Ok(()) => UiEvent::Board(BoardUiEvent::Deleted { id }),
        Err(err) => {
            tracing::warn!(error = %err, post_id = %id, "post delete failed");
            UiEvent::Board(BoardUiEvent::DeleteFailed {
                id,
                error: err.to_string(),
            })
        }
    }
}
