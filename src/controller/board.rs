//! Board controller: runs `BoardState` transitions around posts API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BoardPage` owns one controller and spawns each handler with
//! `leptos::task::spawn_local`. Mutations always re-fetch the whole list after
//! the mutation response arrives; the list is never patched locally.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::error::ClientError;
use crate::net::posts::PostsApi;
use crate::net::types::{PostDraft, PostId};
use crate::state::board::{BoardState, SaveTarget};

/// Handle pairing a posts API with the board's reactive state.
#[derive(Clone)]
pub struct BoardController<A> {
    api: A,
    state: RwSignal<BoardState>,
}

impl<A: PostsApi> BoardController<A> {
    pub fn new(api: A, state: RwSignal<BoardState>) -> Self {
        Self { api, state }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<BoardState> {
        self.state
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run a transition; `None` once the owning page has been disposed.
    fn apply<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    fn apply_result<R>(&self, f: impl FnOnce(&mut BoardState) -> Result<R, ClientError>) -> Result<R, ClientError> {
        self.apply(f)
            .unwrap_or(Err(ClientError::InvalidTransition { action: "continue" }))
    }

    /// Fetch the full list.
    ///
    /// # Errors
    ///
    /// Returns the list error; previous posts stay visible.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        self.apply(BoardState::begin_list);
        let result = self.api.list_posts().await;
        if let Err(e) = &result {
            log::warn!("post list fetch failed: {e} ({})", e.error_code());
        }
        self.apply(|s| s.finish_list(result)).unwrap_or(Ok(()))
    }

    /// Load a post and show its detail.
    ///
    /// Returns `Ok(false)` if a newer selection superseded this one.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the board stays on the list with a notice.
    pub async fn open(&self, id: PostId) -> Result<bool, ClientError> {
        let Some(token) = self.apply(BoardState::begin_detail) else {
            return Ok(false);
        };
        log::debug!("opening post {id} (token {token})");
        let result = self.api.get_post(id).await;
        self.apply(|s| s.finish_detail(token, result)).unwrap_or(Ok(false))
    }

    pub fn go_home(&self) {
        self.apply(BoardState::go_home);
    }

    /// # Errors
    ///
    /// See [`BoardState::start_create`].
    pub fn start_create(&self) -> Result<(), ClientError> {
        self.apply_result(BoardState::start_create)
    }

    /// # Errors
    ///
    /// See [`BoardState::start_edit`].
    pub fn start_edit(&self) -> Result<(), ClientError> {
        self.apply_result(BoardState::start_edit)
    }

    /// # Errors
    ///
    /// See [`BoardState::back`].
    pub fn back(&self) -> Result<(), ClientError> {
        self.apply_result(BoardState::back)
    }

    /// # Errors
    ///
    /// See [`BoardState::cancel`].
    pub fn cancel(&self) -> Result<(), ClientError> {
        self.apply_result(BoardState::cancel)
    }

    /// # Errors
    ///
    /// See [`BoardState::request_delete`].
    pub fn request_delete(&self) -> Result<(), ClientError> {
        self.apply_result(BoardState::request_delete)
    }

    /// Submit the create or edit form.
    ///
    /// Validation runs before anything is sent. On success the list is
    /// re-fetched and its result returned.
    ///
    /// # Errors
    ///
    /// Validation, transition, request, or follow-up list errors.
    pub async fn save(&self, draft: PostDraft) -> Result<(), ClientError> {
        let target = self.apply_result(|s| s.begin_save(&draft))?;
        match target {
            SaveTarget::Create => {
                log::debug!("creating post");
                let result = self.api.create_post(&draft).await;
                self.apply_result(|s| s.finish_create(result)).inspect_err(|e| {
                    log::warn!("post create failed: {e}");
                })?;
            }
            SaveTarget::Update(id) => {
                log::debug!("updating post {id}");
                let result = self.api.update_post(id, &draft).await;
                self.apply_result(|s| s.finish_update(result)).inspect_err(|e| {
                    log::warn!("post {id} update failed: {e}");
                })?;
            }
        }
        self.refresh().await
    }

    /// Delete the post awaiting confirmation, then re-fetch the list.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unconfirmed`] if no confirmation step preceded this
    /// call, otherwise request or follow-up list errors.
    pub async fn confirm_delete(&self) -> Result<(), ClientError> {
        let post = self.apply_result(BoardState::begin_delete)?;
        let id = post.id;
        log::debug!("deleting post {id}");
        let result = self.api.delete_post(id).await;
        if matches!(result, Err(ClientError::NotFound)) {
            log::debug!("post {id} already deleted");
        }
        self.apply_result(|s| s.finish_delete(post, result)).inspect_err(|e| {
            log::warn!("post {id} delete failed: {e}");
        })?;
        self.refresh().await
    }
}
