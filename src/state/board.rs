//! Board view-state machine.
//!
//! DESIGN
//! ======
//! `BoardView` is a tagged enum so the views that need a post (detail, edit,
//! delete confirmation) carry it structurally. Every transition here is
//! synchronous and pure; `controller::board` wraps them around the network
//! calls. Detail fetches are sequenced by `detail_seq` so a slow response for
//! an earlier selection can never replace a later one. Saves and deletes
//! record `view_seq` when they start and only move the view on completion if
//! the user has not navigated since.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::error::ClientError;
use crate::net::types::{Post, PostDraft, PostId};

/// Which board screen is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoardView {
    #[default]
    List,
    Create,
    Detail(Post),
    Edit(Post),
    /// Waiting for the user to confirm deletion of the carried post.
    ConfirmingDelete(Post),
}

impl BoardView {
    /// Stable tag for logs and CSS modifiers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Detail(_) => "detail",
            Self::Edit(_) => "edit",
            Self::ConfirmingDelete(_) => "confirm-delete",
        }
    }
}

/// What a validated save will dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(PostId),
}

/// Posts list plus the current view.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub posts: Vec<Post>,
    pub view: BoardView,
    pub list_loading: bool,
    pub detail_loading: bool,
    pub saving: bool,
    pub deleting: bool,
    /// Inline message for the last failed read or mutation.
    pub notice: Option<String>,
    /// Token of the most recent detail request.
    pub detail_seq: u64,
    /// Bumped on every user navigation.
    pub view_seq: u64,
    /// `view_seq` when the in-flight save started.
    pub save_origin: Option<u64>,
    /// `view_seq` when the in-flight delete started.
    pub delete_origin: Option<u64>,
}

impl BoardState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.list_loading || self.detail_loading
    }

    /// The post carried by the current view, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Post> {
        match &self.view {
            BoardView::Detail(post) | BoardView::Edit(post) | BoardView::ConfirmingDelete(post) => Some(post),
            BoardView::List | BoardView::Create => None,
        }
    }

    // -------------------------------------------------------------------------
    // list
    // -------------------------------------------------------------------------

    pub fn begin_list(&mut self) {
        self.list_loading = true;
    }

    /// Store a list response. On failure the previous posts are kept.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after recording it as a notice.
    pub fn finish_list(&mut self, result: Result<Vec<Post>, ClientError>) -> Result<(), ClientError> {
        self.list_loading = false;
        match result {
            Ok(posts) => {
                self.posts = posts;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(err.user_message());
                Err(err)
            }
        }
    }

    // -------------------------------------------------------------------------
    // detail
    // -------------------------------------------------------------------------

    /// Start a detail fetch and return its token.
    pub fn begin_detail(&mut self) -> u64 {
        self.view_seq += 1;
        self.detail_seq += 1;
        self.detail_loading = true;
        self.notice = None;
        self.detail_seq
    }

    /// Apply a detail response if `token` is still the latest request.
    ///
    /// Returns `Ok(false)` when the response is stale and was discarded. A
    /// failed fetch leaves the board on the list with a notice.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when it belongs to the latest request.
    pub fn finish_detail(&mut self, token: u64, result: Result<Post, ClientError>) -> Result<bool, ClientError> {
        if token != self.detail_seq {
            return Ok(false);
        }
        self.detail_loading = false;
        match result {
            Ok(post) => {
                self.view = BoardView::Detail(post);
                Ok(true)
            }
            Err(err) => {
                self.view = BoardView::List;
                self.notice = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Drop any in-flight detail request.
    fn invalidate_detail(&mut self) {
        self.detail_seq += 1;
        self.detail_loading = false;
    }

    /// Switch views on user action.
    fn navigate(&mut self, view: BoardView) {
        self.view_seq += 1;
        self.view = view;
        self.notice = None;
    }

    /// Replace the carried post if the current view shows the same record.
    fn replace_selected(&mut self, updated: Post) {
        match &mut self.view {
            BoardView::Detail(post) | BoardView::Edit(post) | BoardView::ConfirmingDelete(post)
                if post.id == updated.id =>
            {
                *post = updated;
            }
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // navigation
    // -------------------------------------------------------------------------

    /// Return to the list from any view.
    pub fn go_home(&mut self) {
        self.invalidate_detail();
        self.navigate(BoardView::List);
    }

    /// # Errors
    ///
    /// [`ClientError::InvalidTransition`] unless the list is showing.
    pub fn start_create(&mut self) -> Result<(), ClientError> {
        if self.view != BoardView::List {
            return Err(ClientError::InvalidTransition { action: "create" });
        }
        self.invalidate_detail();
        self.navigate(BoardView::Create);
        Ok(())
    }

    /// # Errors
    ///
    /// [`ClientError::InvalidTransition`] unless a detail view is showing.
    pub fn back(&mut self) -> Result<(), ClientError> {
        if !matches!(self.view, BoardView::Detail(_)) {
            return Err(ClientError::InvalidTransition { action: "go back" });
        }
        self.navigate(BoardView::List);
        Ok(())
    }

    /// # Errors
    ///
    /// [`ClientError::InvalidTransition`] unless a detail view is showing.
    pub fn start_edit(&mut self) -> Result<(), ClientError> {
        let BoardView::Detail(post) = &self.view else {
            return Err(ClientError::InvalidTransition { action: "edit" });
        };
        let post = post.clone();
        self.navigate(BoardView::Edit(post));
        Ok(())
    }

    /// Leave a form or confirmation: create goes to the list, edit and
    /// delete confirmation go back to the post's detail.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidTransition`] from list or detail.
    pub fn cancel(&mut self) -> Result<(), ClientError> {
        let next = match &self.view {
            BoardView::Create => BoardView::List,
            BoardView::Edit(post) | BoardView::ConfirmingDelete(post) => BoardView::Detail(post.clone()),
            BoardView::List | BoardView::Detail(_) => {
                return Err(ClientError::InvalidTransition { action: "cancel" });
            }
        };
        self.navigate(next);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // save
    // -------------------------------------------------------------------------

    /// Validate a form submission and mark a save in flight.
    ///
    /// Nothing changes when this returns an error, so no request is sent.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidTransition`] outside create/edit or while a save
    /// is already in flight; [`ClientError::Validation`] for blank fields.
    pub fn begin_save(&mut self, draft: &PostDraft) -> Result<SaveTarget, ClientError> {
        let target = match &self.view {
            BoardView::Create => SaveTarget::Create,
            BoardView::Edit(post) => SaveTarget::Update(post.id),
            _ => return Err(ClientError::InvalidTransition { action: "save" }),
        };
        if self.saving {
            return Err(ClientError::InvalidTransition { action: "save" });
        }
        draft.validate()?;
        self.saving = true;
        self.save_origin = Some(self.view_seq);
        self.notice = None;
        Ok(target)
    }

    /// Whether the user is still on the view that started the save.
    fn take_save_origin(&mut self) -> bool {
        self.saving = false;
        self.save_origin.take() == Some(self.view_seq)
    }

    /// Apply a create response: back to the list on success, stay on the
    /// form with a notice on failure. If the user left the form meanwhile,
    /// the view is left alone.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub fn finish_create(&mut self, result: Result<Post, ClientError>) -> Result<(), ClientError> {
        let current = self.take_save_origin();
        match result {
            Ok(_) => {
                if current {
                    self.view = BoardView::List;
                }
                Ok(())
            }
            Err(err) => {
                self.notice = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Apply an update response: the server record becomes the selected post
    /// and the detail view shows it. If the user navigated away meanwhile,
    /// only a view still carrying the same post picks up the new record.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub fn finish_update(&mut self, result: Result<Post, ClientError>) -> Result<(), ClientError> {
        let current = self.take_save_origin();
        match result {
            Ok(updated) if current => {
                self.view = BoardView::Detail(updated);
                Ok(())
            }
            Ok(updated) => {
                self.replace_selected(updated);
                Ok(())
            }
            Err(err) => {
                self.notice = Some(err.user_message());
                Err(err)
            }
        }
    }

    // -------------------------------------------------------------------------
    // delete
    // -------------------------------------------------------------------------

    /// Ask for confirmation before deleting the post in detail.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidTransition`] unless a detail view is showing.
    pub fn request_delete(&mut self) -> Result<(), ClientError> {
        let BoardView::Detail(post) = &self.view else {
            return Err(ClientError::InvalidTransition { action: "delete" });
        };
        let post = post.clone();
        self.view_seq += 1;
        self.view = BoardView::ConfirmingDelete(post);
        Ok(())
    }

    /// Confirm the pending delete and return the post to remove.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unconfirmed`] from detail (no confirmation was shown),
    /// [`ClientError::InvalidTransition`] from anywhere else or while a delete
    /// is already in flight.
    pub fn begin_delete(&mut self) -> Result<Post, ClientError> {
        match &self.view {
            BoardView::ConfirmingDelete(post) if !self.deleting => {
                let post = post.clone();
                self.deleting = true;
                self.delete_origin = Some(self.view_seq);
                Ok(post)
            }
            BoardView::Detail(_) => Err(ClientError::Unconfirmed),
            _ => Err(ClientError::InvalidTransition { action: "delete" }),
        }
    }

    /// Apply a delete response. A post that is already gone counts as deleted.
    ///
    /// After a success the board leaves any view still showing the deleted
    /// post. A failure returns to the post's detail only if the confirmation
    /// is still the current view.
    ///
    /// # Errors
    ///
    /// Returns any other request error.
    pub fn finish_delete(&mut self, post: Post, result: Result<(), ClientError>) -> Result<(), ClientError> {
        self.deleting = false;
        let current = self.delete_origin.take() == Some(self.view_seq);
        match result {
            Ok(()) | Err(ClientError::NotFound) => {
                if current || self.selected().is_some_and(|p| p.id == post.id) {
                    self.navigate(BoardView::List);
                }
                Ok(())
            }
            Err(err) => {
                if current {
                    self.view = BoardView::Detail(post);
                }
                self.notice = Some(err.user_message());
                Err(err)
            }
        }
    }
}
