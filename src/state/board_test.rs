use super::*;

// =============================================================
// Helpers
// =============================================================

fn post(id: i64, title: &str) -> Post {
    Post {
        id: PostId(id),
        title: title.to_owned(),
        content: format!("{title} body"),
        created_at: Some("2025-03-01T09:00:00".to_owned()),
        updated_at: None,
    }
}

fn state_in(view: BoardView) -> BoardState {
    BoardState { view, ..BoardState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn board_state_starts_on_empty_list() {
    let state = BoardState::default();
    assert_eq!(state.view, BoardView::List);
    assert!(state.posts.is_empty());
    assert!(!state.is_loading());
    assert_eq!(state.selected(), None);
    assert_eq!(state.detail_seq, 0);
}

#[test]
fn view_names_are_distinct() {
    let p = post(1, "A");
    let names = [
        BoardView::List.name(),
        BoardView::Create.name(),
        BoardView::Detail(p.clone()).name(),
        BoardView::Edit(p.clone()).name(),
        BoardView::ConfirmingDelete(p).name(),
    ];
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// List
// =============================================================

#[test]
fn finish_list_replaces_posts() {
    let mut state = BoardState::default();
    state.begin_list();
    assert!(state.is_loading());
    state.finish_list(Ok(vec![post(1, "A"), post(2, "B")])).unwrap();
    assert!(!state.is_loading());
    assert_eq!(state.posts.len(), 2);
}

#[test]
fn finish_list_failure_keeps_previous_posts() {
    let mut state = BoardState { posts: vec![post(1, "A")], ..BoardState::default() };
    state.begin_list();
    let err = state.finish_list(Err(ClientError::Network("offline".into()))).unwrap_err();
    assert_eq!(err.error_code(), "E_NETWORK");
    assert_eq!(state.posts.len(), 1);
    assert!(state.notice.is_some());
    assert!(!state.list_loading);
}

// =============================================================
// Detail
// =============================================================

#[test]
fn finish_detail_enters_detail() {
    let mut state = BoardState::default();
    let token = state.begin_detail();
    assert!(state.detail_loading);
    assert_eq!(state.finish_detail(token, Ok(post(1, "A"))), Ok(true));
    assert_eq!(state.view, BoardView::Detail(post(1, "A")));
    assert!(!state.detail_loading);
}

#[test]
fn finish_detail_not_found_stays_on_list_with_notice() {
    let mut state = BoardState::default();
    let token = state.begin_detail();
    assert_eq!(state.finish_detail(token, Err(ClientError::NotFound)), Err(ClientError::NotFound));
    assert_eq!(state.view, BoardView::List);
    assert_eq!(state.notice.as_deref(), Some("Post not found."));
}

#[test]
fn stale_detail_response_is_discarded() {
    let mut state = BoardState::default();
    let first = state.begin_detail();
    let second = state.begin_detail();
    assert_eq!(state.finish_detail(second, Ok(post(2, "B"))), Ok(true));
    assert_eq!(state.finish_detail(first, Ok(post(1, "A"))), Ok(false));
    assert_eq!(state.view, BoardView::Detail(post(2, "B")));
}

#[test]
fn stale_detail_error_is_discarded() {
    let mut state = BoardState::default();
    let first = state.begin_detail();
    let second = state.begin_detail();
    assert_eq!(state.finish_detail(second, Ok(post(2, "B"))), Ok(true));
    assert_eq!(state.finish_detail(first, Err(ClientError::NotFound)), Ok(false));
    assert_eq!(state.notice, None);
}

#[test]
fn go_home_invalidates_pending_detail() {
    let mut state = BoardState::default();
    let token = state.begin_detail();
    state.go_home();
    assert_eq!(state.finish_detail(token, Ok(post(1, "A"))), Ok(false));
    assert_eq!(state.view, BoardView::List);
    assert!(!state.is_loading());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn start_create_only_from_list() {
    let mut state = BoardState::default();
    state.start_create().unwrap();
    assert_eq!(state.view, BoardView::Create);
    assert_eq!(state.start_create(), Err(ClientError::InvalidTransition { action: "create" }));
}

#[test]
fn cancel_create_returns_to_list() {
    let mut state = state_in(BoardView::Create);
    state.cancel().unwrap();
    assert_eq!(state.view, BoardView::List);
}

#[test]
fn edit_and_cancel_round_trips_to_detail() {
    let mut state = state_in(BoardView::Detail(post(1, "A")));
    state.start_edit().unwrap();
    assert_eq!(state.view, BoardView::Edit(post(1, "A")));
    state.cancel().unwrap();
    assert_eq!(state.view, BoardView::Detail(post(1, "A")));
}

#[test]
fn start_edit_requires_detail() {
    let mut state = BoardState::default();
    assert_eq!(state.start_edit(), Err(ClientError::InvalidTransition { action: "edit" }));
    assert_eq!(state.view, BoardView::List);
}

#[test]
fn back_from_detail_goes_to_list() {
    let mut state = state_in(BoardView::Detail(post(1, "A")));
    state.back().unwrap();
    assert_eq!(state.view, BoardView::List);
}

#[test]
fn cancel_from_list_is_rejected() {
    let mut state = BoardState::default();
    assert!(state.cancel().is_err());
}

#[test]
fn selected_tracks_carried_post() {
    assert_eq!(state_in(BoardView::Edit(post(4, "D"))).selected(), Some(&post(4, "D")));
    assert_eq!(state_in(BoardView::ConfirmingDelete(post(4, "D"))).selected(), Some(&post(4, "D")));
    assert_eq!(state_in(BoardView::Create).selected(), None);
}

// =============================================================
// Save
// =============================================================

#[test]
fn begin_save_blank_title_changes_nothing() {
    let mut state = state_in(BoardView::Create);
    let err = state.begin_save(&PostDraft::new("   ", "body")).unwrap_err();
    assert_eq!(err, ClientError::Validation { field: "title" });
    assert!(!state.saving);
    assert_eq!(state.view, BoardView::Create);
}

#[test]
fn begin_save_targets_follow_view() {
    let mut create = state_in(BoardView::Create);
    assert_eq!(create.begin_save(&PostDraft::new("t", "c")), Ok(SaveTarget::Create));

    let mut edit = state_in(BoardView::Edit(post(9, "I")));
    assert_eq!(edit.begin_save(&PostDraft::new("t", "c")), Ok(SaveTarget::Update(PostId(9))));
}

#[test]
fn begin_save_rejects_double_submit() {
    let mut state = state_in(BoardView::Create);
    state.begin_save(&PostDraft::new("t", "c")).unwrap();
    assert_eq!(
        state.begin_save(&PostDraft::new("t", "c")),
        Err(ClientError::InvalidTransition { action: "save" })
    );
}

#[test]
fn begin_save_outside_form_is_rejected() {
    let mut state = state_in(BoardView::Detail(post(1, "A")));
    assert!(state.begin_save(&PostDraft::new("t", "c")).is_err());
}

#[test]
fn finish_create_success_returns_to_list() {
    let mut state = state_in(BoardView::Create);
    state.begin_save(&PostDraft::new("t", "c")).unwrap();
    state.finish_create(Ok(post(3, "t"))).unwrap();
    assert_eq!(state.view, BoardView::List);
    assert!(!state.saving);
}

#[test]
fn finish_create_failure_keeps_form() {
    let mut state = state_in(BoardView::Create);
    state.begin_save(&PostDraft::new("t", "c")).unwrap();
    assert!(state.finish_create(Err(ClientError::Status { status: 500 })).is_err());
    assert_eq!(state.view, BoardView::Create);
    assert!(state.notice.is_some());
    assert!(!state.saving);
}

#[test]
fn finish_update_shows_server_record() {
    let mut state = state_in(BoardView::Edit(post(1, "A")));
    state.begin_save(&PostDraft::new("A2", "new")).unwrap();
    let mut updated = post(1, "A2");
    updated.updated_at = Some("2025-03-02T00:00:00".to_owned());
    state.finish_update(Ok(updated.clone())).unwrap();
    assert_eq!(state.view, BoardView::Detail(updated));
}

#[test]
fn finish_update_failure_stays_in_edit() {
    let mut state = state_in(BoardView::Edit(post(1, "A")));
    state.begin_save(&PostDraft::new("A2", "new")).unwrap();
    assert!(state.finish_update(Err(ClientError::NotFound)).is_err());
    assert_eq!(state.view, BoardView::Edit(post(1, "A")));
}

#[test]
fn late_create_response_keeps_newer_detail() {
    let mut state = state_in(BoardView::Create);
    state.begin_save(&PostDraft::new("t", "c")).unwrap();
    state.cancel().unwrap();
    let token = state.begin_detail();
    state.finish_detail(token, Ok(post(7, "G"))).unwrap();

    state.finish_create(Ok(post(8, "t"))).unwrap();
    assert_eq!(state.view, BoardView::Detail(post(7, "G")));
    assert!(!state.saving);
    assert_eq!(state.save_origin, None);
}

#[test]
fn late_update_response_keeps_delete_confirmation() {
    let mut state = state_in(BoardView::Edit(post(1, "A")));
    state.begin_save(&PostDraft::new("A2", "new")).unwrap();
    state.cancel().unwrap();
    state.request_delete().unwrap();

    let updated = post(1, "A2");
    state.finish_update(Ok(updated.clone())).unwrap();
    assert_eq!(state.view, BoardView::ConfirmingDelete(updated));
    assert!(!state.saving);
}

#[test]
fn late_update_response_leaves_other_post_alone() {
    let mut state = state_in(BoardView::Edit(post(1, "A")));
    state.begin_save(&PostDraft::new("A2", "new")).unwrap();
    state.go_home();
    let token = state.begin_detail();
    state.finish_detail(token, Ok(post(2, "B"))).unwrap();

    state.finish_update(Ok(post(1, "A2"))).unwrap();
    assert_eq!(state.view, BoardView::Detail(post(2, "B")));
}

#[test]
fn late_create_failure_still_reports_notice() {
    let mut state = state_in(BoardView::Create);
    state.begin_save(&PostDraft::new("t", "c")).unwrap();
    state.go_home();

    assert!(state.finish_create(Err(ClientError::Status { status: 500 })).is_err());
    assert_eq!(state.view, BoardView::List);
    assert!(state.notice.is_some());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn request_then_cancel_delete_leaves_detail_unchanged() {
    let mut state = state_in(BoardView::Detail(post(1, "A")));
    state.request_delete().unwrap();
    assert_eq!(state.view, BoardView::ConfirmingDelete(post(1, "A")));
    state.cancel().unwrap();
    assert_eq!(state.view, BoardView::Detail(post(1, "A")));
    assert!(!state.deleting);
}

#[test]
fn begin_delete_without_confirmation_is_unconfirmed() {
    let mut state = state_in(BoardView::Detail(post(1, "A")));
    assert_eq!(state.begin_delete(), Err(ClientError::Unconfirmed));
    assert_eq!(state.view, BoardView::Detail(post(1, "A")));
}

#[test]
fn begin_delete_from_list_is_invalid() {
    let mut state = BoardState::default();
    assert_eq!(state.begin_delete(), Err(ClientError::InvalidTransition { action: "delete" }));
}

#[test]
fn finish_delete_success_goes_to_list() {
    let mut state = state_in(BoardView::ConfirmingDelete(post(1, "A")));
    let target = state.begin_delete().unwrap();
    assert!(state.deleting);
    state.finish_delete(target, Ok(())).unwrap();
    assert_eq!(state.view, BoardView::List);
    assert!(!state.deleting);
}

#[test]
fn finish_delete_not_found_counts_as_deleted() {
    let mut state = state_in(BoardView::ConfirmingDelete(post(1, "A")));
    let target = state.begin_delete().unwrap();
    assert_eq!(state.finish_delete(target, Err(ClientError::NotFound)), Ok(()));
    assert_eq!(state.view, BoardView::List);
}

#[test]
fn finish_delete_failure_returns_to_detail() {
    let mut state = state_in(BoardView::ConfirmingDelete(post(1, "A")));
    let target = state.begin_delete().unwrap();
    assert!(state.finish_delete(target, Err(ClientError::Network("down".into()))).is_err());
    assert_eq!(state.view, BoardView::Detail(post(1, "A")));
    assert!(state.notice.is_some());
}

#[test]
fn late_delete_failure_after_cancel_keeps_current_view() {
    let mut state = state_in(BoardView::ConfirmingDelete(post(1, "A")));
    let target = state.begin_delete().unwrap();
    state.cancel().unwrap();
    state.go_home();

    assert!(state.finish_delete(target, Err(ClientError::Network("down".into()))).is_err());
    assert_eq!(state.view, BoardView::List);
    assert!(state.notice.is_some());
    assert!(!state.deleting);
}

#[test]
fn late_delete_success_leaves_detail_of_deleted_post() {
    let mut state = state_in(BoardView::ConfirmingDelete(post(1, "A")));
    let target = state.begin_delete().unwrap();
    state.cancel().unwrap();
    assert_eq!(state.view, BoardView::Detail(post(1, "A")));

    state.finish_delete(target, Ok(())).unwrap();
    assert_eq!(state.view, BoardView::List);
}
