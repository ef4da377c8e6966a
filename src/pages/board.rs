//! Board page: post list, detail, create/edit forms, and delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns its `BoardState` signal and a `BoardController` over the
//! HTTP posts client. Nothing survives navigation away from the route; the
//! list is fetched again on every mount.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::post_detail::PostDetail;
use crate::components::post_form::PostForm;
use crate::components::post_item::PostItem;
use crate::config::AppConfig;
use crate::controller::board::BoardController;
use crate::net::posts::HttpPostsApi;
use crate::net::types::{PostDraft, PostId};
use crate::state::board::{BoardState, BoardView};

type Controller = BoardController<HttpPostsApi>;

fn log_rejected(action: &str, result: Result<(), crate::error::ClientError>) {
    if let Err(e) = result {
        log::debug!("board {action} rejected: {e}");
    }
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let state = RwSignal::new(BoardState::default());
    let ctrl = StoredValue::new(Controller::new(HttpPostsApi::new(&config), state));

    leptos::task::spawn_local({
        let ctrl = ctrl.get_value();
        async move {
            let _ = ctrl.refresh().await;
        }
    });

    // Only re-render the main region when the view actually changes, so form
    // inputs survive loading/saving flag updates.
    let view_state = Memo::new(move |_| state.with(|s| s.view.clone()));
    let saving = Signal::derive(move || state.with(|s| s.saving));
    let deleting = Signal::derive(move || state.with(|s| s.deleting));

    let on_open = Callback::new(move |id: PostId| {
        let ctrl = ctrl.get_value();
        leptos::task::spawn_local(async move {
            let _ = ctrl.open(id).await;
        });
    });
    let on_save = Callback::new(move |draft: PostDraft| {
        let ctrl = ctrl.get_value();
        leptos::task::spawn_local(async move {
            log_rejected("save", ctrl.save(draft).await);
        });
    });
    let on_confirm_delete = Callback::new(move |()| {
        let ctrl = ctrl.get_value();
        leptos::task::spawn_local(async move {
            log_rejected("delete", ctrl.confirm_delete().await);
        });
    });
    let on_cancel = Callback::new(move |()| log_rejected("cancel", ctrl.with_value(Controller::cancel)));
    let on_back = Callback::new(move |()| log_rejected("back", ctrl.with_value(Controller::back)));
    let on_edit = Callback::new(move |()| log_rejected("edit", ctrl.with_value(Controller::start_edit)));
    let on_delete = Callback::new(move |()| log_rejected("delete", ctrl.with_value(Controller::request_delete)));

    let post_list = move || {
        let (posts, loading) = state.with(|s| (s.posts.clone(), s.is_loading()));
        if loading {
            view! { <p class="board-page__loading">"Loading..."</p> }.into_any()
        } else if posts.is_empty() {
            view! { <p class="board-page__empty">"No posts yet."</p> }.into_any()
        } else {
            posts
                .into_iter()
                .map(|post| view! { <PostItem post=post on_open=on_open/> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1 class="board-page__logo" on:click=move |_| ctrl.with_value(Controller::go_home)>
                    "Board"
                </h1>
                <Show when=move || view_state.get() == BoardView::List>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| log_rejected("create", ctrl.with_value(Controller::start_create))
                    >
                        "+ New post"
                    </button>
                </Show>
            </header>

            <main class="board-page__main">
                <Show when=move || state.with(|s| s.notice.is_some())>
                    <p class="board-page__notice">{move || state.with(|s| s.notice.clone()).unwrap_or_default()}</p>
                </Show>
                {move || match view_state.get() {
                    BoardView::List => post_list.into_any(),
                    BoardView::Create => {
                        view! { <PostForm saving=saving on_save=on_save on_cancel=on_cancel/> }.into_any()
                    }
                    BoardView::Detail(post) => {
                        view! {
                            <PostDetail post=post on_back=on_back on_edit=on_edit on_delete=on_delete/>
                        }
                            .into_any()
                    }
                    BoardView::Edit(post) => {
                        view! {
                            <PostForm initial=post saving=saving on_save=on_save on_cancel=on_cancel/>
                        }
                            .into_any()
                    }
                    BoardView::ConfirmingDelete(post) => {
                        let message = format!("Delete \"{}\"? This cannot be undone.", post.title);
                        view! {
                            <PostDetail post=post on_back=on_back on_edit=on_edit on_delete=on_delete/>
                            <ConfirmDialog
                                title="Delete post"
                                message=message
                                busy=deleting
                                on_confirm=on_confirm_delete
                                on_cancel=on_cancel
                            />
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
