//! Read-only post view with edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::format::format_timestamp;

#[component]
pub fn PostDetail(
    post: Post,
    on_back: Callback<()>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let created = format_timestamp(post.created_at.as_deref());
    let edited = post
        .was_edited()
        .then(|| format!(" (edited {})", format_timestamp(post.updated_at.as_deref())));

    view! {
        <article class="post-detail">
            <button class="post-detail__back" on:click=move |_| on_back.run(())>
                "← Back to list"
            </button>
            <h2 class="post-detail__title">{post.title}</h2>
            <p class="post-detail__meta">{created}{edited}</p>
            <hr class="post-detail__divider"/>
            <p class="post-detail__content">{post.content}</p>
            <div class="post-detail__actions">
                <button class="btn btn--primary" on:click=move |_| on_edit.run(())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
