//! One row of the post list.

use leptos::prelude::*;

use crate::net::types::{Post, PostId};
use crate::util::format::format_timestamp;

#[component]
pub fn PostItem(post: Post, on_open: Callback<PostId>) -> impl IntoView {
    let id = post.id;
    let date = format_timestamp(post.created_at.as_deref());

    view! {
        <button class="post-item" on:click=move |_| on_open.run(id)>
            <span class="post-item__title">{post.title}</span>
            <span class="post-item__date">{date}</span>
        </button>
    }
}
