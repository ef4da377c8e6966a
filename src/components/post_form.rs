//! Create/edit form shared by both board form views.

use leptos::prelude::*;

use crate::net::types::{Post, PostDraft};

/// Title + content form. Blank fields show a hint and never reach `on_save`.
#[component]
pub fn PostForm(
    #[prop(optional)] initial: Option<Post>,
    saving: Signal<bool>,
    on_save: Callback<PostDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = initial.is_some();
    let draft = initial.as_ref().map(PostDraft::from_post).unwrap_or_default();
    let title = RwSignal::new(draft.title);
    let content = RwSignal::new(draft.content);
    let hint = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = PostDraft::new(title.get_untracked(), content.get_untracked());
        if let Err(e) = draft.validate() {
            hint.set(Some(e.user_message()));
            return;
        }
        hint.set(None);
        on_save.run(draft);
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <input
                class="post-form__input"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="post-form__input post-form__content"
                placeholder="Content"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || hint.get().is_some()>
                <p class="post-form__hint">{move || hint.get().unwrap_or_default()}</p>
            </Show>
            <div class="post-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {if editing { "Save changes" } else { "Publish" }}
                </button>
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
