//! Blog Page
//!
//! User-authored posts, newest first, with create/edit/delete through a
//! modal form. Every change is written back to local storage.

use folio::entries::{display_date, BlogForm, BlogPost};
use folio::Route as Screen;
use leptos::*;

use crate::components::{CardActions, EmptyState, Modal, PageShell, TextArea, TextField};
use crate::state::{use_global_state, EditMode, EntryEditor};

#[component]
pub fn Blog() -> impl IntoView {
    let state = use_global_state();
    let key = state.config.with_value(|c| c.blog_key.clone());
    let editor = EntryEditor::<BlogForm>::new(&key);

    view! {
        <PageShell
            current=Screen::Blog
            subtitle="Notes, write-ups and things I learned along the way"
            action_label="Add New Post"
            on_action=move || editor.open_create()
            persistent=editor.persistent
        >
            <Show
                when=move || !editor.is_empty()
                fallback=|| view! {
                    <EmptyState message="No blog posts yet. Start by creating your first post!" />
                }
            >
                <div class="space-y-6">
                    <For
                        each=move || editor.entries()
                        key=|post| post.clone()
                        children=move |post| view! { <PostCard post=post editor=editor /> }
                    />
                </div>
            </Show>

            <Show when=move || editor.is_open()>
                <PostModal editor=editor />
            </Show>
        </PageShell>
    }
}

#[component]
fn PostCard(post: BlogPost, editor: EntryEditor<BlogForm>) -> impl IntoView {
    let state = use_global_state();
    let id = post.id.clone();
    let editing = post.clone();

    view! {
        <article class="bg-slate-800/50 border border-emerald-500/20 rounded-2xl p-8">
            <div class="flex justify-between items-start gap-4 mb-4">
                <div>
                    <h2 class="text-2xl font-bold mb-1">{post.title}</h2>
                    <p class="text-sm text-gray-400">{display_date(&post.date)}</p>
                </div>
                <CardActions
                    on_edit=move || editor.open_edit(&editing)
                    on_delete=move || editor.delete(&id, "Are you sure you want to delete this post?", &state)
                />
            </div>
            <p class="text-gray-300 leading-relaxed whitespace-pre-wrap">{post.content}</p>
        </article>
    }
}

#[component]
fn PostModal(editor: EntryEditor<BlogForm>) -> impl IntoView {
    let state = use_global_state();
    let editing = editor.mode.with_untracked(|m| m.as_ref().is_some_and(EditMode::is_edit));
    let (title, submit_label) = if editing {
        ("Edit Post", "Update Post")
    } else {
        ("New Post", "Create Post")
    };

    view! {
        <Modal
            title=title
            submit_label=submit_label
            on_close=move || editor.close()
            on_submit=move || editor.save(&state, "Post")
        >
            <TextField
                label="Title"
                placeholder="Blog post title"
                value=move || editor.form.with(|f| f.title.clone())
                on_input=move |v| editor.form.update(|f| f.title = v)
            />
            <TextField
                label="Date"
                input_type="date"
                value=move || editor.form.with(|f| f.date.clone())
                on_input=move |v| editor.form.update(|f| f.date = v)
            />
            <TextArea
                label="Content"
                placeholder="Write your blog post content here..."
                rows=10
                value=move || editor.form.with(|f| f.content.clone())
                on_input=move |v| editor.form.update(|f| f.content = v)
            />
        </Modal>
    }
}
