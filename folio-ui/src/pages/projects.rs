//! Projects Page
//!
//! Same create/edit/delete flow as the blog, with technology tags and an
//! optional external link per project.

use folio::entries::{display_date, Project, ProjectForm};
use folio::Route as Screen;
use leptos::*;

use crate::components::{CardActions, EmptyState, Modal, PageShell, TextArea, TextField};
use crate::state::{use_global_state, EditMode, EntryEditor};

#[component]
pub fn Projects() -> impl IntoView {
    let state = use_global_state();
    let key = state.config.with_value(|c| c.projects_key.clone());
    let editor = EntryEditor::<ProjectForm>::new(&key);

    view! {
        <PageShell
            current=Screen::Projects
            subtitle="Things I have built, shipped or tinkered with"
            action_label="Add New Project"
            on_action=move || editor.open_create()
            persistent=editor.persistent
        >
            <Show
                when=move || !editor.is_empty()
                fallback=|| view! {
                    <EmptyState message="No projects yet. Start by creating your first project!" />
                }
            >
                <div class="grid md:grid-cols-2 gap-6">
                    <For
                        each=move || editor.entries()
                        key=|project| project.clone()
                        children=move |project| view! { <ProjectCard project=project editor=editor /> }
                    />
                </div>
            </Show>

            <Show when=move || editor.is_open()>
                <ProjectModal editor=editor />
            </Show>
        </PageShell>
    }
}

#[component]
fn ProjectCard(project: Project, editor: EntryEditor<ProjectForm>) -> impl IntoView {
    let state = use_global_state();
    let id = project.id.clone();
    let editing = project.clone();

    view! {
        <article class="bg-slate-800/50 border border-emerald-500/20 rounded-2xl p-6 flex flex-col">
            <div class="flex justify-between items-start gap-4 mb-3">
                <div>
                    <h2 class="text-xl font-bold mb-1">{project.title}</h2>
                    <p class="text-sm text-gray-400">{display_date(&project.date)}</p>
                </div>
                <CardActions
                    on_edit=move || editor.open_edit(&editing)
                    on_delete=move || editor.delete(&id, "Are you sure you want to delete this project?", &state)
                />
            </div>

            <p class="text-gray-300 leading-relaxed whitespace-pre-wrap mb-4 flex-1">{project.description}</p>

            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .technologies
                    .into_iter()
                    .map(|tech| view! {
                        <span class="px-3 py-1 bg-emerald-500/10 border border-emerald-500/30 text-emerald-300
                                     rounded-full text-xs">
                            {tech}
                        </span>
                    })
                    .collect_view()}
            </div>

            {project.link.map(|link| view! {
                <a
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-emerald-400 hover:text-emerald-300 text-sm font-semibold"
                >
                    "View Project →"
                </a>
            })}
        </article>
    }
}

#[component]
fn ProjectModal(editor: EntryEditor<ProjectForm>) -> impl IntoView {
    let state = use_global_state();
    let editing = editor.mode.with_untracked(|m| m.as_ref().is_some_and(EditMode::is_edit));
    let (title, submit_label) = if editing {
        ("Edit Project", "Update Project")
    } else {
        ("New Project", "Create Project")
    };

    view! {
        <Modal
            title=title
            submit_label=submit_label
            on_close=move || editor.close()
            on_submit=move || editor.save(&state, "Project")
        >
            <TextField
                label="Title"
                placeholder="Project name"
                value=move || editor.form.with(|f| f.title.clone())
                on_input=move |v| editor.form.update(|f| f.title = v)
            />
            <TextArea
                label="Description"
                placeholder="What does it do?"
                rows=5
                value=move || editor.form.with(|f| f.description.clone())
                on_input=move |v| editor.form.update(|f| f.description = v)
            />
            <TextField
                label="Technologies"
                placeholder="e.g., Rust, Leptos, Tailwind CSS"
                value=move || editor.form.with(|f| f.technologies.clone())
                on_input=move |v| editor.form.update(|f| f.technologies = v)
            />
            <TextField
                label="Link"
                input_type="url"
                placeholder="https://example.com"
                value=move || editor.form.with(|f| f.link.clone())
                on_input=move |v| editor.form.update(|f| f.link = v)
            />
            <TextField
                label="Date"
                input_type="date"
                value=move || editor.form.with(|f| f.date.clone())
                on_input=move |v| editor.form.update(|f| f.date = v)
            />
        </Modal>
    }
}
