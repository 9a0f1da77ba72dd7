use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdRefreshCw, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::Task;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Form, Input, PageActions,
    PageHeader, PageTitle, Skeleton,
};

use crate::api::TasksApi;
use crate::format_helpers::format_due_date;
use crate::state::{NewTaskInput, TaskListState};

/// Kick off a full reload. The completion is applied through the sequence
/// tag, so an overlapping reload cannot clobber a newer one.
fn spawn_refresh(api: TasksApi, mut state: Signal<TaskListState>) {
    let seq = state.write().begin_load();
    spawn(async move {
        let result = api.list().await;
        if let Err(err) = &result {
            tracing::error!("loading tasks failed: {err}");
        }
        state.write().finish_load(seq, result);
    });
}

#[component]
pub fn TaskListPage() -> Element {
    let api = use_hook(TasksApi::from_env);
    let mut state = use_signal(TaskListState::new);
    let mut form = use_signal(NewTaskInput::default);

    // Initial load
    {
        let api = api.clone();
        use_effect(move || spawn_refresh(api.clone(), state));
    }

    let on_submit = use_callback({
        let api = api.clone();
        move |_: FormEvent| {
            // Blank title: no request, and the fields stay as typed.
            let Some(draft) = form.read().to_task() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.create(&draft).await {
                    Ok(_) => {
                        form.write().clear();
                        spawn_refresh(api, state);
                    }
                    Err(err) => {
                        tracing::error!("creating task failed: {err}");
                        state.write().mutation_failed();
                    }
                }
            });
        }
    });

    let on_toggle = use_callback({
        let api = api.clone();
        move |task: Task| {
            // Unpersisted rows have no server identity to act on.
            let Some(id) = task.id else {
                return;
            };
            let api = api.clone();
            let payload = task.toggled();
            spawn(async move {
                match api.update(id, &payload).await {
                    Ok(_) => spawn_refresh(api, state),
                    Err(err) => {
                        tracing::error!("toggling task {id} failed: {err}");
                        state.write().mutation_failed();
                    }
                }
            });
        }
    });

    let on_remove = use_callback({
        let api = api.clone();
        move |task: Task| {
            let Some(id) = task.id else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.delete(id).await {
                    Ok(_) => spawn_refresh(api, state),
                    Err(err) => {
                        tracing::error!("deleting task {id} failed: {err}");
                        state.write().mutation_failed();
                    }
                }
            });
        }
    });

    let on_reload = use_callback({
        let api = api.clone();
        move |_: MouseEvent| spawn_refresh(api.clone(), state)
    });

    let error = state.read().error().map(str::to_string);
    let loading = state.read().is_loading();
    let tasks = state.read().tasks().to_vec();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Tasks" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: on_reload,
                        Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                        "Reload"
                    }
                }
            }

            if let Some(err) = &error {
                div { class: "alert alert-error", "{err}" }
            }

            NewTaskCard { form: form, on_submit: on_submit }

            // The previous collection stays visible while a reload is in
            // flight; skeletons only before anything has been fetched.
            if loading && tasks.is_empty() {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            } else if tasks.is_empty() {
                Card {
                    CardContent {
                        p { "No tasks yet. Add the first one above." }
                    }
                }
            } else {
                ul { class: "task-list",
                    for task in tasks {
                        TaskRow {
                            task: task,
                            on_toggle: on_toggle,
                            on_remove: on_remove,
                        }
                    }
                }
            }
        }
    }
}

/// Entry form for a new task. The fields are only cleared after the backend
/// accepts the create.
#[component]
fn NewTaskCard(mut form: Signal<NewTaskInput>, on_submit: EventHandler<FormEvent>) -> Element {
    let current = form.read().clone();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "New Task" }
            }
            CardContent {
                Form { onsubmit: move |evt| on_submit.call(evt),
                    div { class: "form-row",
                        Input {
                            label: "Title",
                            placeholder: "What needs doing?",
                            value: current.title.clone(),
                            on_input: move |e: FormEvent| form.write().title = e.value(),
                        }
                        Input {
                            label: "Description",
                            value: current.description.clone(),
                            on_input: move |e: FormEvent| form.write().description = e.value(),
                        }
                        Input {
                            label: "Due",
                            input_type: "date".to_string(),
                            value: current.due_date.clone(),
                            on_input: move |e: FormEvent| form.write().due_date = e.value(),
                        }
                    }
                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Add Task"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, on_toggle: EventHandler<Task>, on_remove: EventHandler<Task>) -> Element {
    let row_class = if task.completed {
        "task-row completed"
    } else {
        "task-row"
    };
    let due_label = task.due_date.map(format_due_date);
    let toggle_task = task.clone();
    let remove_task = task.clone();

    rsx! {
        li { class: "{row_class}",
            input {
                r#type: "checkbox",
                class: "task-check",
                checked: task.completed,
                onchange: move |_| on_toggle.call(toggle_task.clone()),
            }
            div { class: "task-body",
                span { class: "task-title", "{task.title}" }
                if let Some(desc) = task.description.as_ref() {
                    span { class: "task-description", "{desc}" }
                }
            }
            if let Some(due) = due_label {
                span { class: "task-due", "Due {due}" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_remove.call(remove_task.clone()),
                Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
            }
        }
    }
}
