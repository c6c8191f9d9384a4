//! Task form and table.

use dioxus::prelude::*;
use store::{assignee_name, Task, TaskDraft, User};

use crate::Icon;
use crate::icons::{FaInbox, FaPen, FaPlus, FaTrash};

/// Create/edit form for one task draft.
///
/// The assignee picker lists the current user directory.
#[component]
pub fn TaskForm(
    editing: bool,
    draft: TaskDraft,
    users: Vec<User>,
    on_change: EventHandler<TaskDraft>,
    on_submit: EventHandler<()>,
) -> Element {
    let name_input = {
        let draft = draft.clone();
        move |evt: FormEvent| {
            on_change.call(TaskDraft {
                name: evt.value(),
                ..draft.clone()
            })
        }
    };
    let description_input = {
        let draft = draft.clone();
        move |evt: FormEvent| {
            on_change.call(TaskDraft {
                description: evt.value(),
                ..draft.clone()
            })
        }
    };
    let user_change = {
        let draft = draft.clone();
        move |evt: FormEvent| {
            on_change.call(TaskDraft {
                user: evt.value(),
                ..draft.clone()
            })
        }
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h5 { class: "card-title", if editing { "Edit Task" } else { "Create Task" } }
            }
            div {
                class: "card-body",
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    div {
                        class: "form-field",
                        label { r#for: "task-name", "Task Name" }
                        input {
                            id: "task-name",
                            class: "form-control",
                            r#type: "text",
                            placeholder: "Enter task name",
                            required: true,
                            value: "{draft.name}",
                            oninput: name_input,
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "task-description", "Description" }
                        textarea {
                            id: "task-description",
                            class: "form-control",
                            rows: "3",
                            placeholder: "Enter description",
                            required: true,
                            value: "{draft.description}",
                            oninput: description_input,
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "task-user", "Assign to User" }
                        select {
                            id: "task-user",
                            class: "form-select",
                            required: true,
                            onchange: user_change,
                            // Options mount after the select, so the choice is set per option.
                            option {
                                value: "",
                                selected: draft.user.is_empty(),
                                "Select a user"
                            }
                            for user in users.iter() {
                                option {
                                    key: "{user.id}",
                                    value: "{user.id}",
                                    selected: draft.is_assigned_to(user),
                                    "{user.option_label()}"
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        if editing {
                            Icon { icon: FaPen, width: 14, height: 14 }
                            span { class: "btn-label", "Update Task" }
                        } else {
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            span { class: "btn-label", "Create Task" }
                        }
                    }
                }
            }
        }
    }
}

/// Table of tasks with their assignee, plus edit and delete actions.
#[component]
pub fn TaskTable(
    tasks: Vec<Task>,
    users: Vec<User>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h5 { class: "card-title", "Task List" }
            }
            div {
                class: "table-responsive",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Task" }
                            th { "Description" }
                            th { "Assigned To" }
                            th { class: "text-end", "Actions" }
                        }
                    }
                    tbody {
                        if tasks.is_empty() {
                            tr {
                                td {
                                    colspan: "4",
                                    class: "empty-row",
                                    Icon { icon: FaInbox, width: 14, height: 14 }
                                    " No tasks available"
                                }
                            }
                        }
                        for task in tasks.iter() {
                            TaskRow {
                                key: "{task.id}",
                                task: task.clone(),
                                assignee: assignee_name(&users, task).to_string(),
                                on_edit: on_edit,
                                on_delete: on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(
    task: Task,
    /// Empty when the owning user is gone.
    assignee: String,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = task.id.clone();
    let editable = task.clone();

    rsx! {
        tr {
            td { "{task.name}" }
            td { "{task.description}" }
            td { "{assignee}" }
            td {
                class: "text-end",
                button {
                    class: "btn btn-outline-primary btn-sm",
                    title: "Edit",
                    onclick: move |_| on_edit.call(editable.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                button {
                    class: "btn btn-outline-danger btn-sm",
                    title: "Delete",
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}
