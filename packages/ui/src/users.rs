//! User form and table.

use dioxus::prelude::*;
use store::{User, UserDraft};

use crate::Icon;
use crate::icons::{FaInbox, FaPen, FaPlus, FaTrash};

/// Create/edit form for one user draft.
///
/// Every keystroke hands the whole updated draft to `on_change`. Field checks
/// are left to the browser (`required`, `type="email"`).
#[component]
pub fn UserForm(
    editing: bool,
    draft: UserDraft,
    on_change: EventHandler<UserDraft>,
    on_submit: EventHandler<()>,
) -> Element {
    let name_input = {
        let draft = draft.clone();
        move |evt: FormEvent| {
            on_change.call(UserDraft {
                name: evt.value(),
                ..draft.clone()
            })
        }
    };
    let email_input = {
        let draft = draft.clone();
        move |evt: FormEvent| {
            on_change.call(UserDraft {
                email: evt.value(),
                ..draft.clone()
            })
        }
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h5 { class: "card-title", if editing { "Edit User" } else { "Create User" } }
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
                        label { r#for: "user-name", "Name" }
                        input {
                            id: "user-name",
                            class: "form-control",
                            r#type: "text",
                            placeholder: "Enter name",
                            required: true,
                            value: "{draft.name}",
                            oninput: name_input,
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "user-email", "Email" }
                        input {
                            id: "user-email",
                            class: "form-control",
                            r#type: "email",
                            placeholder: "Enter email",
                            required: true,
                            value: "{draft.email}",
                            oninput: email_input,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        if editing {
                            Icon { icon: FaPen, width: 14, height: 14 }
                            span { class: "btn-label", "Update User" }
                        } else {
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            span { class: "btn-label", "Create User" }
                        }
                    }
                }
            }
        }
    }
}

/// Table of users with edit and delete actions.
#[component]
pub fn UserTable(
    users: Vec<User>,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h5 { class: "card-title", "User List" }
            }
            div {
                class: "table-responsive",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { class: "text-end", "Actions" }
                        }
                    }
                    tbody {
                        if users.is_empty() {
                            tr {
                                td {
                                    colspan: "3",
                                    class: "empty-row",
                                    Icon { icon: FaInbox, width: 14, height: 14 }
                                    " No users available"
                                }
                            }
                        }
                        for user in users.iter() {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
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
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<String>) -> Element {
    let id = user.id.clone();
    let editable = user.clone();

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
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
