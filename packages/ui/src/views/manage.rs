use api::HttpBackend;
use dioxus::prelude::*;
use store::{
    Directory, GateView, Panels, Record, SessionGate, Submission, Tab, Task, TaskDraft, User,
    UserDraft,
};

use crate::auth::use_auth;
use crate::backend::use_backend;
use crate::{Navbar, Spinner, TabBar, TaskForm, TaskTable, UserForm, UserTable};

use super::LoginView;

enum DirectoryOp<R: Record> {
    Fetch,
    Submit(Submission<R>),
    Delete(String),
}

/// Apply one operation to a directory seeded from `snapshot`, then hand the
/// resynced list to `publish`. A failed resync publishes nothing.
async fn run<R: Record>(
    backend: HttpBackend,
    snapshot: Vec<R>,
    op: DirectoryOp<R>,
    publish: impl FnOnce(Vec<R>),
) {
    let mut dir = Directory::with_records(backend, snapshot);
    let resynced = match op {
        DirectoryOp::Fetch => dir.fetch().await,
        DirectoryOp::Submit(submission) => dir.submit(submission).await,
        DirectoryOp::Delete(id) => dir.delete(&id).await,
    };
    if resynced {
        publish(dir.into_records());
    }
}

/// Top-level page: spinner, login card or the management panels depending on
/// the session.
///
/// Both directories are fetched once each time the session becomes
/// authenticated.
#[component]
pub fn ManageView() -> Element {
    let auth = use_auth();
    let backend = use_backend();

    let mut panels = use_signal(Panels::new);
    let mut gate = use_signal(SessionGate::default);

    let users_op = move |op: DirectoryOp<User>| {
        let snapshot = panels.peek().users().to_vec();
        spawn(run(backend(), snapshot, op, move |list| {
            panels.write().set_users(list)
        }));
    };
    let tasks_op = move |op: DirectoryOp<Task>| {
        let snapshot = panels.peek().tasks().to_vec();
        spawn(run(backend(), snapshot, op, move |list| {
            panels.write().set_tasks(list)
        }));
    };

    use_effect(move || {
        let status = auth();
        if gate.write().observe(&status) {
            tracing::info!("Session authenticated; loading users and tasks");
            users_op(DirectoryOp::Fetch);
            tasks_op(DirectoryOp::Fetch);
        }
    });

    let status = auth();
    match status.view() {
        GateView::Spinner => rsx! { Spinner {} },
        GateView::Login => rsx! { LoginView {} },
        GateView::Manage => {
            let user_name = status
                .user()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default();
            let current = panels();

            rsx! {
                div {
                    class: "container",
                    div {
                        class: "card shell",
                        Navbar { user_name }
                        div {
                            class: "card-body",
                            TabBar {
                                active: current.tab(),
                                on_select: move |next: Tab| panels.write().select(next),
                            }
                            {match current.tab() {
                                Tab::Users => rsx! {
                                    div {
                                        class: "panel-grid",
                                        div {
                                            class: "panel-form",
                                            UserForm {
                                                editing: current.user_form().is_editing(),
                                                draft: current.user_form().draft().clone(),
                                                on_change: move |draft: UserDraft| {
                                                    *panels.write().user_form_mut().draft_mut() = draft;
                                                },
                                                on_submit: move |_| {
                                                    let submission = panels.write().user_form_mut().submit();
                                                    users_op(DirectoryOp::Submit(submission));
                                                },
                                            }
                                        }
                                        div {
                                            class: "panel-table",
                                            UserTable {
                                                users: current.users().to_vec(),
                                                on_edit: move |user: User| panels.write().user_form_mut().begin_edit(&user),
                                                on_delete: move |id: String| users_op(DirectoryOp::Delete(id)),
                                            }
                                        }
                                    }
                                },
                                Tab::Tasks => rsx! {
                                    div {
                                        class: "panel-grid",
                                        div {
                                            class: "panel-form",
                                            TaskForm {
                                                editing: current.task_form().is_editing(),
                                                draft: current.task_form().draft().clone(),
                                                users: current.users().to_vec(),
                                                on_change: move |draft: TaskDraft| {
                                                    *panels.write().task_form_mut().draft_mut() = draft;
                                                },
                                                on_submit: move |_| {
                                                    let submission = panels.write().task_form_mut().submit();
                                                    tasks_op(DirectoryOp::Submit(submission));
                                                },
                                            }
                                        }
                                        div {
                                            class: "panel-table",
                                            TaskTable {
                                                tasks: current.tasks().to_vec(),
                                                users: current.users().to_vec(),
                                                on_edit: move |task: Task| panels.write().task_form_mut().begin_edit(&task),
                                                on_delete: move |id: String| tasks_op(DirectoryOp::Delete(id)),
                                            }
                                        }
                                    }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}
