//! # Record models for users and tasks
//!
//! Defines the two record types managed by TaskDesk, the draft buffers that back
//! their forms, and the [`Record`] trait that lets [`crate::Directory`] and
//! [`crate::FormController`] treat both uniformly.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A user as returned by `GET /api/user`. The server-assigned id travels as `_id`. |
//! | [`Task`] | A task as returned by `GET /api/task`. `user` holds the owning user's id. |
//! | [`UserDraft`] | The `{name, email}` body sent on create and update. |
//! | [`TaskDraft`] | The `{name, description, user}` body sent on create and update. |
//!
//! A task's `user` is a plain id and is never checked against the user list.
//! [`assignee`] resolves it and yields `None` when the user no longer exists.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record kind that lives in a server collection under `/api/{COLLECTION}`.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Form buffer holding the editable fields.
    type Draft: Clone + Default + PartialEq + Serialize + DeserializeOwned + 'static;

    /// Path segment of the collection: `"user"` or `"task"`.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Copy the editable fields into a fresh draft.
    fn to_draft(&self) -> Self::Draft;

    /// Build a record from a draft and a server-assigned id.
    fn from_draft(id: String, draft: Self::Draft) -> Self;
}

/// A user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Label used in the assignee picker: `"Ann (ann@x.com)"`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

/// Editable fields of a [`User`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl Record for User {
    type Draft = UserDraft;
    const COLLECTION: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    fn from_draft(id: String, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }
}

/// A task record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Id of the owning user. May point at a user that has since been deleted.
    #[serde(default)]
    pub user: String,
}

/// Editable fields of a [`Task`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub user: String,
}

impl TaskDraft {
    /// Whether `user` is the option to show as chosen in the assignee picker.
    pub fn is_assigned_to(&self, user: &User) -> bool {
        !self.user.is_empty() && self.user == user.id
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    const COLLECTION: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            user: self.user.clone(),
        }
    }

    fn from_draft(id: String, draft: TaskDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            user: draft.user,
        }
    }
}

/// Find the user a task is assigned to.
pub fn assignee<'a>(users: &'a [User], task: &Task) -> Option<&'a User> {
    users.iter().find(|u| u.id == task.user)
}

/// Assignee display name, empty when the owner is not in `users`.
pub fn assignee_name<'a>(users: &'a [User], task: &Task) -> &'a str {
    assignee(users, task).map(|u| u.name.as_str()).unwrap_or("")
}
