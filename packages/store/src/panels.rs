//! Everything the management screen shows: the active tab, both lists and
//! both forms.
//!
//! The tab only picks which pair is rendered. Lists and forms live side by side
//! so an unsaved draft or a fetched list survives any number of tab switches.

use crate::form::FormController;
use crate::models::{Task, User};
use crate::tab::Tab;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Panels {
    tab: Tab,
    users: Vec<User>,
    tasks: Vec<Task>,
    user_form: FormController<User>,
    task_form: FormController<Task>,
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Show another tab. Nothing else changes.
    pub fn select(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the user list with a resync result.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Replace the task list with a resync result.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn user_form(&self) -> &FormController<User> {
        &self.user_form
    }

    pub fn user_form_mut(&mut self) -> &mut FormController<User> {
        &mut self.user_form
    }

    pub fn task_form(&self) -> &FormController<Task> {
        &self.task_form
    }

    pub fn task_form_mut(&mut self) -> &mut FormController<Task> {
        &mut self.task_form
    }
}
