//! Form state for creating and editing one record type.

use crate::models::Record;

/// What a form submission asks the server to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<R: Record> {
    Create(R::Draft),
    Update { id: String, draft: R::Draft },
}

/// Draft buffer plus the record currently selected for edit, if any.
///
/// With no selection the form is idle and submitting creates a record. With a
/// selection the draft starts as a copy of that record and submitting updates
/// it. Selecting another record overwrites the draft without asking.
#[derive(Clone, Debug, PartialEq)]
pub struct FormController<R: Record> {
    draft: R::Draft,
    selection: Option<R>,
}

impl<R: Record> Default for FormController<R> {
    fn default() -> Self {
        Self {
            draft: R::Draft::default(),
            selection: None,
        }
    }
}

impl<R: Record> FormController<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    pub fn selection(&self) -> Option<&R> {
        self.selection.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_some()
    }

    /// Load `record` into the draft and select it.
    pub fn begin_edit(&mut self, record: &R) {
        self.draft = record.to_draft();
        self.selection = Some(record.clone());
    }

    /// Take the draft as a create or update and return to the idle state.
    pub fn submit(&mut self) -> Submission<R> {
        let draft = std::mem::take(&mut self.draft);
        match self.selection.take() {
            Some(record) => Submission::Update {
                id: record.id().to_string(),
                draft,
            },
            None => Submission::Create(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskDraft, User, UserDraft};

    fn bo() -> User {
        User {
            id: "u2".to_string(),
            name: "Bo".to_string(),
            email: "bo@x.com".to_string(),
        }
    }

    #[test]
    fn test_idle_submit_creates() {
        let mut form = FormController::<User>::new();
        form.draft_mut().name = "Ann".to_string();
        form.draft_mut().email = "ann@x.com".to_string();

        let submission = form.submit();

        assert_eq!(
            submission,
            Submission::Create(UserDraft {
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
            })
        );
        assert_eq!(form, FormController::new());
    }

    #[test]
    fn test_begin_edit_prefills_draft() {
        let mut form = FormController::<User>::new();
        form.begin_edit(&bo());

        assert!(form.is_editing());
        assert_eq!(form.draft().name, "Bo");
        assert_eq!(form.selection(), Some(&bo()));
    }

    #[test]
    fn test_editing_submit_updates_and_resets() {
        let mut form = FormController::<User>::new();
        form.begin_edit(&bo());
        form.draft_mut().email = "robert@x.com".to_string();

        let submission = form.submit();

        assert_eq!(
            submission,
            Submission::Update {
                id: "u2".to_string(),
                draft: UserDraft {
                    name: "Bo".to_string(),
                    email: "robert@x.com".to_string(),
                },
            }
        );
        assert!(!form.is_editing());
        assert_eq!(form.draft(), &UserDraft::default());
    }

    #[test]
    fn test_selecting_another_record_overwrites_unsaved_edits() {
        let mut form = FormController::<Task>::new();
        let first = Task {
            id: "t1".to_string(),
            name: "Plan".to_string(),
            description: "Plan the week".to_string(),
            user: "u1".to_string(),
        };
        let second = Task {
            id: "t2".to_string(),
            name: "Ship".to_string(),
            description: "Ship it".to_string(),
            user: "u2".to_string(),
        };

        form.begin_edit(&first);
        form.draft_mut().description = "unsaved".to_string();
        form.begin_edit(&second);

        assert_eq!(form.selection().map(|t| t.id.as_str()), Some("t2"));
        assert_eq!(
            form.draft(),
            &TaskDraft {
                name: "Ship".to_string(),
                description: "Ship it".to_string(),
                user: "u2".to_string(),
            }
        );
    }
}
