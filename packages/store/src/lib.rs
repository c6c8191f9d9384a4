pub mod backend;
pub mod config;
pub mod directory;
pub mod form;
pub mod models;
pub mod panels;
pub mod session;
pub mod tab;

mod memory;
pub use memory::{MemoryBackend, Method, RecordedRequest};

pub use backend::{BackendError, ListBody, RecordBackend};
pub use config::AppConfig;
pub use directory::Directory;
pub use form::{FormController, Submission};
pub use models::{assignee, assignee_name, Record, Task, TaskDraft, User, UserDraft};
pub use panels::Panels;
pub use session::{GateView, SessionGate, SessionStatus, SessionUser};
pub use tab::Tab;
