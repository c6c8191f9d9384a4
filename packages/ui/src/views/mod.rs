mod login;
pub use login::LoginView;

mod manage;
pub use manage::ManageView;
