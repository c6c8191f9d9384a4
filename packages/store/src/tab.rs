/// Which directory and form pair is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Users,
    Tasks,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Users, Tab::Tasks];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Tasks => "Tasks",
        }
    }
}
