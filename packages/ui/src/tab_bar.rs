use dioxus::prelude::*;
use store::Tab;

use crate::Icon;
use crate::icons::{FaListCheck, FaUsers};

/// Pill navigation between the user and task panels.
#[component]
pub fn TabBar(active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        ul {
            class: "nav-pills",
            for tab in Tab::ALL {
                li {
                    key: "{tab.label()}",
                    button {
                        class: if tab == active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| on_select.call(tab),
                        {match tab {
                            Tab::Users => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
                            Tab::Tasks => rsx! { Icon { icon: FaListCheck, width: 14, height: 14 } },
                        }}
                        span { class: "btn-label", "{tab.label()}" }
                    }
                }
            }
        }
    }
}
