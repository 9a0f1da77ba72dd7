pub mod not_found;
pub mod tasks;

use dioxus::prelude::*;

use not_found::NotFound;

/// Application routes. The bare origin redirects to the task list; anything
/// unrecognized lands on the 404 page.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::TaskList {})]
    #[route("/tasks")]
    TaskList {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shell layout: a top navigation bar above the routed page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        nav { class: "top-nav",
            span { class: "top-nav-brand", "Taskdeck" }
            Link { to: Route::TaskList {}, class: "top-nav-link", "Tasks" }
        }
        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn TaskList() -> Element {
    tasks::list::TaskListPage()
}
