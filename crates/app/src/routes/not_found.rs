use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for unrecognized paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::TaskList {}, class: "not-found-link", "Back to the task list" }
        }
    }
}
