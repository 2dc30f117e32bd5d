use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCompass;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Path the visitor asked for, rebuilt from the catch-all segments.
pub fn missing_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Portal areas behind sign-in. A stale link into one of them most likely
/// wants the sign-in screen rather than the landing page.
pub fn is_member_area(path: &str) -> bool {
    ["/hr", "/candidate", "/auth"]
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Catch-all for unknown portal addresses.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = missing_path(&route);
    let member_area = is_member_area(&path);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "lost-page",
            Card { class: "lost-card",
                CardHeader {
                    div { class: "lost-icon",
                        Icon::<LdCompass> { icon: LdCompass, width: 28, height: 28 }
                    }
                    CardTitle { "We couldn't find that page" }
                    CardDescription {
                        "Nothing in the talent portal lives at "
                        code { class: "lost-path", "{path}" }
                    }
                }
                CardContent {
                    nav { class: "lost-actions",
                        if member_area {
                            Link { to: Route::Login {}, class: "lost-primary", "Go to sign in" }
                            Link { to: Route::Home {}, class: "lost-secondary", "Portal home" }
                        } else {
                            Link { to: Route::Home {}, class: "lost-primary", "Portal home" }
                            Link { to: Route::Login {}, class: "lost-secondary", "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
