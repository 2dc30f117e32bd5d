use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBrain;
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::routes::Route;

/// Landing page with entry points to sign-in and registration.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let dashboard = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| user.dashboard_path().to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        main { class: "home-page",
            div { class: "home-logo",
                Icon::<LdBrain> { icon: LdBrain, width: 32, height: 32 }
            }
            h1 { "AI Hiring Assistant" }
            p { class: "home-tagline", "Screen candidates and track applications in one place." }
            div { class: "home-actions",
                if let Some(path) = dashboard {
                    Link { to: path, class: "home-button primary", "Go to Dashboard" }
                } else {
                    Link { to: Route::Login {}, class: "home-button primary", "Sign In" }
                    Link { to: Route::Register {}, class: "home-button outline", "Create Account" }
                }
            }
        }
    }
}
