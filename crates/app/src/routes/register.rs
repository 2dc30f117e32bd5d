use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Registration is handled elsewhere; this page points users back to sign-in.
#[component]
pub fn Register() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                Card {
                    CardHeader {
                        CardTitle { "Create an Account" }
                        CardDescription { "Self-service registration is not available yet." }
                    }
                    CardContent {
                        p { "Ask your recruiter for an invitation, or try one of the demo accounts on the sign-in page." }
                        div { class: "auth-links",
                            p {
                                "Already have an account? "
                                Link { to: Route::Login {}, "Sign in" }
                            }
                            Link { to: Route::Home {}, class: "auth-back", "← Back to Home" }
                        }
                    }
                }
            }
        }
    }
}
