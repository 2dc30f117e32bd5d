use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLogOut, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{Role, SessionUser};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::auth::{use_auth, use_session};
use crate::routes::Route;

#[component]
pub fn HrDashboard() -> Element {
    rsx! { DashboardView { role: Role::Hr } }
}

#[component]
pub fn CandidateDashboard() -> Element {
    rsx! { DashboardView { role: Role::Candidate } }
}

/// Name shown in the greeting; falls back to the email when the service
/// sent no display name.
pub fn display_name(user: &SessionUser) -> &str {
    if user.name.trim().is_empty() {
        &user.email
    } else {
        &user.name
    }
}

/// What a role dashboard should do for the current auth state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAccess {
    /// The stored session has not been read yet.
    Loading,
    SignIn,
    /// Signed in with the other role.
    Redirect(&'static str),
    Show(SessionUser),
}

pub fn dashboard_access(restored: bool, user: Option<SessionUser>, role: Role) -> DashboardAccess {
    match user {
        Some(user) if user.role() == role => DashboardAccess::Show(user),
        Some(user) => DashboardAccess::Redirect(user.dashboard_path()),
        None if restored => DashboardAccess::SignIn,
        None => DashboardAccess::Loading,
    }
}

/// Role landing page. Waits for the stored session to load, then sends
/// visitors without one to sign-in and users with the other role to their
/// own dashboard.
#[component]
fn DashboardView(role: Role) -> Element {
    let mut auth = use_auth();
    let mut session = use_session();
    let access = dashboard_access((auth.restored)(), auth.current_user.read().clone(), role);

    let user = match access {
        DashboardAccess::Show(user) => user,
        DashboardAccess::Loading => {
            return rsx! {
                div { class: "dashboard-loading",
                    p { "Loading your session..." }
                }
            };
        }
        DashboardAccess::SignIn => {
            navigator().replace(Route::Login {});
            return rsx! {
                div { class: "dashboard-loading",
                    p { "Redirecting to sign-in..." }
                }
            };
        }
        DashboardAccess::Redirect(path) => {
            navigator().replace(path.to_string());
            return rsx! {
                div { class: "dashboard-loading",
                    p { "Redirecting..." }
                }
            };
        }
    };

    let sign_out = move |_: MouseEvent| async move {
        session.sign_out();
        if let Err(e) = session.flush().await {
            tracing::error!(error = %e, "browser storage kept the signed-out session");
        }
        auth.clear_auth();
        navigator().push(Route::Login {});
    };

    let name = display_name(&user).to_string();
    let (heading, blurb, icon) = match role {
        Role::Hr => (
            "HR Dashboard",
            "Review open roles and incoming applications.",
            rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 } },
        ),
        Role::Candidate => (
            "Candidate Dashboard",
            "Track your applications and interviews.",
            rsx! { Icon::<LdUser> { icon: LdUser, width: 20, height: 20 } },
        ),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        main { class: "dashboard-page",
            header { class: "dashboard-header",
                div { class: "dashboard-title",
                    {icon}
                    span { "{heading}" }
                }
                Button { variant: ButtonVariant::Ghost, onclick: sign_out,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Sign Out"
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Welcome, {name}" }
                    CardDescription { "{blurb}" }
                }
                CardContent {
                    dl { class: "dashboard-profile",
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Role" }
                        dd { "{user.role}" }
                    }
                }
            }
        }
    }
}
