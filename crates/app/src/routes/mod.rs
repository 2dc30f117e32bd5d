pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;

use dashboard::{CandidateDashboard, HrDashboard};
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[route("/hr/dashboard")]
    HrDashboard {},
    #[route("/candidate/dashboard")]
    CandidateDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
