//! Components shared by the talent portal screens.

pub mod components;

pub use components::alert::*;
pub use components::button::*;
pub use components::card::*;
pub use components::input::*;
pub use components::label::*;
pub use components::password_input::*;
