pub mod alert;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod password_input;
