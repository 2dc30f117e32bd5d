pub mod error;
pub mod feature_flags;
pub mod form;
pub mod models;
pub mod requests;

pub use error::*;
pub use feature_flags::*;
pub use form::*;
pub use models::*;
pub use requests::*;
