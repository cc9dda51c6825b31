pub mod badge;
pub mod input;

pub use badge::Badge;
pub use input::{FieldError, Input};
