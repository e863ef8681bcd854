mod error;
mod tool;

pub use self::{error::ValidationError, tool::validate_tool};
