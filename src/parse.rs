mod error;
mod label;
mod pattern;
mod visibility;

pub use self::{
    error::ParseError,
    label::{parse_label, resolve_directory},
    pattern::parse_pattern,
    visibility::parse_visibility_pattern,
};
