use crate::{
    ir::{Origin, Substitution},
    parse::ParseError,
    validation::ValidationError,
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DescriptionError {
    Json(String),
    Parse(Origin, ParseError),
    PrecompiledHeaderIncomplete(Origin),
    SubstitutionNotAllowed(Origin, Substitution),
    Tool(Origin, ValidationError),
    UnknownDepsFormat(Origin, String),
    UnknownOutputType(Origin, String),
    UnknownPrecompiledHeaderType(Origin, String),
    UnknownTool(Origin, String),
}

impl Error for DescriptionError {}

impl Display for DescriptionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Json(message) => write!(formatter, "{}", message),
            Self::Parse(origin, error) => write!(formatter, "{}: {}", origin, error),
            Self::PrecompiledHeaderIncomplete(origin) => write!(
                formatter,
                "{}: precompiled_header and precompiled_source must be set together",
                origin
            ),
            Self::SubstitutionNotAllowed(origin, substitution) => write!(
                formatter,
                "{}: substitution {} is not allowed here",
                origin, substitution
            ),
            Self::Tool(origin, error) => write!(formatter, "{}: {}", origin, error),
            Self::UnknownDepsFormat(origin, name) => {
                write!(formatter, "{}: unknown depsformat \"{}\"", origin, name)
            }
            Self::UnknownOutputType(origin, name) => {
                write!(formatter, "{}: unknown target type \"{}\"", origin, name)
            }
            Self::UnknownPrecompiledHeaderType(origin, name) => write!(
                formatter,
                "{}: unknown precompiled_header_type \"{}\"",
                origin, name
            ),
            Self::UnknownTool(origin, name) => {
                write!(formatter, "{}: unknown tool \"{}\"", origin, name)
            }
        }
    }
}
