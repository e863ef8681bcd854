use crate::{
    builder::BuilderError, description::DescriptionError, emit::EmitError, parse::ParseError,
    resolve::ResolveError,
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use tokio::{io, sync::AcquireError, task::JoinError};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Builder(BuilderError),
    Description(DescriptionError),
    Emit(EmitError),
    Other(String),
    Parse(ParseError),
    Resolve(ResolveError),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Builder(error) => write!(formatter, "{}", error),
            Self::Description(error) => write!(formatter, "{}", error),
            Self::Emit(error) => write!(formatter, "{}", error),
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Parse(error) => write!(formatter, "{}", error),
            Self::Resolve(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<AcquireError> for ApplicationError {
    fn from(error: AcquireError) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<BuilderError> for ApplicationError {
    fn from(error: BuilderError) -> Self {
        Self::Builder(error)
    }
}

impl From<DescriptionError> for ApplicationError {
    fn from(error: DescriptionError) -> Self {
        Self::Description(error)
    }
}

impl From<EmitError> for ApplicationError {
    fn from(error: EmitError) -> Self {
        Self::Emit(error)
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<JoinError> for ApplicationError {
    fn from(error: JoinError) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ParseError> for ApplicationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ResolveError> for ApplicationError {
    fn from(error: ResolveError) -> Self {
        Self::Resolve(error)
    }
}
