use crate::{
    ir::{Label, OutputFile, ToolType},
    resolve::ResolveError,
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EmitError {
    CopyOutputCount(Label, usize),
    DuplicateObjectFile(Label, OutputFile),
    Format,
    Resolve(ResolveError),
    ToolNotFound(Label, ToolType),
    ToolchainNotFound(Label),
}

impl Error for EmitError {}

impl Display for EmitError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::CopyOutputCount(label, count) => write!(
                formatter,
                "copy target {} must have exactly one output pattern but has {}",
                label, count
            ),
            Self::DuplicateObjectFile(label, file) => write!(
                formatter,
                "The target {}\ngenerates two object files with the same name:\n  {}\n\n\
                 A file may be listed twice in the sources, or two sources with the same\n\
                 name in different directories map to the same object file.",
                label, file
            ),
            Self::Format => write!(formatter, "failed to format build file"),
            Self::Resolve(error) => write!(formatter, "{}", error),
            Self::ToolNotFound(toolchain, tool) => write!(
                formatter,
                "toolchain {} has no tool \"{}\"",
                toolchain, tool
            ),
            Self::ToolchainNotFound(label) => write!(formatter, "toolchain {} not found", label),
        }
    }
}

impl From<fmt::Error> for EmitError {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}

impl From<ResolveError> for EmitError {
    fn from(error: ResolveError) -> Self {
        Self::Resolve(error)
    }
}
