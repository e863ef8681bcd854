use crate::ir::{Substitution, ToolType};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    DependOutputWithoutLinkOutput(ToolType),
    InvalidOutputExtension(ToolType, String),
    LinkOutputNotAllowed(ToolType),
    LinkOutputNotInOutputs(ToolType, &'static str, String),
    OutputsRequired(ToolType),
    PrecompiledHeaderNotAllowed(ToolType),
    RspfileContentRequired(ToolType),
    SubstitutionNotAllowed(ToolType, &'static str, Substitution),
}

impl Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::DependOutputWithoutLinkOutput(tool) => write!(
                formatter,
                "tool \"{}\" must set both link_output and depend_output or neither",
                tool
            ),
            Self::InvalidOutputExtension(tool, extension) => write!(
                formatter,
                "default_output_extension \"{}\" of tool \"{}\" must be empty or start with \".\"",
                extension, tool
            ),
            Self::LinkOutputNotAllowed(tool) => write!(
                formatter,
                "link_output and depend_output are not allowed on tool \"{}\"",
                tool
            ),
            Self::LinkOutputNotInOutputs(tool, field, pattern) => write!(
                formatter,
                "{} \"{}\" of tool \"{}\" does not match any of its outputs",
                field, pattern, tool
            ),
            Self::OutputsRequired(tool) => {
                write!(formatter, "tool \"{}\" must specify outputs", tool)
            }
            Self::PrecompiledHeaderNotAllowed(tool) => write!(
                formatter,
                "precompiled_header_type is not allowed on tool \"{}\"",
                tool
            ),
            Self::RspfileContentRequired(tool) => write!(
                formatter,
                "tool \"{}\" sets rspfile without rspfile_content",
                tool
            ),
            Self::SubstitutionNotAllowed(tool, field, substitution) => write!(
                formatter,
                "substitution {} is not allowed in {} of tool \"{}\"",
                substitution, field, tool
            ),
        }
    }
}
