use crate::{
    ir::{Label, SourceFile},
    resolve::ResolveError,
};
use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuilderError {
    Cycle(Vec<Label>),
    DuplicateItem(Label, &'static str),
    Resolve(ResolveError),
    Undefined(Vec<(Label, Label)>),
    UnknownGeneratedInputs(Vec<(Label, SourceFile)>),
}

impl Error for BuilderError {}

impl Display for BuilderError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Cycle(cycle) => {
                write!(
                    formatter,
                    "dependency cycle detected: {}",
                    cycle
                        .iter()
                        .chain(cycle.first())
                        .map(|label| label.user_visible_name(true))
                        .join(" -> ")
                )
            }
            Self::DuplicateItem(label, kind) => {
                write!(
                    formatter,
                    "{} {} is defined more than once",
                    kind,
                    label.user_visible_name(true)
                )
            }
            Self::Resolve(error) => write!(formatter, "{}", error),
            Self::Undefined(items) => {
                write!(
                    formatter,
                    "{}",
                    items
                        .iter()
                        .map(|(label, requester)| format!(
                            "{} is not defined but is needed by {}",
                            label.user_visible_name(true),
                            requester.user_visible_name(true)
                        ))
                        .join("\n")
                )
            }
            Self::UnknownGeneratedInputs(inputs) => {
                write!(
                    formatter,
                    "{}",
                    inputs
                        .iter()
                        .map(|(label, file)| format!(
                            "{} is listed as an input or source of {} \
                             but no dependency reachable through public deps generates it",
                            file,
                            label.user_visible_name(true)
                        ))
                        .join("\n")
                )
            }
        }
    }
}

impl From<ResolveError> for BuilderError {
    fn from(error: ResolveError) -> Self {
        Self::Resolve(error)
    }
}
