use crate::ir::{Label, Origin, PrecompiledHeader, ToolType, Visibility};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveError {
    AlreadyResolved(Label),
    CircularIncludesNotInDeps {
        target: Label,
        dependency: Label,
    },
    ConfigNotFound(Label, Label),
    ForwardedConfigNotInDeps {
        target: Label,
        dependency: Label,
        origin: Option<Origin>,
    },
    NestedStaticLibrary {
        target: Label,
        dependency: Label,
    },
    NotVisible {
        from: Label,
        to: Label,
        visibility: Visibility,
        origin: Option<Origin>,
    },
    PrecompiledHeaderConflict {
        target: Label,
        first: (Label, PrecompiledHeader),
        second: (Label, PrecompiledHeader),
    },
    TargetNotFound(Label),
    TargetNotResolved(Label),
    TestOnly {
        from: Label,
        to: Label,
        origin: Option<Origin>,
    },
    ToolNotFound(Label, ToolType),
    ToolchainNotFound(Label),
}

impl Error for ResolveError {}

impl Display for ResolveError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::AlreadyResolved(label) => {
                write!(formatter, "target {} is already resolved", label)
            }
            Self::CircularIncludesNotInDeps { target, dependency } => write!(
                formatter,
                "{} allows circular includes from {} which is not in its public or private deps",
                target, dependency
            ),
            Self::ConfigNotFound(target, config) => {
                write!(formatter, "config {} used by {} not found", config, target)
            }
            Self::ForwardedConfigNotInDeps {
                target,
                dependency,
                origin,
            } => {
                write_origin(formatter, origin)?;
                write!(
                    formatter,
                    "{} forwards configs of {} which is not in its public or private deps",
                    target, dependency
                )
            }
            Self::NestedStaticLibrary { target, dependency } => write!(
                formatter,
                "complete static library {} depends on static library {}; \
                 only source sets and complete static libraries can be nested",
                target, dependency
            ),
            Self::NotVisible {
                from,
                to,
                visibility,
                origin,
            } => {
                write_origin(formatter, origin)?;
                write!(
                    formatter,
                    "{} is not visible from {}\nThe item {} can only be referenced from:\n{}",
                    to, from, to, visibility
                )
            }
            Self::PrecompiledHeaderConflict {
                target,
                first,
                second,
            } => {
                write!(
                    formatter,
                    "The target {}\nhas conflicting precompiled header settings.\n",
                    target
                )?;

                for (label, header) in [first, second] {
                    write!(
                        formatter,
                        "\nFrom {}\n  header: {}\n  source: {}\n",
                        label,
                        header.header(),
                        header.source()
                    )?;
                }

                Ok(())
            }
            Self::TargetNotFound(label) => write!(formatter, "target {} not found", label),
            Self::TargetNotResolved(label) => {
                write!(formatter, "target {} is not resolved yet", label)
            }
            Self::TestOnly { from, to, origin } => {
                write_origin(formatter, origin)?;
                write!(
                    formatter,
                    "{} is not marked testonly but depends on {} which is",
                    from, to
                )
            }
            Self::ToolNotFound(toolchain, tool) => write!(
                formatter,
                "toolchain {} has no tool \"{}\"",
                toolchain, tool
            ),
            Self::ToolchainNotFound(label) => write!(formatter, "toolchain {} not found", label),
        }
    }
}

fn write_origin(formatter: &mut Formatter, origin: &Option<Origin>) -> fmt::Result {
    if let Some(origin) = origin {
        write!(formatter, "{}: ", origin)?;
    }

    Ok(())
}
