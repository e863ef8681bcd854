use super::{Label, SourceDir};
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisibilityPattern {
    All,
    Directory(SourceDir),
    Recursive(SourceDir),
    Name(SourceDir, Arc<str>),
}

impl VisibilityPattern {
    pub fn matches(&self, label: &Label) -> bool {
        match self {
            Self::All => true,
            Self::Directory(directory) => label.directory() == directory,
            Self::Recursive(directory) => {
                label.directory().value().starts_with(directory.value())
            }
            Self::Name(directory, name) => {
                label.directory() == directory && label.name() == name.as_ref()
            }
        }
    }
}

impl Display for VisibilityPattern {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::All => write!(formatter, "*"),
            Self::Directory(directory) => {
                write!(formatter, "{}:*", directory.value().trim_end_matches('/'))
            }
            Self::Recursive(directory) => write!(formatter, "{}*", directory),
            Self::Name(directory, name) => {
                write!(formatter, "{}:{}", directory.value().trim_end_matches('/'), name)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    patterns: Vec<VisibilityPattern>,
}

impl Visibility {
    pub fn new(patterns: Vec<VisibilityPattern>) -> Self {
        Self { patterns }
    }

    pub fn public() -> Self {
        Self::new(vec![VisibilityPattern::All])
    }

    pub fn can_see(&self, label: &Label) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(label))
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::public()
    }
}

impl Display for Visibility {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for pattern in &self.patterns {
            writeln!(formatter, "  {}", pattern)?;
        }

        Ok(())
    }
}
