use super::SourceDir;
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    directory: SourceDir,
    name: Arc<str>,
    toolchain: Option<Arc<Label>>,
}

impl Label {
    pub fn new(directory: SourceDir, name: impl Into<Arc<str>>, toolchain: Option<Label>) -> Self {
        Self {
            directory,
            name: name.into(),
            toolchain: toolchain.map(|label| label.without_toolchain().into()),
        }
    }

    pub fn directory(&self) -> &SourceDir {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn toolchain(&self) -> Option<&Label> {
        self.toolchain.as_deref()
    }

    pub fn without_toolchain(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            name: self.name.clone(),
            toolchain: None,
        }
    }

    pub fn user_visible_name(&self, include_toolchain: bool) -> String {
        let directory = self.directory.value();
        let name = format!(
            "{}:{}",
            if directory == "//" {
                directory
            } else {
                directory.trim_end_matches('/')
            },
            self.name
        );

        match (include_toolchain, &self.toolchain) {
            (true, Some(toolchain)) => format!("{}({})", name, toolchain.user_visible_name(false)),
            _ => name,
        }
    }
}

impl Display for Label {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.user_visible_name(false))
    }
}
