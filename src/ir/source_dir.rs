use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// A directory in the source tree, always ending with a slash.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceDir(Arc<str>);

impl SourceDir {
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();

        Self(if path.ends_with('/') {
            path.into()
        } else {
            format!("{path}/").into()
        })
    }

    pub fn root() -> Self {
        Self("//".into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_source_absolute(&self) -> bool {
        self.0.starts_with("//")
    }

    pub fn relative_part(&self) -> String {
        if let Some(path) = self.0.strip_prefix("//") {
            path.trim_end_matches('/').into()
        } else if let Some(path) = self.0.strip_prefix('/') {
            format!("ABS_PATH/{}", path.trim_end_matches('/'))
        } else {
            self.0.trim_end_matches('/').into()
        }
    }

    pub fn join(&self, name: &str) -> String {
        format!("{}{}", self.0, name)
    }
}

impl Display for SourceDir {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
