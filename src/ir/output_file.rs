use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OutputFile(String);

impl OutputFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Display for OutputFile {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for OutputFile {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
