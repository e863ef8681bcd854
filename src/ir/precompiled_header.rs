use super::SourceFile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecompiledHeader {
    header: String,
    source: SourceFile,
}

impl PrecompiledHeader {
    pub fn new(header: impl Into<String>, source: SourceFile) -> Self {
        Self {
            header: header.into(),
            source,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }
}
