use super::SourceDir;
use itertools::Itertools;
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile(Arc<str>);

impl SourceFile {
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    pub fn resolve(path: &str, directory: &SourceDir) -> Self {
        if path.starts_with('/') {
            Self::new(normalize(path))
        } else {
            Self::new(normalize(&directory.join(path)))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn directory(&self) -> SourceDir {
        SourceDir::new(match self.0.rfind('/') {
            Some(index) => &self.0[..=index],
            None => "",
        })
    }

    pub fn file_part(&self) -> &str {
        match self.0.rfind('/') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }

    pub fn name_part(&self) -> &str {
        let file = self.file_part();

        match file.rfind('.') {
            Some(index) if index > 0 => &file[..index],
            _ => file,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        let file = self.file_part();

        match file.rfind('.') {
            Some(index) if index > 0 => Some(&file[index + 1..]),
            _ => None,
        }
    }
}

fn normalize(path: &str) -> String {
    let (prefix, rest) = if let Some(rest) = path.strip_prefix("//") {
        ("//", rest)
    } else if let Some(rest) = path.strip_prefix('/') {
        ("/", rest)
    } else {
        ("", path)
    };
    let mut components = Vec::<&str>::new();

    for component in rest.split('/') {
        match component {
            "." => {}
            ".." if components.last().is_some_and(|last| *last != "..") => {
                components.pop();
            }
            _ => components.push(component),
        }
    }

    prefix.to_owned() + &components.into_iter().join("/")
}

impl Display for SourceFile {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
