use super::{
    error::ParseError,
    label::{parse_label, resolve_directory},
};
use crate::ir::{SourceDir, VisibilityPattern};

pub fn parse_visibility_pattern(
    input: &str,
    current_directory: &SourceDir,
) -> Result<VisibilityPattern, ParseError> {
    if input == "*" {
        Ok(VisibilityPattern::All)
    } else if let Some(directory) = input.strip_suffix(":*") {
        Ok(VisibilityPattern::Directory(if directory.is_empty() {
            current_directory.clone()
        } else {
            resolve_directory(directory, current_directory)
        }))
    } else if let Some(directory) = input.strip_suffix("/*") {
        Ok(VisibilityPattern::Recursive(resolve_directory(
            if directory.is_empty() { "/" } else { directory },
            current_directory,
        )))
    } else {
        let label = parse_label(input, current_directory, None)?;

        Ok(VisibilityPattern::Name(
            label.directory().clone(),
            label.name().into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn current() -> SourceDir {
        SourceDir::new("//foo/")
    }

    #[test]
    fn parse_all() {
        assert_eq!(
            parse_visibility_pattern("*", &current()),
            Ok(VisibilityPattern::All)
        );
    }

    #[test]
    fn parse_directory() {
        assert_eq!(
            parse_visibility_pattern("//bar:*", &current()),
            Ok(VisibilityPattern::Directory(SourceDir::new("//bar/")))
        );
        assert_eq!(
            parse_visibility_pattern(":*", &current()),
            Ok(VisibilityPattern::Directory(current()))
        );
    }

    #[test]
    fn parse_recursive_directory() {
        assert_eq!(
            parse_visibility_pattern("//bar/*", &current()),
            Ok(VisibilityPattern::Recursive(SourceDir::new("//bar/")))
        );
    }

    #[test]
    fn parse_single_label() {
        assert_eq!(
            parse_visibility_pattern(":baz", &current()),
            Ok(VisibilityPattern::Name(current(), "baz".into()))
        );
    }
}
