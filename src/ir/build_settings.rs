use super::{Label, OutputFile, SourceDir, SourceFile};
use std::{collections::BTreeSet, iter::repeat_n, path::PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildSettings {
    root_path: PathBuf,
    build_dir: SourceDir,
    python_path: String,
    default_toolchain: Label,
    check_for_bad_items: bool,
    written_files: BTreeSet<SourceFile>,
}

impl BuildSettings {
    pub fn new(
        root_path: impl Into<PathBuf>,
        build_dir: SourceDir,
        python_path: impl Into<String>,
        default_toolchain: Label,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            build_dir,
            python_path: python_path.into(),
            default_toolchain: default_toolchain.without_toolchain(),
            check_for_bad_items: true,
            written_files: Default::default(),
        }
    }

    pub fn root_path(&self) -> &PathBuf {
        &self.root_path
    }

    pub fn build_dir(&self) -> &SourceDir {
        &self.build_dir
    }

    pub fn python_path(&self) -> &str {
        &self.python_path
    }

    pub fn default_toolchain(&self) -> &Label {
        &self.default_toolchain
    }

    pub fn check_for_bad_items(&self) -> bool {
        self.check_for_bad_items
    }

    pub fn with_check_for_bad_items(self, check_for_bad_items: bool) -> Self {
        Self {
            check_for_bad_items,
            ..self
        }
    }

    pub fn written_files(&self) -> &BTreeSet<SourceFile> {
        &self.written_files
    }

    pub fn with_written_files(self, written_files: impl IntoIterator<Item = SourceFile>) -> Self {
        Self {
            written_files: written_files.into_iter().collect(),
            ..self
        }
    }

    pub fn is_in_build_dir(&self, file: &SourceFile) -> bool {
        file.value().starts_with(self.build_dir.value())
    }

    pub fn is_default_toolchain(&self, toolchain: Option<&Label>) -> bool {
        toolchain.is_none_or(|toolchain| toolchain == &self.default_toolchain)
    }

    /// Directory prefix of outputs of a toolchain relative to the build
    /// directory, either empty or ending with a slash.
    pub fn toolchain_prefix(&self, toolchain: Option<&Label>) -> String {
        match toolchain {
            Some(toolchain) if !self.is_default_toolchain(Some(toolchain)) => {
                format!("{}/", toolchain.name())
            }
            _ => String::new(),
        }
    }

    pub fn root_out_dir(&self, toolchain: Option<&Label>) -> String {
        match self.toolchain_prefix(toolchain).strip_suffix('/') {
            Some(prefix) => prefix.into(),
            None => ".".into(),
        }
    }

    pub fn root_gen_dir(&self, toolchain: Option<&Label>) -> String {
        self.toolchain_prefix(toolchain) + "gen"
    }

    pub fn target_out_dir(&self, label: &Label) -> String {
        self.output_dir(label.toolchain(), "obj", label.directory())
    }

    pub fn target_gen_dir(&self, label: &Label) -> String {
        self.output_dir(label.toolchain(), "gen", label.directory())
    }

    pub fn output_dir(&self, toolchain: Option<&Label>, kind: &str, directory: &SourceDir) -> String {
        let relative = directory.relative_part();
        let prefix = self.toolchain_prefix(toolchain) + kind;

        if relative.is_empty() {
            prefix
        } else {
            prefix + "/" + &relative
        }
    }

    pub fn rebase_file(&self, file: &SourceFile) -> String {
        self.rebase(file.value())
    }

    pub fn rebase_dir(&self, directory: &SourceDir) -> String {
        let path = self.rebase(directory.value());
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            ".".into()
        } else {
            path.into()
        }
    }

    pub fn rebase_to_output(&self, file: &SourceFile) -> OutputFile {
        OutputFile::new(self.rebase_file(file))
    }

    fn rebase(&self, path: &str) -> String {
        let Some(path) = path.strip_prefix("//") else {
            return path.into();
        };
        let build_dir = self.build_dir.relative_part();
        let build_components = build_dir.split('/').filter(|component| !component.is_empty());
        let path_components = path.split('/').collect::<Vec<_>>();
        let common = build_components
            .clone()
            .zip(&path_components)
            .take_while(|(build, path)| build == *path)
            .count();

        repeat_n("..", build_components.count() - common)
            .chain(path_components[common..].iter().copied())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> BuildSettings {
        BuildSettings::new(
            "/src",
            SourceDir::new("//out/Debug/"),
            "python3",
            Label::new(SourceDir::new("//build/"), "default", None),
        )
    }

    #[test]
    fn rebase_source_file() {
        assert_eq!(
            settings().rebase_file(&SourceFile::new("//foo/bar.cc")),
            "../../foo/bar.cc"
        );
    }

    #[test]
    fn rebase_file_in_build_directory() {
        assert_eq!(
            settings().rebase_file(&SourceFile::new("//out/Debug/gen/foo.h")),
            "gen/foo.h"
        );
    }

    #[test]
    fn rebase_file_in_sibling_directory() {
        assert_eq!(
            settings().rebase_file(&SourceFile::new("//out/Release/foo.h")),
            "../Release/foo.h"
        );
    }

    #[test]
    fn keep_system_absolute_file() {
        assert_eq!(
            settings().rebase_file(&SourceFile::new("/usr/include/foo.h")),
            "/usr/include/foo.h"
        );
    }

    #[test]
    fn detect_file_in_build_directory() {
        let settings = settings();

        assert!(settings.is_in_build_dir(&SourceFile::new("//out/Debug/gen/foo.h")));
        assert!(!settings.is_in_build_dir(&SourceFile::new("//out/Debug.h")));
        assert!(!settings.is_in_build_dir(&SourceFile::new("//foo/bar.cc")));
    }

    #[test]
    fn rebase_directories() {
        assert_eq!(settings().rebase_dir(&SourceDir::new("//foo/")), "../../foo");
        assert_eq!(settings().rebase_dir(&SourceDir::root()), "../..");
        assert_eq!(settings().rebase_dir(&SourceDir::new("//out/Debug/")), ".");
    }

    #[test]
    fn calculate_default_toolchain_directories() {
        let settings = settings();
        let label = Label::new(
            SourceDir::new("//foo/bar/"),
            "baz",
            Some(settings.default_toolchain().clone()),
        );

        assert_eq!(settings.root_out_dir(label.toolchain()), ".");
        assert_eq!(settings.root_gen_dir(label.toolchain()), "gen");
        assert_eq!(settings.target_out_dir(&label), "obj/foo/bar");
        assert_eq!(settings.target_gen_dir(&label), "gen/foo/bar");
    }

    #[test]
    fn calculate_other_toolchain_directories() {
        let settings = settings();
        let label = Label::new(
            SourceDir::root(),
            "baz",
            Some(Label::new(SourceDir::new("//build/"), "host", None)),
        );

        assert_eq!(settings.root_out_dir(label.toolchain()), "host");
        assert_eq!(settings.target_out_dir(&label), "host/obj");
    }
}
