use std::path::PathBuf;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub check: bool,
    pub debug: bool,
    pub job_limit: Option<usize>,
    pub profile: bool,
    pub runtime_deps_list_file: Option<PathBuf>,
}
