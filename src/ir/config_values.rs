use super::{PrecompiledHeader, SourceDir};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigValues {
    pub defines: Vec<String>,
    pub include_dirs: Vec<SourceDir>,
    pub cflags: Vec<String>,
    pub cflags_c: Vec<String>,
    pub cflags_cc: Vec<String>,
    pub cflags_objc: Vec<String>,
    pub cflags_objcc: Vec<String>,
    pub ldflags: Vec<String>,
    pub libs: Vec<String>,
    pub lib_dirs: Vec<SourceDir>,
    pub precompiled_header: Option<PrecompiledHeader>,
}
