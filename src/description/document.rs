use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub build_settings: BuildSettingsDocument,
    #[serde(default)]
    pub toolchains: Vec<ToolchainDocument>,
    #[serde(default)]
    pub configs: Vec<ConfigDocument>,
    #[serde(default)]
    pub targets: Vec<TargetDocument>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildSettingsDocument {
    pub root_path: String,
    pub build_dir: String,
    #[serde(default = "default_python_path")]
    pub python_path: String,
    pub default_toolchain: String,
    #[serde(default = "default_check_for_bad_items")]
    pub check_for_bad_items: bool,
    #[serde(default)]
    pub written_files: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolchainDocument {
    pub label: String,
    #[serde(default)]
    pub tools: BTreeMap<String, ToolDocument>,
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default)]
    pub args: BTreeMap<String, String>,
    pub concurrent_links: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolDocument {
    pub command: String,
    pub outputs: Vec<String>,
    pub description: String,
    pub depfile: String,
    pub depsformat: String,
    pub output_prefix: String,
    pub default_output_extension: String,
    pub precompiled_header_type: String,
    pub link_output: String,
    pub depend_output: String,
    pub lib_switch: String,
    pub lib_dir_switch: String,
    pub restat: bool,
    pub rspfile: String,
    pub rspfile_content: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigValuesDocument {
    pub defines: Vec<String>,
    pub include_dirs: Vec<String>,
    pub cflags: Vec<String>,
    pub cflags_c: Vec<String>,
    pub cflags_cc: Vec<String>,
    pub cflags_objc: Vec<String>,
    pub cflags_objcc: Vec<String>,
    pub ldflags: Vec<String>,
    pub libs: Vec<String>,
    pub lib_dirs: Vec<String>,
    pub precompiled_header: Option<String>,
    pub precompiled_source: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ConfigDocument {
    pub label: String,
    #[serde(flatten)]
    pub values: ConfigValuesDocument,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TargetDocument {
    pub label: String,
    #[serde(rename = "type")]
    pub output_type: String,
    pub output_name: Option<String>,
    pub output_extension: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub public_deps: Vec<String>,
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default)]
    pub data_deps: Vec<String>,
    #[serde(default)]
    pub configs: Vec<String>,
    #[serde(default)]
    pub all_dependent_configs: Vec<String>,
    #[serde(default)]
    pub public_configs: Vec<String>,
    #[serde(default)]
    pub forward_dependent_configs_from: Vec<String>,
    #[serde(default)]
    pub allow_circular_includes_from: Vec<String>,
    #[serde(default)]
    pub complete_static_lib: bool,
    #[serde(default)]
    pub testonly: bool,
    pub visibility: Option<Vec<String>>,
    pub script: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    pub depfile: Option<String>,
    #[serde(flatten)]
    pub values: ConfigValuesDocument,
}

fn default_python_path() -> String {
    "python".into()
}

fn default_check_for_bad_items() -> bool {
    true
}
