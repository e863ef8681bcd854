use super::{
    InheritedLibraries, Label, OutputFile, PrecompiledHeader, SourceDir, SourceFile, UniqueVector,
};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub configs: UniqueVector<Label>,
    pub all_dependent_configs: UniqueVector<Label>,
    pub public_configs: UniqueVector<Label>,
    pub inherited_libraries: InheritedLibraries,
    pub all_lib_dirs: UniqueVector<SourceDir>,
    pub all_libs: UniqueVector<String>,
    pub recursive_hard_deps: BTreeSet<Label>,
    pub computed_output_name: String,
    pub link_output_file: Option<OutputFile>,
    pub dependency_output_file: Option<OutputFile>,
    pub precompiled_header: Option<PrecompiledHeader>,
    pub unknown_generated_inputs: Vec<SourceFile>,
}
