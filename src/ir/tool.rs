use super::{DepsFormat, PrecompiledHeaderType, Substitution, SubstitutionPattern};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tool {
    command: SubstitutionPattern,
    outputs: Vec<SubstitutionPattern>,
    description: SubstitutionPattern,
    depfile: SubstitutionPattern,
    deps_format: DepsFormat,
    output_prefix: String,
    default_output_extension: String,
    precompiled_header_type: PrecompiledHeaderType,
    link_output: SubstitutionPattern,
    depend_output: SubstitutionPattern,
    lib_switch: String,
    lib_dir_switch: String,
    restat: bool,
    rspfile: SubstitutionPattern,
    rspfile_content: SubstitutionPattern,
}

impl Tool {
    pub fn new(command: SubstitutionPattern, outputs: Vec<SubstitutionPattern>) -> Self {
        Self {
            command,
            outputs,
            ..Default::default()
        }
    }

    pub fn command(&self) -> &SubstitutionPattern {
        &self.command
    }

    pub fn outputs(&self) -> &[SubstitutionPattern] {
        &self.outputs
    }

    pub fn description(&self) -> &SubstitutionPattern {
        &self.description
    }

    pub fn depfile(&self) -> &SubstitutionPattern {
        &self.depfile
    }

    pub fn deps_format(&self) -> DepsFormat {
        self.deps_format
    }

    pub fn output_prefix(&self) -> &str {
        &self.output_prefix
    }

    pub fn default_output_extension(&self) -> &str {
        &self.default_output_extension
    }

    pub fn precompiled_header_type(&self) -> PrecompiledHeaderType {
        self.precompiled_header_type
    }

    pub fn link_output(&self) -> &SubstitutionPattern {
        &self.link_output
    }

    pub fn depend_output(&self) -> &SubstitutionPattern {
        &self.depend_output
    }

    pub fn lib_switch(&self) -> &str {
        &self.lib_switch
    }

    pub fn lib_dir_switch(&self) -> &str {
        &self.lib_dir_switch
    }

    pub fn restat(&self) -> bool {
        self.restat
    }

    pub fn rspfile(&self) -> &SubstitutionPattern {
        &self.rspfile
    }

    pub fn rspfile_content(&self) -> &SubstitutionPattern {
        &self.rspfile_content
    }

    pub fn substitutions(&self) -> impl Iterator<Item = Substitution> + '_ {
        [
            &self.command,
            &self.description,
            &self.depfile,
            &self.link_output,
            &self.depend_output,
            &self.rspfile,
            &self.rspfile_content,
        ]
        .into_iter()
        .chain(&self.outputs)
        .flat_map(SubstitutionPattern::substitutions)
    }

    pub fn with_description(self, description: SubstitutionPattern) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub fn with_depfile(self, depfile: SubstitutionPattern, deps_format: DepsFormat) -> Self {
        Self {
            depfile,
            deps_format,
            ..self
        }
    }

    pub fn with_output_prefix(self, output_prefix: impl Into<String>) -> Self {
        Self {
            output_prefix: output_prefix.into(),
            ..self
        }
    }

    pub fn with_default_output_extension(self, extension: impl Into<String>) -> Self {
        Self {
            default_output_extension: extension.into(),
            ..self
        }
    }

    pub fn with_precompiled_header_type(self, header_type: PrecompiledHeaderType) -> Self {
        Self {
            precompiled_header_type: header_type,
            ..self
        }
    }

    pub fn with_link_outputs(
        self,
        link_output: SubstitutionPattern,
        depend_output: SubstitutionPattern,
    ) -> Self {
        Self {
            link_output,
            depend_output,
            ..self
        }
    }

    pub fn with_switches(
        self,
        lib_switch: impl Into<String>,
        lib_dir_switch: impl Into<String>,
    ) -> Self {
        Self {
            lib_switch: lib_switch.into(),
            lib_dir_switch: lib_dir_switch.into(),
            ..self
        }
    }

    pub fn with_restat(self, restat: bool) -> Self {
        Self { restat, ..self }
    }

    pub fn with_rspfile(
        self,
        rspfile: SubstitutionPattern,
        rspfile_content: SubstitutionPattern,
    ) -> Self {
        Self {
            rspfile,
            rspfile_content,
            ..self
        }
    }
}
