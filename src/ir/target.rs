use super::{
    ActionValues, ConfigValues, Dependency, Label, OutputType, Resolution, SourceFile, Visibility,
};

/// A declared build target.
///
/// The declaration is immutable once constructed. Derived values are attached
/// exactly once through [`Target::set_resolution`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    label: Label,
    output_type: OutputType,
    output_name: Option<String>,
    output_extension: Option<String>,
    sources: Vec<SourceFile>,
    inputs: Vec<SourceFile>,
    data: Vec<SourceFile>,
    public_deps: Vec<Dependency>,
    private_deps: Vec<Dependency>,
    data_deps: Vec<Dependency>,
    configs: Vec<Dependency>,
    all_dependent_configs: Vec<Dependency>,
    public_configs: Vec<Dependency>,
    forward_dependent_configs: Vec<Dependency>,
    allow_circular_includes_from: Vec<Label>,
    complete_static_lib: bool,
    testonly: bool,
    visibility: Visibility,
    config_values: ConfigValues,
    action_values: ActionValues,
    resolution: Option<Resolution>,
}

impl Target {
    pub fn new(label: Label, output_type: OutputType) -> Self {
        Self {
            label,
            output_type,
            output_name: None,
            output_extension: None,
            sources: vec![],
            inputs: vec![],
            data: vec![],
            public_deps: vec![],
            private_deps: vec![],
            data_deps: vec![],
            configs: vec![],
            all_dependent_configs: vec![],
            public_configs: vec![],
            forward_dependent_configs: vec![],
            allow_circular_includes_from: vec![],
            complete_static_lib: false,
            testonly: false,
            visibility: Visibility::public(),
            config_values: Default::default(),
            action_values: Default::default(),
            resolution: None,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    pub fn output_extension(&self) -> Option<&str> {
        self.output_extension.as_deref()
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn inputs(&self) -> &[SourceFile] {
        &self.inputs
    }

    pub fn data(&self) -> &[SourceFile] {
        &self.data
    }

    pub fn public_deps(&self) -> &[Dependency] {
        &self.public_deps
    }

    pub fn private_deps(&self) -> &[Dependency] {
        &self.private_deps
    }

    pub fn data_deps(&self) -> &[Dependency] {
        &self.data_deps
    }

    pub fn linked_deps(&self) -> impl Iterator<Item = &Dependency> {
        self.public_deps.iter().chain(&self.private_deps)
    }

    pub fn all_deps(&self) -> impl Iterator<Item = &Dependency> {
        self.linked_deps().chain(&self.data_deps)
    }

    pub fn configs(&self) -> &[Dependency] {
        &self.configs
    }

    pub fn all_dependent_configs(&self) -> &[Dependency] {
        &self.all_dependent_configs
    }

    pub fn public_configs(&self) -> &[Dependency] {
        &self.public_configs
    }

    pub fn forward_dependent_configs(&self) -> &[Dependency] {
        &self.forward_dependent_configs
    }

    pub fn allow_circular_includes_from(&self) -> &[Label] {
        &self.allow_circular_includes_from
    }

    pub fn complete_static_lib(&self) -> bool {
        self.complete_static_lib
    }

    pub fn testonly(&self) -> bool {
        self.testonly
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn config_values(&self) -> &ConfigValues {
        &self.config_values
    }

    pub fn action_values(&self) -> &ActionValues {
        &self.action_values
    }

    pub fn toolchain(&self) -> Option<&Label> {
        self.label.toolchain()
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    pub fn set_resolution(&mut self, resolution: Resolution) -> bool {
        if self.resolution.is_some() {
            return false;
        }

        self.resolution = Some(resolution);

        true
    }

    /// Whether the target produces something that is linked or run as is
    /// rather than forwarding its libraries to dependents.
    pub fn is_final(&self) -> bool {
        match self.output_type {
            OutputType::Executable | OutputType::SharedLibrary => true,
            OutputType::StaticLibrary => self.complete_static_lib,
            _ => false,
        }
    }

    pub fn with_output_name(self, output_name: impl Into<String>) -> Self {
        Self {
            output_name: Some(output_name.into()),
            ..self
        }
    }

    pub fn with_output_extension(self, output_extension: impl Into<String>) -> Self {
        Self {
            output_extension: Some(output_extension.into()),
            ..self
        }
    }

    pub fn with_sources(self, sources: Vec<SourceFile>) -> Self {
        Self { sources, ..self }
    }

    pub fn with_inputs(self, inputs: Vec<SourceFile>) -> Self {
        Self { inputs, ..self }
    }

    pub fn with_data(self, data: Vec<SourceFile>) -> Self {
        Self { data, ..self }
    }

    pub fn with_public_deps(self, public_deps: Vec<Dependency>) -> Self {
        Self {
            public_deps,
            ..self
        }
    }

    pub fn with_private_deps(self, private_deps: Vec<Dependency>) -> Self {
        Self {
            private_deps,
            ..self
        }
    }

    pub fn with_data_deps(self, data_deps: Vec<Dependency>) -> Self {
        Self { data_deps, ..self }
    }

    pub fn with_configs(self, configs: Vec<Dependency>) -> Self {
        Self { configs, ..self }
    }

    pub fn with_all_dependent_configs(self, all_dependent_configs: Vec<Dependency>) -> Self {
        Self {
            all_dependent_configs,
            ..self
        }
    }

    pub fn with_public_configs(self, public_configs: Vec<Dependency>) -> Self {
        Self {
            public_configs,
            ..self
        }
    }

    pub fn with_forward_dependent_configs(self, forward: Vec<Dependency>) -> Self {
        Self {
            forward_dependent_configs: forward,
            ..self
        }
    }

    pub fn with_allow_circular_includes_from(self, labels: Vec<Label>) -> Self {
        Self {
            allow_circular_includes_from: labels,
            ..self
        }
    }

    pub fn with_complete_static_lib(self, complete_static_lib: bool) -> Self {
        Self {
            complete_static_lib,
            ..self
        }
    }

    pub fn with_testonly(self, testonly: bool) -> Self {
        Self { testonly, ..self }
    }

    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    pub fn with_config_values(self, config_values: ConfigValues) -> Self {
        Self {
            config_values,
            ..self
        }
    }

    pub fn with_action_values(self, action_values: ActionValues) -> Self {
        Self {
            action_values,
            ..self
        }
    }
}
