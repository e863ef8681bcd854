use super::{SourceFile, SubstitutionPattern};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionValues {
    script: Option<SourceFile>,
    args: Vec<SubstitutionPattern>,
    outputs: Vec<SubstitutionPattern>,
    depfile: Option<SubstitutionPattern>,
}

impl ActionValues {
    pub fn new(
        script: Option<SourceFile>,
        args: Vec<SubstitutionPattern>,
        outputs: Vec<SubstitutionPattern>,
        depfile: Option<SubstitutionPattern>,
    ) -> Self {
        Self {
            script,
            args,
            outputs,
            depfile,
        }
    }

    pub fn script(&self) -> Option<&SourceFile> {
        self.script.as_ref()
    }

    pub fn args(&self) -> &[SubstitutionPattern] {
        &self.args
    }

    pub fn outputs(&self) -> &[SubstitutionPattern] {
        &self.outputs
    }

    pub fn depfile(&self) -> Option<&SubstitutionPattern> {
        self.depfile.as_ref()
    }
}
