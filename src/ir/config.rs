use super::{ConfigValues, Label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    label: Label,
    values: ConfigValues,
}

impl Config {
    pub fn new(label: Label, values: ConfigValues) -> Self {
        Self { label, values }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn values(&self) -> &ConfigValues {
        &self.values
    }
}
