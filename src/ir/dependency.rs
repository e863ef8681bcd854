use super::{Label, Origin};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Dependency {
    label: Label,
    origin: Option<Origin>,
}

impl Dependency {
    pub fn new(label: Label, origin: Option<Origin>) -> Self {
        Self { label, origin }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }
}

impl From<Label> for Dependency {
    fn from(label: Label) -> Self {
        Self::new(label, None)
    }
}
