use super::Label;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InheritedLibraries {
    labels: Vec<Label>,
    public: HashMap<Label, bool>,
}

impl InheritedLibraries {
    /// Adds a library. An already present library is upgraded to public if
    /// it is added publicly again; it never becomes private.
    pub fn append(&mut self, label: &Label, is_public: bool) {
        if let Some(public) = self.public.get_mut(label) {
            *public |= is_public;
        } else {
            self.labels.push(label.clone());
            self.public.insert(label.clone(), is_public);
        }
    }

    /// Adds every entry of another set, public only if both the edge and the
    /// entry are public.
    pub fn append_inherited(&mut self, other: &Self, is_public: bool) {
        for (label, public) in other.iter() {
            self.append(label, is_public && public);
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, bool)> {
        self.labels
            .iter()
            .map(|label| (label, self.public.get(label).copied().unwrap_or_default()))
    }
}
