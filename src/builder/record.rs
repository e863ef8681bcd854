use crate::ir::Label;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct Record {
    defined: bool,
    resolved: bool,
    requested_by: Option<Label>,
    unresolved_dependencies: BTreeSet<Label>,
    waiters: Vec<Label>,
}

impl Record {
    pub fn defined(&self) -> bool {
        self.defined
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    pub fn requested_by(&self) -> Option<&Label> {
        self.requested_by.as_ref()
    }

    pub fn unresolved_dependencies(&self) -> &BTreeSet<Label> {
        &self.unresolved_dependencies
    }

    pub fn is_ready(&self) -> bool {
        self.defined && !self.resolved && self.unresolved_dependencies.is_empty()
    }

    pub fn define(&mut self, unresolved_dependencies: BTreeSet<Label>) {
        self.defined = true;
        self.unresolved_dependencies = unresolved_dependencies;
    }

    pub fn request(&mut self, requester: &Label) {
        if self.requested_by.is_none() {
            self.requested_by = Some(requester.clone());
        }
    }

    pub fn wait(&mut self, waiter: Label) {
        self.waiters.push(waiter);
    }

    pub fn resolve(&mut self) -> Vec<Label> {
        self.resolved = true;

        std::mem::take(&mut self.waiters)
    }

    pub fn release(&mut self, dependency: &Label) {
        self.unresolved_dependencies.remove(dependency);
    }
}
