use super::{Dependency, Label, Substitution, Tool, ToolType};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolchain {
    label: Label,
    tools: BTreeMap<ToolType, Tool>,
    deps: Vec<Dependency>,
    args: BTreeMap<String, String>,
    concurrent_links: Option<usize>,
    substitutions: BTreeSet<Substitution>,
}

impl Toolchain {
    pub fn new(label: Label, tools: BTreeMap<ToolType, Tool>) -> Self {
        let substitutions = tools.values().flat_map(Tool::substitutions).collect();

        Self {
            label,
            tools,
            deps: vec![],
            args: Default::default(),
            concurrent_links: None,
            substitutions,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn name(&self) -> &str {
        self.label.name()
    }

    pub fn tool(&self, tool_type: ToolType) -> Option<&Tool> {
        self.tools.get(&tool_type)
    }

    pub fn tools(&self) -> &BTreeMap<ToolType, Tool> {
        &self.tools
    }

    pub fn deps(&self) -> &[Dependency] {
        &self.deps
    }

    pub fn args(&self) -> &BTreeMap<String, String> {
        &self.args
    }

    pub fn concurrent_links(&self) -> Option<usize> {
        self.concurrent_links
    }

    pub fn uses_substitution(&self, substitution: Substitution) -> bool {
        self.substitutions.contains(&substitution)
    }

    pub fn with_deps(self, deps: Vec<Dependency>) -> Self {
        Self { deps, ..self }
    }

    pub fn with_args(self, args: BTreeMap<String, String>) -> Self {
        Self { args, ..self }
    }

    pub fn with_concurrent_links(self, concurrent_links: Option<usize>) -> Self {
        Self {
            concurrent_links,
            ..self
        }
    }
}
