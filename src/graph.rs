use crate::ir::{BuildSettings, Config, Item, Label, Resolution, Target, Toolchain};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    settings: BuildSettings,
    targets: BTreeMap<Label, Target>,
    configs: BTreeMap<Label, Config>,
    toolchains: BTreeMap<Label, Toolchain>,
}

impl Graph {
    pub fn new(settings: BuildSettings) -> Self {
        Self {
            settings,
            targets: Default::default(),
            configs: Default::default(),
            toolchains: Default::default(),
        }
    }

    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(item.label()) {
            return false;
        }

        match item {
            Item::Config(config) => {
                self.configs.insert(config.label().clone(), config);
            }
            Item::Target(target) => {
                self.targets.insert(target.label().clone(), target);
            }
            Item::Toolchain(toolchain) => {
                self.toolchains
                    .insert(toolchain.label().clone(), toolchain);
            }
        }

        true
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.targets.contains_key(label)
            || self.configs.contains_key(label)
            || self.toolchains.contains_key(label)
    }

    pub fn target(&self, label: &Label) -> Option<&Target> {
        self.targets.get(label)
    }

    pub fn config(&self, label: &Label) -> Option<&Config> {
        self.configs.get(label)
    }

    pub fn toolchain(&self, label: &Label) -> Option<&Toolchain> {
        self.toolchains.get(label)
    }

    pub fn resolution(&self, label: &Label) -> Option<&Resolution> {
        self.target(label).and_then(Target::resolution)
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }

    pub fn resolved_targets(&self) -> impl Iterator<Item = (&Target, &Resolution)> {
        self.targets
            .values()
            .filter_map(|target| Some((target, target.resolution()?)))
    }

    pub fn toolchains(&self) -> impl Iterator<Item = &Toolchain> {
        self.toolchains.values()
    }

    /// Returns false if the target does not exist or is already resolved.
    pub fn set_resolution(&mut self, label: &Label, resolution: Resolution) -> bool {
        self.targets
            .get_mut(label)
            .is_some_and(|target| target.set_resolution(resolution))
    }

    pub fn remove(&mut self, label: &Label) {
        self.targets.remove(label);
        self.configs.remove(label);
        self.toolchains.remove(label);
    }
}
