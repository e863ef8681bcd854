mod error;
mod record;

pub use self::error::BuilderError;
use self::record::Record;
use crate::{
    graph::Graph,
    ir::{BuildSettings, Item, Label, SourceFile},
    resolve::resolve,
};
use petgraph::{
    algo::kosaraju_scc,
    graph::{DiGraph, NodeIndex},
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Collects items in any order and resolves each target once everything it
/// refers to is resolved.
#[derive(Debug)]
pub struct Builder {
    graph: Graph,
    records: BTreeMap<Label, Record>,
}

impl Builder {
    pub fn new(settings: BuildSettings) -> Self {
        Self {
            graph: Graph::new(settings),
            records: Default::default(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn item_defined(&mut self, item: Item) -> Result<(), BuilderError> {
        let label = item.label().clone();

        if self
            .records
            .get(&label)
            .is_some_and(|record| record.defined())
        {
            return Err(BuilderError::DuplicateItem(label, item.kind()));
        }

        let dependencies = item_dependencies(&item);
        let mut unresolved = BTreeSet::new();

        self.graph.insert(item);

        for dependency in dependencies {
            let record = self.records.entry(dependency.clone()).or_default();

            record.request(&label);

            if !record.resolved() {
                record.wait(label.clone());
                unresolved.insert(dependency);
            }
        }

        let record = self.records.entry(label.clone()).or_default();
        record.define(unresolved);

        if record.is_ready() {
            self.resolve_items(label)?;
        }

        Ok(())
    }

    fn resolve_items(&mut self, label: Label) -> Result<(), BuilderError> {
        let mut labels = vec![label];

        while let Some(label) = labels.pop() {
            if self.graph.target(&label).is_some() {
                let resolution = resolve(&self.graph, &label)?;
                self.graph.set_resolution(&label, resolution);
            }

            let waiters = self
                .records
                .get_mut(&label)
                .map(Record::resolve)
                .unwrap_or_default();

            for waiter in waiters {
                if let Some(record) = self.records.get_mut(&waiter) {
                    record.release(&label);

                    if record.is_ready() {
                        labels.push(waiter);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<Graph, BuilderError> {
        let unresolved = self
            .records
            .iter()
            .filter(|(_, record)| !record.resolved())
            .map(|(label, _)| label.clone())
            .collect::<Vec<_>>();

        if !unresolved.is_empty() {
            if self.graph.settings().check_for_bad_items() {
                return Err(self.unresolved_error(unresolved));
            }

            for label in &unresolved {
                self.graph.remove(label);
            }
        }

        let unknown = unknown_generated_inputs(&self.graph);

        if unknown.is_empty() {
            Ok(self.graph)
        } else {
            Err(BuilderError::UnknownGeneratedInputs(unknown))
        }
    }

    fn unresolved_error(&self, unresolved: Vec<Label>) -> BuilderError {
        let undefined = self
            .records
            .iter()
            .filter(|(_, record)| !record.defined())
            .filter_map(|(label, record)| Some((label.clone(), record.requested_by()?.clone())))
            .collect::<Vec<_>>();

        if undefined.is_empty() {
            BuilderError::Cycle(self.find_cycle().unwrap_or(unresolved))
        } else {
            BuilderError::Undefined(undefined)
        }
    }

    fn find_cycle(&self) -> Option<Vec<Label>> {
        let mut graph = DiGraph::<Label, ()>::new();
        let mut indexes = HashMap::<&Label, NodeIndex>::new();

        for (label, record) in &self.records {
            if !record.resolved() {
                indexes.insert(label, graph.add_node(label.clone()));
            }
        }

        for (label, record) in &self.records {
            for dependency in record.unresolved_dependencies() {
                if let (Some(&from), Some(&to)) = (indexes.get(label), indexes.get(dependency)) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        kosaraju_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || graph.find_edge(component[0], component[0]).is_some()
            })
            .min_by_key(|component| component.iter().map(|index| &graph[*index]).min().cloned())
            .and_then(|component| cycle_path(&graph, &component))
    }
}

fn cycle_path(graph: &DiGraph<Label, ()>, component: &[NodeIndex]) -> Option<Vec<Label>> {
    let members = component.iter().copied().collect::<HashSet<_>>();
    let start = *component.iter().min_by_key(|index| &graph[**index])?;
    let mut parents = HashMap::<NodeIndex, NodeIndex>::new();
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node) {
            if next == start {
                let mut path = vec![node];
                let mut current = node;

                while current != start {
                    current = *parents.get(&current)?;
                    path.push(current);
                }

                return Some(path.into_iter().rev().map(|index| graph[index].clone()).collect());
            } else if members.contains(&next) && !parents.contains_key(&next) {
                parents.insert(next, node);
                queue.push_back(next);
            }
        }
    }

    None
}

fn unknown_generated_inputs(graph: &Graph) -> Vec<(Label, SourceFile)> {
    let written_files = graph.settings().written_files();

    graph
        .resolved_targets()
        .flat_map(|(target, resolution)| {
            resolution
                .unknown_generated_inputs
                .iter()
                .filter(move |file| !written_files.contains(*file))
                .map(move |file| (target.label().clone(), file.clone()))
        })
        .collect()
}

fn item_dependencies(item: &Item) -> BTreeSet<Label> {
    match item {
        Item::Config(_) => Default::default(),
        Item::Target(target) => target
            .toolchain()
            .cloned()
            .into_iter()
            .chain(
                target
                    .configs()
                    .iter()
                    .chain(target.all_dependent_configs())
                    .chain(target.public_configs())
                    .chain(target.all_deps())
                    .map(|dependency| dependency.label().clone()),
            )
            .collect(),
        Item::Toolchain(toolchain) => toolchain
            .deps()
            .iter()
            .map(|dependency| dependency.label().clone())
            .collect(),
    }
}
