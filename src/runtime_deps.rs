use crate::{
    graph::Graph,
    ir::{Label, OutputFile, OutputType, Resolution, Target},
    resolve::ResolveError,
    substitution_writer::action_outputs,
};
use std::collections::{HashMap, HashSet};

/// Files needed to run the output of a target, each with the target that
/// contributed it. The target's own main output comes first.
pub fn compute_runtime_deps(
    graph: &Graph,
    label: &Label,
) -> Result<Vec<(OutputFile, Label)>, ResolveError> {
    let mut collector = Collector {
        graph,
        files: vec![],
        found: HashSet::new(),
        seen: HashMap::new(),
    };

    collector.collect(label, false)?;

    Ok(collector.files)
}

pub fn main_output(target: &Target, resolution: &Resolution) -> Option<OutputFile> {
    if target.output_type() == OutputType::SharedLibrary {
        resolution.link_output_file.clone()
    } else {
        resolution.dependency_output_file.clone()
    }
}

struct Collector<'a> {
    graph: &'a Graph,
    files: Vec<(OutputFile, Label)>,
    found: HashSet<OutputFile>,
    seen: HashMap<Label, bool>,
}

impl Collector<'_> {
    fn collect(&mut self, label: &Label, is_data: bool) -> Result<(), ResolveError> {
        match self.seen.get_mut(label) {
            Some(seen_as_data) if *seen_as_data || !is_data => return Ok(()),
            Some(seen_as_data) => *seen_as_data = true,
            None => {
                self.seen.insert(label.clone(), is_data);
            }
        }

        let graph = self.graph;
        let settings = graph.settings();
        let target = graph
            .target(label)
            .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?;
        let resolution = target
            .resolution()
            .ok_or_else(|| ResolveError::TargetNotResolved(label.clone()))?;

        if matches!(
            target.output_type(),
            OutputType::Executable | OutputType::SharedLibrary
        ) {
            if let Some(output) = main_output(target, resolution) {
                self.add(output, label);
            }
        }

        for file in target.data() {
            self.add(settings.rebase_to_output(file), label);
        }

        if is_data && target.output_type().is_hard_dependency() {
            for output in action_outputs(settings, target, resolution) {
                self.add(output, label);
            }
        }

        for dependency in target.linked_deps() {
            if graph
                .target(dependency.label())
                .is_some_and(|target| target.output_type() == OutputType::Executable)
            {
                continue;
            }

            self.collect(dependency.label(), false)?;
        }

        for dependency in target.data_deps() {
            self.collect(dependency.label(), true)?;
        }

        Ok(())
    }

    fn add(&mut self, file: OutputFile, label: &Label) {
        if self.found.insert(file.clone()) {
            self.files.push((file, label.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ir::{ActionValues, SourceFile},
        parse::parse_pattern,
        testing::{dependency, label, resolve_targets, target},
    };
    use pretty_assertions::assert_eq;

    fn files(runtime_deps: &[(OutputFile, Label)]) -> Vec<&str> {
        runtime_deps
            .iter()
            .map(|(file, _)| file.value())
            .collect()
    }

    #[test]
    fn collect_libraries_and_data() {
        let graph = resolve_targets(vec![
            target("//foo:static", OutputType::StaticLibrary)
                .with_data(vec![SourceFile::new("//foo/x.dat")]),
            target("//foo:shared", OutputType::SharedLibrary)
                .with_data(vec![SourceFile::new("//foo/y.dat")]),
            target("//foo:set", OutputType::SourceSet)
                .with_data(vec![SourceFile::new("//foo/w.dat")]),
            target("//foo:exe", OutputType::Executable)
                .with_data(vec![SourceFile::new("//foo/v.dat")])
                .with_private_deps(vec![
                    dependency("//foo:static"),
                    dependency("//foo:shared"),
                    dependency("//foo:set"),
                ]),
        ])
        .unwrap();
        let runtime_deps = compute_runtime_deps(&graph, &label("//foo:exe")).unwrap();
        let mut rest = files(&runtime_deps)[1..].to_vec();

        rest.sort();

        assert_eq!(runtime_deps.len(), 6);
        assert_eq!(runtime_deps[0], (OutputFile::new("./exe"), label("//foo:exe")));
        assert_eq!(
            rest,
            vec![
                "../../foo/v.dat",
                "../../foo/w.dat",
                "../../foo/x.dat",
                "../../foo/y.dat",
                "./libshared.so",
            ]
        );
    }

    fn action() -> Target {
        target("//foo:gen", OutputType::Action).with_action_values(ActionValues::new(
            Some(SourceFile::new("//foo/gen.py")),
            vec![],
            vec![parse_pattern("//out/Debug/gen/foo/out.h").unwrap()],
            None,
        ))
    }

    #[test]
    fn skip_action_outputs_of_linked_dependency() {
        let graph = resolve_targets(vec![
            action(),
            target("//foo:exe", OutputType::Executable)
                .with_private_deps(vec![dependency("//foo:gen")]),
        ])
        .unwrap();

        assert_eq!(
            files(&compute_runtime_deps(&graph, &label("//foo:exe")).unwrap()),
            vec!["./exe"]
        );
    }

    #[test]
    fn collect_action_outputs_of_data_dependency() {
        let graph = resolve_targets(vec![
            action(),
            target("//foo:exe", OutputType::Executable)
                .with_data_deps(vec![dependency("//foo:gen")]),
        ])
        .unwrap();

        assert_eq!(
            files(&compute_runtime_deps(&graph, &label("//foo:exe")).unwrap()),
            vec!["./exe", "gen/foo/out.h"]
        );
    }

    #[test]
    fn skip_outputs_of_action_itself() {
        let graph = resolve_targets(vec![action()]).unwrap();

        assert!(
            compute_runtime_deps(&graph, &label("//foo:gen"))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn revisit_target_reached_as_data_dependency() {
        let graph = resolve_targets(vec![
            action(),
            target("//foo:set", OutputType::SourceSet)
                .with_private_deps(vec![dependency("//foo:gen")]),
            target("//foo:exe", OutputType::Executable)
                .with_private_deps(vec![dependency("//foo:set")])
                .with_data_deps(vec![dependency("//foo:gen")]),
        ])
        .unwrap();

        assert_eq!(
            files(&compute_runtime_deps(&graph, &label("//foo:exe")).unwrap()),
            vec!["./exe", "gen/foo/out.h"]
        );
    }

    #[test]
    fn skip_executables_in_linked_deps() {
        let graph = resolve_targets(vec![
            target("//foo:tool", OutputType::Executable),
            target("//foo:exe", OutputType::Executable)
                .with_private_deps(vec![dependency("//foo:tool")]),
            target("//foo:runner", OutputType::Group)
                .with_data_deps(vec![dependency("//foo:tool")]),
        ])
        .unwrap();

        assert_eq!(
            files(&compute_runtime_deps(&graph, &label("//foo:exe")).unwrap()),
            vec!["./exe"]
        );
        assert_eq!(
            files(&compute_runtime_deps(&graph, &label("//foo:runner")).unwrap()),
            vec!["./tool"]
        );
    }
}
