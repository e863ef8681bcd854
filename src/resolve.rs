mod error;

pub use self::error::ResolveError;
use crate::{
    graph::Graph,
    ir::{
        BuildSettings, Config, Dependency, Label, OutputFile, OutputType, PrecompiledHeader,
        Resolution, SourceFile, Target, Tool,
    },
    substitution_writer::{SubstitutionWriter, action_outputs},
};
use std::collections::HashSet;

pub fn resolve(graph: &Graph, label: &Label) -> Result<Resolution, ResolveError> {
    let target = graph
        .target(label)
        .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?;

    if target.resolution().is_some() {
        return Err(ResolveError::AlreadyResolved(label.clone()));
    }

    let mut resolution = Resolution::default();

    resolution.configs.extend(labels(target.configs()));
    resolution
        .all_dependent_configs
        .extend(labels(target.all_dependent_configs()));
    resolution
        .public_configs
        .extend(labels(target.public_configs()));
    resolution
        .configs
        .extend(labels(target.all_dependent_configs()));
    resolution.configs.extend(labels(target.public_configs()));

    pull_own_libraries(graph, target, &mut resolution)?;

    for (dependency, is_public) in target
        .public_deps()
        .iter()
        .map(|dependency| (dependency, true))
        .chain(target.private_deps().iter().map(|dependency| (dependency, false)))
    {
        pull_dependent_target(graph, dependency_target(graph, dependency)?, is_public, &mut resolution)?;
    }

    check_circular_includes(target)?;
    pull_forwarded_configs(graph, target, &mut resolution)?;
    pull_recursive_hard_deps(graph, target, &mut resolution)?;

    resolution.precompiled_header = resolve_precompiled_header(graph, target, &resolution)?;

    fill_output_files(graph, target, &mut resolution)?;

    resolution.unknown_generated_inputs = find_unknown_generated_inputs(graph, target, &resolution)?;

    check_visibility(graph, target)?;
    check_testonly(graph, target)?;
    check_no_nested_static_libraries(graph, target, &resolution)?;

    Ok(resolution)
}

pub fn computed_output_name(target: &Target, tool: Option<&Tool>) -> String {
    let name = target.output_name().unwrap_or(target.label().name());

    match tool.map(Tool::output_prefix) {
        Some(prefix) if !name.starts_with(prefix) => format!("{}{}", prefix, name),
        _ => name.into(),
    }
}

fn labels(dependencies: &[Dependency]) -> impl Iterator<Item = Label> + '_ {
    dependencies
        .iter()
        .map(|dependency| dependency.label().clone())
}

fn dependency_target<'a>(
    graph: &'a Graph,
    dependency: &Dependency,
) -> Result<(&'a Target, &'a Resolution), ResolveError> {
    resolved_target(graph, dependency.label())
}

fn resolved_target<'a>(
    graph: &'a Graph,
    label: &Label,
) -> Result<(&'a Target, &'a Resolution), ResolveError> {
    let target = graph
        .target(label)
        .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?;

    Ok((
        target,
        target
            .resolution()
            .ok_or_else(|| ResolveError::TargetNotResolved(label.clone()))?,
    ))
}

fn config<'a>(graph: &'a Graph, target: &Target, label: &Label) -> Result<&'a Config, ResolveError> {
    graph
        .config(label)
        .ok_or_else(|| ResolveError::ConfigNotFound(target.label().clone(), label.clone()))
}

fn pull_own_libraries(
    graph: &Graph,
    target: &Target,
    resolution: &mut Resolution,
) -> Result<(), ResolveError> {
    let mut values = vec![target.config_values()];

    for label in resolution.configs.iter() {
        values.push(config(graph, target, label)?.values());
    }

    for values in values {
        resolution.all_lib_dirs.extend(values.lib_dirs.iter().cloned());
        resolution.all_libs.extend(values.libs.iter().cloned());
    }

    Ok(())
}

fn pull_dependent_target(
    graph: &Graph,
    (dependency, dependency_resolution): (&Target, &Resolution),
    is_public: bool,
    resolution: &mut Resolution,
) -> Result<(), ResolveError> {
    for label in dependency_resolution.all_dependent_configs.iter() {
        resolution.configs.push(label.clone());
        resolution.all_dependent_configs.push(label.clone());
    }

    resolution
        .configs
        .extend(dependency_resolution.public_configs.iter().cloned());

    if matches!(
        dependency.output_type(),
        OutputType::StaticLibrary | OutputType::SharedLibrary | OutputType::SourceSet
    ) {
        resolution
            .inherited_libraries
            .append(dependency.label(), is_public);
    }

    if dependency.output_type() == OutputType::SharedLibrary {
        for (label, public) in dependency_resolution.inherited_libraries.iter() {
            if public && is_shared_library(graph, label)? {
                resolution.inherited_libraries.append(label, is_public);
            }
        }
    } else if !dependency.is_final() {
        resolution
            .inherited_libraries
            .append_inherited(&dependency_resolution.inherited_libraries, is_public);
        resolution
            .all_lib_dirs
            .extend(dependency_resolution.all_lib_dirs.iter().cloned());
        resolution
            .all_libs
            .extend(dependency_resolution.all_libs.iter().cloned());
    }

    Ok(())
}

fn is_shared_library(graph: &Graph, label: &Label) -> Result<bool, ResolveError> {
    Ok(graph
        .target(label)
        .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?
        .output_type()
        == OutputType::SharedLibrary)
}

fn pull_forwarded_configs(
    graph: &Graph,
    target: &Target,
    resolution: &mut Resolution,
) -> Result<(), ResolveError> {
    for dependency in target.public_deps() {
        let (_, dependency_resolution) = dependency_target(graph, dependency)?;

        resolution
            .public_configs
            .extend(dependency_resolution.public_configs.iter().cloned());
    }

    for forwarded in target.forward_dependent_configs() {
        if !target
            .linked_deps()
            .any(|dependency| dependency.label() == forwarded.label())
        {
            return Err(ResolveError::ForwardedConfigNotInDeps {
                target: target.label().clone(),
                dependency: forwarded.label().clone(),
                origin: forwarded.origin().cloned(),
            });
        }

        let (_, dependency_resolution) = dependency_target(graph, forwarded)?;

        resolution
            .public_configs
            .extend(dependency_resolution.public_configs.iter().cloned());
    }

    Ok(())
}

fn check_circular_includes(target: &Target) -> Result<(), ResolveError> {
    for label in target.allow_circular_includes_from() {
        if !target
            .linked_deps()
            .any(|dependency| dependency.label() == label)
        {
            return Err(ResolveError::CircularIncludesNotInDeps {
                target: target.label().clone(),
                dependency: label.clone(),
            });
        }
    }

    Ok(())
}

fn pull_recursive_hard_deps(
    graph: &Graph,
    target: &Target,
    resolution: &mut Resolution,
) -> Result<(), ResolveError> {
    for dependency in target.linked_deps() {
        let (dependency, dependency_resolution) = dependency_target(graph, dependency)?;

        if dependency.output_type().is_hard_dependency() {
            resolution
                .recursive_hard_deps
                .insert(dependency.label().clone());
        }

        resolution
            .recursive_hard_deps
            .extend(dependency_resolution.recursive_hard_deps.iter().cloned());
    }

    Ok(())
}

fn resolve_precompiled_header(
    graph: &Graph,
    target: &Target,
    resolution: &Resolution,
) -> Result<Option<PrecompiledHeader>, ResolveError> {
    let mut current = target
        .config_values()
        .precompiled_header
        .as_ref()
        .map(|header| (target.label(), header));

    for label in resolution.configs.iter() {
        let Some(header) = &config(graph, target, label)?.values().precompiled_header else {
            continue;
        };

        match current {
            None => current = Some((label, header)),
            Some((first_label, first)) if first != header => {
                return Err(ResolveError::PrecompiledHeaderConflict {
                    target: target.label().clone(),
                    first: (first_label.clone(), first.clone()),
                    second: (label.clone(), header.clone()),
                });
            }
            Some(_) => {}
        }
    }

    Ok(current.map(|(_, header)| header.clone()))
}

fn fill_output_files(
    graph: &Graph,
    target: &Target,
    resolution: &mut Resolution,
) -> Result<(), ResolveError> {
    let label = target.label();
    let toolchain_label = label
        .toolchain()
        .unwrap_or(graph.settings().default_toolchain());
    let toolchain = graph
        .toolchain(toolchain_label)
        .ok_or_else(|| ResolveError::ToolchainNotFound(toolchain_label.clone()))?;
    let tool_type = target.output_type().final_tool_type();
    let tool = toolchain
        .tool(tool_type)
        .ok_or_else(|| ResolveError::ToolNotFound(toolchain_label.clone(), tool_type))?;

    resolution.computed_output_name = computed_output_name(target, Some(tool));

    let writer = SubstitutionWriter::new(graph.settings(), label, &resolution.computed_output_name)
        .with_output_extension(output_extension(target, tool));
    let first_output = || {
        tool.outputs()
            .first()
            .map(|pattern| writer.apply_to_target(pattern))
            .ok_or(ResolveError::ToolNotFound(toolchain_label.clone(), tool_type))
    };

    let (link_output, dependency_output) = match target.output_type() {
        OutputType::Executable => (None, first_output()?),
        OutputType::StaticLibrary => {
            let output = first_output()?;
            (Some(output.clone()), output)
        }
        OutputType::SharedLibrary => {
            if tool.link_output().is_empty() && tool.depend_output().is_empty() {
                let output = first_output()?;
                (Some(output.clone()), output)
            } else {
                (
                    Some(writer.apply_to_target(tool.link_output())),
                    writer.apply_to_target(tool.depend_output()),
                )
            }
        }
        OutputType::SourceSet
        | OutputType::Group
        | OutputType::Copy
        | OutputType::Action
        | OutputType::ActionForeach => (
            None,
            OutputFile::new(format!(
                "{}/{}.stamp",
                graph.settings().target_out_dir(label),
                resolution.computed_output_name
            )),
        ),
    };

    resolution.link_output_file = link_output;
    resolution.dependency_output_file = Some(dependency_output);

    Ok(())
}

pub fn output_extension(target: &Target, tool: &Tool) -> String {
    match target.output_extension() {
        Some("") => String::new(),
        Some(extension) => format!(".{}", extension),
        None => tool.default_output_extension().into(),
    }
}

// A source or input in the build directory must come from the target itself,
// one of its deps, or a chain of public deps below one of them.
fn find_unknown_generated_inputs(
    graph: &Graph,
    target: &Target,
    resolution: &Resolution,
) -> Result<Vec<SourceFile>, ResolveError> {
    let settings = graph.settings();
    let mut unknown = vec![];

    for file in target.sources().iter().chain(target.inputs()) {
        if !settings.is_in_build_dir(file) {
            continue;
        }

        let output = settings.rebase_to_output(file);

        if produces(settings, target, resolution, &output) {
            continue;
        }

        let mut seen = HashSet::from([target.label().clone()]);
        let mut generated = false;

        for dependency in target.linked_deps() {
            if is_generated_by(graph, dependency.label(), &output, &mut seen)? {
                generated = true;
                break;
            }
        }

        if !generated {
            unknown.push(file.clone());
        }
    }

    Ok(unknown)
}

fn is_generated_by(
    graph: &Graph,
    label: &Label,
    file: &OutputFile,
    seen: &mut HashSet<Label>,
) -> Result<bool, ResolveError> {
    if !seen.insert(label.clone()) {
        return Ok(false);
    }

    let (target, resolution) = resolved_target(graph, label)?;

    if produces(graph.settings(), target, resolution, file) {
        return Ok(true);
    }

    for dependency in target.public_deps() {
        if is_generated_by(graph, dependency.label(), file, seen)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn produces(
    settings: &BuildSettings,
    target: &Target,
    resolution: &Resolution,
    file: &OutputFile,
) -> bool {
    action_outputs(settings, target, resolution)
        .iter()
        .chain(&resolution.link_output_file)
        .chain(&resolution.dependency_output_file)
        .any(|output| trim_current_directory(output.value()) == trim_current_directory(file.value()))
}

fn trim_current_directory(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

fn check_visibility(graph: &Graph, target: &Target) -> Result<(), ResolveError> {
    for dependency in target.all_deps() {
        if dependency.origin().is_none() {
            continue;
        }

        let (dependency_target, _) = dependency_target(graph, dependency)?;

        if !dependency_target.visibility().can_see(target.label()) {
            return Err(ResolveError::NotVisible {
                from: target.label().clone(),
                to: dependency_target.label().clone(),
                visibility: dependency_target.visibility().clone(),
                origin: dependency.origin().cloned(),
            });
        }
    }

    Ok(())
}

fn check_testonly(graph: &Graph, target: &Target) -> Result<(), ResolveError> {
    if target.testonly() {
        return Ok(());
    }

    for dependency in target.linked_deps() {
        let (dependency_target, _) = dependency_target(graph, dependency)?;

        if dependency_target.testonly() {
            return Err(ResolveError::TestOnly {
                from: target.label().clone(),
                to: dependency_target.label().clone(),
                origin: dependency.origin().cloned(),
            });
        }
    }

    Ok(())
}

fn check_no_nested_static_libraries(
    graph: &Graph,
    target: &Target,
    resolution: &Resolution,
) -> Result<(), ResolveError> {
    if target.output_type() != OutputType::StaticLibrary || !target.complete_static_lib() {
        return Ok(());
    }

    for label in target
        .linked_deps()
        .map(Dependency::label)
        .chain(resolution.inherited_libraries.labels())
    {
        let dependency = graph
            .target(label)
            .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?;

        if dependency.output_type() == OutputType::StaticLibrary
            && !dependency.complete_static_lib()
        {
            return Err(ResolveError::NestedStaticLibrary {
                target: target.label().clone(),
                dependency: label.clone(),
            });
        }
    }

    Ok(())
}
