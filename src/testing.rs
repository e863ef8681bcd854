use crate::{
    graph::Graph,
    ir::{
        BuildSettings, DepsFormat, Dependency, Item, Label, Origin, OutputType, SourceDir, Target, Tool,
        ToolType, Toolchain,
    },
    parse::{parse_label, parse_pattern},
    resolve::{ResolveError, resolve},
};

pub fn toolchain_label() -> Label {
    Label::new(SourceDir::new("//toolchain/"), "default", None)
}

pub fn settings() -> BuildSettings {
    BuildSettings::new("/src", SourceDir::new("//out/Debug/"), "python3", toolchain_label())
}

pub fn label(path: &str) -> Label {
    parse_label(path, &SourceDir::root(), Some(&toolchain_label())).unwrap()
}

pub fn dependency(path: &str) -> Dependency {
    Dependency::new(label(path), Some(Origin::new(format!("BUILD.json: {}", path))))
}

pub fn target(path: &str, output_type: OutputType) -> Target {
    Target::new(label(path), output_type)
}

pub fn tool(command: &str, outputs: &[&str]) -> Tool {
    Tool::new(
        parse_pattern(command).unwrap(),
        outputs
            .iter()
            .map(|output| parse_pattern(output).unwrap())
            .collect(),
    )
}

pub fn toolchain() -> Toolchain {
    let object = "{{source_out_dir}}/{{target_output_name}}.{{source_name_part}}.o";

    Toolchain::new(
        toolchain_label(),
        [
            (
                ToolType::Cc,
                tool("cc -MMD -MF {{output}}.d {{defines}} {{include_dirs}} {{cflags}} {{cflags_c}} -c {{source}} -o {{output}}", &[object])
                    .with_depfile(parse_pattern("{{output}}.d").unwrap(), DepsFormat::Gcc),
            ),
            (
                ToolType::Cxx,
                tool("c++ -MMD -MF {{output}}.d {{defines}} {{include_dirs}} {{cflags}} {{cflags_cc}} -c {{source}} -o {{output}}", &[object])
                    .with_depfile(parse_pattern("{{output}}.d").unwrap(), DepsFormat::Gcc),
            ),
            (
                ToolType::Alink,
                tool(
                    "ar rcs {{output}} {{inputs}}",
                    &["{{target_out_dir}}/{{target_output_name}}.a"],
                )
                .with_output_prefix("lib"),
            ),
            (
                ToolType::Solink,
                tool(
                    "c++ -shared {{ldflags}} -o {{output}} {{inputs}} {{solibs}} {{libs}}",
                    &[
                        "{{root_out_dir}}/{{target_output_name}}{{output_extension}}",
                        "{{root_out_dir}}/{{target_output_name}}{{output_extension}}.TOC",
                    ],
                )
                .with_output_prefix("lib")
                .with_default_output_extension(".so")
                .with_link_outputs(
                    parse_pattern("{{root_out_dir}}/{{target_output_name}}{{output_extension}}")
                        .unwrap(),
                    parse_pattern(
                        "{{root_out_dir}}/{{target_output_name}}{{output_extension}}.TOC",
                    )
                    .unwrap(),
                )
                .with_switches("-l", "-L")
                .with_restat(true),
            ),
            (
                ToolType::Link,
                tool(
                    "c++ {{ldflags}} -o {{output}} {{inputs}} {{solibs}} {{libs}}",
                    &["{{root_out_dir}}/{{target_output_name}}{{output_extension}}"],
                )
                .with_switches("-l", "-L"),
            ),
            (ToolType::Stamp, tool("touch {{output}}", &[])),
            (ToolType::Copy, tool("cp {{source}} {{output}}", &[])),
        ]
        .into_iter()
        .collect(),
    )
}

pub fn resolve_targets(targets: Vec<Target>) -> Result<Graph, ResolveError> {
    resolve_items(targets.into_iter().map(Item::from).collect())
}

pub fn resolve_items(items: Vec<Item>) -> Result<Graph, ResolveError> {
    let mut graph = Graph::new(settings());

    graph.insert(toolchain().into());

    let labels = items
        .iter()
        .filter(|item| matches!(item, Item::Target(_)))
        .map(|item| item.label().clone())
        .collect::<Vec<_>>();

    for item in items {
        graph.insert(item);
    }

    for label in labels {
        let resolution = resolve(&graph, &label)?;
        graph.set_resolution(&label, resolution);
    }

    Ok(graph)
}
