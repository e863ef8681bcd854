use super::error::EmitError;
use crate::{escape::escape_path, graph::Graph};
use std::fmt::Write;

pub fn link_pool_depth(graph: &Graph) -> Option<usize> {
    graph
        .toolchain(graph.settings().default_toolchain())
        .and_then(|toolchain| toolchain.concurrent_links())
}

pub fn render_root(graph: &Graph, toolchain_files: &[String]) -> Result<String, EmitError> {
    let mut output = String::new();

    if let Some(depth) = link_pool_depth(graph) {
        writeln!(output, "pool link_pool\n  depth = {}\n", depth)?;
    }

    for file in toolchain_files {
        writeln!(output, "subninja {}", escape_path(file))?;
    }

    writeln!(output)?;
    write!(output, "build all: phony")?;

    for (_, resolution) in graph.resolved_targets() {
        if let Some(file) = &resolution.dependency_output_file {
            write!(output, " $\n    {}", escape_path(file.value()))?;
        }
    }

    writeln!(output)?;
    writeln!(output, "default all")?;

    Ok(output)
}
