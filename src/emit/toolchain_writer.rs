use super::{error::EmitError, target_writer::rule_prefix};
use crate::{
    escape::escape_path,
    ir::{BuildSettings, DepsFormat, SubstitutionPattern, Tool, ToolType, Toolchain},
    substitution_writer::write_with_ninja_variables,
};
use std::fmt::Write;

const INDENT: &str = "  ";

pub fn render_toolchain(
    settings: &BuildSettings,
    toolchain: &Toolchain,
    target_files: &[String],
    uses_link_pool: bool,
) -> Result<String, EmitError> {
    let mut output = String::new();

    for (name, value) in toolchain.args() {
        writeln!(output, "# {} = {}", name, value)?;
    }

    if !toolchain.args().is_empty() {
        writeln!(output)?;
    }

    let prefix = rule_prefix(settings, toolchain.label());

    for (tool_type, tool) in toolchain.tools() {
        write_tool_rule(&mut output, &prefix, *tool_type, tool, uses_link_pool)?;
    }

    writeln!(output)?;

    for file in target_files {
        writeln!(output, "subninja {}", escape_path(file))?;
    }

    Ok(output)
}

fn write_tool_rule(
    output: &mut String,
    prefix: &str,
    tool_type: ToolType,
    tool: &Tool,
    uses_link_pool: bool,
) -> Result<(), EmitError> {
    writeln!(output, "rule {}{}", prefix, tool_type)?;

    write_rule_pattern(output, "command", tool.command())?;
    write_rule_pattern(output, "description", tool.description())?;
    write_rule_pattern(output, "rspfile", tool.rspfile())?;
    write_rule_pattern(output, "rspfile_content", tool.rspfile_content())?;

    match tool.deps_format() {
        DepsFormat::None => {}
        DepsFormat::Gcc => {
            if !tool.depfile().is_empty() {
                write_rule_pattern(output, "depfile", tool.depfile())?;
                writeln!(output, "{}deps = gcc", INDENT)?;
            }
        }
        DepsFormat::Msvc => writeln!(output, "{}deps = msvc", INDENT)?,
    }

    if uses_link_pool && matches!(tool_type, ToolType::Solink | ToolType::Link) {
        writeln!(output, "{}pool = link_pool", INDENT)?;
    }

    if tool.restat() {
        writeln!(output, "{}restat = 1", INDENT)?;
    }

    Ok(())
}

fn write_rule_pattern(
    output: &mut String,
    name: &str,
    pattern: &SubstitutionPattern,
) -> Result<(), EmitError> {
    if !pattern.is_empty() {
        writeln!(
            output,
            "{}{} = {}",
            INDENT,
            name,
            write_with_ninja_variables(pattern)
        )?;
    }

    Ok(())
}
