use super::{error::EmitError, target_writer::TargetWriter};
use crate::{
    escape::escape_path,
    ir::{Substitution, ToolType},
    substitution_writer::source_outputs,
};
use std::fmt::Write;

pub fn write_copy(mut writer: TargetWriter) -> Result<String, EmitError> {
    let target = writer.target();
    let output_count = target.action_values().outputs().len();

    if output_count != 1 {
        return Err(EmitError::CopyOutputCount(target.label().clone(), output_count));
    }

    let copy_tool = writer.tool(ToolType::Copy)?;
    let stamp_tool = writer.tool(ToolType::Stamp)?;

    writer.write_shared_vars(|substitution: Substitution| {
        copy_tool.substitutions().any(|used| used == substitution)
            || stamp_tool.substitutions().any(|used| used == substitution)
    })?;

    let rule = writer.rule(ToolType::Copy);
    let input_dep = writer.write_input_deps_stamp(&[])?;
    let mut output_files = vec![];

    // Dependencies are order-only since copies may keep input timestamps.
    for source in target.sources() {
        let outputs = source_outputs(writer.settings(), target, writer.resolution(), source);
        let source = writer.source_path(source);

        write!(writer, "build")?;
        writer.write_files(&outputs)?;
        write!(writer, ": {} {}", rule, source)?;

        if let Some(input_dep) = &input_dep {
            write!(writer, " || {}", escape_path(input_dep.value()))?;
        }

        writeln!(writer)?;

        output_files.extend(outputs);
    }

    writeln!(writer)?;
    writer.write_stamp(&output_files, &[])?;

    Ok(writer.finish())
}
