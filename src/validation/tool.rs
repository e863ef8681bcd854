use super::error::ValidationError;
use crate::ir::{PrecompiledHeaderType, Substitution, SubstitutionPattern, Tool, ToolFamily, ToolType};

pub fn validate_tool(tool_type: ToolType, tool: &Tool) -> Result<(), ValidationError> {
    let family = tool_type.family();

    for (field, pattern) in [
        ("command", tool.command()),
        ("description", tool.description()),
        ("depfile", tool.depfile()),
        ("rspfile", tool.rspfile()),
        ("rspfile_content", tool.rspfile_content()),
    ] {
        validate_pattern(tool_type, field, pattern, |substitution| {
            is_valid_substitution(family, substitution)
        })?;
    }

    for pattern in tool
        .outputs()
        .iter()
        .chain([tool.link_output(), tool.depend_output()])
    {
        validate_pattern(tool_type, "outputs", pattern, |substitution| {
            is_valid_output_substitution(family, substitution)
        })?;
    }

    if matches!(family, ToolFamily::Compiler | ToolFamily::Linker) && tool.outputs().is_empty() {
        return Err(ValidationError::OutputsRequired(tool_type));
    }

    if tool_type == ToolType::Solink {
        validate_link_outputs(tool_type, tool)?;
    } else if !tool.link_output().is_empty() || !tool.depend_output().is_empty() {
        return Err(ValidationError::LinkOutputNotAllowed(tool_type));
    }

    if family != ToolFamily::Compiler
        && tool.precompiled_header_type() != PrecompiledHeaderType::None
    {
        return Err(ValidationError::PrecompiledHeaderNotAllowed(tool_type));
    }

    let extension = tool.default_output_extension();

    if !extension.is_empty() && !extension.starts_with('.') {
        return Err(ValidationError::InvalidOutputExtension(
            tool_type,
            extension.into(),
        ));
    }

    if !tool.rspfile().is_empty() && tool.rspfile_content().is_empty() {
        return Err(ValidationError::RspfileContentRequired(tool_type));
    }

    Ok(())
}

fn validate_link_outputs(tool_type: ToolType, tool: &Tool) -> Result<(), ValidationError> {
    if tool.link_output().is_empty() != tool.depend_output().is_empty() {
        return Err(ValidationError::DependOutputWithoutLinkOutput(tool_type));
    }

    for (field, pattern) in [
        ("link_output", tool.link_output()),
        ("depend_output", tool.depend_output()),
    ] {
        if !pattern.is_empty() && !tool.outputs().contains(pattern) {
            return Err(ValidationError::LinkOutputNotInOutputs(
                tool_type,
                field,
                pattern.to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_pattern(
    tool_type: ToolType,
    field: &'static str,
    pattern: &SubstitutionPattern,
    is_valid: impl Fn(Substitution) -> bool,
) -> Result<(), ValidationError> {
    match pattern.substitutions().find(|substitution| !is_valid(*substitution)) {
        Some(substitution) => Err(ValidationError::SubstitutionNotAllowed(
            tool_type,
            field,
            substitution,
        )),
        None => Ok(()),
    }
}

fn is_valid_substitution(family: ToolFamily, substitution: Substitution) -> bool {
    Substitution::COMMON.contains(&substitution)
        || match family {
            ToolFamily::Compiler => {
                Substitution::SOURCE.contains(&substitution)
                    || Substitution::COMPILER_FLAGS.contains(&substitution)
            }
            ToolFamily::Linker => Substitution::LINKER_FLAGS.contains(&substitution),
            ToolFamily::Copy => Substitution::SOURCE.contains(&substitution),
            ToolFamily::Stamp => false,
        }
}

fn is_valid_output_substitution(family: ToolFamily, substitution: Substitution) -> bool {
    (Substitution::COMMON.contains(&substitution) && substitution != Substitution::Output)
        || match family {
            ToolFamily::Compiler | ToolFamily::Copy => {
                Substitution::SOURCE.contains(&substitution) && substitution != Substitution::Source
            }
            ToolFamily::Linker => substitution == Substitution::OutputExtension,
            ToolFamily::Stamp => false,
        }
}
