use super::{error::EmitError, target_writer::TargetWriter};
use crate::{
    escape::{escape_command, escape_path},
    ir::{Dependency, Label, OutputFile, OutputType, SourceFile, Substitution},
    substitution_writer::{action_outputs, source_outputs, write_with_ninja_variables},
};
use std::fmt::Write;

pub fn write_action(mut writer: TargetWriter) -> Result<String, EmitError> {
    let target = writer.target();
    let rule = write_rule_definition(&mut writer)?;
    let extra_hard_deps = target
        .linked_deps()
        .map(|dependency| dependency.label().clone())
        .collect::<Vec<_>>();
    let input_dep = writer.write_input_deps_stamp(&extra_hard_deps)?;

    writeln!(writer)?;

    let output_files = if target.output_type() == OutputType::ActionForeach {
        write_source_rules(&mut writer, &rule, input_dep.as_ref())?
    } else {
        let outputs = action_outputs(writer.settings(), target, writer.resolution());

        write!(writer, "build")?;
        writer.write_files(&outputs)?;
        write!(writer, ": {}", rule)?;
        write_input_dep(&mut writer, input_dep.as_ref())?;
        writeln!(writer)?;
        write_depfile(&mut writer, None)?;

        outputs
    };

    writeln!(writer)?;

    let data_outputs = target
        .data_deps()
        .iter()
        .map(Dependency::label)
        .map(|label| writer.dependency_output(label))
        .collect::<Result<Vec<_>, _>>()?;

    writer.write_stamp(&output_files, &data_outputs)?;

    Ok(writer.finish())
}

pub fn rule_name(label: &Label) -> String {
    label
        .user_visible_name(true)
        .chars()
        .map(|character| match character {
            ':' | '/' | '(' | ')' => '_',
            character => character,
        })
        .collect::<String>()
        + "_rule"
}

fn write_rule_definition(writer: &mut TargetWriter) -> Result<String, EmitError> {
    let target = writer.target();
    let settings = writer.settings();
    let name = rule_name(target.label());

    writeln!(writer, "rule {}", name)?;
    write!(writer, "  command = {}", escape_path(settings.python_path()))?;

    if let Some(script) = target.action_values().script() {
        let script = writer.source_path(script);

        write!(writer, " {}", script)?;
    }

    for argument in target.action_values().args() {
        write!(writer, " {}", write_with_ninja_variables(argument))?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "  description = ACTION {}",
        escape_command(&target.label().user_visible_name(true))
    )?;
    writeln!(writer, "  restat = 1")?;

    Ok(name)
}

fn write_source_rules(
    writer: &mut TargetWriter,
    rule: &str,
    input_dep: Option<&OutputFile>,
) -> Result<Vec<OutputFile>, EmitError> {
    let target = writer.target();
    let substitution_writer = writer.substitution_writer();
    let substitutions = target
        .action_values()
        .args()
        .iter()
        .flat_map(|argument| argument.substitutions())
        .filter(|substitution| *substitution != Substitution::Source)
        .collect::<Vec<_>>();
    let mut output_files = vec![];

    for source in target.sources() {
        let outputs = source_outputs(writer.settings(), target, writer.resolution(), source);
        let path = writer.source_path(source);

        write!(writer, "build")?;
        writer.write_files(&outputs)?;
        write!(writer, ": {} {}", rule, path)?;
        write_input_dep(writer, input_dep)?;
        writeln!(writer)?;

        let mut written = vec![];

        for &substitution in &substitutions {
            if written.contains(&substitution) {
                continue;
            }

            if let Some(value) = substitution_writer.source_value(source, substitution) {
                writeln!(
                    writer,
                    "  {} = {}",
                    substitution.ninja_name(),
                    escape_command(&value)
                )?;
            }

            written.push(substitution);
        }

        write_depfile(writer, Some(source))?;

        output_files.extend(outputs);
    }

    Ok(output_files)
}

fn write_input_dep(writer: &mut TargetWriter, input_dep: Option<&OutputFile>) -> Result<(), EmitError> {
    if let Some(input_dep) = input_dep {
        write!(writer, " | {}", escape_path(input_dep.value()))?;
    }

    Ok(())
}

fn write_depfile(writer: &mut TargetWriter, source: Option<&SourceFile>) -> Result<(), EmitError> {
    let Some(depfile) = writer.target().action_values().depfile() else {
        return Ok(());
    };
    let substitution_writer = writer.substitution_writer();
    let file = match source {
        Some(source) => substitution_writer.apply_to_source(depfile, source),
        None => substitution_writer.apply_to_target(depfile),
    };
    let file = writer.settings().rebase_file(&SourceFile::new(file.value()));

    writeln!(writer, "  depfile = {}", escape_path(&file))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ir::ActionValues,
        parse::parse_pattern,
        testing::{dependency, label, resolve_targets, target},
    };
    use pretty_assertions::assert_eq;

    fn patterns(values: &[&str]) -> Vec<crate::ir::SubstitutionPattern> {
        values
            .iter()
            .map(|value| parse_pattern(value).unwrap())
            .collect()
    }

    #[test]
    fn mangle_rule_name() {
        assert_eq!(
            rule_name(&label("//foo:gen")),
            "__foo_gen___toolchain_default__rule"
        );
    }

    #[test]
    fn write_action_target() {
        let graph = resolve_targets(vec![
            target("//foo:data", OutputType::Group),
            target("//foo:gen", OutputType::Action)
                .with_sources(vec![SourceFile::new("//foo/in.txt")])
                .with_data_deps(vec![dependency("//foo:data")])
                .with_action_values(ActionValues::new(
                    Some(SourceFile::new("//foo/gen.py")),
                    patterns(&["-o", "gen/foo/gen.h"]),
                    patterns(&["//out/Debug/gen/foo/gen.h"]),
                    None,
                )),
        ])
        .unwrap();

        assert_eq!(
            write_action(TargetWriter::new(&graph, &label("//foo:gen")).unwrap()).unwrap(),
            [
                "rule __foo_gen___toolchain_default__rule",
                "  command = python3 ../../foo/gen.py -o gen/foo/gen.h",
                "  description = ACTION //foo:gen(//toolchain:default)",
                "  restat = 1",
                "build obj/foo/gen.inputdeps.stamp: stamp ../../foo/gen.py ../../foo/in.txt",
                "",
                "build gen/foo/gen.h: __foo_gen___toolchain_default__rule | obj/foo/gen.inputdeps.stamp",
                "",
                "build obj/foo/gen.stamp: stamp gen/foo/gen.h || obj/foo/data.stamp",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn write_action_foreach_target() {
        let graph = resolve_targets(vec![
            target("//foo:each", OutputType::ActionForeach)
                .with_sources(vec![SourceFile::new("//foo/a.idl")])
                .with_action_values(ActionValues::new(
                    Some(SourceFile::new("//foo/each.py")),
                    patterns(&[
                        "{{source}}",
                        "-o",
                        "{{source_gen_dir}}/{{source_name_part}}.h",
                    ]),
                    patterns(&["{{source_gen_dir}}/{{source_name_part}}.h"]),
                    Some(parse_pattern("{{source_gen_dir}}/{{source_name_part}}.d").unwrap()),
                )),
        ])
        .unwrap();

        assert_eq!(
            write_action(TargetWriter::new(&graph, &label("//foo:each")).unwrap()).unwrap(),
            [
                "rule __foo_each___toolchain_default__rule",
                "  command = python3 ../../foo/each.py ${in} -o ${source_gen_dir}/${source_name_part}.h",
                "  description = ACTION //foo:each(//toolchain:default)",
                "  restat = 1",
                "build obj/foo/each.inputdeps.stamp: stamp ../../foo/each.py",
                "",
                "build gen/foo/a.h: __foo_each___toolchain_default__rule ../../foo/a.idl | obj/foo/each.inputdeps.stamp",
                "  source_gen_dir = gen/foo",
                "  source_name_part = a",
                "  depfile = gen/foo/a.d",
                "",
                "build obj/foo/each.stamp: stamp gen/foo/a.h",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn wait_for_linked_dependencies() {
        let graph = resolve_targets(vec![
            target("//foo:base", OutputType::StaticLibrary),
            target("//foo:gen", OutputType::Action)
                .with_private_deps(vec![dependency("//foo:base")])
                .with_action_values(ActionValues::new(
                    Some(SourceFile::new("//foo/gen.py")),
                    vec![],
                    patterns(&["//out/Debug/gen/foo/gen.h"]),
                    None,
                )),
        ])
        .unwrap();

        assert!(
            write_action(TargetWriter::new(&graph, &label("//foo:gen")).unwrap())
                .unwrap()
                .contains(
                    "build obj/foo/gen.inputdeps.stamp: stamp ../../foo/gen.py obj/foo/libbase.a\n"
                )
        );
    }
}
