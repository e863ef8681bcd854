use super::{error::EmitError, target_writer::TargetWriter};
use crate::{
    escape::{escape_command, escape_path},
    ir::{
        ConfigValues, Label, OutputFile, OutputType, PrecompiledHeaderType, Resolution,
        SourceFile, SourceFileType, Substitution, Target, ToolType, Toolchain, UniqueVector,
    },
    resolve::{ResolveError, output_extension},
    substitution_writer::SubstitutionWriter,
};
use std::{collections::BTreeSet, fmt::Write};

// Languages with precompiled headers and their object name suffixes.
const PRECOMPILED_LANGUAGES: &[(SourceFileType, ToolType, Substitution, &str)] = &[
    (SourceFileType::C, ToolType::Cc, Substitution::CflagsC, "c"),
    (SourceFileType::Cpp, ToolType::Cxx, Substitution::CflagsCc, "cc"),
];

pub struct BinaryWriter<'a> {
    base: TargetWriter<'a>,
    used_types: BTreeSet<SourceFileType>,
}

#[derive(Default)]
struct Dependencies {
    extra_object_files: UniqueVector<OutputFile>,
    linkable: UniqueVector<Label>,
    non_linkable: UniqueVector<Label>,
}

impl<'a> BinaryWriter<'a> {
    pub fn new(base: TargetWriter<'a>) -> Self {
        let used_types = base
            .target()
            .sources()
            .iter()
            .map(SourceFileType::of)
            .collect();

        Self { base, used_types }
    }

    pub fn run(mut self) -> Result<String, EmitError> {
        self.write_compiler_vars()?;

        let order_only_dep = self.base.write_input_deps_stamp(&[])?;
        let precompiled_objects = self.write_precompiled_header_commands(order_only_dep.as_ref())?;
        let (mut object_files, other_files) =
            self.write_sources(&precompiled_objects, order_only_dep.as_ref())?;

        object_files.extend(precompiled_objects.into_iter().map(|(_, file)| file));

        self.check_duplicate_object_files(&object_files)?;

        if self.base.target().output_type() == OutputType::SourceSet {
            self.write_source_set_stamp(&object_files)?;
        } else {
            self.write_linker_stuff(&object_files, &other_files)?;
        }

        Ok(self.base.finish())
    }

    fn uses(&self, source_type: SourceFileType) -> bool {
        self.used_types.contains(&source_type)
    }

    fn is_substitution_used(&self, substitution: Substitution) -> bool {
        self.base.toolchain().uses_substitution(substitution)
    }

    fn config_values(&self) -> Result<Vec<&'a ConfigValues>, EmitError> {
        let graph = self.base.graph();
        let target = self.base.target();
        let mut values = vec![target.config_values()];

        for label in self.base.resolution().configs.iter() {
            values.push(
                graph
                    .config(label)
                    .ok_or_else(|| {
                        ResolveError::ConfigNotFound(target.label().clone(), label.clone())
                    })?
                    .values(),
            );
        }

        Ok(values)
    }

    fn write_compiler_vars(&mut self) -> Result<(), EmitError> {
        let values = self.config_values()?;

        if self.is_substitution_used(Substitution::Defines) {
            write!(self.base, "{} =", Substitution::Defines.ninja_name())?;

            for define in values.iter().flat_map(|values| &values.defines) {
                write!(self.base, " -D{}", escape_command(define))?;
            }

            writeln!(self.base)?;
        }

        if self.is_substitution_used(Substitution::IncludeDirs) {
            let settings = self.base.settings();

            write!(self.base, "{} =", Substitution::IncludeDirs.ninja_name())?;

            for directory in values.iter().flat_map(|values| &values.include_dirs) {
                write!(
                    self.base,
                    " -I{}",
                    escape_command(&settings.rebase_dir(directory))
                )?;
            }

            writeln!(self.base)?;
        }

        let c_like = [SourceFileType::C, SourceFileType::ObjectiveC, SourceFileType::Asm];

        if c_like
            .iter()
            .chain(&[SourceFileType::Cpp, SourceFileType::ObjectiveCpp])
            .any(|source_type| self.uses(*source_type))
        {
            self.write_flag(&values, Substitution::Cflags, None, |values| &values.cflags)?;
        }
        if c_like.iter().any(|source_type| self.uses(*source_type)) {
            self.write_flag(&values, Substitution::CflagsC, Some(ToolType::Cc), |values| {
                &values.cflags_c
            })?;
        }
        if self.uses(SourceFileType::Cpp) {
            self.write_flag(&values, Substitution::CflagsCc, Some(ToolType::Cxx), |values| {
                &values.cflags_cc
            })?;
        }
        if self.uses(SourceFileType::ObjectiveC) {
            self.write_flag(
                &values,
                Substitution::CflagsObjc,
                Some(ToolType::Objc),
                |values| &values.cflags_objc,
            )?;
        }
        if self.uses(SourceFileType::ObjectiveCpp) {
            self.write_flag(
                &values,
                Substitution::CflagsObjcc,
                Some(ToolType::Objcxx),
                |values| &values.cflags_objcc,
            )?;
        }

        let toolchain = self.base.toolchain();

        self.base
            .write_shared_vars(|substitution| toolchain.uses_substitution(substitution))?;

        Ok(())
    }

    fn write_flag(
        &mut self,
        values: &[&ConfigValues],
        substitution: Substitution,
        tool_type: Option<ToolType>,
        flags: impl Fn(&ConfigValues) -> &Vec<String>,
    ) -> Result<(), EmitError> {
        if !self.is_substitution_used(substitution) {
            return Ok(());
        }

        write!(self.base, "{} =", substitution.ninja_name())?;

        if let (Some(header), Some(tool_type)) =
            (&self.base.resolution().precompiled_header, tool_type)
        {
            if self.is_msvc_tool(tool_type) {
                let file = self.precompiled_header_file(tool_type);

                write!(
                    self.base,
                    " /Fp{} /Yu{}",
                    escape_path(file.value()),
                    escape_command(header.header())
                )?;
            }
        }

        for &values in values {
            for flag in flags(values) {
                write!(self.base, " {}", escape_command(flag))?;
            }
        }

        writeln!(self.base)?;

        Ok(())
    }

    fn is_msvc_tool(&self, tool_type: ToolType) -> bool {
        self.base.toolchain().tool(tool_type).is_some_and(|tool| {
            tool.precompiled_header_type() == PrecompiledHeaderType::Msvc
        })
    }

    fn precompiled_header_file(&self, tool_type: ToolType) -> OutputFile {
        let target = self.base.target();

        OutputFile::new(format!(
            "{}/{}_{}.pch",
            self.base.settings().target_out_dir(target.label()),
            target.label().name(),
            language_suffix(tool_type)
        ))
    }

    fn write_precompiled_header_commands(
        &mut self,
        order_only_dep: Option<&OutputFile>,
    ) -> Result<Vec<(ToolType, OutputFile)>, EmitError> {
        let resolution = self.base.resolution();
        let Some(header) = &resolution.precompiled_header else {
            return Ok(vec![]);
        };
        let mut objects = vec![];

        for &(source_type, tool_type, substitution, _) in PRECOMPILED_LANGUAGES {
            if !self.uses(source_type) || !self.is_msvc_tool(tool_type) {
                continue;
            }

            let Some(object) = precompiled_object(
                &self.base.substitution_writer(),
                self.base.toolchain(),
                tool_type,
                header.source(),
            ) else {
                continue;
            };

            self.write_compiler_build_line(
                header.source(),
                &[],
                order_only_dep,
                tool_type,
                &[object.clone()],
            )?;
            writeln!(
                self.base,
                "  {name} = ${{{name}}} /Yc{}",
                escape_command(header.header()),
                name = substitution.ninja_name(),
            )?;
            writeln!(self.base)?;

            objects.push((tool_type, object));
        }

        Ok(objects)
    }

    fn write_sources(
        &mut self,
        precompiled_objects: &[(ToolType, OutputFile)],
        order_only_dep: Option<&OutputFile>,
    ) -> Result<(Vec<OutputFile>, Vec<SourceFile>), EmitError> {
        let target = self.base.target();
        let writer = self.base.substitution_writer();
        let mut object_files = vec![];
        let mut other_files = vec![];

        for source in target.sources() {
            let Some((tool_type, outputs)) =
                source_outputs(&writer, self.base.toolchain(), source)
            else {
                if SourceFileType::of(source) == SourceFileType::Def {
                    other_files.push(source.clone());
                }

                continue;
            };

            if let Some(tool_type) = tool_type {
                let extra_deps = precompiled_objects
                    .iter()
                    .filter(|(precompiled_type, _)| *precompiled_type == tool_type)
                    .map(|(_, file)| file.clone())
                    .collect::<Vec<_>>();

                self.write_compiler_build_line(
                    source,
                    &extra_deps,
                    order_only_dep,
                    tool_type,
                    &outputs,
                )?;
            }

            if let Some(output) = outputs.into_iter().next() {
                object_files.push(output);
            }
        }

        writeln!(self.base)?;

        Ok((object_files, other_files))
    }

    fn write_compiler_build_line(
        &mut self,
        source: &SourceFile,
        extra_deps: &[OutputFile],
        order_only_dep: Option<&OutputFile>,
        tool_type: ToolType,
        outputs: &[OutputFile],
    ) -> Result<(), EmitError> {
        let rule = self.base.rule(tool_type);
        let source = self.base.source_path(source);

        write!(self.base, "build")?;
        self.base.write_files(outputs)?;
        write!(self.base, ": {} {}", rule, source)?;

        if !extra_deps.is_empty() {
            write!(self.base, " |")?;
            self.base.write_files(extra_deps)?;
        }

        if let Some(order_only_dep) = order_only_dep {
            write!(self.base, " || {}", escape_path(order_only_dep.value()))?;
        }

        writeln!(self.base)?;

        Ok(())
    }

    fn check_duplicate_object_files(&self, object_files: &[OutputFile]) -> Result<(), EmitError> {
        let mut files = BTreeSet::new();

        for file in object_files {
            if !files.insert(file) {
                return Err(EmitError::DuplicateObjectFile(
                    self.base.target().label().clone(),
                    file.clone(),
                ));
            }
        }

        Ok(())
    }

    fn dependencies(&self) -> Result<Dependencies, EmitError> {
        let target = self.base.target();
        let mut dependencies = Dependencies::default();

        for label in target
            .linked_deps()
            .map(|dependency| dependency.label())
            .chain(self.base.resolution().inherited_libraries.labels())
        {
            self.classify_dependency(label, &mut dependencies)?;
        }

        for dependency in target.data_deps() {
            dependencies.non_linkable.push(dependency.label().clone());
        }

        Ok(dependencies)
    }

    fn classify_dependency(
        &self,
        label: &Label,
        dependencies: &mut Dependencies,
    ) -> Result<(), EmitError> {
        let can_link_libraries = self.base.target().is_final();
        let (dependency, resolution) = self.base.dependency(label)?;

        if dependency.output_type() == OutputType::SourceSet {
            if can_link_libraries {
                let toolchain = self.base.dependency_toolchain(dependency)?;
                let writer = SubstitutionWriter::new(
                    self.base.settings(),
                    dependency.label(),
                    &resolution.computed_output_name,
                );

                dependencies
                    .extra_object_files
                    .extend(source_set_object_files(dependency, &writer, toolchain, resolution));
            }

            dependencies.non_linkable.push(label.clone());
        } else if can_link_libraries && dependency.output_type().is_linkable() {
            dependencies.linkable.push(label.clone());
        } else {
            dependencies.non_linkable.push(label.clone());
        }

        Ok(())
    }

    fn non_linkable_outputs(&self, dependencies: &Dependencies) -> Result<Vec<OutputFile>, EmitError> {
        dependencies
            .non_linkable
            .iter()
            .map(|label| self.base.dependency_output(label))
            .collect()
    }

    fn write_source_set_stamp(&mut self, object_files: &[OutputFile]) -> Result<(), EmitError> {
        let dependencies = self.dependencies()?;
        let order_only = self.non_linkable_outputs(&dependencies)?;

        self.base.write_stamp(object_files, &order_only)?;

        Ok(())
    }

    fn write_linker_stuff(
        &mut self,
        object_files: &[OutputFile],
        other_files: &[SourceFile],
    ) -> Result<(), EmitError> {
        let target = self.base.target();
        let tool_type = target.output_type().final_tool_type();
        let tool = self.base.tool(tool_type)?;
        let extension = output_extension(target, tool);
        let writer = self
            .base
            .substitution_writer()
            .with_output_extension(extension.clone());
        let outputs = tool
            .outputs()
            .iter()
            .map(|pattern| writer.apply_to_target(pattern))
            .collect::<Vec<_>>();
        let rule = self.base.rule(tool_type);

        write!(self.base, "build")?;
        self.base.write_files(&outputs)?;
        write!(self.base, ": {}", rule)?;

        let dependencies = self.dependencies()?;

        self.base.write_files(object_files)?;
        self.base
            .write_files(dependencies.extra_object_files.as_slice())?;

        let mut implicit_deps = vec![];
        let mut solibs = vec![];

        for label in dependencies.linkable.iter() {
            let (_, resolution) = self.base.dependency(label)?;
            let link_output = resolution.link_output_file.clone().unwrap_or_default();
            let dependency_output = resolution
                .dependency_output_file
                .clone()
                .unwrap_or_default();

            if link_output == dependency_output {
                write!(self.base, " {}", escape_path(link_output.value()))?;
            } else {
                implicit_deps.push(dependency_output);
                solibs.push(link_output);
            }
        }

        let def_file = other_files
            .iter()
            .find(|file| SourceFileType::of(file) == SourceFileType::Def);

        if let Some(file) = def_file {
            implicit_deps.push(self.base.settings().rebase_to_output(file));
        }

        if !implicit_deps.is_empty() {
            write!(self.base, " |")?;
            self.base.write_files(&implicit_deps)?;
        }

        let order_only = self.non_linkable_outputs(&dependencies)?;

        if !order_only.is_empty() {
            write!(self.base, " ||")?;
            self.base.write_files(&order_only)?;
        }

        writeln!(self.base)?;

        self.write_linker_flags(def_file, tool.lib_dir_switch())?;
        self.write_libs(tool.lib_switch())?;
        writeln!(self.base, "  output_extension = {}", extension)?;

        if !solibs.is_empty() {
            write!(self.base, "  solibs =")?;
            self.base.write_files(&solibs)?;
            writeln!(self.base)?;
        }

        Ok(())
    }

    fn write_linker_flags(
        &mut self,
        def_file: Option<&SourceFile>,
        lib_dir_switch: &str,
    ) -> Result<(), EmitError> {
        let values = self.config_values()?;
        let settings = self.base.settings();
        let resolution = self.base.resolution();

        write!(self.base, "  ldflags =")?;

        for flag in values.iter().flat_map(|values| &values.ldflags) {
            write!(self.base, " {}", escape_command(flag))?;
        }

        for directory in resolution.all_lib_dirs.iter() {
            write!(
                self.base,
                " {}{}",
                lib_dir_switch,
                escape_command(&settings.rebase_dir(directory))
            )?;
        }

        if let Some(file) = def_file {
            let path = self.base.source_path(file);

            write!(self.base, " /DEF:{}", path)?;
        }

        writeln!(self.base)?;

        Ok(())
    }

    fn write_libs(&mut self, lib_switch: &str) -> Result<(), EmitError> {
        let resolution = self.base.resolution();

        write!(self.base, "  libs =")?;

        for library in resolution.all_libs.iter() {
            match library.strip_suffix(".framework") {
                Some(framework) => write!(self.base, " -framework {}", escape_command(framework))?,
                None => write!(self.base, " {}{}", lib_switch, escape_command(library))?,
            }
        }

        writeln!(self.base)?;

        Ok(())
    }
}

fn language_suffix(tool_type: ToolType) -> &'static str {
    PRECOMPILED_LANGUAGES
        .iter()
        .find(|(_, precompiled_type, _, _)| *precompiled_type == tool_type)
        .map(|(_, _, _, suffix)| *suffix)
        .unwrap_or(tool_type.name())
}

fn source_outputs(
    writer: &SubstitutionWriter,
    toolchain: &Toolchain,
    source: &SourceFile,
) -> Option<(Option<ToolType>, Vec<OutputFile>)> {
    let source_type = SourceFileType::of(source);

    if source_type == SourceFileType::Object {
        return Some((None, vec![writer.settings().rebase_to_output(source)]));
    }

    let tool_type = source_type.tool_type()?;
    let outputs = toolchain
        .tool(tool_type)?
        .outputs()
        .iter()
        .map(|pattern| writer.apply_to_source(pattern, source))
        .collect::<Vec<_>>();

    if outputs.is_empty() {
        None
    } else {
        Some((Some(tool_type), outputs))
    }
}

/// Object file compiled from a precompiled header source for a language,
/// named after the first compiler output with the language inserted before
/// its extension.
fn precompiled_object(
    writer: &SubstitutionWriter,
    toolchain: &Toolchain,
    tool_type: ToolType,
    source: &SourceFile,
) -> Option<OutputFile> {
    let output = writer
        .apply_to_source(toolchain.tool(tool_type)?.outputs().first()?, source)
        .value()
        .to_owned();
    let file_start = output.rfind('/').map(|index| index + 1).unwrap_or(0);
    let dot = file_start + output[file_start..].rfind('.')?;

    Some(OutputFile::new(format!(
        "{}.{}{}",
        &output[..dot],
        language_suffix(tool_type),
        &output[dot..]
    )))
}

fn source_set_object_files(
    source_set: &Target,
    writer: &SubstitutionWriter,
    toolchain: &Toolchain,
    resolution: &Resolution,
) -> Vec<OutputFile> {
    let mut files = source_set
        .sources()
        .iter()
        .filter_map(|source| source_outputs(writer, toolchain, source))
        .filter_map(|(_, outputs)| outputs.into_iter().next())
        .collect::<Vec<_>>();

    if let Some(header) = &resolution.precompiled_header {
        let used_types = source_set
            .sources()
            .iter()
            .map(SourceFileType::of)
            .collect::<BTreeSet<_>>();

        for &(source_type, tool_type, _, _) in PRECOMPILED_LANGUAGES {
            let is_msvc = toolchain.tool(tool_type).is_some_and(|tool| {
                tool.precompiled_header_type() == PrecompiledHeaderType::Msvc
            });

            if used_types.contains(&source_type) && is_msvc {
                files.extend(precompiled_object(
                    writer,
                    toolchain,
                    tool_type,
                    header.source(),
                ));
            }
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::Graph,
        ir::{ActionValues, Config, Item, PrecompiledHeader, SourceDir},
        parse::parse_pattern,
        testing::{
            dependency, label, resolve_items, resolve_targets, settings, target, toolchain,
        },
    };
    use pretty_assertions::assert_eq;

    fn render(graph: &Graph, path: &str) -> Result<String, EmitError> {
        BinaryWriter::new(TargetWriter::new(graph, &label(path))?).run()
    }

    fn sources(paths: &[&str]) -> Vec<SourceFile> {
        paths.iter().map(|path| SourceFile::new(*path)).collect()
    }

    #[test]
    fn write_executable() {
        let graph = resolve_targets(vec![
            target("//foo:bar", OutputType::Executable)
                .with_sources(sources(&["//foo/main.cc", "//foo/util.c"]))
                .with_config_values(ConfigValues {
                    defines: vec!["NDEBUG".into()],
                    include_dirs: vec![SourceDir::new("//foo/include/")],
                    cflags: vec!["-O2".into()],
                    ..Default::default()
                }),
        ])
        .unwrap();

        assert_eq!(
            render(&graph, "//foo:bar").unwrap(),
            [
                "defines = -DNDEBUG",
                "include_dirs = -I../../foo/include",
                "cflags = -O2",
                "cflags_c =",
                "cflags_cc =",
                "root_out_dir = .",
                "target_out_dir = obj/foo",
                "target_output_name = bar",
                "",
                "build obj/foo/bar.main.o: cxx ../../foo/main.cc",
                "build obj/foo/bar.util.o: cc ../../foo/util.c",
                "",
                "build ./bar: link obj/foo/bar.main.o obj/foo/bar.util.o",
                "  ldflags =",
                "  libs =",
                "  output_extension = ",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn write_config_values_after_own_values() {
        let graph = resolve_items(vec![
            Config::new(
                label("//build:debug"),
                ConfigValues {
                    defines: vec!["DEBUG".into()],
                    ..Default::default()
                },
            )
            .into(),
            Item::from(
                target("//foo:bar", OutputType::Executable)
                    .with_sources(sources(&["//foo/main.cc"]))
                    .with_configs(vec![dependency("//build:debug")])
                    .with_config_values(ConfigValues {
                        defines: vec!["FOO=1".into()],
                        ..Default::default()
                    }),
            ),
        ])
        .unwrap();

        assert!(
            render(&graph, "//foo:bar")
                .unwrap()
                .starts_with("defines = -DFOO=1 -DDEBUG\n")
        );
    }

    #[test]
    fn link_dependencies() {
        let graph = resolve_targets(vec![
            target("//foo:ss", OutputType::SourceSet).with_sources(sources(&["//foo/ss.cc"])),
            target("//foo:sl", OutputType::StaticLibrary).with_sources(sources(&["//foo/sl.cc"])),
            target("//foo:so", OutputType::SharedLibrary).with_sources(sources(&["//foo/so.cc"])),
            target("//foo:data", OutputType::Group),
            target("//foo:bar", OutputType::Executable)
                .with_sources(sources(&["//foo/main.cc"]))
                .with_private_deps(vec![
                    dependency("//foo:ss"),
                    dependency("//foo:sl"),
                    dependency("//foo:so"),
                ])
                .with_data_deps(vec![dependency("//foo:data")]),
        ])
        .unwrap();
        let output = render(&graph, "//foo:bar").unwrap();

        assert!(output.ends_with(
            &[
                "build ./bar: link obj/foo/bar.main.o obj/foo/ss.ss.o obj/foo/libsl.a \
                 | ./libso.so.TOC || obj/foo/ss.stamp obj/foo/data.stamp",
                "  ldflags =",
                "  libs =",
                "  output_extension = ",
                "  solibs = ./libso.so",
                "",
            ]
            .join("\n")
        ));
    }

    #[test]
    fn write_shared_library_outputs() {
        let graph = resolve_targets(vec![
            target("//foo:so", OutputType::SharedLibrary).with_sources(sources(&["//foo/so.cc"])),
        ])
        .unwrap();

        assert!(
            render(&graph, "//foo:so")
                .unwrap()
                .contains("build ./libso.so ./libso.so.TOC: solink obj/foo/libso.so.o\n")
        );
    }

    #[test]
    fn write_source_set_stamp() {
        let graph = resolve_targets(vec![
            target("//foo:sl", OutputType::StaticLibrary).with_sources(sources(&["//foo/sl.cc"])),
            target("//foo:ss", OutputType::SourceSet)
                .with_sources(sources(&["//foo/ss.cc", "//foo/ss.h"]))
                .with_private_deps(vec![dependency("//foo:sl")]),
        ])
        .unwrap();

        assert_eq!(
            render(&graph, "//foo:ss").unwrap(),
            [
                "defines =",
                "include_dirs =",
                "cflags =",
                "cflags_cc =",
                "root_out_dir = .",
                "target_out_dir = obj/foo",
                "target_output_name = ss",
                "",
                "build obj/foo/ss.ss.o: cxx ../../foo/ss.cc",
                "",
                "build obj/foo/ss.stamp: stamp obj/foo/ss.ss.o || obj/foo/libsl.a",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn forward_source_set_objects_only_to_final_targets() {
        let graph = resolve_targets(vec![
            target("//foo:ss", OutputType::SourceSet).with_sources(sources(&["//foo/ss.cc"])),
            target("//foo:sl", OutputType::StaticLibrary)
                .with_sources(sources(&["//foo/sl.cc"]))
                .with_private_deps(vec![dependency("//foo:ss")]),
        ])
        .unwrap();

        assert!(
            render(&graph, "//foo:sl")
                .unwrap()
                .contains("build obj/foo/libsl.a: alink obj/foo/libsl.sl.o || obj/foo/ss.stamp\n")
        );
    }

    #[test]
    fn pass_object_files_and_module_definitions() {
        let graph = resolve_targets(vec![
            target("//foo:bar", OutputType::Executable).with_sources(sources(&[
                "//foo/prebuilt.o",
                "//foo/exports.def",
                "//foo/readme.txt",
            ])),
        ])
        .unwrap();

        assert!(render(&graph, "//foo:bar").unwrap().ends_with(
            &[
                "",
                "build ./bar: link ../../foo/prebuilt.o | ../../foo/exports.def",
                "  ldflags = /DEF:../../foo/exports.def",
                "  libs =",
                "  output_extension = ",
                "",
            ]
            .join("\n")
        ));
    }

    #[test]
    fn write_libraries() {
        let graph = resolve_targets(vec![
            target("//foo:bar", OutputType::Executable).with_config_values(ConfigValues {
                ldflags: vec!["-pie".into()],
                libs: vec!["z".into(), "Cocoa.framework".into()],
                lib_dirs: vec![SourceDir::new("//third_party/lib/")],
                ..Default::default()
            }),
        ])
        .unwrap();
        let output = render(&graph, "//foo:bar").unwrap();

        assert!(output.contains("  ldflags = -pie -L../../third_party/lib\n"));
        assert!(output.contains("  libs = -lz -framework Cocoa\n"));
    }

    #[test]
    fn wait_for_hard_dependencies() {
        let graph = resolve_targets(vec![
            target("//foo:gen", OutputType::Action).with_action_values(ActionValues::new(
                Some(SourceFile::new("//foo/gen.py")),
                vec![],
                vec![parse_pattern("//out/Debug/gen/foo/gen.h").unwrap()],
                None,
            )),
            target("//foo:bar", OutputType::Executable)
                .with_sources(sources(&["//foo/main.cc"]))
                .with_private_deps(vec![dependency("//foo:gen")]),
        ])
        .unwrap();
        let output = render(&graph, "//foo:bar").unwrap();

        assert!(output.contains(
            "build obj/foo/bar.inputdeps.stamp: stamp obj/foo/gen.stamp\n\
             build obj/foo/bar.main.o: cxx ../../foo/main.cc || obj/foo/bar.inputdeps.stamp\n"
        ));
        assert!(output.contains("build ./bar: link obj/foo/bar.main.o || obj/foo/gen.stamp\n"));
    }

    #[test]
    fn fail_on_duplicate_object_files() {
        let graph = resolve_targets(vec![
            target("//foo:ss", OutputType::SourceSet)
                .with_sources(sources(&["//foo/x.cc", "//foo/x.c"])),
        ])
        .unwrap();

        assert_eq!(
            render(&graph, "//foo:ss"),
            Err(EmitError::DuplicateObjectFile(
                label("//foo:ss"),
                OutputFile::new("obj/foo/ss.x.o")
            ))
        );
    }

    #[test]
    fn compile_precompiled_headers() {
        let msvc_toolchain = {
            let toolchain = toolchain();
            let mut tools = toolchain.tools().clone();

            for tool_type in [ToolType::Cc, ToolType::Cxx] {
                if let Some(tool) = tools.remove(&tool_type) {
                    tools.insert(
                        tool_type,
                        tool.with_precompiled_header_type(PrecompiledHeaderType::Msvc),
                    );
                }
            }

            Toolchain::new(toolchain.label().clone(), tools)
        };
        let mut graph = Graph::new(settings());

        graph.insert(msvc_toolchain.into());
        graph.insert(
            target("//foo:bar", OutputType::Executable)
                .with_sources(sources(&["//foo/main.cc"]))
                .with_config_values(ConfigValues {
                    precompiled_header: Some(PrecompiledHeader::new(
                        "build/precompile.h",
                        SourceFile::new("//build/precompile.cc"),
                    )),
                    ..Default::default()
                })
                .into(),
        );

        let resolution = crate::resolve::resolve(&graph, &label("//foo:bar")).unwrap();

        graph.set_resolution(&label("//foo:bar"), resolution);

        let output = render(&graph, "//foo:bar").unwrap();

        assert!(output.contains(
            "cflags_cc = /Fpobj/foo/bar_cc.pch /Yubuild/precompile.h\n"
        ));
        assert!(output.contains(
            "build obj/build/bar.precompile.cc.o: cxx ../../build/precompile.cc\n  \
             cflags_cc = ${cflags_cc} /Ycbuild/precompile.h\n\n"
        ));
        assert!(output.contains(
            "build obj/foo/bar.main.o: cxx ../../foo/main.cc | obj/build/bar.precompile.cc.o\n"
        ));
        assert!(output.contains(
            "build ./bar: link obj/foo/bar.main.o obj/build/bar.precompile.cc.o\n"
        ));
    }

    #[test]
    fn fail_without_resolution() {
        let mut graph = Graph::new(settings());

        graph.insert(toolchain().into());
        graph.insert(target("//foo:bar", OutputType::Executable).into());

        assert_eq!(
            TargetWriter::new(&graph, &label("//foo:bar")).err(),
            Some(EmitError::Resolve(ResolveError::TargetNotResolved(label(
                "//foo:bar"
            ))))
        );
    }
}
