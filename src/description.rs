mod document;
mod error;

pub use self::error::DescriptionError;
use self::document::{
    BuildSettingsDocument, ConfigDocument, ConfigValuesDocument, Document, TargetDocument,
    ToolDocument, ToolchainDocument,
};
use crate::{
    ir::{
        ActionValues, BuildSettings, Config, ConfigValues, DepsFormat, Dependency, Item, Label,
        Origin, OutputType, PrecompiledHeader, PrecompiledHeaderType, SourceDir, SourceFile,
        Substitution, SubstitutionPattern, Target, Tool, ToolType, Toolchain, Visibility,
    },
    parse::{ParseError, parse_label, parse_pattern, parse_visibility_pattern, resolve_directory},
    validation::validate_tool,
};
use std::collections::BTreeMap;

pub fn load_description(
    source: &str,
    file: &str,
) -> Result<(BuildSettings, Vec<Item>), DescriptionError> {
    let document = serde_json::from_str::<Document>(source)
        .map_err(|error| DescriptionError::Json(format!("{}: {}", file, error)))?;
    let loader = Loader {
        file,
        default_toolchain: parse_label(
            &document.build_settings.default_toolchain,
            &SourceDir::root(),
            None,
        )
        .map_err(|error| {
            DescriptionError::Parse(Origin::new(format!("{}: default_toolchain", file)), error)
        })?,
    };
    let settings = loader.build_settings(&document.build_settings)?;
    let mut items = vec![];

    for toolchain in &document.toolchains {
        items.push(loader.toolchain(toolchain)?.into());
    }

    for config in &document.configs {
        items.push(loader.config(config)?.into());
    }

    for target in &document.targets {
        items.push(loader.target(target)?.into());
    }

    Ok((settings, items))
}

struct Loader<'a> {
    file: &'a str,
    default_toolchain: Label,
}

impl Loader<'_> {
    fn origin(&self, label: &Label, field: &str) -> Origin {
        Origin::new(format!(
            "{}: {} {}",
            self.file,
            label.user_visible_name(false),
            field
        ))
    }

    fn item_label(&self, input: &str, toolchain: Option<&Label>) -> Result<Label, DescriptionError> {
        parse_label(input, &SourceDir::root(), toolchain).map_err(|error| {
            DescriptionError::Parse(Origin::new(format!("{}: {}", self.file, input)), error)
        })
    }

    fn build_settings(
        &self,
        document: &BuildSettingsDocument,
    ) -> Result<BuildSettings, DescriptionError> {
        let build_dir = SourceDir::new(&document.build_dir);

        if !build_dir.is_source_absolute() {
            return Err(DescriptionError::Parse(
                Origin::new(format!("{}: build_dir", self.file)),
                ParseError::new(format!(
                    "build directory \"{}\" must be source-absolute",
                    document.build_dir
                )),
            ));
        }

        Ok(BuildSettings::new(
            &document.root_path,
            build_dir,
            &document.python_path,
            self.default_toolchain.clone(),
        )
        .with_check_for_bad_items(document.check_for_bad_items)
        .with_written_files(
            document
                .written_files
                .iter()
                .map(|path| SourceFile::resolve(path, &SourceDir::root())),
        ))
    }

    fn toolchain(&self, document: &ToolchainDocument) -> Result<Toolchain, DescriptionError> {
        let label = self.item_label(&document.label, None)?;
        let mut tools = BTreeMap::new();

        for (name, tool) in &document.tools {
            let origin = self.origin(&label, &format!("tool {}", name));
            let tool_type = ToolType::from_name(name)
                .ok_or_else(|| DescriptionError::UnknownTool(origin.clone(), name.clone()))?;
            let tool = self.tool(&origin, tool)?;

            validate_tool(tool_type, &tool)
                .map_err(|error| DescriptionError::Tool(origin, error))?;

            tools.insert(tool_type, tool);
        }

        let deps = self.dependencies(
            &label,
            "deps",
            &document.deps,
            Some(&self.default_toolchain),
        )?;

        Ok(Toolchain::new(label, tools)
            .with_deps(deps)
            .with_args(document.args.clone())
            .with_concurrent_links(document.concurrent_links))
    }

    fn tool(&self, origin: &Origin, document: &ToolDocument) -> Result<Tool, DescriptionError> {
        let pattern = |input: &str| {
            parse_pattern(input).map_err(|error| DescriptionError::Parse(origin.clone(), error))
        };
        let deps_format = match document.depsformat.as_str() {
            "" if !document.depfile.is_empty() => DepsFormat::Gcc,
            name => DepsFormat::from_name(name).ok_or_else(|| {
                DescriptionError::UnknownDepsFormat(origin.clone(), name.into())
            })?,
        };
        let precompiled_header_type =
            PrecompiledHeaderType::from_name(&document.precompiled_header_type).ok_or_else(
                || {
                    DescriptionError::UnknownPrecompiledHeaderType(
                        origin.clone(),
                        document.precompiled_header_type.clone(),
                    )
                },
            )?;

        Ok(Tool::new(
            pattern(&document.command)?,
            document
                .outputs
                .iter()
                .map(|output| pattern(output))
                .collect::<Result<_, _>>()?,
        )
        .with_description(pattern(&document.description)?)
        .with_depfile(pattern(&document.depfile)?, deps_format)
        .with_output_prefix(&document.output_prefix)
        .with_default_output_extension(&document.default_output_extension)
        .with_precompiled_header_type(precompiled_header_type)
        .with_link_outputs(
            pattern(&document.link_output)?,
            pattern(&document.depend_output)?,
        )
        .with_switches(&document.lib_switch, &document.lib_dir_switch)
        .with_restat(document.restat)
        .with_rspfile(
            pattern(&document.rspfile)?,
            pattern(&document.rspfile_content)?,
        ))
    }

    fn config(&self, document: &ConfigDocument) -> Result<Config, DescriptionError> {
        let label = self.item_label(&document.label, Some(&self.default_toolchain))?;
        let values = self.config_values(&label, &document.values)?;

        Ok(Config::new(label, values))
    }

    fn config_values(
        &self,
        label: &Label,
        document: &ConfigValuesDocument,
    ) -> Result<ConfigValues, DescriptionError> {
        let directory = label.directory();
        let directories = |paths: &[String]| {
            paths
                .iter()
                .map(|path| resolve_directory(path, directory))
                .collect()
        };
        let precompiled_header = match (
            &document.precompiled_header,
            &document.precompiled_source,
        ) {
            (Some(header), Some(source)) => Some(PrecompiledHeader::new(
                header,
                SourceFile::resolve(source, directory),
            )),
            (None, None) => None,
            _ => {
                return Err(DescriptionError::PrecompiledHeaderIncomplete(
                    self.origin(label, "precompiled_header"),
                ));
            }
        };

        Ok(ConfigValues {
            defines: document.defines.clone(),
            include_dirs: directories(&document.include_dirs),
            cflags: document.cflags.clone(),
            cflags_c: document.cflags_c.clone(),
            cflags_cc: document.cflags_cc.clone(),
            cflags_objc: document.cflags_objc.clone(),
            cflags_objcc: document.cflags_objcc.clone(),
            ldflags: document.ldflags.clone(),
            libs: document.libs.clone(),
            lib_dirs: directories(&document.lib_dirs),
            precompiled_header,
        })
    }

    fn target(&self, document: &TargetDocument) -> Result<Target, DescriptionError> {
        let label = self.item_label(&document.label, Some(&self.default_toolchain))?;
        let output_type = OutputType::from_name(&document.output_type).ok_or_else(|| {
            DescriptionError::UnknownOutputType(
                self.origin(&label, "type"),
                document.output_type.clone(),
            )
        })?;
        let directory = label.directory();
        let files = |paths: &[String]| {
            paths
                .iter()
                .map(|path| SourceFile::resolve(path, directory))
                .collect::<Vec<_>>()
        };
        let dependencies =
            |field, labels: &[String]| self.dependencies(&label, field, labels, label.toolchain());

        let mut target = Target::new(label.clone(), output_type)
            .with_sources(files(&document.sources))
            .with_inputs(files(&document.inputs))
            .with_data(files(&document.data))
            .with_public_deps(dependencies("public_deps", &document.public_deps)?)
            .with_private_deps(dependencies("deps", &document.deps)?)
            .with_data_deps(dependencies("data_deps", &document.data_deps)?)
            .with_configs(dependencies("configs", &document.configs)?)
            .with_all_dependent_configs(dependencies(
                "all_dependent_configs",
                &document.all_dependent_configs,
            )?)
            .with_public_configs(dependencies("public_configs", &document.public_configs)?)
            .with_forward_dependent_configs(dependencies(
                "forward_dependent_configs_from",
                &document.forward_dependent_configs_from,
            )?)
            .with_allow_circular_includes_from(
                dependencies(
                    "allow_circular_includes_from",
                    &document.allow_circular_includes_from,
                )?
                .iter()
                .map(|dependency| dependency.label().clone())
                .collect(),
            )
            .with_complete_static_lib(document.complete_static_lib)
            .with_testonly(document.testonly)
            .with_config_values(self.config_values(&label, &document.values)?);

        if let Some(name) = &document.output_name {
            target = target.with_output_name(name);
        }

        if let Some(extension) = &document.output_extension {
            target = target.with_output_extension(extension);
        }

        if let Some(patterns) = &document.visibility {
            target = target.with_visibility(Visibility::new(
                patterns
                    .iter()
                    .map(|pattern| {
                        parse_visibility_pattern(pattern, directory).map_err(|error| {
                            DescriptionError::Parse(self.origin(&label, "visibility"), error)
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ));
        }

        if matches!(
            output_type,
            OutputType::Action | OutputType::ActionForeach | OutputType::Copy
        ) {
            target = target.with_action_values(self.action_values(&label, output_type, document)?);
        }

        Ok(target)
    }

    fn action_values(
        &self,
        label: &Label,
        output_type: OutputType,
        document: &TargetDocument,
    ) -> Result<ActionValues, DescriptionError> {
        let patterns = |field: &str, inputs: &[String]| {
            inputs
                .iter()
                .map(|input| self.action_pattern(label, output_type, field, input))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(ActionValues::new(
            document
                .script
                .as_ref()
                .map(|script| SourceFile::resolve(script, label.directory())),
            patterns("args", &document.args)?,
            patterns("outputs", &document.outputs)?,
            document
                .depfile
                .as_ref()
                .map(|depfile| self.action_pattern(label, output_type, "depfile", depfile))
                .transpose()?,
        ))
    }

    /// Parses a pattern of an action. Only targets run once per source may
    /// use placeholders.
    fn action_pattern(
        &self,
        label: &Label,
        output_type: OutputType,
        field: &str,
        input: &str,
    ) -> Result<SubstitutionPattern, DescriptionError> {
        let origin = self.origin(label, field);
        let pattern = parse_pattern(input)
            .map_err(|error| DescriptionError::Parse(origin.clone(), error))?;

        for substitution in pattern.substitutions() {
            if output_type == OutputType::Action
                || !(Substitution::SOURCE.contains(&substitution)
                    || substitution.is_target_variable())
            {
                return Err(DescriptionError::SubstitutionNotAllowed(origin, substitution));
            }
        }

        Ok(pattern)
    }

    fn dependencies(
        &self,
        label: &Label,
        field: &str,
        inputs: &[String],
        toolchain: Option<&Label>,
    ) -> Result<Vec<Dependency>, DescriptionError> {
        let origin = self.origin(label, field);

        inputs
            .iter()
            .map(|input| {
                Ok(Dependency::new(
                    parse_label(input, label.directory(), toolchain)
                        .map_err(|error| DescriptionError::Parse(origin.clone(), error))?,
                    Some(origin.clone()),
                ))
            })
            .collect()
    }
}
