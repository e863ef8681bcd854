use super::error::EmitError;
use crate::{
    escape::{escape_command, escape_path},
    graph::Graph,
    ir::{
        BuildSettings, Dependency, Label, OutputFile, OutputType, Resolution, SourceFile,
        Substitution, Target, Tool, ToolType, Toolchain,
    },
    resolve::ResolveError,
    substitution_writer::SubstitutionWriter,
};
use std::{
    collections::BTreeSet,
    fmt::{self, Write},
};

pub struct TargetWriter<'a> {
    graph: &'a Graph,
    target: &'a Target,
    resolution: &'a Resolution,
    toolchain: &'a Toolchain,
    output: String,
}

impl<'a> TargetWriter<'a> {
    pub fn new(graph: &'a Graph, label: &Label) -> Result<Self, EmitError> {
        let (target, resolution) = resolved_target(graph, label)?;
        let toolchain_label = target
            .toolchain()
            .unwrap_or(graph.settings().default_toolchain());

        Ok(Self {
            graph,
            target,
            resolution,
            toolchain: graph
                .toolchain(toolchain_label)
                .ok_or_else(|| EmitError::ToolchainNotFound(toolchain_label.clone()))?,
            output: String::new(),
        })
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn settings(&self) -> &'a BuildSettings {
        self.graph.settings()
    }

    pub fn target(&self) -> &'a Target {
        self.target
    }

    pub fn resolution(&self) -> &'a Resolution {
        self.resolution
    }

    pub fn toolchain(&self) -> &'a Toolchain {
        self.toolchain
    }

    pub fn tool(&self, tool_type: ToolType) -> Result<&'a Tool, EmitError> {
        self.toolchain
            .tool(tool_type)
            .ok_or_else(|| EmitError::ToolNotFound(self.toolchain.label().clone(), tool_type))
    }

    pub fn rule(&self, tool_type: ToolType) -> String {
        rule_prefix(self.settings(), self.toolchain.label()) + tool_type.name()
    }

    pub fn substitution_writer(&self) -> SubstitutionWriter<'a> {
        SubstitutionWriter::new(
            self.settings(),
            self.target.label(),
            &self.resolution.computed_output_name,
        )
    }

    pub fn dependency(&self, label: &Label) -> Result<(&'a Target, &'a Resolution), EmitError> {
        resolved_target(self.graph, label)
    }

    pub fn dependency_toolchain(&self, target: &Target) -> Result<&'a Toolchain, EmitError> {
        let label = target
            .toolchain()
            .unwrap_or(self.settings().default_toolchain());

        self.graph
            .toolchain(label)
            .ok_or_else(|| EmitError::ToolchainNotFound(label.clone()))
    }

    pub fn dependency_output(&self, label: &Label) -> Result<OutputFile, EmitError> {
        let (_, resolution) = self.dependency(label)?;

        Ok(resolution
            .dependency_output_file
            .clone()
            .unwrap_or_default())
    }

    pub fn source_path(&self, source: &SourceFile) -> String {
        escape_path(&self.settings().rebase_file(source))
    }

    pub fn write_files(&mut self, files: &[OutputFile]) -> fmt::Result {
        for file in files {
            write!(self, " {}", escape_path(file.value()))?;
        }

        Ok(())
    }

    pub fn write_shared_vars(&mut self, used: impl Fn(Substitution) -> bool) -> fmt::Result {
        let writer = self.substitution_writer();
        let mut written = false;

        for &substitution in Substitution::COMMON {
            if !substitution.is_target_variable() || !used(substitution) {
                continue;
            }

            if let Some(value) = writer.target_value(substitution) {
                writeln!(self, "{} = {}", substitution.ninja_name(), escape_command(&value))?;
                written = true;
            }
        }

        if written {
            writeln!(self)?;
        }

        Ok(())
    }

    /// Writes a stamp every edge of the target waits on before running and
    /// returns it, or nothing if there is nothing to wait on.
    pub fn write_input_deps_stamp(
        &mut self,
        extra_hard_deps: &[Label],
    ) -> Result<Option<OutputFile>, EmitError> {
        let target = self.target;
        let resolution = self.resolution;
        let toolchain = self.toolchain;
        let is_action = target.output_type() == OutputType::Action;
        let script = match target.output_type() {
            OutputType::Action | OutputType::ActionForeach => target.action_values().script(),
            _ => None,
        };

        if script.is_none()
            && extra_hard_deps.is_empty()
            && target.inputs().is_empty()
            && resolution.recursive_hard_deps.is_empty()
            && (!is_action || target.sources().is_empty())
            && toolchain.deps().is_empty()
        {
            return Ok(None);
        }

        let stamp = OutputFile::new(format!(
            "{}/{}.inputdeps.stamp",
            self.settings().target_out_dir(target.label()),
            target.label().name()
        ));

        let rule = self.rule(ToolType::Stamp);
        write!(self, "build {}: {}", escape_path(stamp.value()), rule)?;

        let sources = script
            .into_iter()
            .chain(target.inputs())
            .chain(if is_action { target.sources() } else { &[] });

        for source in sources {
            let path = self.source_path(source);
            write!(self, " {}", path)?;
        }

        let labels = extra_hard_deps
            .iter()
            .chain(&resolution.recursive_hard_deps)
            .chain(toolchain.deps().iter().map(Dependency::label))
            .collect::<BTreeSet<_>>();
        let outputs = labels
            .into_iter()
            .map(|label| self.dependency_output(label))
            .collect::<Result<Vec<_>, _>>()?;

        self.write_files(&outputs)?;
        writeln!(self)?;

        Ok(Some(stamp))
    }

    pub fn write_stamp(&mut self, files: &[OutputFile], order_only: &[OutputFile]) -> fmt::Result {
        let output = self
            .resolution
            .dependency_output_file
            .clone()
            .unwrap_or_default();

        let rule = self.rule(ToolType::Stamp);

        write!(self, "build {}: {}", escape_path(output.value()), rule)?;
        self.write_files(files)?;

        if !order_only.is_empty() {
            write!(self, " ||")?;
            self.write_files(order_only)?;
        }

        writeln!(self)
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Write for TargetWriter<'_> {
    fn write_str(&mut self, string: &str) -> fmt::Result {
        self.output.push_str(string);
        Ok(())
    }
}

pub fn rule_prefix(settings: &BuildSettings, toolchain: &Label) -> String {
    if settings.is_default_toolchain(Some(toolchain)) {
        String::new()
    } else {
        format!("{}_", toolchain.name())
    }
}

fn resolved_target<'a>(
    graph: &'a Graph,
    label: &Label,
) -> Result<(&'a Target, &'a Resolution), EmitError> {
    let target = graph
        .target(label)
        .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?;
    let resolution = target
        .resolution()
        .ok_or_else(|| ResolveError::TargetNotResolved(label.clone()))?;

    Ok((target, resolution))
}
