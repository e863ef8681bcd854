use crate::ir::{
    BuildSettings, Label, OutputFile, OutputType, PatternSegment, Resolution, SourceFile,
    Substitution, SubstitutionPattern, Target,
};
use crate::escape::escape_command;

#[derive(Clone, Debug)]
pub struct SubstitutionWriter<'a> {
    settings: &'a BuildSettings,
    label: &'a Label,
    output_name: &'a str,
    output_extension: String,
}

impl<'a> SubstitutionWriter<'a> {
    pub fn new(settings: &'a BuildSettings, label: &'a Label, output_name: &'a str) -> Self {
        Self {
            settings,
            label,
            output_name,
            output_extension: String::new(),
        }
    }

    pub fn with_output_extension(self, output_extension: impl Into<String>) -> Self {
        Self {
            output_extension: output_extension.into(),
            ..self
        }
    }

    pub fn settings(&self) -> &BuildSettings {
        self.settings
    }

    pub fn target_value(&self, substitution: Substitution) -> Option<String> {
        let toolchain = self.label.toolchain();

        Some(match substitution {
            Substitution::Label => self.label.user_visible_name(false),
            Substitution::RootGenDir => self.settings.root_gen_dir(toolchain),
            Substitution::RootOutDir => self.settings.root_out_dir(toolchain),
            Substitution::TargetGenDir => self.settings.target_gen_dir(self.label),
            Substitution::TargetOutDir => self.settings.target_out_dir(self.label),
            Substitution::TargetOutputName => self.output_name.into(),
            Substitution::OutputExtension => self.output_extension.clone(),
            _ => return None,
        })
    }

    pub fn source_value(&self, source: &SourceFile, substitution: Substitution) -> Option<String> {
        let toolchain = self.label.toolchain();

        Some(match substitution {
            Substitution::Source => self.settings.rebase_file(source),
            Substitution::SourceNamePart => source.name_part().into(),
            Substitution::SourceFilePart => source.file_part().into(),
            Substitution::SourceDir => self.settings.rebase_dir(&source.directory()),
            Substitution::SourceGenDir => {
                self.settings
                    .output_dir(toolchain, "gen", &source.directory())
            }
            Substitution::SourceOutDir => {
                self.settings
                    .output_dir(toolchain, "obj", &source.directory())
            }
            _ => return self.target_value(substitution),
        })
    }

    pub fn apply_to_target(&self, pattern: &SubstitutionPattern) -> OutputFile {
        OutputFile::new(apply(pattern, |substitution| {
            self.target_value(substitution)
        }))
    }

    pub fn apply_to_source(&self, pattern: &SubstitutionPattern, source: &SourceFile) -> OutputFile {
        OutputFile::new(apply(pattern, |substitution| {
            self.source_value(source, substitution)
        }))
    }
}

pub fn action_outputs(
    settings: &BuildSettings,
    target: &Target,
    resolution: &Resolution,
) -> Vec<OutputFile> {
    match target.output_type() {
        OutputType::Action => {
            let writer = SubstitutionWriter::new(settings, target.label(), &resolution.computed_output_name);

            target
                .action_values()
                .outputs()
                .iter()
                .map(|pattern| rebase_output(settings, writer.apply_to_target(pattern)))
                .collect()
        }
        OutputType::ActionForeach | OutputType::Copy => target
            .sources()
            .iter()
            .flat_map(|source| source_outputs(settings, target, resolution, source))
            .collect(),
        _ => vec![],
    }
}

pub fn source_outputs(
    settings: &BuildSettings,
    target: &Target,
    resolution: &Resolution,
    source: &SourceFile,
) -> Vec<OutputFile> {
    let writer = SubstitutionWriter::new(settings, target.label(), &resolution.computed_output_name);

    target
        .action_values()
        .outputs()
        .iter()
        .map(|pattern| rebase_output(settings, writer.apply_to_source(pattern, source)))
        .collect()
}

fn rebase_output(settings: &BuildSettings, output: OutputFile) -> OutputFile {
    OutputFile::new(settings.rebase_file(&SourceFile::new(output.value())))
}

fn apply(pattern: &SubstitutionPattern, value: impl Fn(Substitution) -> Option<String>) -> String {
    pattern
        .segments()
        .iter()
        .map(|segment| match segment {
            PatternSegment::Literal(literal) => literal.clone(),
            PatternSegment::Substitution(substitution) => value(*substitution).unwrap_or_default(),
        })
        .collect()
}

pub fn write_with_ninja_variables(pattern: &SubstitutionPattern) -> String {
    pattern
        .segments()
        .iter()
        .map(|segment| match segment {
            PatternSegment::Literal(literal) => escape_command(literal),
            PatternSegment::Substitution(substitution) => {
                format!("${{{}}}", substitution.ninja_name())
            }
        })
        .collect()
}
