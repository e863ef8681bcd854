use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

static SUBSTITUTIONS: Lazy<HashMap<&'static str, Substitution>> = Lazy::new(|| {
    Substitution::ALL
        .iter()
        .map(|substitution| (substitution.name(), *substitution))
        .collect()
});

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Substitution {
    Label,
    Output,
    RootGenDir,
    RootOutDir,
    TargetGenDir,
    TargetOutDir,
    TargetOutputName,
    Source,
    SourceNamePart,
    SourceFilePart,
    SourceDir,
    SourceGenDir,
    SourceOutDir,
    Cflags,
    CflagsC,
    CflagsCc,
    CflagsObjc,
    CflagsObjcc,
    Defines,
    IncludeDirs,
    Inputs,
    InputsNewline,
    Ldflags,
    Libs,
    OutputExtension,
    Solibs,
}

impl Substitution {
    pub const ALL: &'static [Self] = &[
        Self::Label,
        Self::Output,
        Self::RootGenDir,
        Self::RootOutDir,
        Self::TargetGenDir,
        Self::TargetOutDir,
        Self::TargetOutputName,
        Self::Source,
        Self::SourceNamePart,
        Self::SourceFilePart,
        Self::SourceDir,
        Self::SourceGenDir,
        Self::SourceOutDir,
        Self::Cflags,
        Self::CflagsC,
        Self::CflagsCc,
        Self::CflagsObjc,
        Self::CflagsObjcc,
        Self::Defines,
        Self::IncludeDirs,
        Self::Inputs,
        Self::InputsNewline,
        Self::Ldflags,
        Self::Libs,
        Self::OutputExtension,
        Self::Solibs,
    ];

    pub const COMMON: &'static [Self] = &[
        Self::Label,
        Self::Output,
        Self::RootGenDir,
        Self::RootOutDir,
        Self::TargetGenDir,
        Self::TargetOutDir,
        Self::TargetOutputName,
    ];

    pub const SOURCE: &'static [Self] = &[
        Self::Source,
        Self::SourceNamePart,
        Self::SourceFilePart,
        Self::SourceDir,
        Self::SourceGenDir,
        Self::SourceOutDir,
    ];

    pub const COMPILER_FLAGS: &'static [Self] = &[
        Self::Cflags,
        Self::CflagsC,
        Self::CflagsCc,
        Self::CflagsObjc,
        Self::CflagsObjcc,
        Self::Defines,
        Self::IncludeDirs,
    ];

    pub const LINKER_FLAGS: &'static [Self] = &[
        Self::Inputs,
        Self::InputsNewline,
        Self::Ldflags,
        Self::Libs,
        Self::OutputExtension,
        Self::Solibs,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        SUBSTITUTIONS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Output => "output",
            Self::RootGenDir => "root_gen_dir",
            Self::RootOutDir => "root_out_dir",
            Self::TargetGenDir => "target_gen_dir",
            Self::TargetOutDir => "target_out_dir",
            Self::TargetOutputName => "target_output_name",
            Self::Source => "source",
            Self::SourceNamePart => "source_name_part",
            Self::SourceFilePart => "source_file_part",
            Self::SourceDir => "source_dir",
            Self::SourceGenDir => "source_gen_dir",
            Self::SourceOutDir => "source_out_dir",
            Self::Cflags => "cflags",
            Self::CflagsC => "cflags_c",
            Self::CflagsCc => "cflags_cc",
            Self::CflagsObjc => "cflags_objc",
            Self::CflagsObjcc => "cflags_objcc",
            Self::Defines => "defines",
            Self::IncludeDirs => "include_dirs",
            Self::Inputs => "inputs",
            Self::InputsNewline => "inputs_newline",
            Self::Ldflags => "ldflags",
            Self::Libs => "libs",
            Self::OutputExtension => "output_extension",
            Self::Solibs => "solibs",
        }
    }

    pub fn ninja_name(self) -> &'static str {
        match self {
            Self::Source | Self::Inputs => "in",
            Self::Output => "out",
            Self::InputsNewline => "in_newline",
            _ => self.name(),
        }
    }

    pub fn is_target_variable(self) -> bool {
        Self::COMMON.contains(&self) && self != Self::Output
    }
}

impl Display for Substitution {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{{{{{}}}}}", self.name())
    }
}
