use super::ToolType;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputType {
    Executable,
    SharedLibrary,
    StaticLibrary,
    SourceSet,
    Group,
    Copy,
    Action,
    ActionForeach,
}

impl OutputType {
    pub const ALL: &'static [Self] = &[
        Self::Executable,
        Self::SharedLibrary,
        Self::StaticLibrary,
        Self::SourceSet,
        Self::Group,
        Self::Copy,
        Self::Action,
        Self::ActionForeach,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Executable => "executable",
            Self::SharedLibrary => "shared_library",
            Self::StaticLibrary => "static_library",
            Self::SourceSet => "source_set",
            Self::Group => "group",
            Self::Copy => "copy",
            Self::Action => "action",
            Self::ActionForeach => "action_foreach",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|output_type| output_type.name() == name)
    }

    pub fn is_linkable(self) -> bool {
        matches!(self, Self::StaticLibrary | Self::SharedLibrary)
    }

    pub fn is_hard_dependency(self) -> bool {
        matches!(self, Self::Action | Self::ActionForeach | Self::Copy)
    }

    pub fn final_tool_type(self) -> ToolType {
        match self {
            Self::Executable => ToolType::Link,
            Self::SharedLibrary => ToolType::Solink,
            Self::StaticLibrary => ToolType::Alink,
            Self::SourceSet | Self::Group | Self::Copy | Self::Action | Self::ActionForeach => {
                ToolType::Stamp
            }
        }
    }
}

impl Display for OutputType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}
