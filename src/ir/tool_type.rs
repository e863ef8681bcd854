use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolFamily {
    Compiler,
    Linker,
    Copy,
    Stamp,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolType {
    Cc,
    Cxx,
    Objc,
    Objcxx,
    Rc,
    Asm,
    Alink,
    Solink,
    Link,
    Stamp,
    Copy,
}

impl ToolType {
    pub const ALL: &'static [Self] = &[
        Self::Cc,
        Self::Cxx,
        Self::Objc,
        Self::Objcxx,
        Self::Rc,
        Self::Asm,
        Self::Alink,
        Self::Solink,
        Self::Link,
        Self::Stamp,
        Self::Copy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cc => "cc",
            Self::Cxx => "cxx",
            Self::Objc => "objc",
            Self::Objcxx => "objcxx",
            Self::Rc => "rc",
            Self::Asm => "asm",
            Self::Alink => "alink",
            Self::Solink => "solink",
            Self::Link => "link",
            Self::Stamp => "stamp",
            Self::Copy => "copy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tool_type| tool_type.name() == name)
    }

    pub fn family(self) -> ToolFamily {
        match self {
            Self::Cc | Self::Cxx | Self::Objc | Self::Objcxx | Self::Rc | Self::Asm => {
                ToolFamily::Compiler
            }
            Self::Alink | Self::Solink | Self::Link => ToolFamily::Linker,
            Self::Copy => ToolFamily::Copy,
            Self::Stamp => ToolFamily::Stamp,
        }
    }
}

impl Display for ToolType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}
