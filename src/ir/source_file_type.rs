use super::{SourceFile, ToolType};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceFileType {
    Unknown,
    Asm,
    C,
    Cpp,
    Header,
    ObjectiveC,
    ObjectiveCpp,
    Rc,
    Object,
    Def,
}

impl SourceFileType {
    pub fn of(file: &SourceFile) -> Self {
        match file.extension() {
            Some("c") => Self::C,
            Some("cc" | "cpp" | "cxx") => Self::Cpp,
            Some("h" | "hh" | "hpp" | "hxx" | "inc") => Self::Header,
            Some("m") => Self::ObjectiveC,
            Some("mm") => Self::ObjectiveCpp,
            Some("rc") => Self::Rc,
            Some("s" | "S" | "asm") => Self::Asm,
            Some("o" | "obj") => Self::Object,
            Some("def") => Self::Def,
            _ => Self::Unknown,
        }
    }

    pub fn tool_type(self) -> Option<ToolType> {
        match self {
            Self::C => Some(ToolType::Cc),
            Self::Cpp => Some(ToolType::Cxx),
            Self::ObjectiveC => Some(ToolType::Objc),
            Self::ObjectiveCpp => Some(ToolType::Objcxx),
            Self::Rc => Some(ToolType::Rc),
            Self::Asm => Some(ToolType::Asm),
            Self::Unknown | Self::Header | Self::Object | Self::Def => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_sources() {
        assert_eq!(SourceFileType::of(&SourceFile::new("//a.c")), SourceFileType::C);
        assert_eq!(SourceFileType::of(&SourceFile::new("//a.cc")), SourceFileType::Cpp);
        assert_eq!(SourceFileType::of(&SourceFile::new("//a.h")), SourceFileType::Header);
        assert_eq!(SourceFileType::of(&SourceFile::new("//a.o")), SourceFileType::Object);
        assert_eq!(SourceFileType::of(&SourceFile::new("//a.def")), SourceFileType::Def);
        assert_eq!(SourceFileType::of(&SourceFile::new("//a.txt")), SourceFileType::Unknown);
    }

    #[test]
    fn map_tools() {
        assert_eq!(SourceFileType::Cpp.tool_type(), Some(ToolType::Cxx));
        assert_eq!(SourceFileType::Header.tool_type(), None);
    }
}
