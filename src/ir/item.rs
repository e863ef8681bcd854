use super::{Config, Label, Target, Toolchain};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Config(Config),
    Target(Target),
    Toolchain(Toolchain),
}

impl Item {
    pub fn label(&self) -> &Label {
        match self {
            Self::Config(config) => config.label(),
            Self::Target(target) => target.label(),
            Self::Toolchain(toolchain) => toolchain.label(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Target(_) => "target",
            Self::Toolchain(_) => "toolchain",
        }
    }
}

impl From<Config> for Item {
    fn from(config: Config) -> Self {
        Self::Config(config)
    }
}

impl From<Target> for Item {
    fn from(target: Target) -> Self {
        Self::Target(target)
    }
}

impl From<Toolchain> for Item {
    fn from(toolchain: Toolchain) -> Self {
        Self::Toolchain(toolchain)
    }
}
