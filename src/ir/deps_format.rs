#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum DepsFormat {
    #[default]
    None,
    Gcc,
    Msvc,
}

impl DepsFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" => Some(Self::None),
            "gcc" => Some(Self::Gcc),
            "msvc" => Some(Self::Msvc),
            _ => None,
        }
    }
}
