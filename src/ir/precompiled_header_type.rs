#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum PrecompiledHeaderType {
    #[default]
    None,
    Msvc,
}

impl PrecompiledHeaderType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" => Some(Self::None),
            "msvc" => Some(Self::Msvc),
            _ => None,
        }
    }
}
