use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Origin(Arc<str>);

impl Origin {
    pub fn new(location: impl Into<Arc<str>>) -> Self {
        Self(location.into())
    }
}

impl Display for Origin {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
