use super::Substitution;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum PatternSegment {
    Literal(String),
    Substitution(Substitution),
}

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct SubstitutionPattern {
    segments: Vec<PatternSegment>,
}

impl SubstitutionPattern {
    pub fn new(segments: Vec<PatternSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|segment| match segment {
            PatternSegment::Literal(value) => value.is_empty(),
            PatternSegment::Substitution(_) => false,
        })
    }

    pub fn substitutions(&self) -> impl Iterator<Item = Substitution> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            PatternSegment::Literal(_) => None,
            PatternSegment::Substitution(substitution) => Some(*substitution),
        })
    }
}

impl Display for SubstitutionPattern {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PatternSegment::Literal(value) => write!(formatter, "{}", value)?,
                PatternSegment::Substitution(substitution) => {
                    write!(formatter, "{}", substitution)?
                }
            }
        }

        Ok(())
    }
}
