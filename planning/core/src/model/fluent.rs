use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type ObjectId = String;

/// The two predicates of the air cargo domain.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    At,
    In,
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::At => write!(f, "At"),
            Predicate::In => write!(f, "In"),
        }
    }
}

/// A ground proposition about the world, e.g. `At(P1, SFO)`.
/// Two fluents are equal iff predicate and both arguments match.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fluent {
    pub predicate: Predicate,
    pub first: ObjectId,
    pub second: ObjectId,
}

impl Fluent {
    pub fn new(predicate: Predicate, first: impl Display, second: impl Display) -> Self {
        Self {
            predicate,
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// `At(object, airport)`: a cargo or a plane is on the ground at an airport.
    pub fn at(object: impl Display, airport: impl Display) -> Self {
        Self::new(Predicate::At, object, airport)
    }

    /// `In(cargo, plane)`: a cargo is loaded in a plane.
    pub fn r#in(cargo: impl Display, plane: impl Display) -> Self {
        Self::new(Predicate::In, cargo, plane)
    }
}

impl Display for Fluent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.predicate, self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::fluent::{Fluent, Predicate};

    #[test]
    fn test_display() {
        assert_eq!("At(C1, SFO)", Fluent::at("C1", "SFO").to_string());
        assert_eq!("In(C1, P2)", Fluent::r#in("C1", "P2").to_string());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Fluent::at("P1", "JFK"), Fluent::at("P1", "JFK"));
        assert_ne!(Fluent::at("P1", "JFK"), Fluent::at("P1", "SFO"));
        assert_ne!(
            Fluent::new(Predicate::At, "C1", "P1"),
            Fluent::new(Predicate::In, "C1", "P1")
        );
    }
}
