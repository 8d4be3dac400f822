use crate::error::{PlanningError, Result};
use crate::model::fluent::Fluent;
use function_name::named;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A world description as named literals: the fluents asserted true and the
/// fluents asserted false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluentState {
    pub pos: Vec<Fluent>,
    pub neg: Vec<Fluent>,
}

impl FluentState {
    pub fn new(pos: Vec<Fluent>, neg: Vec<Fluent>) -> Self {
        Self { pos, neg }
    }

    /// Conjunctive sentence of the positive literals, in the form an external
    /// inference collaborator ingests: `At(C1, SFO) & At(P1, SFO)`.
    pub fn pos_sentence(&self) -> String {
        self.pos
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<String>>()
            .join(" & ")
    }
}

/// The fluent vocabulary of a problem instance: the ordered, duplicate-free
/// list of every ground proposition appearing in the initial state. Index `i`
/// is permanent for the lifetime of the instance and is the encoding contract
/// for every [EncodedState] of that instance.
#[derive(Debug, Clone)]
pub struct StateMap {
    fluents: Vec<Fluent>,
    index: HashMap<Fluent, usize>,
}

impl StateMap {
    #[named]
    pub fn new(fluents: Vec<Fluent>) -> Result<Self> {
        let mut index = HashMap::with_capacity(fluents.len());
        for (i, fluent) in fluents.iter().enumerate() {
            if index.insert(fluent.clone(), i).is_some() {
                return Err(PlanningError::duplicate_fluent(function_name!(), fluent));
            }
        }
        Ok(Self { fluents, index })
    }

    pub fn len(&self) -> usize {
        self.fluents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fluents.is_empty()
    }

    pub fn get_fluents(&self) -> &[Fluent] {
        &self.fluents
    }

    pub fn get(&self, index: usize) -> Option<&Fluent> {
        self.fluents.get(index)
    }

    pub fn index_of(&self, fluent: &Fluent) -> Option<usize> {
        self.index.get(fluent).copied()
    }

    pub fn contains(&self, fluent: &Fluent) -> bool {
        self.index.contains_key(fluent)
    }

    /// Encodes a named-literal world description over this vocabulary.
    /// Bit `i` is true iff the fluent at index `i` is asserted true in
    /// `state`. A literal outside the vocabulary cannot be represented and is
    /// rejected: the encoding is closed-world over exactly the fluents
    /// enumerated at construction.
    #[named]
    pub fn encode(&self, state: &FluentState) -> Result<EncodedState> {
        for fluent in state.pos.iter().chain(state.neg.iter()) {
            if !self.contains(fluent) {
                return Err(PlanningError::unknown_fluent(function_name!(), fluent));
            }
        }
        Ok(self
            .fluents
            .iter()
            .map(|fluent| state.pos.contains(fluent))
            .collect())
    }

    /// Decodes an encoded state back into named literals, in vocabulary
    /// order. Inverse of [StateMap::encode] for every state reachable through
    /// valid problem construction.
    pub fn decode(&self, state: &EncodedState) -> FluentState {
        assert_eq!(
            state.len(),
            self.len(),
            "encoded state has {} bits, vocabulary has {} fluents",
            state.len(),
            self.len()
        );
        let mut decoded = FluentState::default();
        for (i, fluent) in self.fluents.iter().enumerate() {
            if state.holds(i) {
                decoded.pos.push(fluent.clone());
            } else {
                decoded.neg.push(fluent.clone());
            }
        }
        decoded
    }
}

impl TryFrom<&FluentState> for StateMap {
    type Error = PlanningError;

    fn try_from(initial: &FluentState) -> Result<Self> {
        StateMap::new(
            initial
                .pos
                .iter()
                .chain(initial.neg.iter())
                .cloned()
                .collect(),
        )
        .map_err(|e| e.chain("StateMap::try_from(&FluentState)"))
    }
}

/// A world state as a fixed-length boolean vector indexed by a [StateMap].
/// Immutable value semantics: transitions produce a new state, the parent is
/// never touched. Backed by a persistent vector so successors share storage
/// with their parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EncodedState {
    bits: im::Vector<bool>,
}

impl EncodedState {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Truth value of the fluent at `index`. Panics if `index` is outside the
    /// vocabulary, which is a violation of the construction invariants.
    pub fn holds(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Returns a copy of this state with the bit at `index` set to `value`.
    pub fn set(&self, index: usize, value: bool) -> Self {
        Self {
            bits: self.bits.update(index, value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl FromIterator<bool> for EncodedState {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Display for EncodedState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}
