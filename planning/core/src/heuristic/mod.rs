use crate::error::PlanningError;
use crate::heuristic::graph::PlanningGraphBuilder;
use crate::model::state::EncodedState;
use crate::problem::AirCargoProblem;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod graph;

pub const CONSTANT: &str = "constant";
pub const IGNORE_PRECONDITIONS: &str = "ignore-preconditions";
pub const LEVEL_SUM: &str = "level-sum";
pub const SET_LEVEL: &str = "set-level";
pub const MAX_LEVEL: &str = "max-level";

/// The heuristic estimators of the air cargo problem, selected by the search
/// driver. `Constant` and `IgnorePreconditions` are purely syntactic; the
/// three others delegate to a planning graph built through the injected
/// engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    Constant,
    IgnorePreconditions,
    LevelSum,
    SetLevel,
    MaxLevel,
}

pub const HEURISTICS: [Heuristic; 5] = [
    Heuristic::Constant,
    Heuristic::IgnorePreconditions,
    Heuristic::LevelSum,
    Heuristic::SetLevel,
    Heuristic::MaxLevel,
];

impl Heuristic {
    /// Estimated number of actions still needed to reach the goal from
    /// `state`. Never negative; unreachable goals surface as
    /// [graph::UNREACHABLE] rather than an error.
    pub fn estimate(
        &self,
        problem: &AirCargoProblem,
        state: &EncodedState,
        engine: &dyn PlanningGraphBuilder,
    ) -> u32 {
        match self {
            // Not a true heuristic, kept as the no-guidance baseline.
            Heuristic::Constant => 1,
            // Each unsatisfied goal fluent needs at least one action, and no
            // action of this domain establishes two goal fluents at once.
            Heuristic::IgnorePreconditions => problem.unsatisfied_goal_count(state),
            Heuristic::LevelSum => engine.build(problem, state).level_sum(),
            Heuristic::SetLevel => engine.build(problem, state).set_level(),
            Heuristic::MaxLevel => engine.build(problem, state).max_level(),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Constant => write!(f, "{}", CONSTANT),
            Heuristic::IgnorePreconditions => write!(f, "{}", IGNORE_PRECONDITIONS),
            Heuristic::LevelSum => write!(f, "{}", LEVEL_SUM),
            Heuristic::SetLevel => write!(f, "{}", SET_LEVEL),
            Heuristic::MaxLevel => write!(f, "{}", MAX_LEVEL),
        }
    }
}

impl FromStr for Heuristic {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CONSTANT => Ok(Heuristic::Constant),
            IGNORE_PRECONDITIONS => Ok(Heuristic::IgnorePreconditions),
            LEVEL_SUM => Ok(Heuristic::LevelSum),
            SET_LEVEL => Ok(Heuristic::SetLevel),
            MAX_LEVEL => Ok(Heuristic::MaxLevel),
            _ => Err(PlanningError::new(
                "Heuristic::from_str",
                format!("unknown heuristic \"{}\"", s),
            )),
        }
    }
}
