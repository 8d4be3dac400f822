use crate::model::state::EncodedState;
use crate::problem::AirCargoProblem;

/// Level reported by a planning graph when a goal fluent never appears, so
/// that a search driver can treat the node as effectively unreachable without
/// special-casing errors.
pub const UNREACHABLE: u32 = u32::MAX;

/// Query surface of a leveled planning graph built for one `(problem, state)`
/// pair. Construction and mutex propagation belong to the engine behind this
/// trait, not to this crate.
pub trait LeveledPlanningGraph {
    /// Sum over the goal fluents of the level at which each first appears.
    fn level_sum(&self) -> u32;

    /// Level at which all goal fluents co-appear without mutual exclusion.
    fn set_level(&self) -> u32;

    /// Maximum over the goal fluents of the first-appearance level.
    fn max_level(&self) -> u32;
}

/// Capability injected by the caller to construct a planning graph seeded
/// with the current state. A fresh graph is built per estimate call; that
/// cost dominates successor generation and is the engine's concern.
pub trait PlanningGraphBuilder {
    fn build(&self, problem: &AirCargoProblem, state: &EncodedState)
        -> Box<dyn LeveledPlanningGraph>;
}

/// Stand-in builder for drivers that only use the syntactic heuristics. Its
/// graphs report every goal as unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGraphEngine;

struct UnreachableGraph;

impl LeveledPlanningGraph for UnreachableGraph {
    fn level_sum(&self) -> u32 {
        UNREACHABLE
    }

    fn set_level(&self) -> u32 {
        UNREACHABLE
    }

    fn max_level(&self) -> u32 {
        UNREACHABLE
    }
}

impl PlanningGraphBuilder for NoGraphEngine {
    fn build(
        &self,
        _problem: &AirCargoProblem,
        _state: &EncodedState,
    ) -> Box<dyn LeveledPlanningGraph> {
        Box::new(UnreachableGraph)
    }
}
