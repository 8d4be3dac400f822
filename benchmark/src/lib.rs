use airlift_core::heuristic::graph::NoGraphEngine;
use airlift_core::heuristic::Heuristic;
use airlift_core::problem::AirCargoProblem;
use serde::Serialize;

/// Heuristics the report evaluates at the initial state. The planning-graph
/// heuristics need a real graph engine wired in and are left out.
pub const REPORTED_HEURISTICS: [Heuristic; 2] =
    [Heuristic::Constant, Heuristic::IgnorePreconditions];

#[derive(Debug, Serialize)]
pub struct HeuristicEstimate {
    pub heuristic: Heuristic,
    pub estimate: u32,
}

/// Grounding statistics of one benchmark instance.
#[derive(Debug, Serialize)]
pub struct InstanceReport {
    pub label: String,
    pub cargos: usize,
    pub planes: usize,
    pub airports: usize,
    pub fluents: usize,
    pub load_actions: usize,
    pub unload_actions: usize,
    pub fly_actions: usize,
    pub total_actions: usize,
    pub initial_estimates: Vec<HeuristicEstimate>,
}

impl InstanceReport {
    pub fn new(label: impl ToString, problem: &AirCargoProblem) -> Self {
        let count = |schema: &str| {
            problem
                .get_actions()
                .iter()
                .filter(|a| a.get_name().starts_with(schema))
                .count()
        };
        Self {
            label: label.to_string(),
            cargos: problem.get_cargos().len(),
            planes: problem.get_planes().len(),
            airports: problem.get_airports().len(),
            fluents: problem.get_state_map().len(),
            load_actions: count("Load("),
            unload_actions: count("Unload("),
            fly_actions: count("Fly("),
            total_actions: problem.get_actions().len(),
            initial_estimates: REPORTED_HEURISTICS
                .iter()
                .map(|h| HeuristicEstimate {
                    heuristic: *h,
                    estimate: h.estimate(problem, problem.initial_state(), &NoGraphEngine),
                })
                .collect(),
        }
    }
}
