//! Grounded model of the air cargo planning problem: schema grounding, the
//! boolean state encoding, the state-transition function and the heuristic
//! estimators. Search drivers, the inference engine and the planning-graph
//! engine are external collaborators consuming the surface exposed here.

pub mod error;
pub mod heuristic;
pub mod model;
pub mod problem;
