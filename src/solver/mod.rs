/// Solver imports
pub mod cdcl_solver;

/// Conflict analysis (learning strategies)
mod analysis;

/// Solver (and corresponding bookkeeping) related imports
pub mod assignment_trail;
pub mod occurrence_list;
pub mod propagation_queue;

pub mod clause;
/// Solver config
pub mod config;

/// Reference search loop
pub mod search;

pub mod stats;
/// General util/definitions
pub mod types;

pub use cdcl_solver::CDCLSolver;
pub use config::{DecisionPolicy, LearningScheme, SolverConfig};
pub use search::SearchDriver;
pub use types::{ClauseKey, DecisionLevel, Lit, SolveStatus, Var};
