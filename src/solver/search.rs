use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    cdcl_solver::CDCLSolver,
    config::DecisionPolicy,
    types::{Lit, SolveStatus, Var, BASE_LEVEL},
};

/// Reference search loop over the engine's public operations. Branches on the lowest-index
/// uninstantiated variable; choosing well is out of scope here.
pub struct SearchDriver {
    policy: DecisionPolicy,
    rng: StdRng,
}

impl SearchDriver {
    pub fn new(policy: DecisionPolicy) -> Self {
        let rng = StdRng::seed_from_u64(policy.seed);
        Self { policy, rng }
    }

    pub fn solve(&mut self, solver: &mut CDCLSolver) -> SolveStatus {
        // Consequences of the original unit clauses, at the base level
        if !solver.propagate() {
            debug!("Unit clauses are contradictory");
            return SolveStatus::UNSAT;
        }

        loop {
            let Some(lit) = self.pick_branch_lit(solver) else {
                return SolveStatus::SAT;
            };

            let mut learnt = solver.decide(lit);
            while let Some(ck) = learnt {
                // Nothing left to undo: the conflict follows from the clauses alone
                if solver.decision_level() == BASE_LEVEL {
                    return SolveStatus::UNSAT;
                }
                if let Some(max) = self.policy.max_conflicts {
                    if solver.stats().conflicts >= max {
                        info!("Conflict budget of {} exhausted", max);
                        return SolveStatus::Unknown;
                    }
                }
                while !solver.at_assertion_level(ck) {
                    solver.undo_decide();
                }
                learnt = solver.assert_clause(ck);
            }
        }
    }

    fn pick_branch_lit(&mut self, solver: &CDCLSolver) -> Option<Lit> {
        let var = (1..=solver.n_vars())
            .map(Var::from_index)
            .find(|&v| !solver.is_instantiated(v))?;
        let positive = if self.policy.random_pol {
            self.rng.gen_bool(0.5)
        } else {
            self.policy.prefer_true
        };
        Some(if positive { var.pos() } else { var.neg() })
    }
}
