use std::mem;

use log::debug;

use super::{
    cdcl_solver::CDCLSolver,
    config::LearningScheme,
    types::{ClauseKey, DecisionLevel, Lit, BASE_LEVEL},
};

impl CDCLSolver {
    /// Learns a clause from the falsified clause `ck` with the configured scheme, adds it to the
    /// clause database, and records its asserting literal and assertion level.
    pub(super) fn analyze_conflict(&mut self, ck: ClauseKey) -> ClauseKey {
        debug_assert!(
            self.seen.iter().all(|s| !s),
            "seen flags left over from an earlier analysis"
        );

        let asserting = match self.learning {
            LearningScheme::DecisionSet => self.learn_decision_set(ck),
            LearningScheme::FirstUip => self.learn_first_uip(ck),
        };

        debug_assert!(self.seen.iter().all(|s| !s));
        self.add_learnt_clause(asserting)
    }

    // Walk the implication graph depth-first from the assignments that falsified the conflict
    // clause. Lower-level assignments are kept as causes; current-level ones are expanded through
    // their reasons until a root (the decision, or a base-level fact) is reached.
    fn learn_decision_set(&mut self, ck: ClauseKey) -> Lit {
        let dl = self.decision_level;
        let mut learnt = mem::take(&mut self.learnt_lits);
        let mut stack = mem::take(&mut self.analyze_stack);
        learnt.clear();
        stack.clear();

        let mut asserting = None;
        stack.extend(self.ca[ck].lits.iter().map(|&l| !l));
        while let Some(lit) = stack.pop() {
            let lvl = self.levels[lit.idx()];
            debug_assert!(lvl > 0 && lvl <= dl, "{lit} is not a current assignment");

            // Either already learnt, or already expanded
            if self.seen[lit.idx()] {
                continue;
            }
            self.seen[lit.idx()] = true;

            if lvl < dl {
                learnt.push(!lit);
                continue;
            }
            match self.reasons[lit.idx()] {
                // Unit reasons only occur at the base level and count as roots there
                Some(reason) if self.ca[reason].lits.len() > 1 => stack.extend(
                    self.ca[reason]
                        .lits
                        .iter()
                        .filter(|&&l| l != lit)
                        .map(|&l| !l),
                ),
                _ => {
                    asserting = Some(!lit);
                    learnt.push(!lit);
                }
            }
        }

        self.seen.fill(false);
        self.analyze_stack = stack;
        self.learnt_lits = learnt;

        match asserting {
            Some(a) => a,
            None => unreachable!("no decision found at conflict level {dl}"),
        }
    }

    // Resolve the conflict clause against reasons, newest assignment first, until exactly one of
    // its literals is falsified at the conflict level.
    fn learn_first_uip(&mut self, ck: ClauseKey) -> Lit {
        let dl = self.decision_level;
        let mut working = mem::take(&mut self.learnt_lits);
        working.clear();
        working.extend_from_slice(&self.ca[ck].lits);

        let mut asserting = None;
        for t in (0..self.trail.len()).rev() {
            let focus = self.trail.get(t);
            // Skip assignments that falsify nothing in the working clause
            let Some(pos) = working.iter().position(|&l| l == !focus) else {
                continue;
            };

            let at_level = working
                .iter()
                .filter(|&&l| self.levels[(!l).idx()] == dl)
                .count();
            let reason = match self.reasons[focus.idx()] {
                Some(reason) if at_level > 1 => reason,
                // First UIP, or a base-level unit that cannot be resolved further
                _ => {
                    asserting = Some(working[pos]);
                    break;
                }
            };

            working.swap_remove(pos);
            for &l in &working {
                self.seen[l.idx()] = true;
            }
            for &l in &self.ca[reason].lits {
                if l != focus && !self.seen[l.idx()] {
                    self.seen[l.idx()] = true;
                    working.push(l);
                }
            }
            for &l in &working {
                self.seen[l.idx()] = false;
            }
        }

        self.learnt_lits = working;

        match asserting {
            Some(a) => a,
            None => unreachable!("trail exhausted before reaching a UIP at level {dl}"),
        }
    }

    // Deepest level below the conflict level among the learnt clause's falsified literals; a
    // clause with none (e.g. a unit) goes back to the base level.
    fn assertion_level_of(&self, lits: &[Lit]) -> DecisionLevel {
        lits.iter()
            .map(|&l| self.levels[(!l).idx()])
            .filter(|&lvl| lvl < self.decision_level)
            .fold(BASE_LEVEL, DecisionLevel::max)
    }

    fn add_learnt_clause(&mut self, asserting: Lit) -> ClauseKey {
        let lits = mem::take(&mut self.learnt_lits);
        debug_assert!(lits.contains(&asserting));

        let assertion_level = self.assertion_level_of(&lits);
        let false_lits = lits.iter().filter(|&&l| self.is_implied(!l)).count();
        debug_assert_eq!(false_lits, lits.len(), "learnt clause is not falsified");

        let ck = self.ca.create_clause(&lits, true);
        {
            let c = &mut self.ca[ck];
            c.false_lits = false_lits;
            c.asserting = Some(asserting);
            c.assertion_level = assertion_level;
        }
        for &l in &lits {
            self.occurrences.add_occurrence(l, ck);
        }

        self.assertion_level = assertion_level;
        self.asserting_lit = Some(asserting);
        self.stats.n_learnts += 1;
        self.stats.n_learnt_lits += lits.len() as u64;
        debug!(
            "Learnt {:?}, asserting {} at level {}",
            self.ca[ck], asserting, assertion_level
        );

        // Hand the scratch buffer back
        self.learnt_lits = lits;
        ck
    }
}
