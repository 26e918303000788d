use log::{debug, trace};

use crate::dimacs::sat_instance::SATInstance;

use super::{
    assignment_trail::AssignmentStack,
    clause::{Clause, ClauseAllocator},
    config::{LearningScheme, SolverConfig},
    occurrence_list::OccurrenceList,
    propagation_queue::PropagationQueue,
    stats::RuntimeStats,
    types::{lits_from_vars, ClauseKey, DecisionLevel, Lit, Var, BASE_LEVEL},
};

pub struct CDCLSolver {
    /// Problem information: original clauses first, then learnt clauses, in creation order.
    pub(super) ca: ClauseAllocator,
    n_original: usize,
    n_vars: usize,

    /// Search/inference fields.
    ///
    /// Current decision level. Starts at BASE_LEVEL, the first decision moves it to 2.
    pub(super) decision_level: DecisionLevel,
    /// Assertion level and asserting literal of the most recently learnt clause.
    pub(super) assertion_level: DecisionLevel,
    pub(super) asserting_lit: Option<Lit>,
    /// Clause learnt from the most recent conflict.
    latest_learnt: Option<ClauseKey>,
    /// Assignment stack during search and inference; will need to rewind on conflicts.
    pub(super) trail: AssignmentStack,
    /// Literals waiting to be set by the current propagation pass.
    queue: PropagationQueue,
    /// Occurrence list for literals to track which clauses mention them.
    pub(super) occurrences: OccurrenceList,
    /// Fixed at construction.
    pub(super) learning: LearningScheme,

    /// Variable/Literal metadata.
    ///
    /// We use separate vectors, as opposed to one struct, to optimize cache accesses if we only
    /// need some subset of the data (which is almost always the case).
    ///
    /// Lit -> decision level it was set at (0 if unset)
    pub(super) levels: Vec<DecisionLevel>,
    /// Lit -> clause that implied it, if any. Useful for conflict analysis.
    pub(super) reasons: Vec<Option<ClauseKey>>,
    /// Var -> external mark
    var_marks: Vec<bool>,

    /// Temporary computation structures, in order to prevent repetitive allocation/deallocation.
    ///
    /// Lit -> bool
    /// Used to remember if a literal has already been visited in conflict analysis. Must be all
    /// false between public calls.
    pub(super) seen: Vec<bool>,
    /// Stack of lits
    /// Depth-first frontier for decision-set learning
    pub(super) analyze_stack: Vec<Lit>,
    /// Vec of lits
    /// Scratch space for learnt lits
    pub(super) learnt_lits: Vec<Lit>,

    /// Stats.
    pub(super) stats: RuntimeStats,
}

impl CDCLSolver {
    pub fn new(c: SolverConfig, instance: SATInstance) -> Self {
        let n_vars = instance.n_vars;
        let n_lits = lits_from_vars(n_vars);

        let mut solver = Self {
            ca: ClauseAllocator::new(instance.n_clauses),
            n_original: 0,
            n_vars,
            decision_level: BASE_LEVEL,
            assertion_level: 0,
            asserting_lit: None,
            latest_learnt: None,
            trail: AssignmentStack::new(n_vars),
            queue: PropagationQueue::new(n_vars, n_lits),
            occurrences: OccurrenceList::new(n_lits),
            learning: c.learning,
            levels: vec![0; n_lits],
            reasons: vec![None; n_lits],
            var_marks: vec![false; n_vars],
            seen: vec![false; n_lits],
            analyze_stack: vec![],
            learnt_lits: vec![],
            stats: RuntimeStats::default(),
        };
        // Init solver with instance clauses
        solver.init(instance);
        solver
    }

    fn init(&mut self, instance: SATInstance) {
        for c in instance.clauses {
            assert!(
                !c.lits.is_empty(),
                "empty clauses must be rejected before building the engine"
            );
            let lits = c
                .lits
                .iter()
                .map(|&i_lit| Lit::from_dimacs(i_lit))
                .collect::<Vec<_>>();
            let ck = self.ca.create_clause(&lits, false);
            for &l in &lits {
                self.occurrences.add_occurrence(l, ck);
            }
            // Unit clauses are consumed by the first propagate(), at the base level
            if lits.len() == 1 {
                self.queue.enqueue(lits[0]);
            }
            self.stats.n_clauses += 1;
            self.stats.n_clause_lits += lits.len() as u64;
        }
        self.n_original = self.ca.len();
        debug!(
            "Loaded {} variables, {} clauses, {} pending units",
            self.n_vars,
            self.n_original,
            self.queue.len()
        );
    }

    /// Literal/Variable/Clause lookups
    ///
    /// Number of variables.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Number of original clauses.
    pub fn n_clauses(&self) -> usize {
        self.n_original
    }

    /// Number of learnt clauses.
    pub fn n_learnts(&self) -> usize {
        self.ca.len() - self.n_original
    }

    pub fn index_to_var(&self, index: usize) -> Var {
        assert!(
            index >= 1 && index <= self.n_vars,
            "variable index {index} out of range 1..={}",
            self.n_vars
        );
        Var::from_index(index)
    }

    pub fn index_to_lit(&self, index: i64) -> Lit {
        let var = self.index_to_var(index.unsigned_abs() as usize);
        if index > 0 {
            var.pos()
        } else {
            var.neg()
        }
    }

    pub fn index_to_clause(&self, index: usize) -> ClauseKey {
        match self.ca.key_of_index(index) {
            Some(ck) => ck,
            None => panic!("clause index {index} out of range 1..={}", self.ca.len()),
        }
    }

    pub fn clause(&self, ck: ClauseKey) -> &Clause {
        &self.ca[ck]
    }

    /// All clause keys, original ones first.
    pub fn clause_keys(&self) -> impl Iterator<Item = ClauseKey> {
        self.ca.keys()
    }

    pub fn is_learnt(&self, ck: ClauseKey) -> bool {
        self.ca[ck].learnt
    }

    /// Clauses containing the literal, in the order they were registered.
    pub fn lit_occurrences(&self, lit: Lit) -> &[ClauseKey] {
        self.occurrences.get(lit)
    }

    /// Number of clauses mentioning either polarity of the variable.
    pub fn var_occurrences(&self, var: Var) -> usize {
        self.occurrences.var_len(var)
    }

    /// The i'th clause mentioning the variable, counting from 0.
    pub fn clause_of_var(&self, i: usize, var: Var) -> ClauseKey {
        assert!(i < self.var_occurrences(var), "occurrence {i} out of range");
        self.occurrences.var_at(var, i)
    }

    /// Whether the literal has been set, by decision or by implication.
    pub fn is_implied(&self, lit: Lit) -> bool {
        self.levels[lit.idx()] > 0
    }

    pub fn is_instantiated(&self, var: Var) -> bool {
        debug_assert!(!(self.is_implied(var.pos()) && self.is_implied(var.neg())));
        self.is_implied(var.pos()) || self.is_implied(var.neg())
    }

    /// True if every clause mentioning the variable is already satisfied.
    pub fn is_irrelevant(&self, var: Var) -> bool {
        (0..self.var_occurrences(var)).all(|i| self.is_subsumed(self.occurrences.var_at(var, i)))
    }

    pub fn is_subsumed(&self, ck: ClauseKey) -> bool {
        self.ca[ck].is_subsumed()
    }

    /// Level the literal was set at, or 0 when unset.
    pub fn level_of(&self, lit: Lit) -> DecisionLevel {
        self.levels[lit.idx()]
    }

    pub fn reason_of(&self, lit: Lit) -> Option<ClauseKey> {
        self.reasons[lit.idx()]
    }

    pub fn trail(&self) -> &[Lit] {
        self.trail.as_slice()
    }

    pub fn decision_level(&self) -> DecisionLevel {
        self.decision_level
    }

    pub fn assertion_level(&self) -> DecisionLevel {
        self.assertion_level
    }

    pub fn asserting_lit(&self) -> Option<Lit> {
        self.asserting_lit
    }

    pub fn latest_learnt(&self) -> Option<ClauseKey> {
        self.latest_learnt
    }

    pub fn learning_scheme(&self) -> LearningScheme {
        self.learning
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    // The current value of each instantiated variable, in variable order.
    pub fn assignments(&self) -> Vec<Lit> {
        (1..=self.n_vars)
            .map(Var::from_index)
            .filter_map(|v| {
                if self.is_implied(v.pos()) {
                    Some(v.pos())
                } else if self.is_implied(v.neg()) {
                    Some(v.neg())
                } else {
                    None
                }
            })
            .collect()
    }

    /// External bookkeeping marks; the engine never reads them.
    pub fn mark_var(&mut self, var: Var) {
        self.var_marks[var.idx()] = true;
    }

    pub fn unmark_var(&mut self, var: Var) {
        self.var_marks[var.idx()] = false;
    }

    pub fn is_marked_var(&self, var: Var) -> bool {
        self.var_marks[var.idx()]
    }

    pub fn mark_clause(&mut self, ck: ClauseKey) {
        self.ca[ck].mark = true;
    }

    pub fn unmark_clause(&mut self, ck: ClauseKey) {
        self.ca[ck].mark = false;
    }

    pub fn is_marked_clause(&self, ck: ClauseKey) -> bool {
        self.ca[ck].mark
    }

    /// Decisions, assertion, and undo
    ///
    /// Opens a new decision level with lit set true, then propagates. Returns the clause learnt
    /// from the conflict if propagation fails, leaving the level unchanged.
    pub fn decide(&mut self, lit: Lit) -> Option<ClauseKey> {
        self.decide_with_reason(lit, None)
    }

    fn decide_with_reason(&mut self, lit: Lit, reason: Option<ClauseKey>) -> Option<ClauseKey> {
        assert!(!self.is_implied(lit), "deciding {lit}, which is already set");
        assert!(!self.is_implied(!lit), "deciding {lit}, whose opposite is set");
        assert!(
            self.queue.is_empty(),
            "pending unit literals: propagate() must run before the first decision"
        );

        self.decision_level += 1;
        self.stats.decisions += 1;
        debug!("Deciding {} at level {}", lit, self.decision_level);

        self.queue.enqueue(lit);
        self.reasons[lit.idx()] = reason;
        if self.propagate() {
            None
        } else {
            self.latest_learnt
        }
    }

    /// Undoes the newest decision level and everything implied at it.
    pub fn undo_decide(&mut self) {
        assert!(
            self.decision_level > BASE_LEVEL,
            "cannot undo below the base level"
        );
        self.undo_propagation();
        self.decision_level -= 1;
        self.stats.backjumps += 1;
    }

    /// True when the solver sits exactly at the learnt clause's assertion level.
    pub fn at_assertion_level(&self, ck: ClauseKey) -> bool {
        self.decision_level == self.ca[ck].assertion_level()
    }

    /// Backjump step: replaces the newest decision with the clause's asserting literal, implied
    /// by the clause, and propagates.
    pub fn assert_clause(&mut self, ck: ClauseKey) -> Option<ClauseKey> {
        assert!(
            self.at_assertion_level(ck),
            "asserting {ck} at level {}, not its assertion level {}",
            self.decision_level,
            self.ca[ck].assertion_level()
        );
        let Some(lit) = self.ca[ck].asserting_lit() else {
            panic!("{ck} was not learnt and has no asserting literal");
        };
        debug!("Asserting {} from {}", lit, ck);
        self.decision_level -= 1;
        self.decide_with_reason(lit, Some(ck))
    }

    /// Unit propagation
    ///
    /// Drains the queue in FIFO order. Returns whether propagation finished without conflict;
    /// otherwise the learnt clause is available from latest_learnt().
    pub fn propagate(&mut self) -> bool {
        let mut conflict = None;
        while let Some(lit) = self.queue.dequeue() {
            if conflict.is_some() {
                // Made moot by the conflict: drop the tentative reason
                debug_assert_eq!(self.levels[lit.idx()], 0);
                self.reasons[lit.idx()] = None;
                continue;
            }
            conflict = self.set_literal(lit);
        }
        debug_assert!(self.queue.is_clean());

        match conflict {
            Some(learnt) => {
                self.latest_learnt = Some(learnt);
                false
            }
            None => true,
        }
    }

    // Sets lit true at the current level. Returns the learnt clause if this falsified a clause.
    fn set_literal(&mut self, lit: Lit) -> Option<ClauseKey> {
        assert!(!self.is_implied(lit), "{lit} is already set");
        assert!(!self.is_implied(!lit), "opposite of {lit} is already set");

        let dl = self.decision_level;
        trace!(
            "Setting {} at level {} (reason: {:?})",
            lit,
            dl,
            self.reasons[lit.idx()]
        );
        self.levels[lit.idx()] = dl;
        self.trail.push(lit);
        self.stats.propagations += 1;

        // Every clause containing lit is now satisfied, unless it already was
        for &ck in self.occurrences.get(lit) {
            let c = &mut self.ca[ck];
            if c.set_level == 0 {
                c.set_level = dl;
            }
        }

        // Clauses learnt while handling a conflict below are registered past this bound, and
        // start with their counters already correct.
        let fl = !lit;
        let n_occs = self.occurrences.len(fl);
        let mut conflict = None;
        for i in 0..n_occs {
            let ck = self.occurrences.get(fl)[i];
            let c = &mut self.ca[ck];
            c.false_lits += 1;
            debug_assert!(c.false_lits <= c.lits.len());
            // Once a conflict is found, only keep the counters honest
            if conflict.is_none() {
                conflict = self.check_clause(ck);
            }
        }
        conflict
    }

    // Classifies a clause that just lost a literal: conflict, unit, or nothing to do.
    fn check_clause(&mut self, ck: ClauseKey) -> Option<ClauseKey> {
        let c = &self.ca[ck];
        if c.is_subsumed() {
            return None;
        }

        if c.is_conflict() {
            debug!("Conflict on {:?} at level {}", c, self.decision_level);
            debug_assert!(c.size() > 1 || self.decision_level == BASE_LEVEL);
            self.stats.conflicts += 1;
            return Some(self.analyze_conflict(ck));
        }

        if c.is_unit() {
            let free = c
                .lits
                .iter()
                .copied()
                .find(|&l| self.levels[(!l).idx()] == 0);
            let Some(unit) = free else {
                unreachable!("{:?} counted as unit but has no free literal", c);
            };
            if self.queue.enqueue(unit) {
                trace!("Queueing {} from {}", unit, ck);
                self.reasons[unit.idx()] = Some(ck);
            } else {
                // Already pending, or its opposite is and this clause will conflict soon
                debug_assert!(self.levels[unit.idx()] == 0);
            }
        }
        None
    }

    /// Undoes every assignment made at the current decision level, leaving the level itself
    /// unchanged.
    pub fn undo_propagation(&mut self) {
        let dl = self.decision_level;
        while let Some(lit) = self.trail.last() {
            if self.levels[lit.idx()] != dl {
                break;
            }
            self.trail.pop();
            self.unset_literal(lit);
        }
    }

    fn unset_literal(&mut self, lit: Lit) {
        assert!(!self.is_implied(!lit), "opposite of {lit} is set");

        let dl = self.decision_level;
        trace!("Unsetting {} at level {}", lit, dl);
        // Clauses satisfied at this level stop being satisfied
        for &ck in self.occurrences.get(lit) {
            let c = &mut self.ca[ck];
            if c.set_level == dl {
                c.set_level = 0;
            }
        }
        self.levels[lit.idx()] = 0;
        self.reasons[lit.idx()] = None;

        for &ck in self.occurrences.get(!lit) {
            let c = &mut self.ca[ck];
            assert!(c.false_lits > 0, "false literal count underflow in {:?}", c);
            c.false_lits -= 1;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn solver_for(
        n_vars: usize,
        clauses: Vec<Vec<i64>>,
        learning: LearningScheme,
    ) -> CDCLSolver {
        let instance = SATInstance::new(n_vars, clauses).unwrap();
        let cfg = SolverConfig {
            learning,
            ..SolverConfig::default()
        };
        CDCLSolver::new(cfg, instance)
    }

    /// Checks every bookkeeping invariant that must hold between public calls.
    pub(crate) fn assert_consistent(s: &CDCLSolver) {
        for v in 1..=s.n_vars() {
            let var = Var::from_index(v);
            assert!(!(s.is_implied(var.pos()) && s.is_implied(var.neg())));
            for l in [var.pos(), var.neg()] {
                if !s.is_implied(l) {
                    assert_eq!(s.reason_of(l), None, "unset {l} keeps a reason");
                }
            }
        }
        for ck in s.clause_keys() {
            let c = s.clause(ck);
            let falsified = c.lits().iter().filter(|&&l| s.is_implied(!l)).count();
            assert_eq!(c.false_lits(), falsified, "{:?}", c);
            let first_true = c
                .lits()
                .iter()
                .filter(|&&l| s.is_implied(l))
                .map(|&l| s.level_of(l))
                .min()
                .unwrap_or(0);
            assert_eq!(c.set_level(), first_true, "{:?}", c);
        }
        assert!(s.seen.iter().all(|x| !x));
        assert!(s.queue.is_clean());
        for (i, lit) in s.trail().iter().enumerate() {
            assert!(s.is_implied(*lit));
            if i > 0 {
                assert!(s.level_of(s.trail()[i - 1]) <= s.level_of(*lit));
            }
        }
    }

    fn lit(d: i64) -> Lit {
        Lit::from_dimacs(d)
    }

    #[test]
    fn construction_registers_occurrences_in_order() {
        let s = solver_for(
            3,
            vec![vec![1, 2], vec![-1, 3], vec![1, -3], vec![2]],
            LearningScheme::FirstUip,
        );
        assert_eq!(s.n_vars(), 3);
        assert_eq!(s.n_clauses(), 4);
        assert_eq!(s.n_learnts(), 0);
        assert_eq!(s.decision_level(), BASE_LEVEL);

        let c1 = s.index_to_clause(1);
        let c3 = s.index_to_clause(3);
        assert_eq!(s.lit_occurrences(lit(1)), &[c1, c3]);
        assert_eq!(s.var_occurrences(s.index_to_var(1)), 3);
        assert_eq!(s.clause_of_var(2, s.index_to_var(1)), s.index_to_clause(2));
        assert_eq!(s.clause(c3).lits(), &[lit(1), lit(-3)]);
        assert_eq!(s.index_to_lit(-3), lit(-3));
        assert_eq!(s.index_to_lit(-3).var(), s.index_to_var(3));
    }

    #[test]
    fn units_propagate_at_base_level_without_decisions() {
        // {1,2} {-1,-2} {-2}: nothing needs deciding
        let mut s = solver_for(
            2,
            vec![vec![1, 2], vec![-1, -2], vec![-2]],
            LearningScheme::FirstUip,
        );
        assert!(s.propagate());
        assert_eq!(s.trail(), &[lit(-2), lit(1)]);
        assert_eq!(s.level_of(lit(-2)), BASE_LEVEL);
        assert_eq!(s.level_of(lit(1)), BASE_LEVEL);
        assert_eq!(s.reason_of(lit(1)), Some(s.index_to_clause(1)));
        assert_eq!(s.reason_of(lit(-2)), None);
        assert!(s.is_subsumed(s.index_to_clause(2)));
        assert!(s.is_instantiated(s.index_to_var(1)));
        assert!(s.is_irrelevant(s.index_to_var(2)));
        assert_eq!(s.decision_level(), BASE_LEVEL);
        assert_consistent(&s);
    }

    #[test]
    fn first_decision_opens_level_two() {
        let mut s = solver_for(3, vec![vec![-1, 2], vec![-2, 3]], LearningScheme::FirstUip);
        assert!(s.propagate());
        assert!(s.trail().is_empty());

        assert_eq!(s.decide(lit(1)), None);
        assert_eq!(s.decision_level(), 2);
        assert_eq!(s.trail(), &[lit(1), lit(2), lit(3)]);
        assert!(s.trail().iter().all(|&l| s.level_of(l) == 2));
        assert_eq!(s.reason_of(lit(3)), Some(s.index_to_clause(2)));
        assert_eq!(s.stats().decisions, 1);
        assert_consistent(&s);
    }

    #[test]
    fn decide_then_undo_restores_state() {
        let mut s = solver_for(
            5,
            vec![vec![-1, 2], vec![-3, 4], vec![2, 3, 5]],
            LearningScheme::FirstUip,
        );
        assert!(s.propagate());
        assert_eq!(s.decide(lit(1)), None);
        assert_eq!(s.decide(lit(3)), None);

        let snapshot = |s: &CDCLSolver| {
            let levels = s.levels.clone();
            let reasons = s.reasons.clone();
            let counters = s
                .clause_keys()
                .map(|ck| (s.clause(ck).false_lits(), s.clause(ck).set_level()))
                .collect::<Vec<_>>();
            (s.trail().to_vec(), levels, reasons, counters, s.decision_level())
        };
        let before = snapshot(&s);

        // Only touches the counter of an already satisfied clause
        assert_eq!(s.decide(lit(-5)), None);
        assert_ne!(snapshot(&s), before);
        s.undo_decide();
        assert_eq!(snapshot(&s), before);
        assert_consistent(&s);
    }

    #[test]
    fn conflict_drops_pending_literals() {
        // Deciding 1 queues 2, -4 and 3; setting -4 falsifies {-2,4} before 3 is reached
        let mut s = solver_for(
            4,
            vec![vec![-1, 2], vec![-1, -4], vec![-1, 3], vec![-2, 4]],
            LearningScheme::FirstUip,
        );
        assert!(s.propagate());
        assert!(s.decide(lit(1)).is_some());

        assert_eq!(s.trail(), &[lit(1), lit(2), lit(-4)]);
        assert!(!s.is_implied(lit(3)));
        assert_eq!(s.reason_of(lit(3)), None);
        assert_eq!(s.clause(s.index_to_clause(3)).false_lits(), 1);
        assert_consistent(&s);

        s.undo_decide();
        assert!(s.trail().is_empty());
        assert_consistent(&s);
    }

    #[test]
    fn undo_propagation_keeps_older_levels() {
        let mut s = solver_for(
            3,
            vec![vec![-1, 2], vec![-3, 1]],
            LearningScheme::FirstUip,
        );
        assert!(s.propagate());
        assert_eq!(s.decide(lit(1)), None);
        assert_eq!(s.decide(lit(3)), None);
        assert_eq!(s.trail().len(), 3);

        s.undo_propagation();
        assert_eq!(s.decision_level(), 3);
        assert_eq!(s.trail(), &[lit(1), lit(2)]);
        assert!(!s.is_implied(lit(3)));
        assert_consistent(&s);
    }

    #[test]
    fn original_clauses_are_never_at_assertion_level() {
        let mut s = solver_for(2, vec![vec![1, 2]], LearningScheme::FirstUip);
        assert!(s.propagate());
        assert!(!s.at_assertion_level(s.index_to_clause(1)));
    }

    #[test]
    fn marks_are_independent_of_search() {
        let mut s = solver_for(2, vec![vec![1, 2]], LearningScheme::FirstUip);
        let v = s.index_to_var(2);
        let ck = s.index_to_clause(1);
        assert!(!s.is_marked_var(v));
        s.mark_var(v);
        s.mark_clause(ck);
        assert!(s.is_marked_var(v) && s.is_marked_clause(ck));
        s.unmark_var(v);
        s.unmark_clause(ck);
        assert!(!s.is_marked_var(v) && !s.is_marked_clause(ck));
    }

    #[test]
    fn assignments_in_variable_order() {
        let mut s = solver_for(3, vec![vec![-3], vec![3, 1]], LearningScheme::FirstUip);
        assert!(s.propagate());
        assert_eq!(s.assignments(), vec![lit(1), lit(-3)]);
    }

    #[test]
    #[should_panic(expected = "already set")]
    fn deciding_a_set_literal_panics() {
        let mut s = solver_for(2, vec![vec![1]], LearningScheme::FirstUip);
        assert!(s.propagate());
        s.decide(lit(1));
    }

    #[test]
    #[should_panic(expected = "opposite is set")]
    fn deciding_against_a_set_literal_panics() {
        let mut s = solver_for(2, vec![vec![1]], LearningScheme::FirstUip);
        assert!(s.propagate());
        s.decide(lit(-1));
    }

    #[test]
    #[should_panic(expected = "propagate() must run")]
    fn deciding_before_initial_propagation_panics() {
        let mut s = solver_for(2, vec![vec![1]], LearningScheme::FirstUip);
        s.decide(lit(2));
    }

    #[test]
    #[should_panic(expected = "below the base level")]
    fn undo_below_base_level_panics() {
        let mut s = solver_for(1, vec![vec![1]], LearningScheme::FirstUip);
        assert!(s.propagate());
        s.undo_decide();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn variable_lookup_checks_bounds() {
        let s = solver_for(2, vec![vec![1]], LearningScheme::FirstUip);
        s.index_to_var(3);
    }
}
