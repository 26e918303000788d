use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use super::types::{ClauseKey, DecisionLevel, Lit};

/// Arena for original and learned clauses. Keys are dense and never reused, so a key's
/// 1-based index doubles as the clause's stable index.
#[derive(Default)]
pub struct ClauseAllocator {
    clauses: Vec<Clause>,
}

impl ClauseAllocator {
    pub fn new(n_clauses: usize) -> Self {
        Self {
            clauses: Vec::with_capacity(n_clauses),
        }
    }

    // Create a new clause from the provided literals.
    pub fn create_clause(&mut self, lits: &[Lit], learnt: bool) -> ClauseKey {
        let ck = ClauseKey(self.clauses.len());
        self.clauses.push(Clause::with_key(lits, learnt, ck));
        ck
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Looks up a clause by its stable 1-based index.
    pub fn key_of_index(&self, index: usize) -> Option<ClauseKey> {
        (index >= 1 && index <= self.clauses.len()).then(|| ClauseKey(index - 1))
    }

    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> {
        (0..self.clauses.len()).map(ClauseKey)
    }
}

impl Index<ClauseKey> for ClauseAllocator {
    type Output = Clause;
    fn index(&self, index: ClauseKey) -> &Self::Output {
        &self.clauses[index.idx()]
    }
}

impl IndexMut<ClauseKey> for ClauseAllocator {
    fn index_mut(&mut self, index: ClauseKey) -> &mut Self::Output {
        &mut self.clauses[index.idx()]
    }
}

#[derive(Clone)]
pub struct Clause {
    pub(crate) lits: Vec<Lit>,

    /// Reference to this clause in the arena (i.e. clause key)
    pub(crate) ck: ClauseKey,
    /// Number of literals whose opposite is currently set.
    pub(crate) false_lits: usize,
    /// Level at which the clause became satisfied; 0 while it is not.
    pub(crate) set_level: DecisionLevel,
    /// Free for external bookkeeping; never read by the engine.
    pub(crate) mark: bool,
    /// Whether clause was learnt
    pub(crate) learnt: bool,
    /// For learnt clauses: the literal to assert after backjumping, and the level to backjump to.
    pub(crate) asserting: Option<Lit>,
    pub(crate) assertion_level: DecisionLevel,
}

impl Clause {
    fn with_key(lits: &[Lit], learnt: bool, ck: ClauseKey) -> Self {
        Self {
            lits: lits.to_vec(),
            ck,
            false_lits: 0,
            set_level: 0,
            mark: false,
            learnt,
            asserting: None,
            assertion_level: 0,
        }
    }

    /// Stable 1-based index.
    pub fn index(&self) -> usize {
        self.ck.index()
    }

    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    pub fn size(&self) -> usize {
        self.lits.len()
    }

    pub fn false_lits(&self) -> usize {
        self.false_lits
    }

    pub fn set_level(&self) -> DecisionLevel {
        self.set_level
    }

    pub fn is_subsumed(&self) -> bool {
        self.set_level > 0
    }

    pub fn is_learnt(&self) -> bool {
        self.learnt
    }

    pub fn asserting_lit(&self) -> Option<Lit> {
        self.asserting
    }

    pub fn assertion_level(&self) -> DecisionLevel {
        self.assertion_level
    }

    /// Not yet satisfied, and every literal is false.
    pub fn is_conflict(&self) -> bool {
        self.set_level == 0 && self.false_lits == self.lits.len()
    }

    /// Not yet satisfied, and exactly one literal is not false.
    pub fn is_unit(&self) -> bool {
        self.set_level == 0 && self.false_lits + 1 == self.lits.len()
    }
}

impl Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit_str = self
            .lits
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "Clause {{ index: {}, learnt: {}, false: {}, set_level: {}, lits: {} }}",
            self.index(),
            self.learnt,
            self.false_lits,
            self.set_level,
            lit_str
        )
    }
}

impl Index<usize> for Clause {
    type Output = Lit;
    fn index(&self, i: usize) -> &Lit {
        &self.lits[i]
    }
}
