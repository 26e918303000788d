#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Record total (i.e. monotonically increasing) number of:
    /// - decisions: number of decisions made (including assertions of learnt clauses).
    /// - propagations: number of literals set.
    /// - conflicts: number of conflicts that occur.
    /// - backjumps: number of undo_decide calls.
    pub decisions: u64,
    pub propagations: u64,
    pub conflicts: u64,
    pub backjumps: u64,

    /// Record current values of:
    /// - n_clauses: num of original clauses
    /// - n_clause_lits: num lits in original clauses
    /// - n_learnts: num learnt clauses
    /// - n_learnt_lits: num lits in learnt clauses
    pub n_clauses: u64,
    pub n_clause_lits: u64,
    pub n_learnts: u64,
    pub n_learnt_lits: u64,
}
