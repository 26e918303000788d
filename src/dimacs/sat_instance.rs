use std::fmt::Debug;

use fxhash::FxHashSet;
use thiserror::Error;

/// Problems with a clause set that make it unusable as engine input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceError {
    #[error("clause {clause}: 0 is a terminator, not a literal")]
    ZeroLiteral { clause: usize },

    #[error("clause {clause}: literal {lit} exceeds the declared {n_vars} variables")]
    LiteralOutOfRange { clause: usize, lit: Literal, n_vars: usize },
}

#[derive(Clone)]
pub struct SATInstance {
    pub n_vars: usize,
    pub n_clauses: usize,
    pub clauses: Vec<Clause>,
}

impl SATInstance {
    /// Validates the clauses and drops repeated literals inside each one, keeping the
    /// first-seen order. Tautologies are kept as given.
    pub fn new(n_vars: usize, clauses: Vec<Vec<Literal>>) -> Result<Self, InstanceError> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::with_capacity(clauses.len());
        for (i, lits) in clauses.into_iter().enumerate() {
            seen.clear();
            let mut kept = Vec::with_capacity(lits.len());
            for lit in lits {
                if lit == 0 {
                    return Err(InstanceError::ZeroLiteral { clause: i + 1 });
                }
                if lit.unsigned_abs() as usize > n_vars {
                    return Err(InstanceError::LiteralOutOfRange {
                        clause: i + 1,
                        lit,
                        n_vars,
                    });
                }
                if seen.insert(lit) {
                    kept.push(lit);
                }
            }
            out.push(Clause { lits: kept });
        }
        Ok(Self {
            n_vars,
            n_clauses: out.len(),
            clauses: out,
        })
    }

    /// An empty clause can never be satisfied, so the whole instance is unsatisfiable.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|c| c.lits.is_empty())
    }
}

impl Debug for SATInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "n_vars: {}\tn_clauses: {}", self.n_vars, self.n_clauses)?;
        for c in &self.clauses {
            write!(f, "Clause:")?;
            for l in &c.lits {
                write!(f, " {l}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    pub lits: Vec<Literal>,
}

pub type Literal = i64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_literals_dropped_in_order() {
        let inst = SATInstance::new(3, vec![vec![2, -1, 2, 3, -1]]).unwrap();
        assert_eq!(inst.clauses[0].lits, vec![2, -1, 3]);
    }

    #[test]
    fn tautologies_kept() {
        let inst = SATInstance::new(1, vec![vec![1, -1]]).unwrap();
        assert_eq!(inst.clauses[0].lits, vec![1, -1]);
    }

    #[test]
    fn out_of_range_rejected() {
        let err = SATInstance::new(2, vec![vec![1], vec![-3]]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::LiteralOutOfRange {
                clause: 2,
                lit: -3,
                n_vars: 2
            }
        );
    }

    #[test]
    fn zero_rejected() {
        let err = SATInstance::new(2, vec![vec![1, 0]]).unwrap_err();
        assert_eq!(err, InstanceError::ZeroLiteral { clause: 1 });
    }

    #[test]
    fn empty_clause_detected() {
        let inst = SATInstance::new(2, vec![vec![1], vec![]]).unwrap();
        assert!(inst.has_empty_clause());
        assert_eq!(inst.n_clauses, 2);
    }
}
