use std::fmt::Display;
use std::ops::{BitAnd, BitXor, Not, Shr};

/// Decision levels start at 1; 0 marks "unassigned" wherever a level is stored.
pub type DecisionLevel = u32;

/// The level reserved for consequences of the original unit clauses.
pub const BASE_LEVEL: DecisionLevel = 1;

/// A propositional variable. Internally 0-based, externally (DIMACS) 1-based.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    /// Builds a variable from its stable 1-based index.
    pub fn from_index(index: usize) -> Var {
        assert!(index >= 1, "variable indices start at 1");
        Var(index - 1)
    }

    /// Stable 1-based index.
    pub fn index(&self) -> usize {
        self.0 + 1
    }

    // Variable, but as a dense 0-based index
    #[inline(always)]
    pub fn idx(&self) -> usize {
        self.0
    }

    pub fn pos(&self) -> Lit {
        Lit::new(*self, false)
    }

    pub fn neg(&self) -> Lit {
        Lit::new(*self, true)
    }
}

/// How many literal slots do v vars need? Two per variable, one for each polarity.
pub fn lits_from_vars(n_vars: usize) -> usize {
    n_vars * 2
}

/// Representation of a Literal, using the MiniSat convention: lit.v = 2 * var + sign
#[derive(Hash, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lit {
    pub v: usize,
}

impl Lit {
    // Here, a TRUE sign == NEGATIVE
    pub fn new(var: Var, sign: bool) -> Lit {
        Lit {
            v: var.0 + var.0 + (sign as usize),
        }
    }

    /// Converts a signed DIMACS literal (e.g. `-3`) into a literal.
    pub fn from_dimacs(d: i64) -> Lit {
        assert!(d != 0, "0 is not a literal");
        Lit::new(Var::from_index(d.unsigned_abs() as usize), d < 0)
    }

    // Returns true if sign is negative.
    pub fn sign(&self) -> bool {
        self.v.bitand(1) != 0
    }

    pub fn var(&self) -> Var {
        Var(self.v.shr(1))
    }

    /// Signed index: positive for the true polarity, negative otherwise.
    pub fn index(&self) -> i64 {
        let magnitude = self.var().index() as i64;
        if self.sign() {
            -magnitude
        } else {
            magnitude
        }
    }

    // Get v as an index
    #[inline(always)]
    pub fn idx(&self) -> usize {
        self.v
    }
}

impl Not for Lit {
    type Output = Self;
    fn not(self) -> Lit {
        Self {
            v: self.v.bitxor(1),
        }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Dense handle into the clause arena. Original clauses come first, learned ones after.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClauseKey(pub(crate) usize);

impl ClauseKey {
    /// Stable 1-based index of the clause.
    pub fn index(&self) -> usize {
        self.0 + 1
    }

    #[inline(always)]
    pub fn idx(&self) -> usize {
        self.0
    }
}

impl Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C{}", self.index())
    }
}

// Status markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Unknown,
    SAT,
    UNSAT,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Unknown => write!(f, "UNKNOWN"),
            SolveStatus::SAT => write!(f, "SATISFIABLE"),
            SolveStatus::UNSAT => write!(f, "UNSATISFIABLE"),
        }
    }
}
