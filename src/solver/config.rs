#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Log filter. Set using `log::set_max_level().`
    pub verbosity: log::LevelFilter,
    /// How conflicts are turned into learnt clauses. Fixed for the solver's lifetime.
    pub learning: LearningScheme,
    /// Only read by the search driver; the engine itself never picks a literal.
    pub decision_policy: DecisionPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            verbosity: log::max_level(),
            learning: LearningScheme::FirstUip,
            decision_policy: DecisionPolicy::default(),
        }
    }
}

// Conflict analysis strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LearningScheme {
    /// Resolve backwards along the trail until one literal of the conflict level remains.
    #[default]
    FirstUip,
    /// Learn the negated decision of the conflict level together with every lower-level
    /// antecedent reachable from the conflict.
    DecisionSet,
}

impl std::fmt::Display for LearningScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstUip => write!(f, "first-uip"),
            Self::DecisionSet => write!(f, "decision-set"),
        }
    }
}

// Config options for the search driver.
#[derive(Clone, Debug, Default)]
pub struct DecisionPolicy {
    // Whether to set decided variables true first (default false).
    pub prefer_true: bool,
    // Whether to randomize polarity; overrides prefer_true.
    pub random_pol: bool,
    // Seed for random polarity, so runs are reproducible.
    pub seed: u64,
    // Stop with an unknown result after this many conflicts.
    pub max_conflicts: Option<u64>,
}
