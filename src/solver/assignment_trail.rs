use super::types::Lit;

// Assignment trail during search and inference.
pub struct AssignmentStack {
    // Stack of Lits
    // Assignment trail (either from decision, or BCP), oldest first. Each decision level
    // occupies a contiguous run, and only the newest run is ever popped.
    trail: Vec<Lit>,
}

impl AssignmentStack {
    pub fn new(n_vars: usize) -> Self {
        Self {
            trail: Vec::with_capacity(n_vars),
        }
    }

    // Pushes a lit onto the trail.
    pub fn push(&mut self, l: Lit) {
        self.trail.push(l);
    }

    // Gets the Lit in the trail at the index.
    pub fn get(&self, i: usize) -> Lit {
        self.trail[i]
    }

    /// Most recent assignment, if any.
    pub fn last(&self) -> Option<Lit> {
        self.trail.last().copied()
    }

    pub fn pop(&mut self) -> Option<Lit> {
        self.trail.pop()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn as_slice(&self) -> &[Lit] {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_newest_first() {
        let mut trail = AssignmentStack::new(3);
        assert!(trail.is_empty());
        trail.push(Lit::from_dimacs(1));
        trail.push(Lit::from_dimacs(-2));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.get(0), Lit::from_dimacs(1));
        assert_eq!(trail.last(), Some(Lit::from_dimacs(-2)));
        assert_eq!(trail.pop(), Some(Lit::from_dimacs(-2)));
        assert_eq!(trail.as_slice(), &[Lit::from_dimacs(1)]);
    }
}
