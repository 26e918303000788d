use super::types::{ClauseKey, Lit, Var};

pub struct OccurrenceList {
    // Literal -> clauses containing it, in first-seen order
    occs: Vec<Vec<ClauseKey>>,
}

impl OccurrenceList {
    // Creates occurrence lists for n literals.
    pub fn new(n_lits: usize) -> Self {
        Self {
            occs: vec![Vec::new(); n_lits],
        }
    }

    // Registers a clause in the literal's occurrence list.
    pub fn add_occurrence(&mut self, l: Lit, ck: ClauseKey) {
        self.occs[l.idx()].push(ck);
    }

    pub fn get(&self, l: Lit) -> &[ClauseKey] {
        &self.occs[l.idx()]
    }

    pub fn len(&self, l: Lit) -> usize {
        self.occs[l.idx()].len()
    }

    // Number of clauses mentioning either polarity of the variable.
    pub fn var_len(&self, v: Var) -> usize {
        self.len(v.pos()) + self.len(v.neg())
    }

    /// The i'th clause mentioning the variable: positive occurrences first, then negative.
    pub fn var_at(&self, v: Var, i: usize) -> ClauseKey {
        let pos = self.get(v.pos());
        if i < pos.len() {
            pos[i]
        } else {
            self.get(v.neg())[i - pos.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_occurrences_list_positive_first() {
        let v = Var::from_index(1);
        let mut occs = OccurrenceList::new(2);
        occs.add_occurrence(v.neg(), ClauseKey(0));
        occs.add_occurrence(v.pos(), ClauseKey(1));
        occs.add_occurrence(v.pos(), ClauseKey(2));

        assert_eq!(occs.var_len(v), 3);
        assert_eq!(occs.var_at(v, 0), ClauseKey(1));
        assert_eq!(occs.var_at(v, 1), ClauseKey(2));
        assert_eq!(occs.var_at(v, 2), ClauseKey(0));
    }
}
