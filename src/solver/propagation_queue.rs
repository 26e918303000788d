use ringbuf::{ring_buffer::RbBase, HeapRb, Rb};

use super::types::Lit;

/// FIFO of literals waiting to be set, plus the per-literal `in_queue` flags guarding it.
///
/// At most one polarity of a variable is ever pending, so a ring of one slot per variable
/// never overflows.
pub struct PropagationQueue {
    rb: HeapRb<Lit>,
    // Lit -> whether it is currently pending
    in_queue: Vec<bool>,
}

impl PropagationQueue {
    pub fn new(n_vars: usize, n_lits: usize) -> Self {
        Self {
            rb: HeapRb::new(n_vars.max(1)),
            in_queue: vec![false; n_lits],
        }
    }

    /// Enqueues the literal unless it, or its opposite, is already pending. Returns whether
    /// the literal was added.
    pub fn enqueue(&mut self, l: Lit) -> bool {
        if self.is_pending(l) || self.is_pending(!l) {
            return false;
        }
        if self.rb.push(l).is_err() {
            panic!("propagation queue overflow: both polarities of a variable pending");
        }
        self.in_queue[l.idx()] = true;
        true
    }

    /// Takes the oldest pending literal and clears its flag.
    pub fn dequeue(&mut self) -> Option<Lit> {
        let l = self.rb.pop()?;
        self.in_queue[l.idx()] = false;
        Some(l)
    }

    pub fn is_pending(&self, l: Lit) -> bool {
        self.in_queue[l.idx()]
    }

    pub fn is_empty(&self) -> bool {
        self.rb.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rb.len()
    }

    /// True iff nothing is queued and no flag is left behind.
    pub fn is_clean(&self) -> bool {
        self.rb.is_empty() && self.in_queue.iter().all(|q| !q)
    }
}
