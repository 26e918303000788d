//! A CDCL propagation and learning engine, driven one decision at a time.
//!
//! The engine exposes decisions, unit propagation, conflict analysis (first-UIP or
//! decision-set learning), backjumping and undo as separate operations. A small reference
//! driver and a DIMACS loader are included so the engine can be run end to end.

pub mod dimacs;
pub mod solver;
