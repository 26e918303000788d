/// DIMACS CNF loading.
pub mod parser;
pub mod sat_instance;

pub use parser::{parse_str, DimacsParser, ParseError};
pub use sat_instance::{InstanceError, SATInstance};
