use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

use super::sat_instance::{InstanceError, Literal, SATInstance};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no `p cnf <vars> <clauses>` header before the first clause")]
    MissingHeader,

    #[error("line {line}: malformed header `{text}`")]
    BadHeader { line: usize, text: String },

    #[error("line {line}: expected an integer, found `{token}`")]
    BadToken { line: usize, token: String },

    #[error("last clause is not terminated by 0")]
    UnterminatedClause,

    #[error("header declares {expected} clauses, found {found}")]
    ClauseCount { expected: usize, found: usize },

    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Reads DIMACS CNF: `c` comments, a `p cnf` header, and 0-terminated clauses which may
/// span several lines. A `%` line ends the input early, as in the SATLIB benchmarks.
pub struct DimacsParser<R> {
    reader: R,
}

impl DimacsParser<BufReader<File>> {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> DimacsParser<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    pub fn parse(self) -> Result<SATInstance, ParseError> {
        let mut header: Option<(usize, usize)> = None;
        let mut clauses: Vec<Vec<Literal>> = Vec::new();
        let mut current: Vec<Literal> = Vec::new();

        for (i, line) in self.reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let trimmed = line.trim();
            // Skip comments and blank lines
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            if trimmed.starts_with('%') {
                break;
            }
            if trimmed.starts_with('p') {
                header = Some(parse_header(trimmed, line_no)?);
                continue;
            }
            let Some((n_vars, _)) = header else {
                return Err(ParseError::MissingHeader);
            };
            for token in trimmed.split_whitespace() {
                let lit: Literal = token.parse().map_err(|_| ParseError::BadToken {
                    line: line_no,
                    token: token.to_string(),
                })?;
                if lit == 0 {
                    clauses.push(std::mem::take(&mut current));
                } else {
                    if lit.unsigned_abs() as usize > n_vars {
                        return Err(InstanceError::LiteralOutOfRange {
                            clause: clauses.len() + 1,
                            lit,
                            n_vars,
                        }
                        .into());
                    }
                    current.push(lit);
                }
            }
        }

        let Some((n_vars, n_clauses)) = header else {
            return Err(ParseError::MissingHeader);
        };
        if !current.is_empty() {
            return Err(ParseError::UnterminatedClause);
        }
        if clauses.len() != n_clauses {
            return Err(ParseError::ClauseCount {
                expected: n_clauses,
                found: clauses.len(),
            });
        }
        Ok(SATInstance::new(n_vars, clauses)?)
    }
}

// Parse `p cnf <vars> <clauses>`.
fn parse_header(text: &str, line: usize) -> Result<(usize, usize), ParseError> {
    let bad = || ParseError::BadHeader {
        line,
        text: text.to_string(),
    };
    let mut parts = text.split_whitespace();
    if parts.next() != Some("p") || parts.next() != Some("cnf") {
        return Err(bad());
    }
    let n_vars = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let n_clauses = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((n_vars, n_clauses))
}

/// Parses DIMACS text held in memory.
pub fn parse_str(text: &str) -> Result<SATInstance, ParseError> {
    DimacsParser::from_reader(text.as_bytes()).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_header_and_clauses() {
        let text = "c example\nc another\np cnf 3 2\n1 -2 0\n2 3\n -1 0\n";
        let inst = parse_str(text).unwrap();
        assert_eq!(inst.n_vars, 3);
        assert_eq!(inst.n_clauses, 2);
        assert_eq!(inst.clauses[0].lits, vec![1, -2]);
        assert_eq!(inst.clauses[1].lits, vec![2, 3, -1]);
    }

    #[test]
    fn percent_ends_input() {
        let text = "p cnf 2 1\n1 2 0\n%\n0\n";
        let inst = parse_str(text).unwrap();
        assert_eq!(inst.n_clauses, 1);
    }

    #[test]
    fn clause_before_header() {
        assert!(matches!(parse_str("1 2 0\n"), Err(ParseError::MissingHeader)));
        assert!(matches!(parse_str("c nothing\n"), Err(ParseError::MissingHeader)));
    }

    #[test]
    fn malformed_header() {
        assert!(matches!(
            parse_str("p dnf 2 1\n1 0\n"),
            Err(ParseError::BadHeader { line: 1, .. })
        ));
        assert!(matches!(
            parse_str("p cnf two 1\n"),
            Err(ParseError::BadHeader { .. })
        ));
    }

    #[test]
    fn bad_token() {
        let err = parse_str("p cnf 2 1\n1 x 0\n").unwrap_err();
        assert!(matches!(err, ParseError::BadToken { line: 2, ref token } if token == "x"));
    }

    #[test]
    fn out_of_range_literal() {
        let err = parse_str("p cnf 2 1\n1 -3 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Instance(InstanceError::LiteralOutOfRange { lit: -3, .. })
        ));
    }

    #[test]
    fn count_mismatch_and_unterminated() {
        assert!(matches!(
            parse_str("p cnf 2 2\n1 0\n"),
            Err(ParseError::ClauseCount { expected: 2, found: 1 })
        ));
        assert!(matches!(
            parse_str("p cnf 2 1\n1 2\n"),
            Err(ParseError::UnterminatedClause)
        ));
    }

    #[test]
    fn empty_clause_is_kept() {
        let inst = parse_str("p cnf 1 2\n1 0\n0\n").unwrap();
        assert!(inst.has_empty_clause());
    }
}
