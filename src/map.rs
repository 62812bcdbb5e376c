use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Variable of the original ANF system, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnfVar(pub u32);

/// Variable of the CNF system the solver actually ran on, 0-based.
/// Distinct from [`AnfVar`] so the two namespaces cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CnfVar(pub u32);

impl fmt::Display for AnfVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CnfVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How one ANF variable obtains its value from the solved CNF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Value is read straight from the CNF model.
    Direct(CnfVar),
    /// Value equals another ANF variable's value xor `invert`.
    /// Chains may be several hops deep.
    Derived { source: AnfVar, invert: bool },
    /// Value was fixed during preprocessing, no solver input needed.
    Fixed(bool),
    /// Don't-care: any value satisfies the system.
    Free,
}

/// At most one relation per ANF variable. A later record for the same
/// variable overwrites the earlier one, keeping its original position.
pub type AnfMap = IndexMap<AnfVar, Relation>;

/// Parses a solution map file written by the ANF-to-CNF conversion.
///
/// One record per non-blank line, whitespace-tokenized. Records with an
/// unknown leading keyword are skipped with a warning on stderr; any
/// other malformation is fatal.
pub fn parse_map(s: &str) -> Result<AnfMap> {
    let mut map = AnfMap::new();
    for (idx, line) in s.lines().enumerate() {
        parse_record(line, idx + 1, &mut map)?;
    }
    Ok(map)
}

fn parse_record(line: &str, line_no: usize, map: &mut AnfMap) -> Result<()> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let Some(&keyword) = tokens.first() else {
        return Ok(());
    };

    match keyword {
        // "Internal-ANF-var 5 = solution-var 5": the ANF variable kept
        // its id through the conversion, so one integer names both.
        "Internal-ANF-var" => {
            expect_tokens(&tokens, 5, line, line_no)?;
            let var = parse_var(tokens[4], line, line_no)?;
            map.insert(AnfVar(var), Relation::Direct(CnfVar(var)));
        }
        // "ANF-var-val 2 = l_True"
        "ANF-var-val" => {
            expect_tokens(&tokens, 4, line, line_no)?;
            let var = parse_var(tokens[1], line, line_no)?;
            let value = match tokens[3] {
                "l_True" => true,
                "l_False" => false,
                other => {
                    return Err(malformed(
                        line_no,
                        line,
                        format!("expected l_True or l_False, got {other:?}"),
                    ))
                }
            };
            map.insert(AnfVar(var), Relation::Fixed(value));
        }
        // "must-set-ANF-var-to-any 4"
        "must-set-ANF-var-to-any" => {
            expect_tokens(&tokens, 2, line, line_no)?;
            let var = parse_var(tokens[1], line, line_no)?;
            map.insert(AnfVar(var), Relation::Free);
        }
        // "ANF-var 3 = ANF-var 5 ^ 1"
        "ANF-var" => {
            expect_tokens(&tokens, 7, line, line_no)?;
            let var = parse_var(tokens[1], line, line_no)?;
            let source = parse_var(tokens[4], line, line_no)?;
            if tokens[5] != "^" {
                return Err(malformed(
                    line_no,
                    line,
                    format!("expected '^' separator, got {:?}", tokens[5]),
                ));
            }
            let invert = match tokens[6] {
                "0" => false,
                "1" => true,
                other => {
                    return Err(malformed(
                        line_no,
                        line,
                        format!("inversion must be 0 or 1, got {other:?}"),
                    ))
                }
            };
            map.insert(
                AnfVar(var),
                Relation::Derived {
                    source: AnfVar(source),
                    invert,
                },
            );
        }
        _ => {
            eprintln!("WARNING: map line {line_no} not understood, skipping: {line:?}");
        }
    }
    Ok(())
}

fn expect_tokens(tokens: &[&str], want: usize, line: &str, line_no: usize) -> Result<()> {
    if tokens.len() != want {
        return Err(malformed(
            line_no,
            line,
            format!("expected {} tokens, got {}", want, tokens.len()),
        ));
    }
    Ok(())
}

fn parse_var(token: &str, line: &str, line_no: usize) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| malformed(line_no, line, format!("cannot parse variable: {token:?}")))
}

fn malformed(line_no: usize, line: &str, reason: String) -> Error {
    Error::MalformedRecord {
        line_no,
        reason,
        line: line.to_owned(),
    }
}
