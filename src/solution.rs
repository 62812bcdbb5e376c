use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::map::CnfVar;

/// Model of the transformed CNF system, possibly partial.
pub type CnfModel = IndexMap<CnfVar, bool>;

/// What the external CNF solver reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverOutput {
    Unsat,
    Sat(CnfModel),
}

/// Parses DIMACS-style solver output.
///
/// `s UNSATISFIABLE` short-circuits the whole file. Value lines carry a
/// `v` token followed by signed 1-based literals, `0` terminating the
/// line; internally variables are 0-based.
pub fn parse_solution(s: &str) -> Result<SolverOutput> {
    let mut model = CnfModel::new();
    let mut sat_marker = false;
    let mut values_seen = false;

    for line in s.lines() {
        let line = line.trim();
        if line == "s UNSATISFIABLE" {
            return Ok(SolverOutput::Unsat);
        }
        if line == "s SATISFIABLE" {
            sat_marker = true;
            continue;
        }

        let mut in_values = false;
        for token in line.split_whitespace() {
            if !in_values {
                if token == "v" {
                    in_values = true;
                    values_seen = true;
                }
                continue;
            }
            let lit = token.parse::<i32>().map_err(|_| Error::NonIntegerToken {
                token: token.to_owned(),
            })?;
            if lit == 0 {
                break;
            }
            let external = lit.unsigned_abs();
            if model.insert(CnfVar(external - 1), lit > 0).is_some() {
                return Err(Error::DuplicateVariable { var: external });
            }
        }
    }

    if !values_seen {
        return Err(Error::NoSolutionMarker {
            reason: "no v-line in solver output".to_owned(),
        });
    }
    if !sat_marker {
        return Err(Error::NoSolutionMarker {
            reason: "output says neither SATISFIABLE nor UNSATISFIABLE".to_owned(),
        });
    }
    Ok(SolverOutput::Sat(model))
}
