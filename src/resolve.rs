use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::map::{AnfMap, AnfVar, Relation};
use crate::solution::{CnfModel, SolverOutput};

/// Fully resolved assignment over the original ANF variables, in
/// map-file record order.
pub type AnfModel = IndexMap<AnfVar, bool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Unsat,
    Sat(AnfModel),
}

/// Value pinned onto don't-care variables. Either value is a valid
/// witness; a fixed choice keeps the output deterministic.
pub const FREE_DEFAULT: bool = true;

/// Resolves every ANF variable in `map` against the solver's model, or
/// propagates unsatisfiability.
///
/// Runs two phases: forced values first (`Fixed`, `Direct`, and any
/// `Derived` chain they unlock), then don't-care closure, where each
/// still-unresolved `Free` variable is pinned to [`FREE_DEFAULT`] and
/// propagation re-runs in case a `Derived` chain hangs off it. Any
/// variable left over after both phases points at a CNF variable the
/// model never assigned, a chain whose root never resolves, or a true
/// relation cycle.
pub fn resolve(map: &AnfMap, output: &SolverOutput) -> Result<Resolution> {
    let model = match output {
        SolverOutput::Unsat => return Ok(Resolution::Unsat),
        SolverOutput::Sat(model) => model,
    };

    let mut resolved = AnfModel::with_capacity(map.len());
    propagate(map, model, &mut resolved);

    for (&var, relation) in map {
        if matches!(relation, Relation::Free) && !resolved.contains_key(&var) {
            resolved.insert(var, FREE_DEFAULT);
            propagate(map, model, &mut resolved);
        }
    }

    if resolved.len() < map.len() {
        let vars = map
            .keys()
            .filter(|var| !resolved.contains_key(*var))
            .map(|var| var.0)
            .collect();
        return Err(Error::DanglingReference { vars });
    }

    // Propagation settles values in dependency order; report them in
    // map-file record order instead.
    let ordered = map.keys().map(|&var| (var, resolved[&var])).collect();
    Ok(Resolution::Sat(ordered))
}

/// Rescans the unresolved set until a full scan makes no progress.
/// Every productive scan resolves at least one variable, so at most
/// `map.len()` scans run; a scan with zero progress is the fixpoint.
fn propagate(map: &AnfMap, model: &CnfModel, resolved: &mut AnfModel) {
    loop {
        let mut progressed = false;
        for (&var, relation) in map {
            if resolved.contains_key(&var) {
                continue;
            }
            let value = match *relation {
                Relation::Fixed(value) => Some(value),
                Relation::Direct(cnf_var) => model.get(&cnf_var).copied(),
                Relation::Derived { source, invert } => {
                    resolved.get(&source).map(|&v| v ^ invert)
                }
                Relation::Free => None,
            };
            if let Some(value) = value {
                resolved.insert(var, value);
                progressed = true;
            }
        }
        if !progressed {
            return;
        }
    }
}
