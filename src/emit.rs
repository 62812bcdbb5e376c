use crate::resolve::{AnfModel, Resolution};

/// Renders the resolution in the ANF output convention: variables are
/// 0-based, a term `x(n)` means false and `1+x(n)` means true.
pub fn render(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Unsat => "s ANF-UNSATISFIABLE\n".to_owned(),
        Resolution::Sat(model) => render_sat(model),
    }
}

fn render_sat(model: &AnfModel) -> String {
    let mut out = String::new();
    out.push_str("c solution below, with variables starting at 0, as per ANF convention.\n");
    out.push_str("s ANF-SATISFIABLE\n");
    out.push('v');
    for (var, &value) in model {
        if value {
            out.push_str(&format!(" 1+x({var})"));
        } else {
            out.push_str(&format!(" x({var})"));
        }
    }
    out.push('\n');
    out
}
