//! Stoichiometry from Cantera-normalized reaction equations such as
//! `2 H + O2 (+M) <=> H2O2 (+M)`: terms are separated by ` + `, a
//! coefficient is separated from the species name by whitespace, third-body
//! markers `M` and `(+M)` are not species.
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static FALLOFF_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\+\s*[^)]+\)").unwrap());
static ARROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*(?:<=>|=>|=)\s*").unwrap());
static PLUS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\+\s+").unwrap());
static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d*)?(?:[eE][-+]?\d+)?)\s+(\S+)$").unwrap());

/// parses one side of the equation into {species: coefficient}
fn parse_side(side: &str) -> BTreeMap<String, f64> {
    let mut stoichiometry = BTreeMap::new();
    for term in PLUS.split(side.trim()) {
        let term = term.trim();
        if term.is_empty() || term == "M" {
            continue;
        }
        let (coefficient, name) = match TERM.captures(term) {
            Some(cap) => (cap[1].parse::<f64>().unwrap_or(1.0), cap[2].to_string()),
            None => (1.0, term.to_string()),
        };
        *stoichiometry.entry(name).or_insert(0.0) += coefficient;
    }
    stoichiometry
}

/// returns (reactants, products); an equation without an arrow has no products
pub fn parse_equation(equation: &str) -> (BTreeMap<String, f64>, BTreeMap<String, f64>) {
    let cleaned = FALLOFF_MARKER.replace_all(equation, " ");
    let mut sides = ARROW.splitn(&cleaned, 2);
    let reactants = sides.next().map(parse_side).unwrap_or_default();
    let products = sides.next().map(parse_side).unwrap_or_default();
    (reactants, products)
}

/// true for `<=>` and `=` equations
pub fn is_reversible(equation: &str) -> bool {
    equation.contains("<=>") || (equation.contains('=') && !equation.contains("=>"))
}
