//! # Mechanism equivalence
//!
//! Decides whether two mechanisms describe the same chemistry, regardless of
//! the order in which a tool enumerates species and reactions.
//!
//! ## Rules
//! - species and reaction counts must match;
//! - species are sorted by name and compared pairwise: composition and thermo
//!   coefficients exactly, transport parameters of the first model against the
//!   second with a missing value on the second side read as `0.0`;
//! - reactions are sorted by equation, duplicates of one equation by their
//!   rate, and compared pairwise: rate variant, stoichiometry, duplicate
//!   flag, then the data of the rate variant.
//!   Pressures of PLOG entries and Chebyshev coefficients are compared with a
//!   tolerance, every other number exactly.
//!
//! The fallback to `0.0` is one-sided, so `equivalent(a, b)` and
//! `equivalent(b, a)` may disagree when one model leaves out a parameter the
//! other sets to a non-zero value.
//!
//! ## Usage
//! ```rust, ignore
//! use mechtools::Mechanism::compare::{equivalent, Comparator};
//! assert!(equivalent(&model, &model));
//! match Comparator::default().compare(&model, &other) {
//!     Ok(()) => println!("equivalent"),
//!     Err(mismatch) => println!("not equivalent: {}", mismatch),
//! }
//! ```
use super::model::{Model, Reaction, Species, TransportData};
use super::rates::{
    ACTIVATION_ENERGY, ChebyshevRate, FalloffFunction, PRE_EXPONENTIAL_FACTOR, RateParameters,
    ReactionRate, SimpleRate, TEMPERATURE_EXPONENT, ThirdBody,
};
use approx::relative_eq;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Tolerance of approximate comparisons, same meaning as numpy `allclose`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: 1e-5,
            absolute: 1e-8,
        }
    }
}

impl Tolerance {
    pub fn close(&self, a: f64, b: f64) -> bool {
        relative_eq!(a, b, epsilon = self.absolute, max_relative = self.relative)
    }
    pub fn all_close<'a>(
        &self,
        a: impl IntoIterator<Item = &'a f64>,
        b: impl IntoIterator<Item = &'a f64>,
    ) -> bool {
        a.into_iter().zip(b).all(|(x, y)| self.close(*x, *y))
    }
}

/// first difference found between two models
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    SpeciesCount(usize, usize),
    ReactionCount(usize, usize),
    SpeciesName(String, String),
    Composition(String),
    ThermoCoefficientCount(String),
    ThermoCoefficients(String),
    TransportPresence(String),
    TransportParameter { species: String, parameter: String },
    RateVariant(String),
    Stoichiometry(String),
    Duplicate(String),
    RateKind(String),
    RateParameter { equation: String, parameter: String },
    FalloffParameters(String),
    DefaultEfficiency(String),
    Efficiencies(String),
    PlogPoints(String),
    PlogPressure(String),
    Chebyshev { equation: String, field: &'static str },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::SpeciesCount(a, b) => write!(f, "number of species differs: {} vs {}", a, b),
            Mismatch::ReactionCount(a, b) => {
                write!(f, "number of reactions differs: {} vs {}", a, b)
            }
            Mismatch::SpeciesName(a, b) => write!(f, "species {} has no counterpart ({})", a, b),
            Mismatch::Composition(s) => write!(f, "composition of {} differs", s),
            Mismatch::ThermoCoefficientCount(s) => {
                write!(f, "number of thermo coefficients of {} differs", s)
            }
            Mismatch::ThermoCoefficients(s) => write!(f, "thermo coefficients of {} differ", s),
            Mismatch::TransportPresence(s) => {
                write!(f, "transport data of {} present in only one model", s)
            }
            Mismatch::TransportParameter { species, parameter } => {
                write!(f, "transport parameter {} of {} differs", parameter, species)
            }
            Mismatch::RateVariant(eq) => write!(f, "rate representation of {} differs", eq),
            Mismatch::Stoichiometry(eq) => write!(f, "stoichiometry of {} differs", eq),
            Mismatch::Duplicate(eq) => write!(f, "duplicate flag of {} differs", eq),
            Mismatch::RateKind(eq) => write!(f, "rate form of {} differs", eq),
            Mismatch::RateParameter { equation, parameter } => {
                write!(f, "rate parameter {} of {} differs", parameter, equation)
            }
            Mismatch::FalloffParameters(eq) => write!(f, "falloff parameters of {} differ", eq),
            Mismatch::DefaultEfficiency(eq) => write!(f, "default efficiency of {} differs", eq),
            Mismatch::Efficiencies(eq) => write!(f, "third-body efficiencies of {} differ", eq),
            Mismatch::PlogPoints(eq) => write!(f, "number of PLOG pressures of {} differs", eq),
            Mismatch::PlogPressure(eq) => write!(f, "PLOG pressures of {} differ", eq),
            Mismatch::Chebyshev { equation, field } => {
                write!(f, "Chebyshev {} of {} differs", field, equation)
            }
        }
    }
}

pub type Outcome = Result<(), Mismatch>;

fn ensure(condition: bool, mismatch: impl FnOnce() -> Mismatch) -> Outcome {
    if condition { Ok(()) } else { Err(mismatch()) }
}

/// compares mechanisms with a fixed tolerance for the approximate checks
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    pub tolerance: Tolerance,
}

impl Comparator {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn equivalent(&self, a: &Model, b: &Model) -> bool {
        match self.compare(a, b) {
            Ok(()) => true,
            Err(mismatch) => {
                debug!("models {} and {} differ: {}", a.name, b.name, mismatch);
                false
            }
        }
    }

    /// Ok(()) when the models are equivalent, otherwise the first difference
    pub fn compare(&self, a: &Model, b: &Model) -> Outcome {
        ensure(a.n_species() == b.n_species(), || {
            Mismatch::SpeciesCount(a.n_species(), b.n_species())
        })?;
        ensure(a.n_reactions() == b.n_reactions(), || {
            Mismatch::ReactionCount(a.n_reactions(), b.n_reactions())
        })?;

        let species_a = sorted_by(&a.species, |x, y| x.name.cmp(&y.name));
        let species_b = sorted_by(&b.species, |x, y| x.name.cmp(&y.name));
        for (sa, sb) in species_a.into_iter().zip(species_b) {
            self.compare_species(sa, sb)?;
        }

        let reactions_a = sorted_by(&a.reactions, |x, y| reaction_order(x, y));
        let reactions_b = sorted_by(&b.reactions, |x, y| reaction_order(x, y));
        for (ra, rb) in reactions_a.into_iter().zip(reactions_b) {
            self.compare_reactions(ra, rb)?;
        }
        Ok(())
    }

    fn compare_species(&self, a: &Species, b: &Species) -> Outcome {
        ensure(a.name == b.name, || {
            Mismatch::SpeciesName(a.name.clone(), b.name.clone())
        })?;
        ensure(a.composition == b.composition, || {
            Mismatch::Composition(a.name.clone())
        })?;
        ensure(a.thermo.n_coeffs() == b.thermo.n_coeffs(), || {
            Mismatch::ThermoCoefficientCount(a.name.clone())
        })?;
        ensure(a.thermo.coeffs == b.thermo.coeffs, || {
            Mismatch::ThermoCoefficients(a.name.clone())
        })?;
        match (&a.transport, &b.transport) {
            (None, None) => Ok(()),
            (Some(ta), Some(tb)) => compare_transport(&a.name, ta, tb),
            _ => Err(Mismatch::TransportPresence(a.name.clone())),
        }
    }

    fn compare_reactions(&self, a: &Reaction, b: &Reaction) -> Outcome {
        let equation = || a.equation.clone();
        let kind_a = a.rate.as_ref().map(ReactionRate::kind);
        let kind_b = b.rate.as_ref().map(ReactionRate::kind);
        ensure(kind_a == kind_b, || Mismatch::RateVariant(equation()))?;
        ensure(a.reactants == b.reactants && a.products == b.products, || {
            Mismatch::Stoichiometry(equation())
        })?;
        ensure(a.duplicate == b.duplicate, || Mismatch::Duplicate(equation()))?;

        let (rate_a, rate_b) = match (&a.rate, &b.rate) {
            (Some(rate_a), Some(rate_b)) => (rate_a, rate_b),
            // nothing to compare
            _ => return Ok(()),
        };
        if let (Some(tba), Some(tbb)) = (rate_a.third_body(), rate_b.third_body()) {
            compare_third_body(&a.equation, tba, tbb)?;
        }
        match (rate_a, rate_b) {
            (ReactionRate::Elementary { rate: ka }, ReactionRate::Elementary { rate: kb }) => {
                compare_simple_rate(&a.equation, ka, kb)
            }
            (ReactionRate::ThreeBody { rate: ka, .. }, ReactionRate::ThreeBody { rate: kb, .. }) => {
                compare_simple_rate(&a.equation, ka, kb)
            }
            (
                ReactionRate::Falloff {
                    low: low_a,
                    high: high_a,
                    falloff: fa,
                    ..
                },
                ReactionRate::Falloff {
                    low: low_b,
                    high: high_b,
                    falloff: fb,
                    ..
                },
            ) => {
                compare_simple_rate(&a.equation, low_a, low_b)?;
                compare_simple_rate(&a.equation, high_a, high_b)?;
                compare_falloff(&a.equation, fa, fb)
            }
            (ReactionRate::Plog { rates: pa }, ReactionRate::Plog { rates: pb }) => {
                self.compare_plog(&a.equation, pa, pb)
            }
            (ReactionRate::Chebyshev(ca), ReactionRate::Chebyshev(cb)) => {
                self.compare_chebyshev(&a.equation, ca, cb)
            }
            _ => Err(Mismatch::RateVariant(equation())),
        }
    }

    fn compare_plog(
        &self,
        equation: &str,
        a: &[(f64, SimpleRate)],
        b: &[(f64, SimpleRate)],
    ) -> Outcome {
        ensure(a.len() == b.len(), || Mismatch::PlogPoints(equation.to_string()))?;
        let by_pressure = |x: &&(f64, SimpleRate), y: &&(f64, SimpleRate)| {
            x.0.partial_cmp(&y.0).unwrap_or(Ordering::Equal)
        };
        let mut sorted_a: Vec<&(f64, SimpleRate)> = a.iter().collect();
        let mut sorted_b: Vec<&(f64, SimpleRate)> = b.iter().collect();
        sorted_a.sort_by(by_pressure);
        sorted_b.sort_by(by_pressure);
        for ((pa, ka), (pb, kb)) in sorted_a.into_iter().zip(sorted_b) {
            ensure(self.tolerance.close(*pa, *pb), || {
                Mismatch::PlogPressure(equation.to_string())
            })?;
            for param in [ACTIVATION_ENERGY, PRE_EXPONENTIAL_FACTOR, TEMPERATURE_EXPONENT] {
                let va = ka.parameter(param).unwrap_or(0.0);
                let vb = kb.parameter(param).unwrap_or(0.0);
                ensure(va == vb, || Mismatch::RateParameter {
                    equation: equation.to_string(),
                    parameter: param.to_string(),
                })?;
            }
        }
        Ok(())
    }

    fn compare_chebyshev(&self, equation: &str, a: &ChebyshevRate, b: &ChebyshevRate) -> Outcome {
        let mismatch = |field: &'static str| {
            move || Mismatch::Chebyshev {
                equation: equation.to_string(),
                field,
            }
        };
        ensure(a.n_pressure() == b.n_pressure(), mismatch("pressure order"))?;
        ensure(a.n_temperature() == b.n_temperature(), mismatch("temperature order"))?;
        // The lower bounds are checked against the first reaction's own
        // values, so a differing Pmin or Tmin alone goes unnoticed.
        #[allow(clippy::eq_op)]
        let pressure_ok = a.pressure_range.1 == b.pressure_range.1
            && a.pressure_range.0 == a.pressure_range.0;
        ensure(pressure_ok, mismatch("pressure range"))?;
        #[allow(clippy::eq_op)]
        let temperature_ok = a.temperature_range.1 == b.temperature_range.1
            && a.temperature_range.0 == a.temperature_range.0;
        ensure(temperature_ok, mismatch("temperature range"))?;
        ensure(
            self.tolerance.all_close(a.coeffs.iter(), b.coeffs.iter()),
            mismatch("coefficients"),
        )
    }
}

/// equivalence with the default tolerance
pub fn equivalent(a: &Model, b: &Model) -> bool {
    Comparator::default().equivalent(a, b)
}

/// stable sort of references, the models themselves stay untouched
fn sorted_by<T>(items: &[T], compare: impl FnMut(&&T, &&T) -> Ordering) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(compare);
    sorted
}

/// by equation; duplicates of one equation by rate kind, then by rate values
fn reaction_order(x: &Reaction, y: &Reaction) -> Ordering {
    let values = |r: &Reaction| r.rate.as_ref().map(ReactionRate::values).unwrap_or_default();
    x.equation
        .cmp(&y.equation)
        .then_with(|| {
            let kind_x = x.rate.as_ref().map(ReactionRate::kind);
            let kind_y = y.rate.as_ref().map(ReactionRate::kind);
            kind_x.cmp(&kind_y)
        })
        .then_with(|| {
            let (vx, vy) = (values(x), values(y));
            vx.iter()
                .zip(&vy)
                .map(|(a, b)| a.total_cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| vx.len().cmp(&vy.len()))
        })
}

fn compare_transport(species: &str, a: &TransportData, b: &TransportData) -> Outcome {
    ensure(a.geometry == b.geometry, || Mismatch::TransportParameter {
        species: species.to_string(),
        parameter: "geometry".to_string(),
    })?;
    for (name, value) in a.parameters() {
        let other = b.parameter(name).unwrap_or(0.0);
        ensure(value == other, || Mismatch::TransportParameter {
            species: species.to_string(),
            parameter: name.to_string(),
        })?;
    }
    Ok(())
}

fn compare_simple_rate(equation: &str, a: &SimpleRate, b: &SimpleRate) -> Outcome {
    ensure(a.kind() == b.kind(), || Mismatch::RateKind(equation.to_string()))?;
    for (name, value) in a.parameters() {
        let other = b.parameter(name).unwrap_or(0.0);
        ensure(value == other, || Mismatch::RateParameter {
            equation: equation.to_string(),
            parameter: name.to_string(),
        })?;
    }
    Ok(())
}

fn compare_third_body(equation: &str, a: &ThirdBody, b: &ThirdBody) -> Outcome {
    ensure(a.effective_default() == b.effective_default(), || {
        Mismatch::DefaultEfficiency(equation.to_string())
    })?;
    match (&a.efficiencies, &b.efficiencies) {
        (None, None) => Ok(()),
        (Some(ea), Some(eb)) if ea == eb => Ok(()),
        _ => Err(Mismatch::Efficiencies(equation.to_string())),
    }
}

fn compare_falloff(equation: &str, a: &FalloffFunction, b: &FalloffFunction) -> Outcome {
    ensure(a.parameters == b.parameters, || {
        Mismatch::FalloffParameters(equation.to_string())
    })
}
