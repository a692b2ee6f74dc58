//! Native dialect: the whole mechanism as one YAML document.
//!
//! ```yaml
//! name: h2-sample
//! elements: [H, O, Ar]
//! species:
//! - name: H2
//!   composition: {H: 2.0}
//!   thermo: {model: NASA7, T-min: 300.0, T-max: 5000.0, coeffs: [...]}
//!   transport: {geometry: linear, diameter: 2.92, well-depth: 38.0}
//! reactions:
//! - equation: H + O2 <=> O + OH
//!   reactants: {H: 1.0, O2: 1.0}
//!   products: {O: 1.0, OH: 1.0}
//!   rate: {type: elementary, rate-constant: {A: 1.04e14, b: 0.0, Ea: 15286.0}}
//! ```
use super::error::MechError;
use crate::Mechanism::model::Model;

pub fn from_str(text: &str) -> Result<Model, MechError> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn to_string(model: &Model) -> Result<String, MechError> {
    Ok(serde_yaml::to_string(model)?)
}
