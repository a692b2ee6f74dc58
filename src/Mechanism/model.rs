//! In-memory mechanism: species with thermodynamic and transport data and
//! reactions with their rate representation.
use super::equation::parse_equation;
use super::rates::ReactionRate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// functional form of the thermodynamic polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermoModel {
    NASA7,
    NASA9,
    #[serde(rename = "constant-cp")]
    ConstantCp,
    Shomate,
}

/// Thermodynamic data of a species.
/// `coeffs` is the flat coefficient vector; for NASA7 it reads
/// `[T_mid, a_high[0..7], a_low[0..7]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thermo {
    pub model: ThermoModel,
    #[serde(rename = "T-min")]
    pub min_temp: f64,
    #[serde(rename = "T-max")]
    pub max_temp: f64,
    #[serde(rename = "reference-pressure", default = "one_atmosphere")]
    pub reference_pressure: f64,
    pub coeffs: Vec<f64>,
}

fn one_atmosphere() -> f64 {
    101325.0
}

impl Thermo {
    pub fn nasa7(t_low: f64, t_mid: f64, t_high: f64, low: [f64; 7], high: [f64; 7]) -> Self {
        let mut coeffs = Vec::with_capacity(15);
        coeffs.push(t_mid);
        coeffs.extend_from_slice(&high);
        coeffs.extend_from_slice(&low);
        Self {
            model: ThermoModel::NASA7,
            min_temp: t_low,
            max_temp: t_high,
            reference_pressure: one_atmosphere(),
            coeffs,
        }
    }
    pub fn n_coeffs(&self) -> usize {
        self.coeffs.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Atom,
    Linear,
    Nonlinear,
}

/// Lennard-Jones transport parameters of a gas species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransportData {
    pub geometry: Geometry,
    /// Angstrom
    pub diameter: f64,
    /// K
    pub well_depth: f64,
    /// Debye
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dipole: Option<f64>,
    /// Angstrom^3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarizability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotational_relaxation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acentric_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispersion_coefficient: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrupole_polarizability: Option<f64>,
}

impl TransportData {
    pub fn new(geometry: Geometry, diameter: f64, well_depth: f64) -> Self {
        Self {
            geometry,
            diameter,
            well_depth,
            dipole: None,
            polarizability: None,
            rotational_relaxation: None,
            acentric_factor: None,
            dispersion_coefficient: None,
            quadrupole_polarizability: None,
        }
    }
    /// numeric parameters that are actually set, by name
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        let optional = [
            ("dipole", self.dipole),
            ("polarizability", self.polarizability),
            ("rotational_relaxation", self.rotational_relaxation),
            ("acentric_factor", self.acentric_factor),
            ("dispersion_coefficient", self.dispersion_coefficient),
            ("quadrupole_polarizability", self.quadrupole_polarizability),
        ];
        let mut params = vec![("diameter", self.diameter), ("well_depth", self.well_depth)];
        params.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v))),
        );
        params
    }
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub composition: BTreeMap<String, f64>,
    pub thermo: Thermo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportData>,
}

impl Species {
    pub fn new(name: &str, composition: &[(&str, f64)], thermo: Thermo) -> Self {
        Self {
            name: name.to_string(),
            composition: composition
                .iter()
                .map(|(element, count)| (element.to_string(), *count))
                .collect(),
            thermo,
            transport: None,
        }
    }
    pub fn with_transport(mut self, transport: TransportData) -> Self {
        self.transport = Some(transport);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub equation: String,
    pub reactants: BTreeMap<String, f64>,
    pub products: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub duplicate: bool,
    /// None when the reaction has no recognized rate representation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<ReactionRate>,
}

impl Reaction {
    /// builds a reaction whose stoichiometry is read from the equation
    pub fn from_equation(equation: &str, rate: Option<ReactionRate>) -> Self {
        let (reactants, products) = parse_equation(equation);
        Self {
            equation: equation.to_string(),
            reactants,
            products,
            duplicate: false,
            rate,
        }
    }
    pub fn duplicated(mut self) -> Self {
        self.duplicate = true;
        self
    }
}

/// chemical mechanism: elements, species and reactions of one phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<String>,
    pub species: Vec<Species>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Model {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            elements: Vec::new(),
            species: Vec::new(),
            reactions: Vec::new(),
        }
    }
    pub fn n_species(&self) -> usize {
        self.species.len()
    }
    pub fn n_reactions(&self) -> usize {
        self.reactions.len()
    }
    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }
    /// adds a species and registers its elements in order of appearance
    pub fn add_species(&mut self, species: Species) {
        for element in species.composition.keys() {
            if !self.elements.contains(element) {
                self.elements.push(element.clone());
            }
        }
        self.species.push(species);
    }
    pub fn add_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thermo() -> Thermo {
        Thermo::nasa7(300.0, 1000.0, 5000.0, [1.0; 7], [2.0; 7])
    }

    #[test]
    fn test_nasa7_layout() {
        let t = thermo();
        assert_eq!(t.n_coeffs(), 15);
        assert_eq!(t.coeffs[0], 1000.0);
        assert_eq!(t.coeffs[1], 2.0);
        assert_eq!(t.coeffs[14], 1.0);
    }

    #[test]
    fn test_transport_parameters_skip_unset_values() {
        let mut tr = TransportData::new(Geometry::Linear, 3.6, 97.5);
        assert_eq!(tr.parameters().len(), 2);
        tr.polarizability = Some(1.76);
        assert_eq!(tr.parameter("polarizability"), Some(1.76));
        assert_eq!(tr.parameter("dipole"), None);
    }

    #[test]
    fn test_add_species_collects_elements() {
        let mut model = Model::new("test");
        model.add_species(Species::new("H2O", &[("H", 2.0), ("O", 1.0)], thermo()));
        model.add_species(Species::new("O2", &[("O", 2.0)], thermo()));
        assert_eq!(model.elements, vec!["H".to_string(), "O".to_string()]);
        assert_eq!(model.n_species(), 2);
        assert!(model.species("O2").is_some());
        assert!(model.species("N2").is_none());
    }

    #[test]
    fn test_reaction_from_equation() {
        let r = Reaction::from_equation("2 H + O2 <=> H2O2", None);
        assert_eq!(r.reactants.get("H"), Some(&2.0));
        assert_eq!(r.reactants.get("O2"), Some(&1.0));
        assert_eq!(r.products.get("H2O2"), Some(&1.0));
        assert!(!r.duplicate);
        assert!(r.duplicated().duplicate);
    }
}
