/// equivalence of two mechanisms: sorted species and reactions are compared
/// pairwise, thermo and stoichiometry exactly, PLOG pressures and Chebyshev
/// coefficients with a tolerance
///
/// # Examples
/// ```
/// use mechtools::Mechanism::compare::equivalent;
/// use mechtools::Mechanism::model::{Model, Reaction, Species, Thermo};
/// use mechtools::Mechanism::rates::{ReactionRate, SimpleRate};
/// let mut model = Model::new("toy");
/// let thermo = Thermo::nasa7(300.0, 1000.0, 5000.0, [3.5; 7], [3.0; 7]);
/// model.add_species(Species::new("A", &[("C", 1.0)], thermo.clone()));
/// model.add_species(Species::new("B", &[("C", 1.0)], thermo));
/// let rate = ReactionRate::Elementary { rate: SimpleRate::arrhenius(1.0e13, 0.0, 50000.0) };
/// model.add_reaction(Reaction::from_equation("A => B", Some(rate)));
/// assert!(equivalent(&model, &model.clone()));
/// ```
pub mod compare;
/// stoichiometry of Cantera-normalized reaction equations
pub mod equation;
/// species, thermo, transport and reaction types of a mechanism
pub mod model;
/// rate representations: Arrhenius-like forms, three-body, falloff, PLOG, Chebyshev
pub mod rates;

#[cfg(test)]
pub(crate) mod test_models;
#[cfg(test)]
mod compare_tests;
