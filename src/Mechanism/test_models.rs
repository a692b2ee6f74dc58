//! small mechanisms shared by the tests of the crate
use super::model::{Geometry, Model, Reaction, Species, Thermo, TransportData};
use super::rates::{ChebyshevRate, FalloffFunction, ReactionRate, SimpleRate, ThirdBody};
use std::collections::BTreeMap;

pub fn thermo(a0: f64) -> Thermo {
    Thermo::nasa7(
        300.0,
        1000.0,
        5000.0,
        [a0, 1.0e-3, -2.0e-6, 3.0e-9, -1.0e-12, -1000.0, 4.0],
        [a0 + 0.5, 2.0e-4, -1.0e-7, 2.0e-11, -1.0e-15, -1200.0, 2.0],
    )
}

pub fn elementary(a: f64, b: f64, ea: f64) -> Option<ReactionRate> {
    Some(ReactionRate::Elementary {
        rate: SimpleRate::arrhenius(a, b, ea),
    })
}

/// two species A and B and the single reaction A => B
pub fn single_reaction_model(activation_energy: f64) -> Model {
    let mut model = Model::new("single");
    model.add_species(Species::new("A", &[("C", 1.0), ("H", 4.0)], thermo(3.0)));
    model.add_species(Species::new("B", &[("C", 1.0), ("H", 4.0)], thermo(3.2)));
    model.add_reaction(Reaction::from_equation(
        "A => B",
        elementary(1.0e13, 0.0, activation_energy),
    ));
    model
}

pub fn efficiencies() -> BTreeMap<String, f64> {
    BTreeMap::from([("H2O".to_string(), 12.0), ("AR".to_string(), 0.7)])
}

pub fn troe_rate() -> ReactionRate {
    ReactionRate::Falloff {
        low: SimpleRate::arrhenius(6.366e20, -1.72, 524.8),
        high: SimpleRate::arrhenius(4.65e12, 0.44, 0.0),
        falloff: FalloffFunction::troe(vec![0.5, 1.0e-30, 1.0e30]),
        third_body: ThirdBody::with_efficiencies(efficiencies()),
    }
}

pub fn plog_rate(pressures: [f64; 3]) -> ReactionRate {
    ReactionRate::Plog {
        rates: vec![
            (pressures[0], SimpleRate::arrhenius(1.23e8, 1.53, 4737.0)),
            (pressures[1], SimpleRate::arrhenius(2.72e9, 1.2, 6834.0)),
            (pressures[2], SimpleRate::arrhenius(1.26e20, -1.83, 15003.0)),
        ],
    }
}

pub fn chebyshev_rate() -> ChebyshevRate {
    let rows = vec![
        vec![8.2883, -1.1397, -0.12059, 0.016034],
        vec![1.9764, 1.0037, 0.0072865, -0.030432],
        vec![0.3177, 0.26889, 0.094806, -0.0076385],
    ];
    ChebyshevRate::from_rows((290.0, 3000.0), (1013.25, 10132500.0), &rows).unwrap()
}

/// hydrogen-like mechanism with one reaction of every rate representation
pub fn full_model() -> Model {
    let mut model = Model::new("h2-sample");
    model.add_species(
        Species::new("H2", &[("H", 2.0)], thermo(2.3))
            .with_transport(TransportData::new(Geometry::Linear, 2.92, 38.0)),
    );
    let mut o2_transport = TransportData::new(Geometry::Linear, 3.458, 107.4);
    o2_transport.polarizability = Some(1.6);
    o2_transport.rotational_relaxation = Some(3.8);
    model.add_species(Species::new("O2", &[("O", 2.0)], thermo(3.8)).with_transport(o2_transport));
    let mut h2o_transport = TransportData::new(Geometry::Nonlinear, 2.605, 572.4);
    h2o_transport.dipole = Some(1.844);
    h2o_transport.rotational_relaxation = Some(4.0);
    model.add_species(
        Species::new("H2O", &[("H", 2.0), ("O", 1.0)], thermo(4.2)).with_transport(h2o_transport),
    );
    model.add_species(Species::new("H", &[("H", 1.0)], thermo(2.5)));
    model.add_species(Species::new("O", &[("O", 1.0)], thermo(3.1)));
    model.add_species(Species::new("OH", &[("H", 1.0), ("O", 1.0)], thermo(3.9)));
    model.add_species(Species::new("HO2", &[("H", 1.0), ("O", 2.0)], thermo(4.3)));
    model.add_species(Species::new("AR", &[("Ar", 1.0)], thermo(2.5)));

    model.add_reaction(Reaction::from_equation(
        "H + O2 <=> O + OH",
        elementary(1.04e14, 0.0, 15286.0),
    ));
    model.add_reaction(Reaction::from_equation(
        "H + OH + M <=> H2O + M",
        Some(ReactionRate::ThreeBody {
            rate: SimpleRate::arrhenius(2.2e22, -2.0, 0.0),
            third_body: ThirdBody::with_efficiencies(efficiencies()),
        }),
    ));
    model.add_reaction(Reaction::from_equation("H + O2 (+M) <=> HO2 (+M)", Some(troe_rate())));
    model.add_reaction(Reaction::from_equation(
        "H2 + O <=> H + OH",
        Some(plog_rate([1013.25, 101325.0, 1013250.0])),
    ));
    model.add_reaction(Reaction::from_equation(
        "HO2 + H <=> H2 + O2",
        Some(ReactionRate::Chebyshev(chebyshev_rate())),
    ));
    model.add_reaction(
        Reaction::from_equation("2 OH <=> H2O + O", elementary(3.57e4, 2.4, -2110.0)).duplicated(),
    );
    model
}
