#[cfg(test)]
mod tests {
    use crate::Mechanism::compare::{Comparator, Mismatch, Tolerance, equivalent};
    use crate::Mechanism::model::{Model, Reaction, Species};
    use crate::Mechanism::rates::{
        BlowersMaselRate, FalloffFunction, ReactionRate, SimpleRate, ThirdBody,
    };
    use crate::Mechanism::test_models::{
        chebyshev_rate, elementary, full_model, plog_rate, single_reaction_model, thermo,
        troe_rate,
    };

    fn reaction_mut<'a>(model: &'a mut Model, equation: &str) -> &'a mut Reaction {
        model
            .reactions
            .iter_mut()
            .find(|r| r.equation == equation)
            .unwrap()
    }

    fn species_mut<'a>(model: &'a mut Model, name: &str) -> &'a mut Species {
        model.species.iter_mut().find(|s| s.name == name).unwrap()
    }

    /// replaces the rate of a reaction in a copy of the full model
    fn with_rate(equation: &str, rate: Option<ReactionRate>) -> Model {
        let mut model = full_model();
        reaction_mut(&mut model, equation).rate = rate;
        model
    }

    #[test]
    fn test_model_is_equivalent_to_itself() {
        let model = full_model();
        assert!(equivalent(&model, &model));
        assert!(equivalent(&model, &model.clone()));
        let single = single_reaction_model(50000.0);
        assert!(equivalent(&single, &single));
    }

    #[test]
    fn test_activation_energy_example() {
        let a = single_reaction_model(50000.0);
        let b = single_reaction_model(50000.0);
        assert!(equivalent(&a, &b));
        let c = single_reaction_model(50001.0);
        assert!(!equivalent(&a, &c));
        assert_eq!(
            Comparator::default().compare(&a, &c),
            Err(Mismatch::RateParameter {
                equation: "A => B".to_string(),
                parameter: "activation_energy".to_string()
            })
        );
    }

    #[test]
    fn test_different_counts_are_never_equivalent() {
        let model = full_model();
        let mut fewer_species = full_model();
        fewer_species.species.pop();
        assert_eq!(
            Comparator::default().compare(&model, &fewer_species),
            Err(Mismatch::SpeciesCount(8, 7))
        );
        let mut fewer_reactions = full_model();
        fewer_reactions.reactions.remove(0);
        assert!(!equivalent(&model, &fewer_reactions));
        assert!(!equivalent(&fewer_reactions, &model));
        // same species, but an extra reaction that copies an existing one
        let mut extra = full_model();
        let copy = extra.reactions[0].clone();
        extra.add_reaction(copy);
        assert_eq!(
            Comparator::default().compare(&model, &extra),
            Err(Mismatch::ReactionCount(6, 7))
        );
    }

    #[test]
    fn test_order_of_species_and_reactions_does_not_matter() {
        let reference = full_model();
        let mut reversed = full_model();
        reversed.species.reverse();
        reversed.reactions.reverse();
        assert!(equivalent(&reference, &reversed));
        assert!(equivalent(&reversed, &reference));

        let mut rotated = full_model();
        rotated.species.rotate_left(3);
        rotated.reactions.rotate_left(2);
        assert!(equivalent(&reference, &rotated));

        // permuting does not hide a real difference
        let mut changed = rotated.clone();
        species_mut(&mut changed, "OH").thermo.coeffs[3] += 1.0;
        assert!(!equivalent(&reference, &changed));
    }

    /// full model where "H + O2 <=> O + OH" is a duplicate pair
    fn with_duplicate_pair(second_ea: f64) -> Model {
        let eq = "H + O2 <=> O + OH";
        let mut model = full_model();
        reaction_mut(&mut model, eq).duplicate = true;
        model.add_reaction(
            Reaction::from_equation(eq, elementary(5.0e13, 0.0, second_ea)).duplicated(),
        );
        model
    }

    #[test]
    fn test_order_of_duplicate_reactions_does_not_matter() {
        let reference = with_duplicate_pair(8000.0);
        let mut reversed = with_duplicate_pair(8000.0);
        reversed.reactions.reverse();
        assert!(equivalent(&reference, &reversed));
        assert!(equivalent(&reversed, &reference));

        let mut swapped = with_duplicate_pair(8000.0);
        let last = swapped.n_reactions() - 1;
        swapped.reactions.swap(0, last);
        assert!(equivalent(&reference, &swapped));

        // the second duplicate really is compared
        let mut changed = with_duplicate_pair(8001.0);
        changed.reactions.reverse();
        assert!(!equivalent(&reference, &changed));
    }

    #[test]
    fn test_missing_transport_parameter_is_read_as_zero_on_one_side_only() {
        let a = full_model();
        let mut b = full_model();
        species_mut(&mut b, "H2O").transport.as_mut().unwrap().dipole = None;
        // A sets a non-zero dipole that B leaves out
        assert!(!equivalent(&a, &b));
        assert_eq!(
            Comparator::default().compare(&a, &b),
            Err(Mismatch::TransportParameter {
                species: "H2O".to_string(),
                parameter: "dipole".to_string()
            })
        );
        // B's parameters are all found in A, so the reverse passes
        assert!(equivalent(&b, &a));
    }

    #[test]
    fn test_zero_transport_parameter_matches_missing_one() {
        let mut a = full_model();
        species_mut(&mut a, "H2").transport.as_mut().unwrap().acentric_factor = Some(0.0);
        let b = full_model();
        assert!(equivalent(&a, &b));
        assert!(equivalent(&b, &a));
    }

    #[test]
    fn test_transport_on_one_side_only() {
        let a = full_model();
        let mut b = full_model();
        species_mut(&mut b, "H2").transport = None;
        assert!(!equivalent(&a, &b));
        assert!(!equivalent(&b, &a));
        let mut c = full_model();
        species_mut(&mut c, "O2").transport.as_mut().unwrap().geometry =
            crate::Mechanism::model::Geometry::Nonlinear;
        assert!(!equivalent(&a, &c));
    }

    #[test]
    fn test_species_data_is_compared_exactly() {
        let a = full_model();
        let mut b = full_model();
        species_mut(&mut b, "H2").thermo.coeffs[1] *= 1.0 + 1e-12;
        assert_eq!(
            Comparator::default().compare(&a, &b),
            Err(Mismatch::ThermoCoefficients("H2".to_string()))
        );
        let mut c = full_model();
        species_mut(&mut c, "H2").thermo.coeffs.pop();
        assert_eq!(
            Comparator::default().compare(&a, &c),
            Err(Mismatch::ThermoCoefficientCount("H2".to_string()))
        );
        let mut d = full_model();
        species_mut(&mut d, "HO2")
            .composition
            .insert("O".to_string(), 3.0);
        assert_eq!(
            Comparator::default().compare(&a, &d),
            Err(Mismatch::Composition("HO2".to_string()))
        );
    }

    #[test]
    fn test_renamed_species_is_a_mismatch() {
        let a = single_reaction_model(50000.0);
        let mut b = single_reaction_model(50000.0);
        b.species[1] = Species::new("C", &[("C", 1.0), ("H", 4.0)], thermo(3.2));
        assert!(matches!(
            Comparator::default().compare(&a, &b),
            Err(Mismatch::SpeciesName(_, _))
        ));
    }

    #[test]
    fn test_falloff_never_matches_plog() {
        let eq = "H + O2 (+M) <=> HO2 (+M)";
        let falloff = full_model();
        let plog = with_rate(eq, Some(plog_rate([1013.25, 101325.0, 1013250.0])));
        assert_eq!(
            Comparator::default().compare(&falloff, &plog),
            Err(Mismatch::RateVariant(eq.to_string()))
        );
        assert!(!equivalent(&plog, &falloff));
    }

    #[test]
    fn test_three_body_never_matches_elementary() {
        let eq = "H + OH + M <=> H2O + M";
        let elementary_rate = with_rate(eq, elementary(2.2e22, -2.0, 0.0));
        assert!(!equivalent(&full_model(), &elementary_rate));
    }

    #[test]
    fn test_reactions_without_rate() {
        let eq = "H + O2 <=> O + OH";
        let a = with_rate(eq, None);
        let b = with_rate(eq, None);
        assert!(equivalent(&a, &b));
        assert!(!equivalent(&a, &full_model()));
        assert!(!equivalent(&full_model(), &a));
    }

    #[test]
    fn test_stoichiometry_and_duplicate_flag() {
        let a = full_model();
        let mut b = full_model();
        reaction_mut(&mut b, "H + O2 <=> O + OH")
            .products
            .insert("O".to_string(), 2.0);
        assert_eq!(
            Comparator::default().compare(&a, &b),
            Err(Mismatch::Stoichiometry("H + O2 <=> O + OH".to_string()))
        );
        let mut c = full_model();
        reaction_mut(&mut c, "2 OH <=> H2O + O").duplicate = false;
        assert_eq!(
            Comparator::default().compare(&a, &c),
            Err(Mismatch::Duplicate("2 OH <=> H2O + O".to_string()))
        );
    }

    #[test]
    fn test_rate_forms_must_agree() {
        let eq = "H + O2 <=> O + OH";
        let blowers = with_rate(
            eq,
            Some(ReactionRate::Elementary {
                rate: SimpleRate::BlowersMasel(BlowersMaselRate {
                    pre_exponential_factor: 1.04e14,
                    temperature_exponent: 0.0,
                    intrinsic_activation_energy: 15286.0,
                    bond_energy: 4.0e5,
                }),
            }),
        );
        assert_eq!(
            Comparator::default().compare(&full_model(), &blowers),
            Err(Mismatch::RateKind(eq.to_string()))
        );
    }

    #[test]
    fn test_falloff_limits_and_parameters() {
        let eq = "H + O2 (+M) <=> HO2 (+M)";
        let reference = full_model();

        let mut high_changed = troe_rate();
        if let ReactionRate::Falloff { high, .. } = &mut high_changed {
            *high = SimpleRate::arrhenius(4.65e12, 0.44, 1.0);
        }
        assert!(!equivalent(&reference, &with_rate(eq, Some(high_changed))));

        let mut low_changed = troe_rate();
        if let ReactionRate::Falloff { low, .. } = &mut low_changed {
            *low = SimpleRate::arrhenius(6.0e20, -1.72, 524.8);
        }
        assert!(!equivalent(&reference, &with_rate(eq, Some(low_changed))));

        // three Troe parameters against four
        let mut longer = troe_rate();
        if let ReactionRate::Falloff { falloff, .. } = &mut longer {
            *falloff = FalloffFunction::troe(vec![0.5, 1.0e-30, 1.0e30, 1.0e30]);
        }
        assert_eq!(
            Comparator::default().compare(&reference, &with_rate(eq, Some(longer))),
            Err(Mismatch::FalloffParameters(eq.to_string()))
        );
    }

    #[test]
    fn test_default_efficiency_falls_back_to_one() {
        let eq = "H + O2 (+M) <=> HO2 (+M)";
        let reference = full_model();
        let mut explicit_one = troe_rate();
        if let ReactionRate::Falloff { third_body, .. } = &mut explicit_one {
            third_body.default_efficiency = Some(1.0);
        }
        assert!(equivalent(&reference, &with_rate(eq, Some(explicit_one))));

        let mut zero = troe_rate();
        if let ReactionRate::Falloff { third_body, .. } = &mut zero {
            third_body.default_efficiency = Some(0.0);
        }
        assert_eq!(
            Comparator::default().compare(&reference, &with_rate(eq, Some(zero))),
            Err(Mismatch::DefaultEfficiency(eq.to_string()))
        );
    }

    #[test]
    fn test_efficiencies_must_exist_on_both_sides() {
        let eq = "H + OH + M <=> H2O + M";
        let reference = full_model();
        let without = with_rate(
            eq,
            Some(ReactionRate::ThreeBody {
                rate: SimpleRate::arrhenius(2.2e22, -2.0, 0.0),
                third_body: ThirdBody::default(),
            }),
        );
        assert_eq!(
            Comparator::default().compare(&reference, &without),
            Err(Mismatch::Efficiencies(eq.to_string()))
        );
        assert!(!equivalent(&without, &reference));
        assert!(equivalent(&without, &without.clone()));
    }

    #[test]
    fn test_plog_pressures_within_tolerance() {
        let eq = "H2 + O <=> H + OH";
        let reference = full_model();
        let drift = 1.0 + 1e-9;
        let close = with_rate(
            eq,
            Some(plog_rate([1013.25 * drift, 101325.0 * drift, 1013250.0 * drift])),
        );
        assert!(equivalent(&reference, &close));
        assert!(equivalent(&close, &reference));

        let far = with_rate(eq, Some(plog_rate([1013.25, 101325.0 * 1.001, 1013250.0])));
        assert_eq!(
            Comparator::default().compare(&reference, &far),
            Err(Mismatch::PlogPressure(eq.to_string()))
        );
    }

    #[test]
    fn test_plog_entries_are_sorted_by_pressure() {
        let eq = "H2 + O <=> H + OH";
        let mut shuffled = plog_rate([1013.25, 101325.0, 1013250.0]);
        if let ReactionRate::Plog { rates } = &mut shuffled {
            rates.reverse();
        }
        assert!(equivalent(&full_model(), &with_rate(eq, Some(shuffled))));

        let mut fewer = plog_rate([1013.25, 101325.0, 1013250.0]);
        if let ReactionRate::Plog { rates } = &mut fewer {
            rates.pop();
        }
        assert_eq!(
            Comparator::default().compare(&full_model(), &with_rate(eq, Some(fewer))),
            Err(Mismatch::PlogPoints(eq.to_string()))
        );
    }

    #[test]
    fn test_plog_rate_parameters_are_exact() {
        let eq = "H2 + O <=> H + OH";
        let mut changed = plog_rate([1013.25, 101325.0, 1013250.0]);
        if let ReactionRate::Plog { rates } = &mut changed {
            rates[1].1 = SimpleRate::arrhenius(2.72e9, 1.2, 6834.0 + 1e-6);
        }
        assert!(!equivalent(&full_model(), &with_rate(eq, Some(changed))));
    }

    #[test]
    fn test_chebyshev_comparison() {
        let eq = "HO2 + H <=> H2 + O2";
        let reference = full_model();

        let mut nudged = chebyshev_rate();
        nudged.coeffs[(0, 0)] *= 1.0 + 1e-9;
        assert!(equivalent(&reference, &with_rate(eq, Some(ReactionRate::Chebyshev(nudged)))));

        let mut shifted = chebyshev_rate();
        shifted.coeffs[(2, 3)] += 0.01;
        assert_eq!(
            Comparator::default()
                .compare(&reference, &with_rate(eq, Some(ReactionRate::Chebyshev(shifted)))),
            Err(Mismatch::Chebyshev {
                equation: eq.to_string(),
                field: "coefficients"
            })
        );

        let mut higher_pmax = chebyshev_rate();
        higher_pmax.pressure_range.1 = 2.0e7;
        assert!(!equivalent(
            &reference,
            &with_rate(eq, Some(ReactionRate::Chebyshev(higher_pmax)))
        ));

        let mut higher_tmax = chebyshev_rate();
        higher_tmax.temperature_range.1 = 3500.0;
        assert!(!equivalent(
            &reference,
            &with_rate(eq, Some(ReactionRate::Chebyshev(higher_tmax)))
        ));

        let smaller = crate::Mechanism::rates::ChebyshevRate::from_rows(
            (290.0, 3000.0),
            (1013.25, 10132500.0),
            &[vec![8.2883, -1.1397], vec![1.9764, 1.0037]],
        )
        .unwrap();
        assert!(!equivalent(
            &reference,
            &with_rate(eq, Some(ReactionRate::Chebyshev(smaller)))
        ));
    }

    #[test]
    fn test_chebyshev_lower_bounds_are_not_compared_across_models() {
        let eq = "HO2 + H <=> H2 + O2";
        let mut lower = chebyshev_rate();
        lower.pressure_range.0 = 1.0;
        lower.temperature_range.0 = 200.0;
        let other = with_rate(eq, Some(ReactionRate::Chebyshev(lower)));
        assert!(equivalent(&full_model(), &other));
        assert!(equivalent(&other, &full_model()));
    }

    #[test]
    fn test_custom_tolerance() {
        let eq = "H2 + O <=> H + OH";
        let loose = Comparator::new(Tolerance {
            relative: 1e-2,
            absolute: 0.0,
        });
        let far = with_rate(eq, Some(plog_rate([1013.25, 101325.0 * 1.001, 1013250.0])));
        assert!(loose.equivalent(&full_model(), &far));
        assert!(!Comparator::default().equivalent(&full_model(), &far));
    }

    #[test]
    fn test_comparison_leaves_models_untouched() {
        let a = full_model();
        let mut b = full_model();
        b.species.reverse();
        let before = b.clone();
        assert!(equivalent(&a, &b));
        assert_eq!(b, before);
        assert_eq!(a, full_model());
    }
}
