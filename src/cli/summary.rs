use crate::Mechanism::equation::is_reversible;
use crate::Mechanism::model::{Model, Species};
use prettytable::{Cell, Row, Table, row};
use std::collections::BTreeMap;

fn composition(species: &Species) -> String {
    species
        .composition
        .iter()
        .map(|(element, count)| format!("{}:{}", element, count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// one row per species: name, composition, thermo form, transport
pub fn species_table(model: &Model) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Species", "Composition", "Thermo", "T range, K", "Transport"]);
    for species in &model.species {
        let transport = match &species.transport {
            Some(data) => format!("{:?}", data.geometry).to_lowercase(),
            None => "-".to_string(),
        };
        table.add_row(Row::new(vec![
            Cell::new(&species.name),
            Cell::new(&composition(species)),
            Cell::new(&format!("{:?}", species.thermo.model)),
            Cell::new(&format!(
                "{}-{}",
                species.thermo.min_temp, species.thermo.max_temp
            )),
            Cell::new(&transport),
        ]));
    }
    table
}

/// one row per reaction: equation, rate representation, reversibility, duplicate flag
pub fn reactions_table(model: &Model) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Equation", "Rate", "Reversible", "Duplicate"]);
    for (i, reaction) in model.reactions.iter().enumerate() {
        let kind = reaction
            .rate
            .as_ref()
            .map_or("-".to_string(), |rate| rate.kind().to_string());
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&reaction.equation),
            Cell::new(&kind),
            Cell::new(if is_reversible(&reaction.equation) { "yes" } else { "no" }),
            Cell::new(if reaction.duplicate { "yes" } else { "" }),
        ]));
    }
    table
}

/// number of reactions of every rate representation
pub fn rate_counts(model: &Model) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for reaction in &model.reactions {
        let kind = reaction
            .rate
            .as_ref()
            .map_or("none".to_string(), |rate| rate.kind().to_string());
        *counts.entry(kind).or_insert(0) += 1;
    }
    counts
}

pub fn print_summary(model: &Model) {
    println!(
        "mechanism '{}': {} elements, {} species, {} reactions",
        model.name,
        model.elements.len(),
        model.n_species(),
        model.n_reactions()
    );
    println!("____________________SPECIES_________________________");
    species_table(model).printstd();
    println!("____________________REACTIONS_________________________");
    reactions_table(model).printstd();
    for (kind, count) in rate_counts(model) {
        println!("  {}: {}", kind, count);
    }
}
