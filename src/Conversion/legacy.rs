//! # Legacy split dialect
//!
//! The foreign dialect spreads a mechanism over up to three files, the way
//! Chemkin does:
//! - the mechanism file (`gri.inp`): elements, species declarations,
//!   reactions and, optionally, an inline thermo section;
//! - the thermo companion (`gri_thermo.dat`): one entry per species;
//! - the transport companion (`gri_transport.dat`): one entry per species,
//!   written only when some species carries transport data.
//!
//! All three are JSON documents.
//!
//! ## Reading rules
//! - thermo is taken from the companion file when one is given, otherwise from
//!   the inline section, and every declared species must have it;
//! - reactions may only use declared species;
//! - a repeated species, thermo or transport entry is an error, unless the
//!   reader is permissive: then the first entry wins and a warning is logged.
//!   A permissive reader also drops third-body efficiencies of undeclared
//!   species and transport entries of species that are not declared.
use super::error::MechError;
use super::library::{read_text, replace_file};
use crate::Mechanism::model::{Model, Reaction, Species, Thermo, TransportData};
use crate::Mechanism::rates::ReactionRate;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpeciesDeclaration {
    name: String,
    composition: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThermoEntry {
    name: String,
    thermo: Thermo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransportEntry {
    name: String,
    transport: TransportData,
}

#[derive(Debug, Serialize, Deserialize)]
struct MechanismFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    elements: Vec<String>,
    species: Vec<SpeciesDeclaration>,
    #[serde(default)]
    reactions: Vec<Reaction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    thermo: Vec<ThermoEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThermoFile {
    thermo: Vec<ThermoEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TransportFile {
    transport: Vec<TransportEntry>,
}

/// `dir/stem_thermo.dat` and `dir/stem_transport.dat` next to a mechanism file
pub fn companion_paths(mechanism: &Path) -> Result<(PathBuf, PathBuf), MechError> {
    let stem = mechanism
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| MechError::InvalidPath(mechanism.to_path_buf()))?;
    let dir = mechanism.parent().unwrap_or_else(|| Path::new(""));
    Ok((
        dir.join(format!("{}_thermo.dat", stem)),
        dir.join(format!("{}_transport.dat", stem)),
    ))
}

/// writes the mechanism file and its companions, returns the written paths
pub fn write(model: &Model, path: &Path) -> Result<Vec<PathBuf>, MechError> {
    let (thermo_path, transport_path) = companion_paths(path)?;
    let mechanism = MechanismFile {
        name: Some(model.name.clone()),
        elements: model.elements.clone(),
        species: model
            .species
            .iter()
            .map(|s| SpeciesDeclaration {
                name: s.name.clone(),
                composition: s.composition.clone(),
            })
            .collect(),
        reactions: model.reactions.clone(),
        thermo: Vec::new(),
    };
    let thermo = ThermoFile {
        thermo: model
            .species
            .iter()
            .map(|s| ThermoEntry {
                name: s.name.clone(),
                thermo: s.thermo.clone(),
            })
            .collect(),
    };
    let transport: Vec<TransportEntry> = model
        .species
        .iter()
        .filter_map(|s| {
            s.transport.as_ref().map(|t| TransportEntry {
                name: s.name.clone(),
                transport: t.clone(),
            })
        })
        .collect();

    replace_file(path, &serde_json::to_string_pretty(&mechanism)?)?;
    replace_file(&thermo_path, &serde_json::to_string_pretty(&thermo)?)?;
    let mut written = vec![path.to_path_buf(), thermo_path];
    if !transport.is_empty() {
        let file = TransportFile { transport };
        replace_file(&transport_path, &serde_json::to_string_pretty(&file)?)?;
        written.push(transport_path);
    }
    Ok(written)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MechError> {
    Ok(serde_json::from_str(&read_text(path)?)?)
}

/// keeps the first entry of every name; repeats are an error unless permissive
fn unique_entries<T>(
    section: &'static str,
    entries: Vec<T>,
    name: impl Fn(&T) -> &str,
    permissive: bool,
) -> Result<Vec<T>, MechError> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(name(&entry).to_string()) {
            kept.push(entry);
        } else if permissive {
            warn!("ignoring repeated {} entry '{}'", section, name(&entry));
        } else {
            return Err(MechError::DuplicateEntry {
                section,
                name: name(&entry).to_string(),
            });
        }
    }
    Ok(kept)
}

/// every species of a reaction must be declared; unknown colliders are
/// dropped in permissive mode
fn check_reaction(
    mut reaction: Reaction,
    declared: &HashSet<String>,
    permissive: bool,
) -> Result<Reaction, MechError> {
    let undeclared = reaction
        .reactants
        .keys()
        .chain(reaction.products.keys())
        .find(|s| !declared.contains(*s));
    if let Some(species) = undeclared {
        return Err(MechError::UndeclaredSpecies {
            reaction: reaction.equation.clone(),
            species: species.clone(),
        });
    }
    let equation = reaction.equation.clone();
    let third_body = match reaction.rate.as_mut().and_then(ReactionRate::third_body_mut) {
        Some(third_body) => third_body,
        None => return Ok(reaction),
    };
    if let Some(efficiencies) = third_body.efficiencies.as_mut() {
        let unknown: Vec<String> = efficiencies
            .keys()
            .filter(|s| !declared.contains(*s))
            .cloned()
            .collect();
        for species in unknown {
            if !permissive {
                return Err(MechError::UndeclaredSpecies {
                    reaction: equation,
                    species,
                });
            }
            warn!(
                "dropping efficiency of undeclared species '{}' in '{}'",
                species, equation
            );
            efficiencies.remove(&species);
        }
    }
    Ok(reaction)
}

/// reads a split mechanism; the thermo companion replaces the inline section
pub fn read(
    input: &Path,
    thermo: Option<&Path>,
    transport: Option<&Path>,
    permissive: bool,
) -> Result<Model, MechError> {
    let mechanism: MechanismFile = read_json(input)?;
    let declarations = unique_entries(
        "species",
        mechanism.species,
        |d: &SpeciesDeclaration| d.name.as_str(),
        permissive,
    )?;
    let declared: HashSet<String> = declarations.iter().map(|d| d.name.clone()).collect();

    let thermo_entries = match thermo {
        Some(path) => read_json::<ThermoFile>(path)?.thermo,
        None => mechanism.thermo,
    };
    let mut thermo_by_name: HashMap<String, Thermo> =
        unique_entries("thermo", thermo_entries, |e: &ThermoEntry| e.name.as_str(), permissive)?
            .into_iter()
            .map(|e| (e.name, e.thermo))
            .collect();

    let mut transport_by_name: HashMap<String, TransportData> = HashMap::new();
    if let Some(path) = transport {
        let entries = read_json::<TransportFile>(path)?.transport;
        let entries = unique_entries(
            "transport",
            entries,
            |e: &TransportEntry| e.name.as_str(),
            permissive,
        )?;
        for entry in entries {
            if declared.contains(&entry.name) {
                transport_by_name.insert(entry.name, entry.transport);
            } else {
                warn!("transport data for undeclared species '{}' ignored", entry.name);
            }
        }
    }

    let name = match mechanism.name {
        Some(name) => name,
        None => input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| MechError::InvalidPath(input.to_path_buf()))?
            .to_string(),
    };
    let mut model = Model::new(&name);
    model.elements = mechanism.elements;
    for declaration in declarations {
        let thermo = thermo_by_name
            .remove(&declaration.name)
            .ok_or_else(|| MechError::MissingThermo(declaration.name.clone()))?;
        let transport = transport_by_name.remove(&declaration.name);
        model.species.push(Species {
            name: declaration.name,
            composition: declaration.composition,
            thermo,
            transport,
        });
    }
    for reaction in mechanism.reactions {
        model.add_reaction(check_reaction(reaction, &declared, permissive)?);
    }
    info!(
        "read {} species and {} reactions from {}",
        model.n_species(),
        model.n_reactions(),
        input.display()
    );
    Ok(model)
}
