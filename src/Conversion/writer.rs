use super::error::MechError;
use super::library::{MechanismLibrary, remove_existing};
use crate::Mechanism::model::Model;
use std::path::{Path, PathBuf};

/// Writes `model` in the native dialect to `path/output_filename`.
///
/// Without a file name the model is written to `<model.name>.yaml`. A file
/// already present at the target is deleted first, never merged into.
/// Returns the written path.
pub fn write<L: MechanismLibrary>(
    library: &L,
    model: &Model,
    output_filename: Option<&str>,
    path: &Path,
) -> Result<PathBuf, MechError> {
    let filename = match output_filename {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("{}.yaml", model.name),
    };
    let target = path.join(filename);
    remove_existing(&target)?;
    library.write_native(model, &target)?;
    Ok(target)
}
