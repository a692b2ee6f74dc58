//! # Mechanism library
//!
//! The reader/writer pair of the two mechanism dialects sits behind the
//! [`MechanismLibrary`] trait, so the converter and the writer do not depend on
//! how a dialect is encoded.
//!
//! [`SerdeLibrary`] is the in-tree implementation: the native dialect is a
//! YAML document (see [`super::native_yaml`]), the foreign one the split
//! legacy layout of a mechanism file plus thermo and transport companions
//! (see [`super::legacy`]).
use super::error::MechError;
use super::{legacy, native_yaml};
use crate::Mechanism::model::Model;
use log::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait MechanismLibrary {
    fn read_native(&self, path: &Path) -> Result<Model, MechError>;
    fn write_native(&self, model: &Model, path: &Path) -> Result<(), MechError>;
    /// reads a foreign mechanism; `permissive` tolerates repeated entries
    fn read_foreign(
        &self,
        input: &Path,
        thermo: Option<&Path>,
        transport: Option<&Path>,
        permissive: bool,
    ) -> Result<Model, MechError>;
    /// writes the mechanism file `path` and its companions, returns every written file
    fn write_foreign(&self, model: &Model, path: &Path) -> Result<Vec<PathBuf>, MechError>;
    fn convert_foreign_to_native(
        &self,
        input: &Path,
        thermo: Option<&Path>,
        transport: Option<&Path>,
        output: &Path,
        permissive: bool,
    ) -> Result<(), MechError> {
        let model = self.read_foreign(input, thermo, transport, permissive)?;
        self.write_native(&model, output)
    }
}

impl<L: MechanismLibrary + ?Sized> MechanismLibrary for &L {
    fn read_native(&self, path: &Path) -> Result<Model, MechError> {
        (**self).read_native(path)
    }
    fn write_native(&self, model: &Model, path: &Path) -> Result<(), MechError> {
        (**self).write_native(model, path)
    }
    fn read_foreign(
        &self,
        input: &Path,
        thermo: Option<&Path>,
        transport: Option<&Path>,
        permissive: bool,
    ) -> Result<Model, MechError> {
        (**self).read_foreign(input, thermo, transport, permissive)
    }
    fn write_foreign(&self, model: &Model, path: &Path) -> Result<Vec<PathBuf>, MechError> {
        (**self).write_foreign(model, path)
    }
    fn convert_foreign_to_native(
        &self,
        input: &Path,
        thermo: Option<&Path>,
        transport: Option<&Path>,
        output: &Path,
        permissive: bool,
    ) -> Result<(), MechError> {
        (**self).convert_foreign_to_native(input, thermo, transport, output, permissive)
    }
}

/// YAML native dialect and JSON split legacy dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeLibrary;

impl MechanismLibrary for SerdeLibrary {
    fn read_native(&self, path: &Path) -> Result<Model, MechError> {
        native_yaml::from_str(&read_text(path)?)
    }
    fn write_native(&self, model: &Model, path: &Path) -> Result<(), MechError> {
        replace_file(path, &native_yaml::to_string(model)?)
    }
    fn read_foreign(
        &self,
        input: &Path,
        thermo: Option<&Path>,
        transport: Option<&Path>,
        permissive: bool,
    ) -> Result<Model, MechError> {
        legacy::read(input, thermo, transport, permissive)
    }
    fn write_foreign(&self, model: &Model, path: &Path) -> Result<Vec<PathBuf>, MechError> {
        legacy::write(model, path)
    }
}

pub(crate) fn read_text(path: &Path) -> Result<String, MechError> {
    fs::read_to_string(path).map_err(|e| MechError::io(path, e))
}

/// deletes `path` if it is an existing file
pub(crate) fn remove_existing(path: &Path) -> Result<(), MechError> {
    if path.is_file() {
        fs::remove_file(path).map_err(|e| MechError::io(path, e))?;
    }
    Ok(())
}

/// writes `contents` to a fresh file, the old file at `path` is removed first
pub(crate) fn replace_file(path: &Path, contents: &str) -> Result<(), MechError> {
    remove_existing(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| MechError::io(parent, e))?;
        }
    }
    let mut file = File::create(path).map_err(|e| MechError::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| MechError::io(path, e))?;
    info!("written {}", path.display());
    Ok(())
}
