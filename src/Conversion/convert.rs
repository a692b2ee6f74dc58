//! # Format converter
//!
//! Picks the direction of a conversion from the extension of the input file:
//! a native file (`.yaml` unless configured otherwise) is converted to the
//! foreign split layout, anything else is read as a foreign mechanism file and
//! converted to a native one. Output files are named after the stem of the
//! input and placed in the output directory:
//!
//! | input                    | output                                                    |
//! |--------------------------|-----------------------------------------------------------|
//! | `gri.yaml`               | `gri.inp`, `gri_thermo.dat`, `gri_transport.dat` (if any) |
//! | `gri.inp` (+ companions) | `gri.yaml`                                                |
use super::error::MechError;
use super::library::MechanismLibrary;
use crate::Mechanism::model::Model;
use crate::settings::Settings;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// extension of foreign mechanism files produced by the converter
pub const FOREIGN_EXTENSION: &str = "inp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Native,
    Foreign,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Native => write!(f, "native"),
            Dialect::Foreign => write!(f, "foreign"),
        }
    }
}

/// case-insensitive match of the extension against `native_extension`
pub fn detect_dialect(path: &Path, native_extension: &str) -> Dialect {
    let native_extension = native_extension.trim_start_matches('.');
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(native_extension) => Dialect::Native,
        _ => Dialect::Foreign,
    }
}

/// files produced by a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    /// mechanism file first, then the thermo and transport companions
    Foreign(Vec<PathBuf>),
    Native(PathBuf),
}

impl Converted {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Converted::Foreign(paths) => paths.iter().map(PathBuf::as_path).collect(),
            Converted::Native(path) => vec![path.as_path()],
        }
    }
}

fn stem(path: &Path) -> Result<&str, MechError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| MechError::InvalidPath(path.to_path_buf()))
}

/// A mechanism library together with the settings that steer conversion.
pub struct Converter<L: MechanismLibrary> {
    pub library: L,
    pub settings: Settings,
}

impl<L: MechanismLibrary> Converter<L> {
    pub fn new(library: L, settings: Settings) -> Self {
        Self { library, settings }
    }

    pub fn dialect(&self, path: &Path) -> Dialect {
        detect_dialect(path, &self.settings.native_extension)
    }

    /// Converts `model_file` into the other dialect, writing into `output_dir`.
    ///
    /// `thermo_file` and `transport_file` are only used when the input is
    /// foreign; for a native input they are ignored.
    pub fn convert(
        &self,
        model_file: &Path,
        thermo_file: Option<&Path>,
        transport_file: Option<&Path>,
        output_dir: &Path,
    ) -> Result<Converted, MechError> {
        let stem = stem(model_file)?;
        let dialect = self.dialect(model_file);
        info!("{} is a {} mechanism", model_file.display(), dialect);
        match dialect {
            Dialect::Native => {
                let model = self.library.read_native(model_file)?;
                let output = output_dir.join(format!("{}.{}", stem, FOREIGN_EXTENSION));
                let written = self.library.write_foreign(&model, &output)?;
                Ok(Converted::Foreign(written))
            }
            Dialect::Foreign => {
                let extension = self.settings.native_extension.trim_start_matches('.');
                let output = output_dir.join(format!("{}.{}", stem, extension));
                self.library.convert_foreign_to_native(
                    model_file,
                    thermo_file,
                    transport_file,
                    &output,
                    self.settings.permissive,
                )?;
                Ok(Converted::Native(output))
            }
        }
    }

    /// reads a mechanism of either dialect, foreign companions are looked up
    /// next to the mechanism file
    pub fn load(&self, path: &Path) -> Result<Model, MechError> {
        match self.dialect(path) {
            Dialect::Native => self.library.read_native(path),
            Dialect::Foreign => {
                let (thermo, transport) = super::legacy::companion_paths(path)?;
                let thermo = thermo.is_file().then_some(thermo);
                let transport = transport.is_file().then_some(transport);
                self.library.read_foreign(
                    path,
                    thermo.as_deref(),
                    transport.as_deref(),
                    self.settings.permissive,
                )
            }
        }
    }
}

/// converts with the default settings apart from `permissive`, so `.yaml`
/// is the native extension
pub fn convert<L: MechanismLibrary>(
    library: &L,
    model_file: &Path,
    thermo_file: Option<&Path>,
    transport_file: Option<&Path>,
    output_dir: &Path,
    permissive: bool,
) -> Result<Converted, MechError> {
    let settings = Settings {
        permissive,
        ..Settings::default()
    };
    Converter::new(library, settings).convert(
        model_file,
        thermo_file,
        transport_file,
        output_dir,
    )
}
