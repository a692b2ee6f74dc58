/// dialect detection and conversion between the native and foreign dialects
pub mod convert;
/// errors of the file-facing side of the crate
pub mod error;
/// foreign split layout: mechanism file with thermo and transport companions
pub mod legacy;
/// reader/writer pairs of both dialects behind one trait
pub mod library;
pub mod native_yaml;
/// native writer with default file names
pub mod writer;
