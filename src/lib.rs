#[allow(non_snake_case)]
pub mod Conversion;
#[allow(non_snake_case)]
pub mod Mechanism;
pub mod cli;
pub mod settings;
