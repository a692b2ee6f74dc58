/// argument parsing and dispatch of the `mechtools` commands
pub mod cli_main;
/// table views of a mechanism for the `info` command
pub mod summary;
