use mechtools::cli::cli_main::run;
use std::process::ExitCode;

fn main() -> ExitCode {
    run()
}
