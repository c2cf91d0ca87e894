use std::process::ExitCode;

use notal_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    notal_driver::run(argument)
}
