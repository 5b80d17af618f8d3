mod app;
mod cli;
mod consts;
mod core;
mod error;
mod utils;

use clap::Parser;

use cli::Cli;
use crate::core::Environment;
use error::AppError;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    set_debug(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let env = Environment::capture()?;
    let output = app::run(&cli.invocation(), &env, cli.json)?;
    println!("{output}");
    Ok(())
}
