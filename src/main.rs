use std::process;

use clap::Parser;

use garagedoor::cli::{self, Command, Opts};
use garagedoor::config::DoorConfig;
use garagedoor::door::DoorActuator;
use garagedoor::gpio::Hardware;
use garagedoor::Result;

fn main() {
    env_logger::init();

    let opts: Opts = Opts::parse();
    let command = opts.command.unwrap_or(Command::Status);

    match run(command) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<&'static str> {
    let gpio = Hardware::probe()?;
    let mut door = DoorActuator::connect(&gpio, &DoorConfig::default())?;
    Ok(cli::execute(command, &mut door))
}
