use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use nbkit::utils::logger::Logger;
use nbkit::commands::{CommandFactory, NbkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("NbKit")
        .version("1.0")
        .about("Analyze notebook structure and extract embedded images")
        .arg(
            Arg::new("input")
                .help("Input notebook file, or job file with --batch")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract embedded images")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for extracted images")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Treat input as a TOML job file listing notebook/output pairs")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "nbkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("nbkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = NbkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
