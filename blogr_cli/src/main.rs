use clap::Parser;

use blogr::{
    init::initialize_app,
    logger::configure_logger,
};

mod cli;
use cli::{Cli, SubCommand};

fn main() {
    let opts: Cli = Cli::parse();

    match opts.subcmd {
        SubCommand::GenerateIdenticon(cmd) => {
            configure_logger(opts.log_level);
            cmd.execute().unwrap();
        },
        SubCommand::HashPassword(cmd) => {
            configure_logger(opts.log_level);
            cmd.execute().unwrap();
        },
        SubCommand::CheckConfig(cmd) => {
            configure_logger(opts.log_level);
            cmd.execute().unwrap();
        },
        subcmd => {
            // Other commands require initialized app
            let config = initialize_app();

            match subcmd {
                SubCommand::AvatarUrl(cmd) => cmd.execute(&config).unwrap(),
                _ => unreachable!(),
            };
        },
    };
}
