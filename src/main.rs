use clap::Parser;
use signup_form::cli::commands::{cmd_run, cmd_submit, cmd_validate};
use signup_form::cli::config::{Cli, Commands, load_config, resolve_settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // CLI > config > defaults
    let settings = resolve_settings(&cli, &config);

    let ok = match &cli.command {
        Commands::Validate {
            email,
            password,
            username,
        } => cmd_validate(email, password, username),
        Commands::Submit {
            email,
            password,
            username,
        } => cmd_submit(&settings, email, password, username, cli.verbose)?,
        Commands::Run {
            scenario,
            format,
            output,
        } => cmd_run(&settings, scenario, format, output.as_deref(), cli.verbose)?,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
