use clap::Parser;
use pwvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { force } => pwvault::cli::commands::init::execute(&cli, force),
        Commands::List => pwvault::cli::commands::list::execute(&cli),
        Commands::Get { ref identifier } => pwvault::cli::commands::get::execute(&cli, identifier),
        Commands::Add {
            ref identifier,
            ref secret,
        } => pwvault::cli::commands::add::execute(&cli, identifier, secret.as_deref()),
        Commands::Generate {
            ref identifier,
            length,
            show,
        } => pwvault::cli::commands::generate::execute(&cli, identifier, length, show),
        Commands::Delete {
            ref identifier,
            force,
        } => pwvault::cli::commands::delete::execute(&cli, identifier, force),
        Commands::GenPassword { length } => {
            pwvault::cli::commands::gen_password::execute(&cli, length)
        }
    };

    if let Err(e) = result {
        pwvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Route `tracing` events to stderr; `RUST_LOG` overrides `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pwvault={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
