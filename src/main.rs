use clap::Parser;

fn main() {
    let cli = agentc::cli::Cli::parse();
    agentc::logging::init(cli.verbose);

    if let Err(e) = agentc::cli::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
