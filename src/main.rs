use clap::Parser;
use log::error;
use polytrim::service::{logging, Host};

/// Polygon simplification service.
#[derive(Parser)]
#[command(name = "polytrim", version, about = "Polygon simplification service")]
struct Cli {
    /// Address to bind.
    #[arg(default_value = "localhost")]
    address: String,

    /// Port to listen on.
    #[arg(default_value_t = 33700)]
    port: u16,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let mut host = match Host::bind((cli.address.as_str(), cli.port)) {
        Ok(host) => host,
        Err(e) => {
            error!("failed to bind {}:{}: {}", cli.address, cli.port, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = host.run() {
        error!("server stopped: {}", e);
        std::process::exit(1);
    }
}
