use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use lamport_config as config;
use lamport_wallet as wallet;

use config::config::Config;

/// Custodial wallet daemon for the Lamport token network. Run it in the
/// background and have a client (GUI, embedding page, etc) connect to it
/// over WebSockets.
#[derive(Debug, StructOpt)]
#[structopt(name = "lamport-wallet")]
struct Cli {
    /// Load configuration from this file. When not given, standard paths
    /// are searched for a `lamport.toml`.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Socket address of the wallet WebSockets server.
    #[structopt(long)]
    addr: Option<SocketAddr>,

    /// Entry point URL of the ledger node to query.
    #[structopt(long)]
    node_url: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Run the wallet server.
    Run,
    /// Print the configuration params that will be used. Useful as a
    /// template.
    ShowConfig,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::from_args();

    let config_path = cli.config.or_else(config::dirs::find_config);
    let mut conf = if let Some(path) = config_path {
        match config::loaders::toml::from_file(&path) {
            Ok(partial) => Config::from_partial(&partial),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    } else {
        println!("HEADS UP! No configuration specified/found. Using default one!");
        Config::default()
    };

    if let Some(addr) = cli.addr {
        conf.wallet.server_addr = addr;
    }

    if let Some(node_url) = cli.node_url {
        conf.wallet.node_url = node_url;
    }

    log::set_max_level(conf.log.level);

    match cli.command {
        Command::Run => {
            if let Err(e) = wallet::run(conf) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        Command::ShowConfig => match config::loaders::toml::to_string(&conf.wallet) {
            Ok(section) => println!("[wallet]\n{}", section),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
    }
}
