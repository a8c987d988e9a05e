use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use steadynode_common::{ChainParams, Registry, steady::base58::Base58Type};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Registry as Subscriber, fmt::time::ChronoUtc, layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "steadyparams")]
#[command(about = "Validates the SteadyNode chain parameters and prints the selected network's constants.", long_about = None)]
struct Args {
    /// Use the test network instead of the main network.
    #[arg(long, default_value_t = false)]
    pub testnet: bool,

    /// Base data directory; the network's own directory is shown below it.
    #[arg(short, long)]
    pub datadir: Option<PathBuf>,

    /// Print the parameters as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_tracing(&args) {
        eprintln!("Failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let registry = match Registry::new() {
        Ok(registry) => registry,
        Err(err) => {
            error!("Chain parameters failed validation: {err}");
            return ExitCode::FAILURE;
        }
    };
    registry.select_from_flag(args.testnet);
    let params = registry.current();
    info!(
        network = %params.network(),
        genesis = %params.genesis_hash(),
        "chain parameters ready"
    );

    if args.json {
        match serde_json::to_string_pretty(&params.summary()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("Failed to encode parameters: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_params(params, args.datadir.as_deref());
    }

    ExitCode::SUCCESS
}

fn print_params(params: &ChainParams, datadir: Option<&Path>) {
    println!("network:          {}", params.network());
    println!("message start:    {}", params.message_start());
    println!("ports:            p2p {} / rpc {}", params.default_port(), params.rpc_port());
    println!("pow limit:        {}", params.pow_limit());
    println!("genesis hash:     {}", params.genesis_hash());
    println!(
        "genesis merkle:   {}",
        params.genesis_block().header().merkle_root()
    );
    println!(
        "pow / pos:        last pow block {}, pos start block {}",
        params.last_pow_block(),
        params.pos_start_block()
    );
    for kind in Base58Type::ALL {
        println!(
            "{:<18}{}",
            format!("{kind}:"),
            hex::encode(params.base58_prefix(kind))
        );
    }
    for seed in params.dns_seeds() {
        println!("dns seed {}:       {}", seed.name, seed.host);
    }
    for peer in params.fixed_seeds() {
        println!("fixed seed:       {} (last seen {})", peer.addr, peer.last_seen);
    }
    if let Some(base) = datadir {
        println!("data directory:   {}", params.data_dir(base).display());
    }
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = match args.log_level.as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => {
            eprintln!(
                "Invalid log level: {}. Using 'warn' as default.",
                args.log_level
            );
            tracing::Level::WARN
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr()) && !args.no_color;

    let subscriber = Subscriber::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_level(true)
            .with_target(true)
            .with_thread_ids(args.verbose)
            .with_thread_names(args.verbose)
            .with_ansi(use_ansi)
            .with_file(args.verbose)
            .with_line_number(args.verbose)
            .with_timer(ChronoUtc::rfc_3339()),
    );

    subscriber.try_init()?;

    Ok(())
}
