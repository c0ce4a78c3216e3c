//! Binary executable for the SWIFT HTTP server.

use env_logger::Env;
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use swift_http::{HttpConfig, SwiftHttpServer};
use swift_node::{NodeConfig, SwiftNode};
use tracing::info;

// For command line argument parsing
struct Args {
    host: String,
    port: u16,
    timeout: u64,
    verbose: bool,
    db_path: Option<String>,
}

impl Args {
    fn parse() -> Result<Self, Box<dyn Error>> {
        let mut args = pico_args::Arguments::from_env();

        // Check for help flag first
        if args.contains(["-h", "--help"]) {
            print_help();
            process::exit(0);
        }

        // Check for version flag
        if args.contains("--version") {
            println!("swift-http {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }

        let result = Args {
            host: args.opt_value_from_str("--host")?.unwrap_or_else(|| {
                env::var("SWIFT_HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
            }),
            port: args
                .opt_value_from_str(["-p", "--port"])?
                .unwrap_or_else(|| {
                    env::var("SWIFT_HTTP_PORT")
                        .ok()
                        .and_then(|p| p.parse::<u16>().ok())
                        .unwrap_or(8000)
                }),
            timeout: args
                .opt_value_from_str(["-t", "--timeout"])?
                .unwrap_or_else(|| {
                    env::var("SWIFT_HTTP_TIMEOUT")
                        .ok()
                        .and_then(|t| t.parse::<u64>().ok())
                        .unwrap_or(30)
                }),
            verbose: args.contains(["-v", "--verbose"]),
            db_path: args
                .opt_value_from_str("--db-path")?
                .or_else(|| env::var("SWIFT_NODE_DB_PATH").ok()),
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(format!("Unrecognized arguments: {:?}", remaining).into());
        }

        Ok(result)
    }
}

fn print_help() {
    println!("SWIFT HTTP Server");
    println!("-----------------");
    println!("An HTTP server for ingesting and retrieving SWIFT MT799 messages");
    println!();
    println!("USAGE:");
    println!("    swift-http [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("        --host <HOST>        Host to bind to [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port to listen on [default: 8000]");
    println!("    -t, --timeout <SECONDS>  Request timeout in seconds [default: 30]");
    println!("        --db-path <PATH>     Path to the SQLite database file");
    println!("    -v, --verbose            Enable debug logging");
    println!("    -h, --help               Print this help message");
    println!("        --version            Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    SWIFT_HTTP_HOST, SWIFT_HTTP_PORT, SWIFT_HTTP_TIMEOUT, SWIFT_NODE_DB_PATH");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Parse command line arguments first (to check for --verbose)
    let args = Args::parse().unwrap_or_else(|e| {
        eprintln!("Error parsing arguments: {}", e);
        process::exit(1);
    });

    // Initialize logging with appropriate level
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting SWIFT HTTP server");

    let node_config = NodeConfig {
        storage_path: args.db_path.map(PathBuf::from),
    };
    let node = SwiftNode::new(node_config).await?;

    let config = HttpConfig {
        host: args.host,
        port: args.port,
        request_timeout_secs: args.timeout,
        ..HttpConfig::default()
    };

    let mut server = SwiftHttpServer::new(config, node);
    server.start().await?;

    // Run until interrupted
    tokio::signal::ctrl_c().await?;
    info!("Received interrupt signal");
    server.stop().await?;

    Ok(())
}
