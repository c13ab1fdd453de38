use clap::Parser;
use nyayantar_gateway::proxy_state::{ProxyConfig, ProxyState};
use nyayantar_gateway::server;
use tokio::signal;

#[derive(Parser, Debug)]
#[command(
    name = "nyayantar-gateway",
    about = "Validating JSON gateway in front of the Nyayantar legal-AI backend"
)]
struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Base URL of the legal-AI backend.
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:8000")]
    backend_url: String,

    /// Outbound request timeout in seconds.
    #[arg(long, default_value_t = 600)]
    timeout: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ProxyConfig {
        host: args.host,
        port: args.port,
        backend_url: args.backend_url,
        timeout: args.timeout,
    };
    let state = ProxyState::new(config.clone())?;
    actix_web::rt::System::new().block_on(async move {
        tokio::select! {
            res = server::startup(config, state) => {
                res.map_err(anyhow::Error::from)
            }
            _ = signal::ctrl_c() => {
                println!("Received Ctrl+C, shutting down");
                std::process::exit(0);
            }
        }
    })
}
