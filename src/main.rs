use clap::Parser;
use fleetfund::api::{Cli, Command, build_plan, plan_request_from_args, run_http_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_tracing();

    match Cli::parse().command {
        Command::Serve { port } => {
            if let Err(e) = run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Plan(args) => {
            let pretty = args.pretty;
            let request = match plan_request_from_args(args) {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            let dashboard = build_plan(request);
            let rendered = if pretty {
                serde_json::to_string_pretty(&dashboard)
            } else {
                serde_json::to_string(&dashboard)
            };
            match rendered {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to render plan: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fleetfund=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
