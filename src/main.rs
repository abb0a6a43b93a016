use std::sync::Arc;

use minihttpd::cli::{self, Args, Usage};
use minihttpd::config::Config;
use minihttpd::http::mime::MimeTable;
use minihttpd::http::resolve::DocumentRoot;
use minihttpd::server::{self, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(usage) => exit_with_usage(usage),
    };

    let mut cfg = Config::load()?;

    if let Args::MimePrefix(prefix) = &args {
        let path = cli::mime_path(prefix);
        if !path.exists() {
            exit_with_usage(Usage::MimeFileMissing);
        }
        println!("Your mime.type file will now be searched at {}", prefix);
        cfg.mime_types = path;
    }

    let mime = MimeTable::load(&cfg.mime_types)?;
    let root = DocumentRoot::new(&cfg.document_root, &cfg.index_file);
    let state = Arc::new(ServerState::new(mime, root));

    tokio::select! {
        res = server::listener::run(&cfg, state) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn exit_with_usage(usage: Usage) -> ! {
    println!("{}", usage);
    std::process::exit(0);
}
