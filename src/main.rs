use clap::Parser;
use rival_lib::bootstrap::{self, runtime::SHUTDOWN_GRACE};
use rival_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = bootstrap::resolve_app_paths()?;
    if let Err(e) = bootstrap::tracing::init_tracing_subscriber(Some(&paths.logs_dir)) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let runtime = bootstrap::create_runtime()?;
    let result = runtime.block_on(bootstrap::run_app(cli, paths));
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "rival exited with error");
    }
    result
}
