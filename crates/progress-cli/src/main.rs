use clap::Parser;
use log::debug;

use todo_client::TodoApiClient;

#[derive(Parser, Debug)]
#[command(name = "progress-cli")]
#[command(about = "Print an employee's TODO completion progress")]
#[command(version)]
struct Cli {
    /// Employee identifier; validity is delegated to the remote service
    #[arg(allow_negative_numbers = true)]
    employee_id: i64,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,
}

#[tokio::main]
async fn main() {
    // Usage errors share exit code 1 with the runtime failures, so parse
    // errors are intercepted instead of letting clap exit on its own.
    // Help and version output still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.debug);

    if let Err(err) = run(&cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = TodoApiClient::new();
    let summary = client.fetch_progress(cli.employee_id).await?;

    debug!(
        "employee {} has {}/{} tasks completed",
        cli.employee_id,
        summary.completed(),
        summary.total()
    );

    println!("{}", summary.render());
    Ok(())
}

fn init_logging(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
