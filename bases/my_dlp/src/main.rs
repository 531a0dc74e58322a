// bases/my_dlp/src/main.rs
mod app;
mod args;
mod output;

use app::App;
use args::Args;
use color_eyre::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse_normalized();

    let default_filter = if args.verbose {
        "my_dlp=debug,dlp_launcher=debug"
    } else {
        "my_dlp=warn,dlp_launcher=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let app = App::new(args);

    if let Err(error) = app.run().await {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
