// bases/my_dlp/src/app.rs
use color_eyre::Result;
use dlp_launcher::Launcher;

use crate::args::Args;
use crate::output::OutputHandler;

pub struct App {
    args: Args,
    launcher: Launcher,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        let launcher = Launcher::new(args.tool.as_str());
        Self {
            args,
            launcher,
            output,
        }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::debug!(tool = %self.args.tool, args = ?self.args, "starting");
        if let Some(extra) = self.args.positionals.get(2..).filter(|extra| !extra.is_empty()) {
            tracing::warn!(?extra, "ignoring extra arguments");
        }

        let invocation = self.args.request().resolve()?;

        self.output
            .print_launch_start(self.launcher.program(), &invocation);

        self.launcher.launch(&invocation).await?;

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(self.launcher.program(), error);
    }
}
