// bases/my_dlp/src/output.rs
use dlp_launcher::{Invocation, LaunchError, Mode};
use std::io::{self, Write};

use crate::args::USAGE;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_launch_start(&self, program: &str, invocation: &Invocation) {
        // Nothing useful to do if stdout is gone.
        let _ = self.write_launch_start(&mut io::stdout().lock(), program, invocation);
    }

    pub fn write_launch_start(
        &self,
        out: &mut impl Write,
        program: &str,
        invocation: &Invocation,
    ) -> io::Result<()> {
        writeln!(
            out,
            "Running {} in {} for URL: {}",
            program,
            invocation.mode_label(),
            invocation.url
        )
    }

    pub fn print_error(&self, program: &str, error: &color_eyre::Report) {
        let _ = self.write_error(&mut io::stderr().lock(), program, error);
    }

    pub fn write_error(
        &self,
        out: &mut impl Write,
        program: &str,
        error: &color_eyre::Report,
    ) -> io::Result<()> {
        match error.downcast_ref::<LaunchError>() {
            Some(LaunchError::MissingUrl) => {
                writeln!(out)?;
                writeln!(out, "Error: URL to the video is required.")?;
                return writeln!(out, "{}", USAGE);
            }
            Some(LaunchError::UnknownMode { mode }) => {
                writeln!(out, "Mode '{}' not recognized.", mode)?;
                return writeln!(out, "Available modes: {}", Mode::names());
            }
            Some(conflict @ LaunchError::UrlWithPositionalMode { .. }) => {
                writeln!(out, "Error: {}.", conflict)?;
                writeln!(out, "Pass the URL positionally or use -mode with -url.")?;
                return writeln!(out, "{}", USAGE);
            }
            _ => writeln!(out, "Error executing {}: {}", program, error)?,
        }

        if self.verbose {
            writeln!(out, "\nError details:")?;
            for cause in error.chain().skip(1) {
                writeln!(out, "  caused by: {}", cause)?;
            }
        }
        Ok(())
    }
}
