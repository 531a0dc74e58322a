// bases/my_dlp/src/args.rs
use clap::Parser;
use dlp_launcher::{Request, DEFAULT_PROGRAM};
use std::ffi::OsString;

pub const USAGE: &str = concat!(
    "\nmy-dlp ",
    env!("CARGO_PKG_VERSION"),
    r#"
Usage:
  [mode] <URL>
  -mode=<mode> -url=<URL>
  -mode=<mode> <URL>

Modes:
  mp3       Only grab the mp3
            Example: -mode=mp3 -url=https://example.com/video
  mp4       Grab video + audio output always mp4
            Example: -mode=mp4 -url=https://example.com/video
  no-audio  Video only
            Example: -mode=no-audio -url=https://example.com/video
  musvid    Limit the video to 720p mp4 with m4a audio
            Example: -mode=musvid -url=https://example.com/video

Positional Arguments:
  mode       (optional) Mode to run dlp: mp3, mp4, no-audio, musvid
  url        URL to the video

Options:
  -tool <program>  Download tool to run [env: MY_DLP_TOOL] [default: yt-dlp]
  -v, -verbose     Show debug logging and full error causes
  -h, -help        Show this help
  -V, -version     Show the version

Examples:
  my-dlp -mode=mp3 -url=https://example.com/audio
  my-dlp mp4 https://example.com/video
  my-dlp https://example.com/video
"#
);

/// Flags that may be written with a single dash, e.g. `-mode=mp3`
const LONG_FLAGS: [&str; 6] = ["mode", "url", "tool", "verbose", "help", "version"];

/// Run yt-dlp with a preset for the chosen mode
#[derive(Parser, Debug)]
#[command(name = "my-dlp", author, version, about, override_help = USAGE)]
pub struct Args {
    /// Mode to run dlp: mp3, mp4, no-audio, musvid
    #[arg(long)]
    pub mode: Option<String>,

    /// URL to the video
    #[arg(long)]
    pub url: Option<String>,

    /// Download tool to run
    #[arg(long, env = "MY_DLP_TOOL", default_value = DEFAULT_PROGRAM)]
    pub tool: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// `[mode] <url>` or `<url>`; anything further is ignored
    pub positionals: Vec<String>,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize(std::env::args_os()))
    }

    pub fn request(&self) -> Request {
        Request::new(
            self.mode.clone(),
            self.url.clone(),
            self.positionals.iter().cloned(),
        )
    }
}

/// Rewrite `-mode=x` style flags to `--mode=x` so clap understands them.
/// The program name and anything after `--` are left alone.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();

    for arg in args.by_ref() {
        if arg == "--" {
            normalized.push(arg);
            break;
        }
        let rewritten = arg
            .to_str()
            .filter(|arg| is_single_dash_long(arg))
            .map(|flag| OsString::from(format!("-{flag}")));
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized.extend(args);
    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or_default();
    LONG_FLAGS.contains(&name)
}
