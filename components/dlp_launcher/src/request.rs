// components/dlp_launcher/src/request.rs
use crate::mode::Mode;
use crate::types::{LaunchError, Result};

/// Raw command line input before mode and URL have been worked out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Value of the explicit mode flag
    pub mode: Option<String>,
    /// Value of the explicit URL flag
    pub url: Option<String>,
    /// Arguments left over after flag parsing
    pub positionals: Vec<String>,
}

/// A fully resolved run of the download tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Option<Mode>,
    pub url: String,
}

impl Request {
    pub fn new(
        mode: Option<String>,
        url: Option<String>,
        positionals: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            mode,
            url,
            positionals: positionals.into_iter().collect(),
        }
    }

    /// Work out mode and URL from flags and positionals.
    ///
    /// An explicit mode flag wins. Otherwise the first positional is taken as
    /// the mode when it names one, and the URL follows it; a URL flag is then
    /// refused rather than dropped. Failing both, the request runs without a
    /// preset.
    pub fn resolve(&self) -> Result<Invocation> {
        let mode_flag = non_empty(&self.mode);
        let url_flag = non_empty(&self.url);
        let first = self.positionals.first().map(String::as_str);

        let (mode, url) = if let Some(mode) = mode_flag {
            (Some(mode), url_flag.or(first))
        } else if let Some(mode) = first.filter(|arg| Mode::lookup(arg).is_some()) {
            if url_flag.is_some() {
                return Err(LaunchError::UrlWithPositionalMode {
                    mode: mode.to_owned(),
                });
            }
            (Some(mode), self.positionals.get(1).map(String::as_str))
        } else {
            (None, url_flag.or(first))
        };

        let url = url
            .filter(|url| !url.is_empty())
            .ok_or(LaunchError::MissingUrl)?;
        let mode = mode.map(str::parse::<Mode>).transpose()?;

        tracing::debug!(?mode, url, "resolved request");

        Ok(Invocation {
            mode,
            url: url.to_owned(),
        })
    }
}

impl Invocation {
    pub fn new(mode: Option<Mode>, url: impl Into<String>) -> Self {
        Self {
            mode,
            url: url.into(),
        }
    }

    /// Arguments for the download tool: the mode preset, then the URL
    pub fn args(&self) -> Vec<String> {
        let preset = self.mode.map(Mode::preset).unwrap_or_default();
        preset
            .iter()
            .map(|token| token.to_string())
            .chain(std::iter::once(self.url.clone()))
            .collect()
    }

    pub fn mode_label(&self) -> String {
        match self.mode {
            Some(mode) => format!("'{}' mode", mode),
            None => "default mode".to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn request(mode: Option<&str>, url: Option<&str>, positionals: &[&str]) -> Request {
        Request::new(
            mode.map(str::to_string),
            url.map(str::to_string),
            positionals.iter().map(|arg| arg.to_string()),
        )
    }

    #[test]
    fn mode_and_url_flags() {
        let invocation = request(Some("mp4"), Some("https://x/v"), &[]).resolve().unwrap();
        assert_eq!(invocation, Invocation::new(Some(Mode::Mp4), "https://x/v"));
        assert_eq!(
            invocation.args(),
            [
                "-f",
                "bestvideo+bestaudio/best[ext=mp4]",
                "-S",
                "vcodec:h264,res,acodec:m4a",
                "https://x/v"
            ]
        );
    }

    #[test]
    fn mode_flag_takes_url_from_first_positional() {
        let invocation = request(Some("musvid"), None, &["https://x/v", "ignored"])
            .resolve()
            .unwrap();
        assert_eq!(invocation, Invocation::new(Some(Mode::MusVid), "https://x/v"));
    }

    #[test]
    fn url_flag_beats_positional_when_mode_flag_given() {
        let invocation = request(Some("mp3"), Some("https://x/flag"), &["https://x/pos"])
            .resolve()
            .unwrap();
        assert_eq!(invocation.url, "https://x/flag");
    }

    #[test]
    fn positional_mode_matches_flag_form() {
        let positional = request(None, None, &["mp3", "https://x/a"]).resolve().unwrap();
        let flags = request(Some("mp3"), Some("https://x/a"), &[]).resolve().unwrap();

        assert_eq!(positional, flags);
        assert_eq!(
            positional.args(),
            ["-x", "--audio-format", "mp3", "--audio-quality", "0", "https://x/a"]
        );
    }

    #[test]
    fn positional_mode_is_case_insensitive() {
        let invocation = request(None, None, &["No-Audio", "https://x/v"]).resolve().unwrap();
        assert_eq!(invocation.mode, Some(Mode::NoAudio));
    }

    #[test]
    fn positional_mode_refuses_url_flag() {
        assert_matches!(
            request(None, Some("https://x/flag"), &["mp4"]).resolve(),
            Err(LaunchError::UrlWithPositionalMode { mode }) if mode == "mp4"
        );
        assert_matches!(
            request(None, Some("https://x/flag"), &["MP3", "https://x/pos"]).resolve(),
            Err(LaunchError::UrlWithPositionalMode { mode }) if mode == "MP3"
        );
    }

    #[test]
    fn empty_url_flag_with_positional_mode_is_absent() {
        let invocation = request(None, Some(""), &["mp4", "https://x/v"]).resolve().unwrap();
        assert_eq!(invocation, Invocation::new(Some(Mode::Mp4), "https://x/v"));
    }

    #[test]
    fn extra_positionals_are_not_used() {
        let invocation = request(None, None, &["mp3", "https://x/a", "extra"])
            .resolve()
            .unwrap();
        assert_eq!(invocation.args().last().map(String::as_str), Some("https://x/a"));
    }

    #[test]
    fn bare_url_runs_without_preset() {
        let invocation = request(None, None, &["https://x/v"]).resolve().unwrap();
        assert_eq!(invocation.mode, None);
        assert_eq!(invocation.args(), ["https://x/v"]);
        assert_eq!(invocation.mode_label(), "default mode");
    }

    #[test]
    fn url_flag_alone_runs_without_preset() {
        let invocation = request(None, Some("https://x/v"), &[]).resolve().unwrap();
        assert_eq!(invocation.args(), ["https://x/v"]);
    }

    #[test]
    fn url_flag_beats_unrecognized_positional() {
        let invocation = request(None, Some("https://x/flag"), &["https://x/pos"])
            .resolve()
            .unwrap();
        assert_eq!(invocation.url, "https://x/flag");
    }

    #[test]
    fn empty_mode_flag_counts_as_absent() {
        let invocation = request(Some(""), None, &["mp3", "https://x/a"]).resolve().unwrap();
        assert_eq!(invocation.mode, Some(Mode::Mp3));
    }

    #[rstest]
    #[case(None, None, &[])]
    #[case(Some("mp3"), None, &[])]
    #[case(Some("mp3"), Some(""), &[])]
    #[case(Some("bogus"), None, &[])]
    #[case(None, None, &["mp4"])]
    #[case(None, Some(""), &[""])]
    #[case(Some("mp4"), None, &[""])]
    fn missing_url_is_reported(
        #[case] mode: Option<&str>,
        #[case] url: Option<&str>,
        #[case] positionals: &[&str],
    ) {
        assert_matches!(
            request(mode, url, positionals).resolve(),
            Err(LaunchError::MissingUrl)
        );
    }

    #[test]
    fn unknown_mode_flag_is_rejected() {
        assert_matches!(
            request(Some("flac"), Some("https://x/v"), &[]).resolve(),
            Err(LaunchError::UnknownMode { mode }) if mode == "flac"
        );
    }

    #[test]
    fn mode_label_names_the_mode() {
        let invocation = Invocation::new(Some(Mode::NoAudio), "https://x/v");
        assert_eq!(invocation.mode_label(), "'no-audio' mode");
    }

    #[test]
    fn url_is_always_the_last_token() {
        for mode in Mode::ALL {
            let args = Invocation::new(Some(mode), "https://x/v").args();
            assert_eq!(args.last().map(String::as_str), Some("https://x/v"));
            assert_eq!(args.len(), mode.preset().len() + 1);
            assert_eq!(&args[..args.len() - 1], mode.preset());
        }
    }
}
