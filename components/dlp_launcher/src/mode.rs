// components/dlp_launcher/src/mode.rs
use std::fmt;
use std::str::FromStr;

use crate::types::LaunchError;

const H264_SORT: &str = "vcodec:h264,res,acodec:m4a";

/// Download presets understood by the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Audio only, converted to mp3
    Mp3,
    /// Best video and audio, preferring mp4
    Mp4,
    /// Video stream only
    NoAudio,
    /// Music video, capped at 720p
    MusVid,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Mp3, Mode::Mp4, Mode::NoAudio, Mode::MusVid];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Mp3 => "mp3",
            Mode::Mp4 => "mp4",
            Mode::NoAudio => "no-audio",
            Mode::MusVid => "musvid",
        }
    }

    /// Arguments passed to the download tool ahead of the URL.
    /// Order matters and must not change.
    pub fn preset(self) -> &'static [&'static str] {
        match self {
            Mode::Mp3 => &["-x", "--audio-format", "mp3", "--audio-quality", "0"],
            Mode::Mp4 => &["-f", "bestvideo+bestaudio/best[ext=mp4]", "-S", H264_SORT],
            Mode::NoAudio => &["-f", "bestvideo/best[ext=mp4]", "-S", H264_SORT],
            Mode::MusVid => &[
                "-f",
                "bestvideo[height<=720][ext=mp4]+bestaudio[ext=m4a]",
                "-S",
                H264_SORT,
            ],
        }
    }

    /// Comma separated list of every mode name, for messages
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|mode| mode.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Case-insensitive lookup, `None` when the name is unknown
    pub fn lookup(name: &str) -> Option<Mode> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::lookup(s).ok_or_else(|| LaunchError::unknown_mode(s))
    }
}
