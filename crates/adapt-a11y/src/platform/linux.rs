//! Linux speech-dispatcher integration
//!
//! Drives the `spd-say` client of speech-dispatcher. `spd-say` returns as
//! soon as the message is queued, so neither call blocks on playback.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{SpeechSynthesis, Utterance};
use crate::A11yError;

const SPD_SAY: &str = "spd-say";

/// speech-dispatcher bridge
#[derive(Debug, Clone)]
pub struct SpdSayDevice {
    program: PathBuf,
}

impl SpdSayDevice {
    /// Use an explicit `spd-say` binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Find `spd-say` on `PATH`
    pub fn detect() -> Option<Self> {
        let path = env::var_os("PATH")?;
        env::split_paths(&path)
            .map(|dir| dir.join(SPD_SAY))
            .find(|candidate| is_executable(candidate))
            .map(Self::with_program)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for an utterance
    pub fn speak_args(utterance: &Utterance) -> Vec<String> {
        // spd-say takes a bare language code and a rate in [-100, 100] around 0.
        let lang = utterance.lang.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        let rate = ((utterance.rate - 1.0) * 100.0).round().clamp(-100.0, 100.0) as i32;

        let mut args = Vec::with_capacity(6);
        if !lang.is_empty() {
            args.push("-l".to_string());
            args.push(lang);
        }
        args.push("-r".to_string());
        args.push(rate.to_string());
        args.push("--".to_string());
        args.push(utterance.text.clone());
        args
    }

    fn run(&self, args: &[String]) -> Result<(), A11yError> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| A11yError::Speech(format!("{}: {e}", self.program.display())))?;
        if status.success() {
            Ok(())
        } else {
            Err(A11yError::Speech(format!("{SPD_SAY} exited with {status}")))
        }
    }
}

impl SpeechSynthesis for SpdSayDevice {
    fn cancel(&mut self) {
        if let Err(err) = self.run(&["-C".to_string()]) {
            tracing::warn!(%err, "failed to cancel speech");
        }
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), A11yError> {
        self.run(&Self::speak_args(utterance))
    }

    fn is_available(&self) -> bool {
        is_executable(&self.program)
    }

    fn name(&self) -> &'static str {
        "linux-speech-dispatcher"
    }
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
