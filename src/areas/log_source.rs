use anyhow::Context;
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the raw log text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Stdin,
    File(PathBuf),
}

impl LogSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => LogSource::File(path.to_path_buf()),
            _ => LogSource::Stdin,
        }
    }

    /// Read the whole log into memory; sorting and grouping need all of it.
    ///
    /// Bytes that are not valid UTF-8 (old Latin-1 comments, mostly) are
    /// replaced with U+FFFD and reported as a warning.
    pub fn read_to_string(&self) -> anyhow::Result<String> {
        let bytes = self.read_bytes()?;

        Ok(self.decode(&bytes))
    }

    fn read_bytes(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            LogSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("failed to read log from standard input")?;
                Ok(bytes)
            }
            LogSource::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read log file {}", path.display())),
        }
    }

    fn decode(&self, bytes: &[u8]) -> String {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                tracing::warn!("{self} is not valid UTF-8; invalid bytes were replaced");
                text
            }
        }
    }
}

impl std::fmt::Display for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogSource::Stdin => write!(f, "<stdin>"),
            LogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
