//! Input format detection

use crate::FormatChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Cvs,
    SvnXml,
}

impl LogFormat {
    /// Guess the format from the first non-whitespace character: XML starts
    /// with `<`, anything else (including empty input) is read as CVS.
    pub fn sniff(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('<') => LogFormat::SvnXml,
            _ => LogFormat::Cvs,
        }
    }

    pub fn resolve(choice: FormatChoice, text: &str) -> Self {
        match choice {
            FormatChoice::Auto => Self::sniff(text),
            FormatChoice::Cvs => LogFormat::Cvs,
            FormatChoice::Svn => LogFormat::SvnXml,
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Cvs => write!(f, "CVS"),
            LogFormat::SvnXml => write!(f, "Subversion XML"),
        }
    }
}
