//! Output plumbing shared by the commands
//!
//! Reports can be long, so when stdout is a terminal they go through the
//! `minus` pager instead of being written directly.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set to anything.
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Sink that buffers a report inside a `minus` pager
///
/// `Chronicle` writes through `Box<dyn Write>`, so the pager has to look like
/// any other writer. Nothing is shown until `minus::page_all` runs after the
/// last commit has been rendered.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // fragments are whole `str`s; the lossy decode never replaces anything
        let text = String::from_utf8_lossy(buf);
        self.pager
            .push_str(text)
            .map_err(|e| io::Error::other(format!("pager rejected report text: {e}")))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only for an interactive stdout, and never when `NO_PAGER` is set.
pub fn should_page(no_pager_flag: bool) -> bool {
    !no_pager_flag && std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}
