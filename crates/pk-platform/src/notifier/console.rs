use std::io::{self, Write};

use pk_core::ports::NotifierPort;
use pk_core::{Notice, NoticeLevel};

/// Prints success notices to stdout and failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn write_notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
        writeln!(out, "{}", notice.message)?;
        out.flush()
    }
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        let result = match notice.level {
            NoticeLevel::Success => Self::write_notice(&mut io::stdout().lock(), notice),
            NoticeLevel::Failure => Self::write_notice(&mut io::stderr().lock(), notice),
        };
        // a closed pipe leaves nowhere to report to
        if let Err(err) = result {
            tracing::debug!(error = %err, "Failed to print notice");
        }
    }
}
