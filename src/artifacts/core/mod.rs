//! Shared utilities

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding command output into a static `minus` pager
///
/// The pager is shown once the command has finished writing:
///
/// ```ignore
/// let pager = Pager::new();
/// let repository = Repository::open(&path, Box::new(PagerWriter::new(pager.clone())), config)?;
/// repository.log()?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // commit messages and file names may hold arbitrary bytes
        let text = String::from_utf8_lossy(buf);
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
