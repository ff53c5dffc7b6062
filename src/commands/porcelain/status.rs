use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::status::status_info::StatusReport;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let report = self.status_report()?;

        write!(self.writer(), "{report}")?;
        Ok(())
    }

    pub fn status_report(&self) -> anyhow::Result<StatusReport> {
        let head = self.head_commit()?;

        let mut working = FileMap::new();
        for name in self.workspace().list_files()? {
            if let Some(oid) = self.workspace().hash_file(&name)? {
                working.insert(name, oid);
            }
        }

        Ok(StatusReport::new(
            self.refs(),
            head.files(),
            self.index(),
            &working,
        ))
    }
}
