use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Show the first-parent history of the active branch, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let head = self.refs().read_head()?.clone();
        let database = self.database();

        for commit in RevList::new(|oid| database.load_commit(oid), head) {
            self.show_commit(&commit?)?;
        }

        Ok(())
    }

    pub(crate) fn show_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(
            writer,
            "{}",
            format!("commit {}", commit.object_id()).yellow()
        )?;
        if let [first, second, ..] = commit.parents() {
            writeln!(
                writer,
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
