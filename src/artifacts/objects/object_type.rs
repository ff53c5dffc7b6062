use anyhow::Context;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Directory of the object store holding objects of this type
    pub fn store_dir(&self) -> &str {
        match self {
            ObjectType::Blob => "blobs",
            ObjectType::Commit => "commits",
        }
    }

    /// Read the `<type> <size>\0` header, leaving the reader at the body
    ///
    /// Returns the object type and the body size the header announces.
    pub fn read_header(reader: &mut impl BufRead) -> anyhow::Result<(ObjectType, usize)> {
        let mut type_field = Vec::new();
        reader.read_until(b' ', &mut type_field)?;
        if type_field.pop() != Some(b' ') {
            anyhow::bail!("Truncated object header");
        }

        let mut size_field = Vec::new();
        reader.read_until(b'\0', &mut size_field)?;
        if size_field.pop() != Some(b'\0') {
            anyhow::bail!("Truncated object header");
        }

        let object_type = ObjectType::try_from(std::str::from_utf8(&type_field)?)?;
        let size = std::str::from_utf8(&size_field)?
            .parse::<usize>()
            .context("Invalid object size")?;

        Ok((object_type, size))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(anyhow::anyhow!("Invalid object type: {value}")),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
