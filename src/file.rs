use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A dependency file held open for reading and rewriting in place. The
/// handle is closed when this value is dropped, on every exit path.
pub(crate) struct DependencyFile {
    path: PathBuf,
    file: File,
}

impl DependencyFile {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub(crate) fn read(&mut self) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        self.file
            .read_to_end(&mut content)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(content)
    }

    /// Overwrites the whole file with `content`, cutting off anything left
    /// past its end.
    pub(crate) fn replace(&mut self, content: &[u8]) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(0))
            .with_context(|| format!("failed to seek {}", self.path.display()))?;
        self.file
            .write_all(content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        self.file
            .set_len(content.len() as u64)
            .with_context(|| format!("failed to truncate {}", self.path.display()))?;
        self.file
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn replace_truncates_longer_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.txt");
        fs::write(&path, "zebra 1.0\n\nyak 2.0\n\nxylophone 3.0\n").unwrap();

        let mut file = DependencyFile::open(&path).unwrap();
        assert_eq!(file.read().unwrap(), b"zebra 1.0\n\nyak 2.0\n\nxylophone 3.0\n");
        file.replace(b"a 1\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "a 1\n");
    }

    #[test]
    fn replace_grows_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.txt");
        fs::write(&path, "").unwrap();

        let mut file = DependencyFile::open(&path).unwrap();
        assert!(file.read().unwrap().is_empty());
        file.replace(b"apple 1.0\n\nbanana 2.0\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "apple 1.0\n\nbanana 2.0\n");
    }

    #[test]
    fn open_missing_file_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");
        let err = DependencyFile::open(&path).err().unwrap();
        assert!(format!("{err}").contains("missing.txt"));
    }
}
