use super::{DecodeError, Error, MenuHeader, MenuItem, RECORD_SIZE};
use std::fs;
use std::path::{Path, PathBuf};

/// The raw contents of a `.mnu` file, split into records on demand.
#[derive(Debug, Clone)]
pub struct MenuFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl MenuFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MenuFile, Error> {
        let path = path.as_ref().to_path_buf();
        let data = fs::read(&path)?;
        Ok(MenuFile { path, data })
    }

    pub fn from_bytes(data: Vec<u8>) -> MenuFile {
        MenuFile {
            path: PathBuf::new(),
            data,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole records present; a trailing partial record is not counted.
    pub fn record_count(&self) -> usize {
        self.data.len() / RECORD_SIZE
    }

    pub fn record(&self, index: usize) -> Result<&[u8], DecodeError> {
        let start = index * RECORD_SIZE;
        let end = start + RECORD_SIZE;
        if end > self.data.len() {
            return Err(DecodeError::Truncated {
                record: index,
                expected: end,
                actual: self.data.len(),
            });
        }
        Ok(&self.data[start..end])
    }

    pub fn header(&self) -> Result<MenuHeader, DecodeError> {
        MenuHeader::decode(self.record(0)?)
    }

    pub fn item(&self, index: usize) -> Result<MenuItem, DecodeError> {
        MenuItem::decode(index, self.record(index)?)
    }

    /// Every item record in file order, paired with its record number.
    pub fn items(&self) -> impl Iterator<Item = (usize, Result<MenuItem, DecodeError>)> + '_ {
        (1..self.record_count()).map(move |index| (index, self.item(index)))
    }
}

pub fn write_menu<P: AsRef<Path>>(
    path: P,
    header: &MenuHeader,
    items: &[MenuItem],
) -> Result<(), Error> {
    let mut data = Vec::with_capacity((items.len() + 1) * RECORD_SIZE);
    data.extend_from_slice(&header.encode());
    for item in items {
        data.extend_from_slice(&item.encode());
    }
    fs::write(path, data)?;
    Ok(())
}
