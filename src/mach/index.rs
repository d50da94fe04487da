use crate::rec::{DecodeError, ItemFlags, MenuFile, MenuItem};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub record: usize,
    pub flags: ItemFlags,
    pub key: String,
}

/// The live items of one open menu in file order, with a case-insensitive
/// key lookup. Several items may share a key.
#[derive(Debug, Clone, Default)]
pub struct MenuIndex {
    entries: Vec<IndexEntry>,
    items: Vec<MenuItem>,
    keys: HashMap<String, Vec<usize>>,
}

fn fold_key(key: &str) -> String {
    key.to_ascii_uppercase()
}

impl MenuIndex {
    pub fn build(file: &MenuFile) -> Result<MenuIndex, DecodeError> {
        let mut index = MenuIndex::default();
        for (record, item) in file.items() {
            index.push(record, item?);
        }
        Ok(index)
    }

    pub fn from_items<I: IntoIterator<Item = MenuItem>>(items: I) -> MenuIndex {
        let mut index = MenuIndex::default();
        for (n, item) in items.into_iter().enumerate() {
            index.push(n + 1, item);
        }
        index
    }

    fn push(&mut self, record: usize, item: MenuItem) {
        if item.is_deleted() {
            return;
        }
        let slot = self.items.len();
        if !item.key.is_empty() {
            self.keys.entry(fold_key(&item.key)).or_default().push(slot);
        }
        self.entries.push(IndexEntry {
            record,
            flags: item.flags,
            key: item.key.clone(),
        });
        self.items.push(item);
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IndexEntry, &MenuItem)> {
        self.entries.iter().zip(self.items.iter())
    }

    /// Items whose key matches `key`, in file order.
    pub fn lookup(&self, key: &str) -> Vec<&MenuItem> {
        match self.keys.get(&fold_key(key)) {
            Some(slots) => slots.iter().map(|&slot| &self.items[slot]).collect(),
            None => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
