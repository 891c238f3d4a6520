use std::cell::RefCell;
use std::rc::Rc;

use roster_common::error::StoreError;

use super::{Snapshot, SnapshotStore, decode, encode};

/// Keeps the encoded snapshot in memory.
///
/// Clones share the same contents, so a clone handed to one registry sees
/// what another registry saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding `text`, which does not have to be valid.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(text.into()))),
        }
    }

    /// The document as last written.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<Snapshot>, StoreError> {
        match self.contents.borrow().as_deref() {
            Some(text) => decode(text).map(Some),
            None => Ok(None),
        }
    }

    fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let text: String = encode(snapshot)?;
        *self.contents.borrow_mut() = Some(text);
        Ok(())
    }

    fn describe(&self) -> String {
        String::from("<memory>")
    }
}
