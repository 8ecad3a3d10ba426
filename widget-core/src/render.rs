//! The seam between controllers and whatever the host actually displays.
//!
//! A controller never touches markup; it pushes ordered entries into a
//! [`RenderTarget`] and appends to them while streaming. Entries are
//! append-only: the core never reorders or removes what it rendered.

use serde::{Deserialize, Serialize};

/// Who a transcript entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Handle to one appended entry, valid for the lifetime of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryId(usize);

impl EntryId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered, append-only render surface.
///
/// Implementations map entries onto host display primitives (DOM nodes,
/// terminal lines, a log buffer). `append` extends an existing entry in
/// place, which is how streamed fragments land.
pub trait RenderTarget: Send {
    fn push(&mut self, role: Role, text: &str) -> EntryId;
    fn append(&mut self, entry: EntryId, text: &str);
}

/// Vec-backed render target for tests and headless consumers.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<(Role, String)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Role, String)] {
        &self.entries
    }

    pub fn text_of(&self, entry: EntryId) -> Option<&str> {
        self.entries.get(entry.index()).map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RenderTarget for Transcript {
    fn push(&mut self, role: Role, text: &str) -> EntryId {
        self.entries.push((role, text.to_string()));
        EntryId::new(self.entries.len() - 1)
    }

    fn append(&mut self, entry: EntryId, text: &str) {
        if let Some((_, existing)) = self.entries.get_mut(entry.index()) {
            existing.push_str(text);
        }
    }
}
