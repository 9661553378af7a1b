//! Opening sprites from the resource bundle

use tickface_core::traits::{SequenceError, SequenceSource};
use tickface_hal::{ResourceId, ResourceStore};

use crate::sequence::SpriteSequence;

const RESOURCE_SLOTS: usize = 5;

/// Resource bundle backed by static byte slices
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceTable {
    entries: [Option<&'static [u8]>; RESOURCE_SLOTS],
}

impl ResourceTable {
    pub const fn new() -> Self {
        Self {
            entries: [None; RESOURCE_SLOTS],
        }
    }

    /// Add or replace a resource
    pub const fn with(mut self, id: ResourceId, bytes: &'static [u8]) -> Self {
        self.entries[id as usize] = Some(bytes);
        self
    }

    pub fn insert(&mut self, id: ResourceId, bytes: &'static [u8]) {
        self.entries[usize::from(id.as_u8())] = Some(bytes);
    }
}

impl ResourceStore for ResourceTable {
    fn get(&self, id: ResourceId) -> Option<&'static [u8]> {
        self.entries[usize::from(id.as_u8())]
    }
}

/// Opens bundled sprites as frame sequences
pub struct SpriteLoader<R: ResourceStore> {
    store: R,
}

impl<R: ResourceStore> SpriteLoader<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }
}

impl<R: ResourceStore> SequenceSource for SpriteLoader<R> {
    type Sequence = SpriteSequence<'static>;

    fn open(&mut self, id: ResourceId) -> Result<Self::Sequence, SequenceError> {
        let bytes = self.store.get(id).ok_or(SequenceError::NotFound)?;

        let sequence = SpriteSequence::from_bytes(bytes).map_err(|e| {
            warn!("Resource {:?} is not a valid sprite: {:?}", id, e);
            SequenceError::from(e)
        })?;

        debug!("Opened sprite {:?} ({} bytes)", id, bytes.len());
        Ok(sequence)
    }
}
