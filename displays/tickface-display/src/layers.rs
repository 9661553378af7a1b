//! In-memory layer stack
//!
//! Keeps the last content pushed to every layer plus the accumulated dirty
//! region. The host runtime renders from it; tests inspect it.

use heapless::{String, Vec};

use crate::backend::{Color, DisplayError, DisplaySurface, LayerId};
use crate::bitmap::Bitmap;
use crate::geometry::{Rect, Size};

/// Maximum number of layers
pub const MAX_LAYERS: usize = 8;

/// Maximum number of layers holding a bitmap at once
pub const MAX_BITMAP_LAYERS: usize = 2;

/// Maximum text length per layer
pub const MAX_TEXT_LEN: usize = 32;

/// Maximum fills per layer
pub const MAX_FILLS: usize = 4;

#[derive(Debug, Clone)]
struct Layer {
    id: LayerId,
    frame: Rect,
    text: Option<String<MAX_TEXT_LEN>>,
    fills: Vec<(Rect, Color), MAX_FILLS>,
    bitmap_updates: u32,
}

impl Layer {
    fn new(id: LayerId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            text: None,
            fills: Vec::new(),
            bitmap_updates: 0,
        }
    }
}

/// Layer stack held in memory
pub struct LayerStack {
    size: Size,
    /// Layers, bottom first
    layers: Vec<Layer, MAX_LAYERS>,
    bitmaps: [Option<(LayerId, Bitmap)>; MAX_BITMAP_LAYERS],
    /// Union of regions marked dirty since the last `take_dirty`
    dirty: Option<Rect>,
}

impl LayerStack {
    /// Create an empty stack for a screen of `size`
    pub fn new(size: Size) -> Self {
        Self {
            size,
            layers: Vec::new(),
            bitmaps: [None, None],
            dirty: None,
        }
    }

    fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn layer_mut(&mut self, id: LayerId) -> Result<&mut Layer, DisplayError> {
        self.layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(DisplayError::UnknownLayer)
    }

    /// Layer ids, bottom first
    pub fn layer_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.iter().map(|l| l.id)
    }

    /// Check if a layer exists
    pub fn has_layer(&self, id: LayerId) -> bool {
        self.layer(id).is_some()
    }

    /// Bitmap currently shown in a layer
    pub fn bitmap(&self, id: LayerId) -> Option<&Bitmap> {
        self.bitmaps
            .iter()
            .flatten()
            .find(|(owner, _)| *owner == id)
            .map(|(_, bmp)| bmp)
    }

    /// Number of times a bitmap was pushed to a layer
    pub fn bitmap_updates(&self, id: LayerId) -> u32 {
        self.layer(id).map(|l| l.bitmap_updates).unwrap_or(0)
    }

    /// Text currently shown in a layer
    pub fn text(&self, id: LayerId) -> Option<&str> {
        self.layer(id).and_then(|l| l.text.as_deref())
    }

    /// Fills currently drawn in a layer
    pub fn fills(&self, id: LayerId) -> &[(Rect, Color)] {
        self.layer(id).map(|l| l.fills.as_slice()).unwrap_or(&[])
    }

    /// Region waiting to be redrawn
    pub fn dirty_region(&self) -> Option<Rect> {
        self.dirty
    }

    /// Check if anything needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Take the dirty region, marking the stack clean
    pub fn take_dirty(&mut self) -> Option<Rect> {
        self.dirty.take()
    }
}

impl DisplaySurface for LayerStack {
    fn size(&self) -> Size {
        self.size
    }

    fn add_layer(&mut self, id: LayerId, frame: Rect) -> Result<(), DisplayError> {
        if let Ok(layer) = self.layer_mut(id) {
            layer.frame = frame;
            return Ok(());
        }
        self.layers
            .push(Layer::new(id, frame))
            .map_err(|_| DisplayError::TooManyLayers)
    }

    fn remove_layer(&mut self, id: LayerId) -> Result<(), DisplayError> {
        let index = self
            .layers
            .iter()
            .position(|l| l.id == id)
            .ok_or(DisplayError::UnknownLayer)?;
        self.layers.remove(index);

        for slot in self.bitmaps.iter_mut() {
            if matches!(slot, Some((owner, _)) if *owner == id) {
                *slot = None;
            }
        }
        Ok(())
    }

    fn set_bitmap(&mut self, id: LayerId, bitmap: &Bitmap) -> Result<(), DisplayError> {
        self.layer_mut(id)?;

        // Reuse the layer's slot if it has one
        if let Some((_, existing)) = self
            .bitmaps
            .iter_mut()
            .flatten()
            .find(|(owner, _)| *owner == id)
        {
            existing.clone_from(bitmap);
        } else {
            let slot = self
                .bitmaps
                .iter_mut()
                .find(|slot| slot.is_none())
                .ok_or(DisplayError::BufferOverflow)?;
            *slot = Some((id, bitmap.clone()));
        }

        self.layer_mut(id)?.bitmap_updates += 1;
        Ok(())
    }

    fn set_text(&mut self, id: LayerId, text: &str) -> Result<(), DisplayError> {
        let mut s = String::new();
        s.push_str(text).map_err(|_| DisplayError::BufferOverflow)?;
        self.layer_mut(id)?.text = Some(s);
        Ok(())
    }

    fn clear_fills(&mut self, id: LayerId) -> Result<(), DisplayError> {
        self.layer_mut(id)?.fills.clear();
        Ok(())
    }

    fn fill_rect(&mut self, id: LayerId, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.layer_mut(id)?
            .fills
            .push((rect, color))
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn mark_dirty(&mut self, id: LayerId) -> Result<(), DisplayError> {
        let frame = self.layer(id).ok_or(DisplayError::UnknownLayer)?.frame;
        self.dirty = Some(match self.dirty {
            Some(region) => region.union(&frame),
            None => frame,
        });
        Ok(())
    }

    fn layer_frame(&self, id: LayerId) -> Option<Rect> {
        self.layer(id).map(|l| l.frame)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LayerStack {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LayerStack[");
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", layer.id);
        }
        defmt::write!(f, "]");
    }
}
