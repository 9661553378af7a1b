//! Bundled sprite resources
//!
//! Multi-frame images are shipped in the resource bundle as postcard
//! encoded sprites:
//! ```text
//! ┌──────────────────────────────────────────┬──────────────────────────────┐
//! │ HEADER                                   │ FRAMES                       │
//! │ magic "TFSP" · version · w · h · format  │ count · { delay_ms, pixels }*│
//! └──────────────────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! Frame pixels are borrowed straight from the bundle; decoding a frame is
//! a copy into the caller's frame buffer.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod format;
pub mod loader;
pub mod sequence;

pub use format::{
    encode, Sprite, SpriteError, SpriteFrame, SpriteHeader, MAX_FRAMES, SPRITE_MAGIC,
    SPRITE_VERSION,
};
pub use loader::{ResourceTable, SpriteLoader};
pub use sequence::SpriteSequence;
