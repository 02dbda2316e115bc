mod bitmap;
mod header;

use bitmap::BitmapPayload;
use header::{IcoDirectoryEntry, IcoFileHeader};

/// Edge length of the embedded image in pixels
const ICON_SIZE: u8 = 16;

/// Bit depth written into the directory entry. The embedded bitmap itself
/// declares 24, existing icons depend on the 32 here.
pub const DIRECTORY_BITS_PER_PIXEL: u16 = 32;

/// Image data follows the header and the single directory entry
pub const IMAGE_DATA_OFFSET: u32 = (IcoFileHeader::LEN + IcoDirectoryEntry::LEN) as u32;

/// Assembles a single-image ICO file around the embedded bitmap.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcoBuilder {
    payload: BitmapPayload,
}

impl IcoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves the embedded image.
    pub fn payload(&self) -> &BitmapPayload {
        &self.payload
    }

    pub fn file_header(&self) -> IcoFileHeader {
        IcoFileHeader::single_icon()
    }

    pub fn directory_entry(&self) -> IcoDirectoryEntry {
        IcoDirectoryEntry {
            width: ICON_SIZE,
            height: ICON_SIZE,
            color_count: 0,
            reserved: 0,
            color_planes: 1,
            bits_per_pixel: DIRECTORY_BITS_PER_PIXEL,
            size: self.payload.byte_len(),
            offset: IMAGE_DATA_OFFSET,
        }
    }

    /// Serializes header, directory entry and image data into one buffer.
    pub fn build(&self) -> Vec<u8> {
        let header = self.file_header();
        let entry = self.directory_entry();
        let image = self.payload.bytes();

        tracing::debug!(
            "Building icon: {}x{} px, {} bytes of image data at offset {}",
            entry.width,
            entry.height,
            entry.size,
            entry.offset
        );

        let mut out = Vec::with_capacity(IMAGE_DATA_OFFSET as usize + image.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&entry.to_bytes());
        out.extend_from_slice(image);
        out
    }
}
