use byteorder::{ByteOrder, LittleEndian};

/// 16x16, 24 bpp, uncompressed BMP stream: `BM` file header followed by a
/// BITMAPINFOHEADER.
const FAVICON_BITMAP: [u8; 54] = [
    0x42, 0x4d, 0x40, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x36, 0x00, 0x00, 0x00, 0x28, 0x00,
    0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x18, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x0a, 0x01, 0x00, 0x00, 0x13, 0x0b, 0x00, 0x00, 0x13, 0x0b, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// Field offsets inside the BMP stream
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BIT_COUNT_OFFSET: usize = 28;

/// The image embedded into the icon. The ICO layer never looks inside it,
/// only the accessors below do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapPayload {
    bytes: &'static [u8],
}

impl BitmapPayload {
    /// The built-in favicon image.
    pub const fn favicon() -> Self {
        Self {
            bytes: &FAVICON_BITMAP,
        }
    }

    /// Retrieves the raw stream, copied verbatim into the icon.
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Length of the stream in bytes.
    pub fn byte_len(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// Width as declared by the stream's own info header.
    pub fn declared_width(&self) -> i32 {
        LittleEndian::read_i32(&self.bytes[WIDTH_OFFSET..])
    }

    /// Height as declared by the stream's own info header.
    pub fn declared_height(&self) -> i32 {
        LittleEndian::read_i32(&self.bytes[HEIGHT_OFFSET..])
    }

    /// Bits per pixel as declared by the stream's own info header.
    pub fn declared_bit_count(&self) -> u16 {
        LittleEndian::read_u16(&self.bytes[BIT_COUNT_OFFSET..])
    }
}

impl Default for BitmapPayload {
    fn default() -> Self {
        Self::favicon()
    }
}
