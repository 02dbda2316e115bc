use byteorder::{ByteOrder, LittleEndian};

/// Resource type value marking the container as an icon (2 would be a cursor)
const RESOURCE_TYPE_ICON: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoFileHeader {
    /// Always zero
    pub reserved: u16,

    /// The resource type stored in the file
    pub resource_type: u16,

    /// The number of directory entries following the header
    pub image_count: u16,
}

impl IcoFileHeader {
    pub const LEN: usize = 6;

    /// Header of a file holding exactly one icon image.
    pub const fn single_icon() -> Self {
        Self {
            reserved: 0,
            resource_type: RESOURCE_TYPE_ICON,
            image_count: 1,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0u8; Self::LEN];
        LittleEndian::write_u16(&mut buf[0..2], self.reserved);
        LittleEndian::write_u16(&mut buf[2..4], self.resource_type);
        LittleEndian::write_u16(&mut buf[4..6], self.image_count);
        buf
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoDirectoryEntry {
    /// The width of the image in pixels
    pub width: u8,

    /// The height of the image in pixels
    pub height: u8,

    /// Palette size, 0 when the bit depth decides
    pub color_count: u8,

    /// Always zero
    pub reserved: u8,

    /// The number of color planes
    pub color_planes: u16,

    /// The bit depth advertised to readers of the directory
    pub bits_per_pixel: u16,

    /// The length of the image data in bytes
    pub size: u32,

    /// Where the image data starts, counted from the beginning of the file
    pub offset: u32,
}

impl IcoDirectoryEntry {
    pub const LEN: usize = 16;

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0u8; Self::LEN];
        buf[0] = self.width;
        buf[1] = self.height;
        buf[2] = self.color_count;
        buf[3] = self.reserved;
        LittleEndian::write_u16(&mut buf[4..6], self.color_planes);
        LittleEndian::write_u16(&mut buf[6..8], self.bits_per_pixel);
        LittleEndian::write_u32(&mut buf[8..12], self.size);
        LittleEndian::write_u32(&mut buf[12..16], self.offset);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_icon_header_layout() {
        assert_eq!(
            IcoFileHeader::single_icon().to_bytes(),
            [0x00, 0x00, 0x01, 0x00, 0x01, 0x00]
        );
    }

    #[test]
    fn directory_entry_layout() {
        let entry = IcoDirectoryEntry {
            width: 16,
            height: 16,
            color_count: 0,
            reserved: 0,
            color_planes: 1,
            bits_per_pixel: 32,
            size: 0x0102_0304,
            offset: 22,
        };

        assert_eq!(
            entry.to_bytes(),
            [16, 16, 0, 0, 1, 0, 32, 0, 0x04, 0x03, 0x02, 0x01, 22, 0, 0, 0]
        );
    }
}
