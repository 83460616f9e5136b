//! Reader for the IDX binary image/label pair format (MNIST and derivatives).
//!
//! # IDX3 image file layout
//! ```text
//! bytes  0-3:   0x00 0x00 0x08 0x03   (magic: uint8 data, 3 dimensions)
//! bytes  4-7:   N           (number of images, big-endian u32)
//! bytes  8-11:  rows        (image height in pixels, big-endian u32)
//! bytes 12-15:  cols        (image width in pixels, big-endian u32)
//! bytes 16..:   N * rows * cols bytes, row-major, uint8
//! ```
//!
//! # IDX1 label file layout
//! ```text
//! bytes  0-3:   0x00 0x00 0x08 0x01   (magic: uint8 data, 1 dimension)
//! bytes  4-7:   N           (number of labels, big-endian u32)
//! bytes  8..:   N bytes, one label each
//! ```

use std::path::Path;

use crate::errors::{NetworkError, Result};

pub const IMAGE_MAGIC: u32 = 0x0000_0803;
pub const LABEL_MAGIC: u32 = 0x0000_0801;

const IMAGE_HEADER_LEN: usize = 16;
const LABEL_HEADER_LEN: usize = 8;

/// Raw images and labels read from an IDX pair. Pixels are untouched bytes;
/// see `normalize_pixels` for the float conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct IdxData {
    pub rows: usize,
    pub cols: usize,
    /// One flattened, row-major raster per image.
    pub images: Vec<Vec<u8>>,
    pub labels: Vec<usize>,
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

/// Parses an IDX3 image file held in memory.
pub fn parse_images(bytes: &[u8]) -> Result<(usize, usize, Vec<Vec<u8>>)> {
    if bytes.len() < IMAGE_HEADER_LEN {
        return Err(NetworkError::data_file(format!(
            "IDX image file too short: expected at least {} header bytes, got {}",
            IMAGE_HEADER_LEN,
            bytes.len()
        )));
    }

    let magic = read_u32(bytes, 0);
    if magic != IMAGE_MAGIC {
        return Err(NetworkError::data_file(format!(
            "IDX image file magic number mismatch (got {:#010x}, expected {:#010x})",
            magic, IMAGE_MAGIC
        )));
    }

    let n_items = read_u32(bytes, 4) as usize;
    let rows = read_u32(bytes, 8) as usize;
    let cols = read_u32(bytes, 12) as usize;

    let n_pixels = rows.checked_mul(cols).ok_or_else(|| {
        NetworkError::data_file(format!("IDX image file: rows * cols overflows ({}x{})", rows, cols))
    })?;
    if n_pixels == 0 {
        return Err(NetworkError::data_file(format!(
            "IDX image file: image dimensions must be non-zero, got {}x{}",
            rows, cols
        )));
    }
    let data_len = n_items.checked_mul(n_pixels).ok_or_else(|| {
        NetworkError::data_file(format!(
            "IDX image file: {} items of {} pixels overflows",
            n_items, n_pixels
        ))
    })?;

    let data = &bytes[IMAGE_HEADER_LEN..];
    if data.len() < data_len {
        return Err(NetworkError::data_file(format!(
            "IDX image file too short: header declares {} items of {}x{} pixels \
             ({} data bytes), but only {} follow the header",
            n_items, rows, cols, data_len, data.len()
        )));
    }

    let images = data[..data_len].chunks_exact(n_pixels).map(<[u8]>::to_vec).collect();
    Ok((rows, cols, images))
}

/// Parses an IDX1 label file held in memory.
pub fn parse_labels(bytes: &[u8]) -> Result<Vec<usize>> {
    if bytes.len() < LABEL_HEADER_LEN {
        return Err(NetworkError::data_file(format!(
            "IDX label file too short: expected at least {} header bytes, got {}",
            LABEL_HEADER_LEN,
            bytes.len()
        )));
    }

    let magic = read_u32(bytes, 0);
    if magic != LABEL_MAGIC {
        return Err(NetworkError::data_file(format!(
            "IDX label file magic number mismatch (got {:#010x}, expected {:#010x})",
            magic, LABEL_MAGIC
        )));
    }

    let n_items = read_u32(bytes, 4) as usize;
    let data = &bytes[LABEL_HEADER_LEN..];
    if data.len() < n_items {
        return Err(NetworkError::data_file(format!(
            "IDX label file too short: header declares {} labels but only {} follow the header",
            n_items,
            data.len()
        )));
    }

    Ok(data[..n_items].iter().map(|&b| b as usize).collect())
}

/// Parses an image file and its label file; the item counts must agree.
pub fn parse_idx_pair(image_bytes: &[u8], label_bytes: &[u8]) -> Result<IdxData> {
    let (rows, cols, images) = parse_images(image_bytes)?;
    let labels = parse_labels(label_bytes)?;

    if images.len() != labels.len() {
        return Err(NetworkError::data_file(format!(
            "IDX file mismatch: image file declares {} items but label file declares {}",
            images.len(),
            labels.len()
        )));
    }

    Ok(IdxData { rows, cols, images, labels })
}

/// Reads and parses an IDX image/label pair from disk.
pub fn load_idx_pair(image_path: impl AsRef<Path>, label_path: impl AsRef<Path>) -> Result<IdxData> {
    let image_bytes = std::fs::read(image_path.as_ref())?;
    let label_bytes = std::fs::read(label_path.as_ref())?;
    let data = parse_idx_pair(&image_bytes, &label_bytes)?;
    log::debug!(
        "read {} images of {}x{} from {}",
        data.images.len(),
        data.rows,
        data.cols,
        image_path.as_ref().display()
    );
    Ok(data)
}
