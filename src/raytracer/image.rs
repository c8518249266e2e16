use glam::Vec4;
use image::{Rgba, RgbaImage};

pub type Tile = Image;

/// RGBA framebuffer with channels stored as f32 in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    extent: (usize, usize),
    data: Box<[f32]>,
}

// Number of channels per pixel
const NUM_PIXEL_CHANNELS: usize = 4;

impl Image {
    pub fn new(extent: (usize, usize)) -> Self {
        assert!(extent.0 > 0 && extent.1 > 0, "Invalid image size");
        Self {
            extent,
            data: vec![0.0; extent.0 * extent.1 * NUM_PIXEL_CHANNELS].into_boxed_slice(),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        self.extent
    }

    pub fn width(&self) -> usize {
        self.extent.0
    }

    pub fn height(&self) -> usize {
        self.extent.1
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.extent.0 && y < self.extent.1,
            "Invalid pixel coordinates ({}, {})",
            x,
            y
        );
        (y * self.extent.0 + x) * NUM_PIXEL_CHANNELS
    }

    pub fn get(&self, x: usize, y: usize) -> Vec4 {
        let offset = self.offset(x, y);
        Vec4::from_slice(&self.data[offset..offset + NUM_PIXEL_CHANNELS])
    }

    /// Store a pixel, clamping every channel to [0, 1].
    pub fn set(&mut self, x: usize, y: usize, value: Vec4) {
        let offset = self.offset(x, y);
        value
            .clamp(Vec4::ZERO, Vec4::ONE)
            .write_to_slice(&mut self.data[offset..offset + NUM_PIXEL_CHANNELS]);
    }

    pub fn insert_tile(&mut self, tile: &Tile, pos: (usize, usize)) {
        assert!(
            pos.0 + tile.width() <= self.width() && pos.1 + tile.height() <= self.height(),
            "Invalid image tile insertion"
        );
        for ty in 0..tile.height() {
            for tx in 0..tile.width() {
                self.set(pos.0 + tx, pos.1 + ty, tile.get(tx, ty));
            }
        }
    }

    /// 8 bit RGBA bytes, row major from the top row.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|v| to_byte(*v)).collect()
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let pixel = self.get(x as usize, y as usize);
            Rgba([
                to_byte(pixel.x),
                to_byte(pixel.y),
                to_byte(pixel.z),
                to_byte(pixel.w),
            ])
        })
    }
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
