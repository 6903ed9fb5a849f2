use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};
use log::info;
use std::path::Path;

use crate::error::{BlurError, Result};
use crate::filter::{gaussian_blur, BlurParams};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// One channel
    Luma,
    /// Four channels, alpha last
    Rgba,
}

impl TextureFormat {
    pub fn channels(&self) -> usize {
        match self {
            TextureFormat::Luma => 1,
            TextureFormat::Rgba => 4,
        }
    }
}

/// An 8-bit image held as one `Grid` per channel, values in `0.0..=255.0`
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    format: TextureFormat,
    channels: Vec<Grid>,
}

impl Texture {
    /// Single-channel texture holding `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        Texture {
            format: TextureFormat::Luma,
            channels: vec![grid.clone()],
        }
    }

    pub fn from_image(image: &DynamicImage) -> Self {
        if image.color().has_color() {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            let mut channels = vec![Grid::zeros(width as usize, height as usize); 4];
            for (x, y, pixel) in rgba.enumerate_pixels() {
                for (c, channel) in channels.iter_mut().enumerate() {
                    channel.set(x as usize, y as usize, pixel.0[c] as f32);
                }
            }
            Texture {
                format: TextureFormat::Rgba,
                channels,
            }
        } else {
            let luma = image.to_luma8();
            let (width, height) = luma.dimensions();
            let mut grid = Grid::zeros(width as usize, height as usize);
            for (x, y, pixel) in luma.enumerate_pixels() {
                grid.set(x as usize, y as usize, pixel.0[0] as f32);
            }
            Texture {
                format: TextureFormat::Luma,
                channels: vec![grid],
            }
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path.as_ref())?;
        let texture = Texture::from_image(&image);
        info!(
            "Loaded {:?} texture {}x{} from {}",
            texture.format,
            texture.width(),
            texture.height(),
            path.as_ref().display()
        );
        Ok(texture)
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.channels[0].width()
    }

    pub fn height(&self) -> usize {
        self.channels[0].height()
    }

    pub fn channel(&self, index: usize) -> Result<&Grid> {
        self.channels.get(index).ok_or(BlurError::MissingChannel(index))
    }

    /// Blurs every colour channel. Alpha, when present, comes out opaque.
    pub fn blur(&self, params: &BlurParams) -> Result<Texture> {
        let mut channels = Vec::with_capacity(self.channels.len());
        for (index, channel) in self.channels.iter().enumerate() {
            if self.format == TextureFormat::Rgba && index == 3 {
                let (width, height) = channel.shape();
                channels.push(Grid::from_vec(width, height, vec![255.0; width * height])?);
            } else {
                channels.push(gaussian_blur(channel, params)?);
            }
        }

        Ok(Texture {
            format: self.format,
            channels,
        })
    }

    pub fn to_image(&self) -> DynamicImage {
        let (width, height) = (self.width() as u32, self.height() as u32);
        match self.format {
            TextureFormat::Luma => {
                let grid = &self.channels[0];
                let image: GrayImage = ImageBuffer::from_fn(width, height, |x, y| {
                    Luma([to_u8(grid.get(x as usize, y as usize))])
                });
                DynamicImage::ImageLuma8(image)
            }
            TextureFormat::Rgba => {
                let image: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
                    let (x, y) = (x as usize, y as usize);
                    Rgba([
                        to_u8(self.channels[0].get(x, y)),
                        to_u8(self.channels[1].get(x, y)),
                        to_u8(self.channels[2].get(x, y)),
                        to_u8(self.channels[3].get(x, y)),
                    ])
                });
                DynamicImage::ImageRgba8(image)
            }
        }
    }

    /// Writes the texture, picking the encoder from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_image().save(path.as_ref())?;
        info!("Saved texture to {}", path.as_ref().display());
        Ok(())
    }
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
