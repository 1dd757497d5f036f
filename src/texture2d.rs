use std::path::Path;

use image::{DynamicImage, Rgba32FImage, RgbaImage};
use nalgebra::{Vector2, Vector4};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CrtError, CrtResult};

/// Anything the CRT filter can read colours from.
///
/// UVs follow the GL convention: `v = 0` is the bottom row. Coordinates
/// outside [0,1] must not panic.
pub trait Sampler: Send + Sync {
    fn sample(&self, uv: Vector2<f32>) -> Vector4<f32>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFilter {
    Nearest,
    #[default]
    Linear,
}

/// RGBA f32 texels, row 0 at the top, clamp-to-edge addressing.
#[derive(Debug, Clone)]
pub struct Texture2D {
    pixels: Vec<Vector4<f32>>,
    width: usize,
    height: usize,
    filter: SampleFilter,
}

impl Texture2D {
    /// Decodes an image file. Empty images are rejected.
    pub fn load(path: impl AsRef<Path>) -> CrtResult<Self> {
        let path = path.as_ref();
        let texture: Self = image::open(path)?.into();
        if texture.is_empty() {
            return Err(CrtError::EmptyImage { path: path.to_path_buf() });
        }

        debug!(path = %path.display(), width = texture.width, height = texture.height, "loaded texture");
        Ok(texture)
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Vector4<f32>) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        Self {
            pixels,
            width,
            height,
            filter: SampleFilter::default(),
        }
    }

    pub fn uniform(width: usize, height: usize, colour: Vector4<f32>) -> Self {
        Self::from_fn(width, height, |_, _| colour)
    }

    pub fn with_filter(mut self, filter: SampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn filter(&self) -> SampleFilter {
        self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Texel at column `x`, counting rows from the bottom. Indices are clamped.
    #[inline(always)]
    fn texel(&self, x: isize, y_from_bottom: isize) -> Vector4<f32> {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y_from_bottom.clamp(0, self.height as isize - 1) as usize;
        self.pixels[(self.height - 1 - y) * self.width + x]
    }

    fn sample_nearest(&self, u: f32, v: f32) -> Vector4<f32> {
        let x = (u * self.width as f32).floor() as isize;
        let y = (v * self.height as f32).floor() as isize;
        self.texel(x, y)
    }

    fn sample_linear(&self, u: f32, v: f32) -> Vector4<f32> {
        let fx = u * self.width as f32 - 0.5;
        let fy = v * self.height as f32 - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;
        let (x0, y0) = (x0 as isize, y0 as isize);

        let bottom = self.texel(x0, y0) * (1.0 - tx) + self.texel(x0 + 1, y0) * tx;
        let top = self.texel(x0, y0 + 1) * (1.0 - tx) + self.texel(x0 + 1, y0 + 1) * tx;
        bottom * (1.0 - ty) + top * ty
    }
}

impl Sampler for Texture2D {
    fn sample(&self, uv: Vector2<f32>) -> Vector4<f32> {
        if self.is_empty() {
            return Vector4::zeros();
        }

        match self.filter {
            SampleFilter::Nearest => self.sample_nearest(uv.x, uv.y),
            SampleFilter::Linear => self.sample_linear(uv.x, uv.y),
        }
    }
}

impl From<RgbaImage> for Texture2D {
    fn from(value: RgbaImage) -> Self {
        Self {
            pixels: value
                .pixels()
                .map(|p| Vector4::new(p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32) / 255.0)
                .collect(),
            width: value.width() as usize,
            height: value.height() as usize,
            filter: SampleFilter::default(),
        }
    }
}

impl From<Rgba32FImage> for Texture2D {
    fn from(value: Rgba32FImage) -> Self {
        Self {
            pixels: value.pixels().map(|p| Vector4::new(p[0], p[1], p[2], p[3])).collect(),
            width: value.width() as usize,
            height: value.height() as usize,
            filter: SampleFilter::default(),
        }
    }
}

impl From<DynamicImage> for Texture2D {
    fn from(value: DynamicImage) -> Self {
        match value {
            DynamicImage::ImageRgba32F(img) => img.into(),
            DynamicImage::ImageRgb32F(img) => DynamicImage::ImageRgb32F(img).to_rgba32f().into(),
            other => other.to_rgba8().into(),
        }
    }
}
