use image::{Rgba, RgbaImage};
use nalgebra::{Vector2, Vector4};
use rayon::prelude::*;
use tracing::debug;

use crate::filter::crt_pixel;
use crate::params::CrtParams;
use crate::texture2d::Sampler;

/// Runs the CRT filter over a whole output image, one rayon task per row.
pub struct PostProcessor {
    params: CrtParams,
    width: usize,
    height: usize,
    buffer: Vec<Vector4<f32>>,
}

impl PostProcessor {
    pub fn new(width: usize, height: usize, params: CrtParams) -> Self {
        Self {
            width,
            height,
            params: params.sanitized(),
            buffer: vec![Vector4::zeros(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn params(&self) -> &CrtParams {
        &self.params
    }

    pub fn set_params(&mut self, params: CrtParams) {
        self.params = params.sanitized();
    }

    pub fn set_time(&mut self, time: f32) {
        if time.is_finite() {
            self.params.time = time;
        }
    }

    /// Filtered output, row 0 at the top.
    pub fn pixels(&self) -> &[Vector4<f32>] {
        &self.buffer
    }

    pub fn process<S: Sampler + ?Sized>(&mut self, source: &S) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let now = std::time::Instant::now();
        let width = self.width;
        let height = self.height;
        let params = self.params;

        self.buffer.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let v = 1.0 - (y as f32 + 0.5) / height as f32;
                for (x, out) in row.iter_mut().enumerate() {
                    let u = (x as f32 + 0.5) / width as f32;
                    *out = crt_pixel(source, Vector2::new(u, v), &params, params.time);
                }
            });

        debug!(width, height, time = params.time, elapsed_us = now.elapsed().as_micros() as u64, "crt pass");
    }

    /// Packs the output as 0RGB words, the layout `minifb` presents.
    pub fn write_argb_buffer(&self, buffer: &mut [u32]) {
        buffer.par_iter_mut()
            .zip(self.buffer.par_iter())
            .for_each(|(dst, colour)| *dst = Self::pack_rgb(colour));
    }

    pub fn to_argb_buffer(&self) -> Vec<u32> {
        let mut buffer = vec![0; self.buffer.len()];
        self.write_argb_buffer(&mut buffer);
        buffer
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let colour = self.buffer[y as usize * self.width + x as usize];
            Rgba([
                Self::to_u8(colour.x),
                Self::to_u8(colour.y),
                Self::to_u8(colour.z),
                Self::to_u8(colour.w),
            ])
        })
    }

    #[inline(always)]
    fn to_u8(channel: f32) -> u8 {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[inline(always)]
    fn pack_rgb(colour: &Vector4<f32>) -> u32 {
        let r = Self::to_u8(colour.x) as u32;
        let g = Self::to_u8(colour.y) as u32;
        let b = Self::to_u8(colour.z) as u32;
        (r << 16) | (g << 8) | b
    }
}
