use std::f64::consts::PI;
use std::time::Instant;

use image::{imageops, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::config::ResampleQuality;
use crate::consts::{HAMMING_SUPPORT, PARALLEL_PIXEL_THRESHOLD};
use crate::source::SourceImage;
use crate::view::{resampled_size, ViewState};

/// Holds the scaled copy of the source image and regenerates it only when the
/// view state says it is stale.
#[derive(Debug, Default)]
pub struct Resampler {
    quality: ResampleQuality,
    bitmap: Option<RgbaImage>,
    generation: u64,
}

impl Resampler {
    pub fn new(quality: ResampleQuality) -> Self {
        Self {
            quality,
            bitmap: None,
            generation: 0,
        }
    }

    pub fn quality(&self) -> ResampleQuality {
        self.quality
    }

    /// Switch filters. The cached bitmap is marked stale so the new filter
    /// shows up on the next render.
    pub fn set_quality(&mut self, quality: ResampleQuality, state: &mut ViewState) {
        self.quality = quality;
        state.scale_dirty = true;
    }

    /// Regenerate the bitmap if the scale or filter changed since the last
    /// call, then clear the dirty flag. Returns `true` if a new bitmap was
    /// produced.
    pub fn ensure_current(&mut self, source: &SourceImage, state: &mut ViewState) -> bool {
        if !state.scale_dirty && self.bitmap.is_some() {
            return false;
        }

        let size = resampled_size(source.size(), state.scale);
        let start = Instant::now();
        self.bitmap = Some(resample(source.pixels(), size, self.quality));
        debug!(
            width = size.0,
            height = size.1,
            quality = %self.quality,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Resampled source image"
        );
        self.generation += 1;
        state.scale_dirty = false;
        true
    }

    pub fn bitmap(&self) -> Option<&RgbaImage> {
        self.bitmap.as_ref()
    }

    /// Drop the cached bitmap.
    pub fn invalidate(&mut self) {
        self.bitmap = None;
    }

    /// Number of resamples performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Resize `src` to `size` with the given filter.
pub fn resample(src: &RgbaImage, size: (u32, u32), quality: ResampleQuality) -> RgbaImage {
    if src.dimensions() == size {
        return src.clone();
    }
    if src.width() == 0 || src.height() == 0 {
        return RgbaImage::new(size.0, size.1);
    }
    match quality.filter_type() {
        Some(filter) => imageops::resize(src, size.0, size.1, filter),
        None => resample_hamming(src, size),
    }
}

struct Taps {
    start: usize,
    weights: Vec<f32>,
}

fn hamming(x: f64) -> f64 {
    let x = x.abs();
    if x == 0.0 {
        1.0
    } else if x >= HAMMING_SUPPORT {
        0.0
    } else {
        let px = PI * x;
        px.sin() / px * (0.54 + 0.46 * px.cos())
    }
}

/// Per-output-pixel source ranges and normalised weights along one axis.
/// When downsampling the kernel is stretched by the reduction factor.
fn compute_taps(in_len: u32, out_len: u32) -> Vec<Taps> {
    let scale = in_len as f64 / out_len as f64;
    let filter_scale = scale.max(1.0);
    let support = HAMMING_SUPPORT * filter_scale;

    (0..out_len)
        .map(|i| {
            let center = (i as f64 + 0.5) * scale;
            let start = (center - support).floor().max(0.0) as usize;
            let end = ((center + support).ceil() as usize).min(in_len as usize);
            let mut weights: Vec<f32> = (start..end)
                .map(|j| hamming((j as f64 + 0.5 - center) / filter_scale) as f32)
                .collect();

            let sum: f32 = weights.iter().sum();
            if sum > 0.0 {
                for w in &mut weights {
                    *w /= sum;
                }
                Taps { start, weights }
            } else {
                let nearest = (center as usize).min(in_len as usize - 1);
                Taps {
                    start: nearest,
                    weights: vec![1.0],
                }
            }
        })
        .collect()
}

/// Separable Hamming-windowed sinc resize.
fn resample_hamming(src: &RgbaImage, size: (u32, u32)) -> RgbaImage {
    let (in_w, in_h) = src.dimensions();
    let (out_w, out_h) = size;
    let parallel = out_w as usize * out_h as usize >= PARALLEL_PIXEL_THRESHOLD;

    let pixels: Vec<f32> = src.as_raw().iter().map(|&v| v as f32).collect();
    let x_taps = compute_taps(in_w, out_w);
    let y_taps = compute_taps(in_h, out_h);

    let rows = horizontal_pass(&pixels, in_w as usize, in_h as usize, &x_taps, parallel);
    let resized = vertical_pass(&rows, out_w as usize, &y_taps, parallel);

    let raw: Vec<u8> = resized
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    // Buffer length is out_w * out_h * 4 by construction.
    RgbaImage::from_raw(out_w, out_h, raw).unwrap_or_else(|| RgbaImage::new(out_w, out_h))
}

fn horizontal_pass(
    src: &[f32],
    in_w: usize,
    h: usize,
    taps: &[Taps],
    parallel: bool,
) -> Vec<f32> {
    let out_stride = taps.len() * 4;
    let mut out = vec![0.0f32; h * out_stride];

    let run_row = |(row, dst): (usize, &mut [f32])| {
        let src_row = &src[row * in_w * 4..(row + 1) * in_w * 4];
        for (px, tap) in dst.chunks_exact_mut(4).zip(taps) {
            for (k, &w) in tap.weights.iter().enumerate() {
                let s = &src_row[(tap.start + k) * 4..(tap.start + k) * 4 + 4];
                for c in 0..4 {
                    px[c] += s[c] * w;
                }
            }
        }
    };

    if parallel {
        out.par_chunks_mut(out_stride)
            .enumerate()
            .for_each(|item| run_row(item));
    } else {
        out.chunks_mut(out_stride)
            .enumerate()
            .for_each(|item| run_row(item));
    }
    out
}

fn vertical_pass(src: &[f32], width: usize, taps: &[Taps], parallel: bool) -> Vec<f32> {
    let stride = width * 4;
    let mut out = vec![0.0f32; taps.len() * stride];

    let run_row = |(row, dst): (usize, &mut [f32])| {
        let tap = &taps[row];
        for (k, &w) in tap.weights.iter().enumerate() {
            let src_row = &src[(tap.start + k) * stride..(tap.start + k + 1) * stride];
            for (d, &s) in dst.iter_mut().zip(src_row) {
                *d += s * w;
            }
        }
    };

    if parallel {
        out.par_chunks_mut(stride)
            .enumerate()
            .for_each(|item| run_row(item));
    } else {
        out.chunks_mut(stride).enumerate().for_each(|item| run_row(item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamming_kernel_shape() {
        assert_eq!(hamming(0.0), 1.0);
        assert_eq!(hamming(1.0), 0.0);
        assert_eq!(hamming(-1.5), 0.0);
        assert!(hamming(0.5) > 0.0 && hamming(0.5) < 1.0);
        assert_eq!(hamming(0.3), hamming(-0.3));
    }

    #[test]
    fn taps_are_normalised_and_in_range() {
        for (in_len, out_len) in [(10, 3), (3, 10), (7, 7), (1, 5), (100, 1)] {
            let taps = compute_taps(in_len, out_len);
            assert_eq!(taps.len(), out_len as usize);
            for tap in &taps {
                let sum: f32 = tap.weights.iter().sum();
                assert!((sum - 1.0).abs() < 1e-5, "sum {sum} for {in_len}->{out_len}");
                assert!(tap.start + tap.weights.len() <= in_len as usize);
            }
        }
    }

    #[test]
    fn hamming_preserves_flat_colour() {
        let src = RgbaImage::from_pixel(37, 23, image::Rgba([10, 200, 77, 255]));
        for size in [(12, 9), (80, 50)] {
            let out = resample_hamming(&src, size);
            assert_eq!(out.dimensions(), size);
            assert!(out.pixels().all(|p| p.0 == [10, 200, 77, 255]));
        }
    }
}
