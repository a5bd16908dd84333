mod common;

use image::{Rgba, RgbaImage};

use panview_core::resample::{resample, Resampler};
use panview_core::view::ViewState;
use panview_core::ResampleQuality;

use common::gradient_image;

#[test]
fn test_every_quality_produces_requested_size() {
    let src = gradient_image(97, 61);
    for &q in ResampleQuality::ALL {
        for size in [(40, 25), (200, 130), (1, 1)] {
            let out = resample(src.pixels(), size, q);
            assert_eq!(out.dimensions(), size, "{q} -> {size:?}");
        }
    }
}

#[test]
fn test_flat_colour_survives_every_filter() {
    let src = RgbaImage::from_pixel(50, 40, Rgba([90, 160, 30, 255]));
    for &q in ResampleQuality::ALL {
        let out = resample(&src, (23, 71), q);
        for p in out.pixels() {
            for (c, expected) in p.0.iter().zip([90u8, 160, 30, 255]) {
                assert!(c.abs_diff(expected) <= 1, "{q}: got {:?}", p.0);
            }
        }
    }
}

#[test]
fn test_identity_size_is_a_copy() {
    let src = gradient_image(31, 17);
    let out = resample(src.pixels(), (31, 17), ResampleQuality::Lanczos);
    assert_eq!(&out, src.pixels());
}

#[test]
fn test_ensure_current_only_when_dirty() {
    let src = gradient_image(100, 80);
    let mut state = ViewState::new(50, 50);
    let mut resampler = Resampler::new(ResampleQuality::Bilinear);

    state.scale = 0.5;
    assert!(resampler.ensure_current(&src, &mut state));
    assert!(!state.scale_dirty);
    assert_eq!(resampler.bitmap().unwrap().dimensions(), (50, 40));

    assert!(!resampler.ensure_current(&src, &mut state));
    assert_eq!(resampler.generation(), 1);

    state.scale = 0.25;
    state.scale_dirty = true;
    assert!(resampler.ensure_current(&src, &mut state));
    assert_eq!(resampler.bitmap().unwrap().dimensions(), (25, 20));
    assert_eq!(resampler.generation(), 2);
}

#[test]
fn test_invalidate_forces_resample() {
    let src = gradient_image(10, 10);
    let mut state = ViewState::new(50, 50);
    let mut resampler = Resampler::default();
    resampler.ensure_current(&src, &mut state);

    resampler.invalidate();
    assert!(resampler.bitmap().is_none());
    assert!(resampler.ensure_current(&src, &mut state));
}

#[test]
fn test_set_quality_marks_dirty() {
    let src = gradient_image(10, 10);
    let mut state = ViewState::new(50, 50);
    let mut resampler = Resampler::default();
    resampler.ensure_current(&src, &mut state);

    resampler.set_quality(ResampleQuality::Lanczos, &mut state);
    assert!(state.scale_dirty);
    assert_eq!(resampler.quality(), ResampleQuality::Lanczos);
}

#[test]
fn test_hamming_downscale_averages() {
    // Alternating black/white columns blur toward mid-grey when halved.
    let src = RgbaImage::from_fn(64, 8, |x, _| {
        let v = if x % 2 == 0 { 0 } else { 255 };
        Rgba([v, v, v, 255])
    });
    let out = resample(&src, (32, 8), ResampleQuality::Hamming);
    for x in 1..31 {
        let v = out.get_pixel(x, 4).0[0];
        assert!((100..=155).contains(&v), "column {x}: {v}");
    }
}

#[test]
fn test_empty_source_yields_blank_bitmap() {
    let src = RgbaImage::new(0, 0);
    for &q in ResampleQuality::ALL {
        let out = resample(&src, (3, 2), q);
        assert_eq!(out.dimensions(), (3, 2), "{q}");
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
