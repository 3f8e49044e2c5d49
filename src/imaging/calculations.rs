//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Uniform scale factor that fits `source` inside a `max_dimension` square.
///
/// This is `min(max / width, max / height)`, which is the same as
/// `max / longer_edge`. Without `allow_upscale` the factor is clamped to 1 so
/// images already inside the bound keep their size.
pub fn calculate_scale_factor(source: (u32, u32), max_dimension: u32, allow_upscale: bool) -> f64 {
    let (w, h) = source;
    let ratio = (max_dimension as f64 / w as f64).min(max_dimension as f64 / h as f64);
    if allow_upscale { ratio } else { ratio.min(1.0) }
}

/// Calculate output dimensions that fit inside `max_dimension` on both axes.
///
/// The same factor is applied to both axes, so the aspect ratio is preserved.
/// Results are truncated toward zero the way a canvas size is, computed in
/// integer arithmetic so the longer edge lands exactly on `max_dimension`.
/// Neither edge drops below one pixel.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height), both non-zero
/// * `max_dimension` - Bound for the longer edge
/// * `allow_upscale` - Whether images smaller than the bound are enlarged
///
/// # Examples
/// ```
/// # use roomprep::imaging::calculate_fit_dimensions;
/// // 4000x3000 landscape into 1024 → 1024x768
/// assert_eq!(calculate_fit_dimensions((4000, 3000), 1024, false), (1024, 768));
///
/// // Small images are left alone unless upscaling is requested
/// assert_eq!(calculate_fit_dimensions((640, 480), 1024, false), (640, 480));
/// assert_eq!(calculate_fit_dimensions((640, 480), 1024, true), (1024, 768));
/// ```
pub fn calculate_fit_dimensions(
    source: (u32, u32),
    max_dimension: u32,
    allow_upscale: bool,
) -> (u32, u32) {
    let (w, h) = source;
    let longer_edge = w.max(h);

    if longer_edge == 0 || (longer_edge <= max_dimension && !allow_upscale) {
        return (w, h);
    }

    let scale = |edge: u32| -> u32 {
        let scaled = edge as u64 * max_dimension as u64 / longer_edge as u64;
        (scaled as u32).max(1)
    };

    (scale(w), scale(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // calculate_scale_factor tests
    // =========================================================================

    #[test]
    fn scale_factor_uses_tighter_axis() {
        // 2048x512: width needs 0.5, height would allow 2.0
        assert_eq!(calculate_scale_factor((2048, 512), 1024, false), 0.5);
    }

    #[test]
    fn scale_factor_clamped_without_upscale() {
        assert_eq!(calculate_scale_factor((200, 100), 1024, false), 1.0);
    }

    #[test]
    fn scale_factor_exceeds_one_with_upscale() {
        assert_eq!(calculate_scale_factor((256, 128), 1024, true), 4.0);
    }

    // =========================================================================
    // calculate_fit_dimensions tests
    // =========================================================================

    #[test]
    fn fit_landscape() {
        assert_eq!(calculate_fit_dimensions((4000, 3000), 1024, false), (1024, 768));
    }

    #[test]
    fn fit_portrait() {
        assert_eq!(calculate_fit_dimensions((3000, 4000), 1024, false), (768, 1024));
    }

    #[test]
    fn fit_square() {
        assert_eq!(calculate_fit_dimensions((2000, 2000), 1024, false), (1024, 1024));
    }

    #[test]
    fn fit_truncates_fractional_edge() {
        // 1001 * 1024 / 2000 = 512.512 → 512
        assert_eq!(calculate_fit_dimensions((2000, 1001), 1024, false), (1024, 512));
    }

    #[test]
    fn fit_exactly_at_bound_is_unchanged() {
        assert_eq!(calculate_fit_dimensions((1024, 700), 1024, false), (1024, 700));
    }

    #[test]
    fn fit_small_image_kept_without_upscale() {
        assert_eq!(calculate_fit_dimensions((100, 50), 1024, false), (100, 50));
    }

    #[test]
    fn fit_small_image_enlarged_with_upscale() {
        assert_eq!(calculate_fit_dimensions((100, 50), 1024, true), (1024, 512));
    }

    #[test]
    fn fit_extreme_panorama_keeps_one_pixel() {
        // 10000x3 → short edge would be 0.3px
        assert_eq!(calculate_fit_dimensions((10000, 3), 100, false), (100, 1));
    }

    #[test]
    fn fit_is_stable_when_reapplied() {
        let once = calculate_fit_dimensions((3264, 2448), 1024, false);
        let twice = calculate_fit_dimensions(once, 1024, false);
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn fit_never_exceeds_bound(
            w in 1u32..20_000,
            h in 1u32..20_000,
            max in 1u32..4096,
            upscale in any::<bool>(),
        ) {
            let (out_w, out_h) = calculate_fit_dimensions((w, h), max, upscale);
            prop_assert!(out_w.max(out_h) <= max);
            prop_assert!(out_w >= 1 && out_h >= 1);
        }

        #[test]
        fn fit_preserves_aspect_ratio_within_a_pixel(
            w in 1u32..20_000,
            h in 1u32..20_000,
            max in 1u32..4096,
            upscale in any::<bool>(),
        ) {
            let (out_w, out_h) = calculate_fit_dimensions((w, h), max, upscale);
            // out_w / out_h == w / h, allowing the truncation of one edge
            let lhs = out_w as u64 * h as u64;
            let rhs = out_h as u64 * w as u64;
            prop_assert!(lhs.abs_diff(rhs) <= w.max(h) as u64);
        }

        #[test]
        fn fit_is_idempotent_without_upscale(
            w in 1u32..20_000,
            h in 1u32..20_000,
            max in 1u32..4096,
        ) {
            let once = calculate_fit_dimensions((w, h), max, false);
            prop_assert_eq!(calculate_fit_dimensions(once, max, false), once);
        }
    }
}
