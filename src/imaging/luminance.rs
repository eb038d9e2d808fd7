//! Pure luminance math.
//!
//! All functions here are pure and testable without any I/O or images.
//! Channel values are on the 0–255 scale regardless of the source bit depth.
//!
//! Everything is computed in `f32`, the running sum included. Very large
//! images therefore carry single-precision rounding in their average, and
//! that rounded value is what gets ranked.

/// ITU-R BT.709 weight of the red channel.
pub const LUMA_R: f32 = 0.2126;
/// ITU-R BT.709 weight of the green channel.
pub const LUMA_G: f32 = 0.7152;
/// ITU-R BT.709 weight of the blue channel.
pub const LUMA_B: f32 = 0.0722;

/// Relative luminance of one pixel.
#[inline]
pub fn pixel_luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Mean luminance over a sequence of RGB pixels.
///
/// Divides by `pixel_count` rather than by the number of pixels yielded, so
/// an empty image produces NaN (0 / 0) and callers can reject it.
pub fn average_luminance<I>(pixels: I, pixel_count: u64) -> f32
where
    I: IntoIterator<Item = [f32; 3]>,
{
    let total: f32 = pixels
        .into_iter()
        .map(|[r, g, b]| pixel_luminance(r, g, b))
        .sum();
    total / pixel_count as f32
}

/// Map an average luminance to the brightness percentage used in filenames.
///
/// ```text
/// float_percent = (255 - L) / ((255 + L) / 2) * 100
/// percent       = 100 - floor(float_percent / 2)
/// ```
///
/// Black (`L = 0`) maps to 0, white (`L = 255`) to 100, and every `L` in
/// between lands in `0..=100`.
pub fn brightness_percent(luminance: f32) -> u32 {
    let float_percent = (255.0 - luminance) / ((255.0 + luminance) / 2.0) * 100.0;
    (100.0 - (float_percent / 2.0).floor()) as u32
}
