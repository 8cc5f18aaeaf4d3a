//! Power-of-two padding: the original content centered on a white canvas.

use crate::raster::Raster;

const WHITE: u8 = 0xFF;

/// Pad a raster so both dimensions are the next power of two.
///
/// A dimension already a power of two is unchanged. The surrounding canvas
/// is full-white and the original content is centered; odd differences
/// leave the smaller half on the top/left side (floor-based split).
///
/// # Example
/// ```
/// use sg_image::pad::pad;
/// use sg_image::raster::Raster;
/// let padded = pad(&Raster::filled(300, 200, (0, 0, 0)));
/// assert_eq!((padded.width(), padded.height()), (512, 256));
/// ```
#[must_use]
pub fn pad(image: &Raster) -> Raster {
    let width = image.width();
    let height = image.height();
    let padded_w = width.next_power_of_two();
    let padded_h = height.next_power_of_two();

    let dx = (padded_w - width) / 2;
    let dy = (padded_h - height) / 2;

    let mut data = vec![WHITE; (padded_w * padded_h * 3) as usize];
    let src_stride = (width * 3) as usize;
    let dst_stride = (padded_w * 3) as usize;
    for y in 0..height as usize {
        let src = y * src_stride;
        let dst = (y + dy as usize) * dst_stride + (dx * 3) as usize;
        data[dst..dst + src_stride].copy_from_slice(&image.data[src..src + src_stride]);
    }

    log::trace!("padded {width}×{height} to {padded_w}×{padded_h} at offset ({dx}, {dy})");
    Raster::from_rgb(data, padded_w, padded_h)
}
