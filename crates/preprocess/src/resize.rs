use crate::PreprocessError;
use ndarray::{Array3, ArrayView3};

/// Sampling position along one axis: the two neighbours and the weight of the upper one.
#[derive(Debug, Clone, Copy)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f32,
}

fn axis_taps(in_len: usize, out_len: usize) -> Vec<Tap> {
    let scale = in_len as f32 / out_len as f32;

    (0..out_len)
        .map(|o| {
            let pos = o as f32 * scale;
            let lo = (pos.floor() as usize).min(in_len - 1);
            let hi = (lo + 1).min(in_len - 1);
            Tap {
                lo,
                hi,
                frac: pos - lo as f32,
            }
        })
        .collect()
}

/// Bilinear resize of an HWC tensor.
///
/// Each output sample is the weighted average of the four nearest source
/// samples, with source coordinates `dst * (in / out)` (corners not aligned)
/// and neighbours clamped to the edge.
pub fn resize_bilinear(
    src: ArrayView3<f32>,
    out_height: usize,
    out_width: usize,
) -> Result<Array3<f32>, PreprocessError> {
    let (in_height, in_width, channels) = src.dim();

    if in_height == 0 || in_width == 0 {
        return Err(PreprocessError::EmptyDimension {
            width: in_width as u32,
            height: in_height as u32,
        });
    }
    if out_height == 0 || out_width == 0 {
        return Err(PreprocessError::EmptyDimension {
            width: out_width as u32,
            height: out_height as u32,
        });
    }

    let ys = axis_taps(in_height, out_height);
    let xs = axis_taps(in_width, out_width);

    Ok(Array3::from_shape_fn(
        (out_height, out_width, channels),
        |(y, x, c)| {
            let ty = ys[y];
            let tx = xs[x];

            let top_left = src[[ty.lo, tx.lo, c]];
            let top_right = src[[ty.lo, tx.hi, c]];
            let bottom_left = src[[ty.hi, tx.lo, c]];
            let bottom_right = src[[ty.hi, tx.hi, c]];

            let top = top_left + (top_right - top_left) * tx.frac;
            let bottom = bottom_left + (bottom_right - bottom_left) * tx.frac;
            top + (bottom - top) * ty.frac
        },
    ))
}
