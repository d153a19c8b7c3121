//! Synthetic stacks for demos and tests.

use ndarray::{s, Array3};

/// A stack of `steps` frames with a square of ones drifting diagonally.
///
/// In frame `i` the square spans rows `[h/4 + i*factor, h/2 + i*factor)` and
/// columns `[w/4 + i*factor, w/2 + i*factor)`, clipped to the frame.
#[must_use]
pub fn moving_square(steps: usize, shape: (usize, usize), factor: usize) -> Array3<f32> {
    let (height, width) = shape;
    let mut stack = Array3::<f32>::zeros((steps, height, width));
    let h = height / 4;
    let w = width / 4;

    for i in 0..steps {
        let offset = i * factor;
        let rows = (h + offset).min(height)..(2 * h + offset).min(height);
        let cols = (w + offset).min(width)..(2 * w + offset).min(width);
        stack.slice_mut(s![i, rows, cols]).fill(1.0);
    }
    stack
}
