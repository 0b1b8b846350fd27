/// Size of an aspect-preserving thumbnail that fits inside `box_w` x `box_h`.
///
/// Sources that already fit are left alone (no upscaling). Otherwise the
/// constrained axis takes the box size and the other axis is rounded to
/// whichever neighbouring integer keeps the aspect ratio closest to the
/// source's, never dropping below one pixel.
pub fn thumbnail_size(src_w: u32, src_h: u32, box_w: u32, box_h: u32) -> (u32, u32) {
    if box_w >= src_w && box_h >= src_h {
        return (src_w, src_h);
    }

    let aspect = src_w as f64 / src_h as f64;
    if box_w as f64 / box_h as f64 >= aspect {
        let y = box_h as f64;
        let x = closest_integer(y * aspect, |n| (aspect - n / y).abs());
        (x, box_h)
    } else {
        let x = box_w as f64;
        let y = closest_integer(x / aspect, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - x / n).abs()
            }
        });
        (box_w, y)
    }
}

// Picks floor or ceil of `value`, whichever scores lower; floor wins ties.
fn closest_integer<F: Fn(f64) -> f64>(value: f64, score: F) -> u32 {
    let floor = value.floor();
    let ceil = value.ceil();
    let best = if score(ceil) < score(floor) { ceil } else { floor };
    (best as u32).max(1)
}

/// Top-left offset at which `thumb` is pasted onto `canvas`.
pub fn center_offset(canvas: (u32, u32), thumb: (u32, u32)) -> (u32, u32) {
    if thumb.0 < canvas.0 || thumb.1 < canvas.1 {
        (
            canvas.0.saturating_sub(thumb.0) / 2,
            canvas.1.saturating_sub(thumb.1) / 2,
        )
    } else {
        (0, 0)
    }
}

/// Width of a logo scaled to `height` pixels tall, rounded to the nearest pixel.
pub fn navbar_width(src_w: u32, src_h: u32, height: u32) -> u32 {
    let width = (height as f64 * src_w as f64 / src_h as f64).round();
    (width as u32).max(1)
}
