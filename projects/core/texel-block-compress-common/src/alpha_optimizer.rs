//! Scalar endpoint optimizer shared by the alpha channels of BC3/BC4/BC5.
//!
//! Finds two endpoints `(x, y)` with `x <= y` that minimize the
//! sum-of-squares error of a 16-sample scalar block against a 6- or 8-entry
//! linear palette, using up to 8 Newton iterations seeded from the sample
//! min/max.

const NUM_PIXELS_PER_BLOCK: usize = 16;

const P_C6: [f32; 6] = [5.0 / 5.0, 4.0 / 5.0, 3.0 / 5.0, 2.0 / 5.0, 1.0 / 5.0, 0.0];
const P_D6: [f32; 6] = [0.0, 1.0 / 5.0, 2.0 / 5.0, 3.0 / 5.0, 4.0 / 5.0, 5.0 / 5.0];
const P_C8: [f32; 8] = [
    7.0 / 7.0,
    6.0 / 7.0,
    5.0 / 7.0,
    4.0 / 7.0,
    3.0 / 7.0,
    2.0 / 7.0,
    1.0 / 7.0,
    0.0,
];
const P_D8: [f32; 8] = [
    0.0,
    1.0 / 7.0,
    2.0 / 7.0,
    3.0 / 7.0,
    4.0 / 7.0,
    5.0 / 7.0,
    6.0 / 7.0,
    7.0 / 7.0,
];

/// Finds two scalar endpoints `(x, y)` with `x <= y` minimizing SSE against
/// `points` (exactly 16 samples) over a palette of `steps` entries (6 or 8).
///
/// `signed_range` selects the palette's lower boundary constant: `-1.0` when
/// true (BC4/BC5 SNORM), `0.0` when false (BC3 alpha, BC4/BC5 UNORM).
pub fn optimize_alpha(points: &[f32; NUM_PIXELS_PER_BLOCK], steps: usize, signed_range: bool) -> (f32, f32) {
    debug_assert!(steps == 6 || steps == 8);

    let (p_c, p_d): (&[f32], &[f32]) = if steps == 6 {
        (&P_C6, &P_D6)
    } else {
        (&P_C8, &P_D8)
    };

    const MAX_VALUE: f32 = 1.0;
    let min_value: f32 = if signed_range { -1.0 } else { 0.0 };

    let mut fx;
    let mut fy;

    if steps == 8 {
        fx = MAX_VALUE;
        fy = min_value;
        for &p in points {
            if p < fx {
                fx = p;
            }
            if p > fy {
                fy = p;
            }
        }
    } else {
        fx = MAX_VALUE;
        fy = min_value;
        for &p in points {
            if p < fx && p > min_value {
                fx = p;
            }
            if p > fy && p < MAX_VALUE {
                fy = p;
            }
        }
        if fx == fy {
            fy = MAX_VALUE;
        }
    }

    let f_steps = (steps - 1) as f32;

    for _ in 0..8 {
        if (fy - fx) < (1.0 / 256.0) {
            break;
        }

        let f_scale = f_steps / (fy - fx);

        let mut p_steps = [0.0f32; 8];
        for k in 0..steps {
            p_steps[k] = p_c[k] * fx + p_d[k] * fy;
        }
        if steps == 6 {
            p_steps[6] = min_value;
            p_steps[7] = MAX_VALUE;
        }

        let mut dx = 0.0f32;
        let mut dy = 0.0f32;
        let mut d2x = 0.0f32;
        let mut d2y = 0.0f32;

        for &p in points {
            let f_dot = (p - fx) * f_scale;

            let i_step: usize = if f_dot <= 0.0 {
                if steps == 6 && p <= fx * 0.5 {
                    6
                } else {
                    0
                }
            } else if f_dot >= f_steps {
                if steps == 6 && p >= (fy + 1.0) * 0.5 {
                    7
                } else {
                    steps - 1
                }
            } else {
                (f_dot + 0.5) as usize
            };

            if i_step < steps {
                let diff = p_steps[i_step] - p;

                dx += p_c[i_step] * diff;
                d2x += p_c[i_step] * p_c[i_step];

                dy += p_d[i_step] * diff;
                d2y += p_d[i_step] * p_d[i_step];
            }
        }

        if d2x > 0.0 {
            fx -= dx / d2x;
        }
        if d2y > 0.0 {
            fy -= dy / d2y;
        }

        if fx > fy {
            core::mem::swap(&mut fx, &mut fy);
        }

        if dx * dx < (1.0 / 64.0) && dy * dy < (1.0 / 64.0) {
            break;
        }
    }

    (fx.clamp(min_value, MAX_VALUE), fy.clamp(min_value, MAX_VALUE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_block_collapses_to_single_value() {
        let points = [0.5f32; 16];
        let (x, y) = optimize_alpha(&points, 8, false);
        assert!((x - 0.5).abs() < 1e-3);
        assert!((y - 0.5).abs() < 1e-3);
    }

    #[test]
    fn two_value_block_recovers_both_endpoints() {
        let mut points = [0.0f32; 16];
        for (i, p) in points.iter_mut().enumerate() {
            *p = if i % 2 == 0 { 0.5 } else { 0.75 };
        }
        let (x, y) = optimize_alpha(&points, 8, false);
        assert!((x - 0.5).abs() < 1e-2);
        assert!((y - 0.75).abs() < 1e-2);
    }

    #[test]
    fn endpoints_always_ordered() {
        let points = [0.9, 0.1, 0.5, 0.3, 0.2, 0.8, 0.95, 0.05, 0.4, 0.6, 0.7, 0.15, 0.25, 0.35, 0.45, 0.55];
        let (x, y) = optimize_alpha(&points, 6, false);
        assert!(x <= y);
    }

    #[test]
    fn signed_range_uses_negative_one_floor() {
        let points = [-1.0f32; 16];
        let (x, _y) = optimize_alpha(&points, 8, true);
        assert!(x >= -1.0 - 1e-6);
    }
}
