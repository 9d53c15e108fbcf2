//! RGB (and RGBA) endpoint optimizer shared between BC1/2/3 ("variant A",
//! luminance-weighted, full 16-pixel block) and BC6H/7 ("variant B",
//! unweighted, arbitrary pixel subset selected by a partition's region
//! mask).
//!
//! Both variants share the same geometric core: seed endpoints at the
//! per-channel min/max, pick the best of four (or eight, for RGBA) axis
//! orientations by projected energy, then refine with up to 8 Newton
//! iterations minimizing sum-of-squares error against an evenly spaced
//! palette.

use crate::color::HdrColor;

/// Perceptual luminance weights: `(0.2125/0.7154, 1.0, 0.0721/0.7154)`.
pub const LUMINANCE: HdrColor = HdrColor::new(0.2125 / 0.7154, 1.0, 0.0721 / 0.7154, 1.0);

/// Inverse of [`LUMINANCE`], used to undo channel-wise weighting after
/// optimization.
pub const LUMINANCE_INV: HdrColor = HdrColor::new(0.7154 / 0.2125, 1.0, 0.7154 / 0.0721, 1.0);

const P_C3: [f32; 3] = [2.0 / 2.0, 1.0 / 2.0, 0.0];
const P_D3: [f32; 3] = [0.0, 1.0 / 2.0, 2.0 / 2.0];
const P_C4: [f32; 4] = [3.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
const P_D4: [f32; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 3.0 / 3.0];

const EPSILON: f32 = (0.25 / 64.0) * (0.25 / 64.0);

/// Variant A (BC1/2/3): optimizes over the full 16-pixel block.
///
/// `uniform` disables the perceptual luminance weighting (the `UNIFORM`
/// encode flag); when false, the channel-wise [`LUMINANCE`] weights are
/// applied before optimization. The caller is expected to multiply the
/// returned endpoints by [`LUMINANCE_INV`] before quantizing to 565 when
/// `uniform` is false (see the BC1 encoder).
pub fn optimize_rgb_weighted(points: &[HdrColor; 16], steps: usize, uniform: bool) -> (HdrColor, HdrColor) {
    debug_assert!(steps == 3 || steps == 4);
    let (p_c, p_d): (&[f32], &[f32]) = if steps == 3 { (&P_C3, &P_D3) } else { (&P_C4, &P_D4) };

    let seed_x = if uniform {
        HdrColor::new(1.0, 1.0, 1.0, 1.0)
    } else {
        LUMINANCE
    };
    let mut x = seed_x;
    let mut y = HdrColor::new(0.0, 0.0, 0.0, 1.0);

    for p in points {
        if p.r < x.r {
            x.r = p.r;
        }
        if p.g < x.g {
            x.g = p.g;
        }
        if p.b < x.b {
            x.b = p.b;
        }
        if p.r > y.r {
            y.r = p.r;
        }
        if p.g > y.g {
            y.g = p.g;
        }
        if p.b > y.b {
            y.b = p.b;
        }
    }

    newton_refine(points, &mut x, &mut y, p_c, p_d, steps, None)
}

/// Variant B (BC6H/7): optimizes over an arbitrary pixel subset (typically a
/// partition region), with no luminance weighting.
pub fn optimize_rgb_subset(points: &[HdrColor], steps: usize) -> (HdrColor, HdrColor) {
    debug_assert!(steps == 3 || steps == 4);
    let (p_c, p_d): (&[f32], &[f32]) = if steps == 3 { (&P_C3, &P_D3) } else { (&P_C4, &P_D4) };

    let mut x = HdrColor::new(1.0, 1.0, 1.0, 1.0);
    let mut y = HdrColor::new(0.0, 0.0, 0.0, 1.0);

    for p in points {
        if p.r < x.r {
            x.r = p.r;
        }
        if p.g < x.g {
            x.g = p.g;
        }
        if p.b < x.b {
            x.b = p.b;
        }
        if p.r > y.r {
            y.r = p.r;
        }
        if p.g > y.g {
            y.g = p.g;
        }
        if p.b > y.b {
            y.b = p.b;
        }
    }

    newton_refine(points, &mut x, &mut y, p_c, p_d, steps, None)
}

/// Shared geometric core used by both variants: axis-orientation search
/// followed by Newton's method. `alpha_weight`, when present, scales each
/// point's contribution (used by the BC7 RGBA 8-orientation variant, which
/// layers this on to add an alpha axis; plain RGB callers pass `None`).
fn newton_refine(
    points: &[HdrColor],
    x: &mut HdrColor,
    y: &mut HdrColor,
    p_c: &[f32],
    p_d: &[f32],
    steps: usize,
    alpha_weight: Option<fn(&HdrColor) -> f32>,
) -> (HdrColor, HdrColor) {
    let ab = HdrColor::new(y.r - x.r, y.g - x.g, y.b - x.b, 0.0);
    let fab = ab.r * ab.r + ab.g * ab.g + ab.b * ab.b;

    if fab < f32::MIN_POSITIVE {
        return (*x, *y);
    }

    let fab_inv = 1.0 / fab;
    let dir = HdrColor::new(ab.r * fab_inv, ab.g * fab_inv, ab.b * fab_inv, 0.0);
    let mid = HdrColor::new((x.r + y.r) * 0.5, (x.g + y.g) * 0.5, (x.b + y.b) * 0.5, 0.0);

    let mut f_dir = [0.0f32; 4];
    for p in points {
        let pt_r = (p.r - mid.r) * dir.r;
        let pt_g = (p.g - mid.g) * dir.g;
        let pt_b = (p.b - mid.b) * dir.b;
        let w = alpha_weight.map_or(1.0, |f| f(p));

        let f0 = pt_r + pt_g + pt_b;
        f_dir[0] += w * f0 * f0;
        let f1 = pt_r + pt_g - pt_b;
        f_dir[1] += w * f1 * f1;
        let f2 = pt_r - pt_g + pt_b;
        f_dir[2] += w * f2 * f2;
        let f3 = pt_r - pt_g - pt_b;
        f_dir[3] += w * f3 * f3;
    }

    let mut dir_max = 0;
    let mut f_dir_max = f_dir[0];
    for (i, &v) in f_dir.iter().enumerate().skip(1) {
        if v > f_dir_max {
            f_dir_max = v;
            dir_max = i;
        }
    }

    if dir_max & 2 != 0 {
        core::mem::swap(&mut x.g, &mut y.g);
    }
    if dir_max & 1 != 0 {
        core::mem::swap(&mut x.b, &mut y.b);
    }

    if fab < 1.0 / 4096.0 {
        return (*x, *y);
    }

    let f_steps = (steps - 1) as f32;

    for _ in 0..8 {
        let mut p_steps = [HdrColor::default(); 4];
        for k in 0..steps {
            p_steps[k] = HdrColor::new(
                x.r * p_c[k] + y.r * p_d[k],
                x.g * p_c[k] + y.g * p_d[k],
                x.b * p_c[k] + y.b * p_d[k],
                0.0,
            );
        }

        let dir = HdrColor::new(y.r - x.r, y.g - x.g, y.b - x.b, 0.0);
        let f_len = dir.r * dir.r + dir.g * dir.g + dir.b * dir.b;
        if f_len < 1.0 / 4096.0 {
            break;
        }
        let f_scale = f_steps / f_len;
        let dir = HdrColor::new(dir.r * f_scale, dir.g * f_scale, dir.b * f_scale, 0.0);

        let mut d2x = 0.0f32;
        let mut d2y = 0.0f32;
        let mut dx = HdrColor::default();
        let mut dy = HdrColor::default();

        for p in points {
            let f_dot = (p.r - x.r) * dir.r + (p.g - x.g) * dir.g + (p.b - x.b) * dir.b;

            let i_step = if f_dot <= 0.0 {
                0
            } else if f_dot >= f_steps {
                steps - 1
            } else {
                (f_dot + 0.5) as usize
            };

            let diff = HdrColor::new(
                p_steps[i_step].r - p.r,
                p_steps[i_step].g - p.g,
                p_steps[i_step].b - p.b,
                0.0,
            );

            let w = alpha_weight.map_or(1.0, |f| f(p));
            let fc = p_c[i_step] * w * (1.0 / 8.0);
            let fd = p_d[i_step] * w * (1.0 / 8.0);

            d2x += fc * p_c[i_step];
            dx.r += fc * diff.r;
            dx.g += fc * diff.g;
            dx.b += fc * diff.b;

            d2y += fd * p_d[i_step];
            dy.r += fd * diff.r;
            dy.g += fd * diff.g;
            dy.b += fd * diff.b;
        }

        if d2x > 0.0 {
            let f = -1.0 / d2x;
            x.r += dx.r * f;
            x.g += dx.g * f;
            x.b += dx.b * f;
        }
        if d2y > 0.0 {
            let f = -1.0 / d2y;
            y.r += dy.r * f;
            y.g += dy.g * f;
            y.b += dy.b * f;
        }

        if dx.r * dx.r < EPSILON
            && dx.g * dx.g < EPSILON
            && dx.b * dx.b < EPSILON
            && dy.r * dy.r < EPSILON
            && dy.g * dy.g < EPSILON
            && dy.b * dy.b < EPSILON
        {
            break;
        }
    }

    (*x, *y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_block_collapses_to_single_color() {
        let points = [HdrColor::new(0.5, 0.25, 0.75, 1.0); 16];
        let (x, y) = optimize_rgb_weighted(&points, 4, true);
        assert!((x.r - 0.5).abs() < 1e-3);
        assert!((y.r - 0.5).abs() < 1e-3);
    }

    #[test]
    fn two_tone_block_recovers_endpoints() {
        let mut points = [HdrColor::default(); 16];
        for (i, p) in points.iter_mut().enumerate() {
            *p = if i < 8 {
                HdrColor::new(0.0, 0.0, 0.0, 1.0)
            } else {
                HdrColor::new(1.0, 1.0, 1.0, 1.0)
            };
        }
        let (x, y) = optimize_rgb_weighted(&points, 4, true);
        let lo = x.r.min(y.r);
        let hi = x.r.max(y.r);
        assert!(lo < 0.1);
        assert!(hi > 0.9);
    }

    #[test]
    fn subset_variant_ignores_points_outside_slice() {
        let points = vec![HdrColor::new(0.2, 0.2, 0.2, 1.0); 4];
        let (x, y) = optimize_rgb_subset(&points, 3);
        assert!((x.r - 0.2).abs() < 1e-3);
        assert!((y.r - 0.2).abs() < 1e-3);
    }
}
