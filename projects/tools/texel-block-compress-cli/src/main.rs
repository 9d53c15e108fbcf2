#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

//! Diagnostic CLI for `texel-block-compress`.
//!
//! This binary is not part of the codec surface: it exists to exercise the
//! core crates against synthetic 4x4 test patterns and report round-trip
//! fidelity, without any file-format plumbing (out of scope here — see
//! the facade crate's docs).

use argh::FromArgs;
use core::fmt;
use core::str::FromStr;
use texel_block_compress_common::{HdrColor, Rgba};

#[derive(Debug, Clone, Copy)]
enum Format {
    Bc1,
    Bc2,
    Bc3,
    Bc4u,
    Bc4s,
    Bc5u,
    Bc5s,
    Bc6hu,
    Bc6hs,
    Bc7,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bc1" => Ok(Format::Bc1),
            "bc2" => Ok(Format::Bc2),
            "bc3" => Ok(Format::Bc3),
            "bc4u" => Ok(Format::Bc4u),
            "bc4s" => Ok(Format::Bc4s),
            "bc5u" => Ok(Format::Bc5u),
            "bc5s" => Ok(Format::Bc5s),
            "bc6hu" => Ok(Format::Bc6hu),
            "bc6hs" => Ok(Format::Bc6hs),
            "bc7" => Ok(Format::Bc7),
            other => Err(format!(
                "unknown format {other}; valid: bc1, bc2, bc3, bc4u, bc4s, bc5u, bc5s, bc6hu, bc6hs, bc7"
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Bc1 => "bc1",
            Format::Bc2 => "bc2",
            Format::Bc3 => "bc3",
            Format::Bc4u => "bc4u",
            Format::Bc4s => "bc4s",
            Format::Bc5u => "bc5u",
            Format::Bc5s => "bc5s",
            Format::Bc6hu => "bc6hu",
            Format::Bc6hs => "bc6hs",
            Format::Bc7 => "bc7",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Solid,
    Gradient,
    Checker,
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solid" => Ok(Pattern::Solid),
            "gradient" => Ok(Pattern::Gradient),
            "checker" => Ok(Pattern::Checker),
            other => Err(format!("unknown pattern {other}; valid: solid, gradient, checker")),
        }
    }
}

fn synthetic_rgba(pattern: Pattern) -> [Rgba; 16] {
    let mut out = [Rgba::default(); 16];
    for (i, px) in out.iter_mut().enumerate() {
        *px = match pattern {
            Pattern::Solid => Rgba::new(180, 90, 40, 255),
            Pattern::Gradient => {
                let v = (i * 17) as u8;
                Rgba::new(v, 255 - v, v / 2, 255)
            }
            Pattern::Checker => {
                let on = (i % 4 + i / 4) % 2 == 0;
                if on { Rgba::new(255, 255, 255, 255) } else { Rgba::new(0, 0, 0, 255) }
            }
        };
    }
    out
}

fn synthetic_scalar(pattern: Pattern, signed: bool) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    let (lo, hi) = if signed { (-1.0, 1.0) } else { (0.0, 1.0) };
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = match pattern {
            Pattern::Solid => (lo + hi) / 2.0,
            Pattern::Gradient => lo + (hi - lo) * (i as f32 / 15.0),
            Pattern::Checker => {
                if i % 2 == 0 { hi } else { lo }
            }
        };
    }
    out
}

fn synthetic_hdr(pattern: Pattern) -> [HdrColor; 16] {
    let mut out = [HdrColor::new(0.0, 0.0, 0.0, 1.0); 16];
    for (i, px) in out.iter_mut().enumerate() {
        *px = match pattern {
            Pattern::Solid => HdrColor::new(2.5, 1.25, 0.5, 1.0),
            Pattern::Gradient => {
                let t = i as f32 / 15.0;
                HdrColor::new(4.0 * t, 2.0 * t, 1.0 * t, 1.0)
            }
            Pattern::Checker => {
                if i % 2 == 0 {
                    HdrColor::new(3.0, 3.0, 3.0, 1.0)
                } else {
                    HdrColor::new(0.1, 0.1, 0.1, 1.0)
                }
            }
        };
    }
    out
}

/// Mean squared error and peak signal-to-noise ratio over 8-bit channels.
fn psnr_report(original: &[Rgba; 16], decoded: &[Rgba; 16]) -> (f64, f64) {
    let mut sq_err = 0f64;
    let mut count = 0usize;
    for (o, d) in original.iter().zip(decoded.iter()) {
        for (a, b) in [o.r, o.g, o.b, o.a].iter().zip([d.r, d.g, d.b, d.a].iter()) {
            let diff = *a as f64 - *b as f64;
            sq_err += diff * diff;
            count += 1;
        }
    }
    let mse = sq_err / count as f64;
    let psnr = if mse == 0.0 { f64::INFINITY } else { 10.0 * (255.0f64.powi(2) / mse).log10() };
    (mse, psnr)
}

fn mse_scalar(original: &[f32; 16], decoded: &[f32; 16]) -> f64 {
    let mut sq_err = 0f64;
    for (a, b) in original.iter().zip(decoded.iter()) {
        let diff = (*a - *b) as f64;
        sq_err += diff * diff;
    }
    sq_err / original.len() as f64
}

fn mse_hdr(original: &[HdrColor; 16], decoded: &[HdrColor; 16]) -> f64 {
    let mut sq_err = 0f64;
    let mut count = 0usize;
    for (o, d) in original.iter().zip(decoded.iter()) {
        for (a, b) in [o.r, o.g, o.b].iter().zip([d.r, d.g, d.b].iter()) {
            let diff = (*a - *b) as f64;
            sq_err += diff * diff;
            count += 1;
        }
    }
    sq_err / count as f64
}

fn run_psnr(format: Format, pattern: Pattern) {
    match format {
        Format::Bc1 => {
            let px = synthetic_rgba(pattern);
            let block = texel_block_compress_bc1::encode_block(&px, 0);
            let decoded = texel_block_compress_bc1::decode_block(&block);
            let (mse, psnr) = psnr_report(&px, &decoded);
            println!("bc1 {pattern:?}: mse={mse:.4} psnr={psnr:.2}dB");
        }
        Format::Bc2 => {
            let px = synthetic_rgba(pattern);
            let block = texel_block_compress_bc2::encode_block(&px, 0);
            let decoded = texel_block_compress_bc2::decode_block(&block);
            let (mse, psnr) = psnr_report(&px, &decoded);
            println!("bc2 {pattern:?}: mse={mse:.4} psnr={psnr:.2}dB");
        }
        Format::Bc3 => {
            let px = synthetic_rgba(pattern);
            let block = texel_block_compress_bc3::encode_block(&px, 0);
            let decoded = texel_block_compress_bc3::decode_block(&block);
            let (mse, psnr) = psnr_report(&px, &decoded);
            println!("bc3 {pattern:?}: mse={mse:.4} psnr={psnr:.2}dB");
        }
        Format::Bc4u => {
            let s = synthetic_scalar(pattern, false);
            let block = texel_block_compress_bc45::bc4::encode_block_unorm(&s);
            let decoded = texel_block_compress_bc45::bc4::decode_block_unorm(&block);
            println!("bc4u {pattern:?}: mse={:.6}", mse_scalar(&s, &decoded));
        }
        Format::Bc4s => {
            let s = synthetic_scalar(pattern, true);
            let block = texel_block_compress_bc45::bc4::encode_block_snorm(&s);
            let decoded = texel_block_compress_bc45::bc4::decode_block_snorm(&block);
            println!("bc4s {pattern:?}: mse={:.6}", mse_scalar(&s, &decoded));
        }
        Format::Bc5u => {
            let s = synthetic_scalar(pattern, false);
            let mut pairs = [(0.0f32, 0.0f32); 16];
            for (i, p) in pairs.iter_mut().enumerate() {
                *p = (s[i], s[15 - i]);
            }
            let block = texel_block_compress_bc45::bc5::encode_block_unorm(&pairs);
            let decoded = texel_block_compress_bc45::bc5::decode_block_unorm(&block);
            let mut sq_err = 0f64;
            for (a, b) in pairs.iter().zip(decoded.iter()) {
                sq_err += (a.0 - b.0) as f64 * (a.0 - b.0) as f64;
                sq_err += (a.1 - b.1) as f64 * (a.1 - b.1) as f64;
            }
            println!("bc5u {pattern:?}: mse={:.6}", sq_err / 32.0);
        }
        Format::Bc5s => {
            let s = synthetic_scalar(pattern, true);
            let mut pairs = [(0.0f32, 0.0f32); 16];
            for (i, p) in pairs.iter_mut().enumerate() {
                *p = (s[i], s[15 - i]);
            }
            let block = texel_block_compress_bc45::bc5::encode_block_snorm(&pairs);
            let decoded = texel_block_compress_bc45::bc5::decode_block_snorm(&block);
            let mut sq_err = 0f64;
            for (a, b) in pairs.iter().zip(decoded.iter()) {
                sq_err += (a.0 - b.0) as f64 * (a.0 - b.0) as f64;
                sq_err += (a.1 - b.1) as f64 * (a.1 - b.1) as f64;
            }
            println!("bc5s {pattern:?}: mse={:.6}", sq_err / 32.0);
        }
        Format::Bc6hu => {
            let px = synthetic_hdr(pattern);
            let block = texel_block_compress_bc6h::encode_block(&px, false);
            let decoded = texel_block_compress_bc6h::decode_block(&block, false);
            println!("bc6hu {pattern:?}: mse={:.6}", mse_hdr(&px, &decoded));
        }
        Format::Bc6hs => {
            let px = synthetic_hdr(pattern);
            let block = texel_block_compress_bc6h::encode_block(&px, true);
            let decoded = texel_block_compress_bc6h::decode_block(&block, true);
            println!("bc6hs {pattern:?}: mse={:.6}", mse_hdr(&px, &decoded));
        }
        Format::Bc7 => {
            let px = synthetic_rgba(pattern);
            let block = texel_block_compress_bc7::encode_block(&px, 0);
            let decoded = texel_block_compress_bc7::decode_block(&block);
            let (mse, psnr) = psnr_report(&px, &decoded);
            println!("bc7 {pattern:?}: mse={mse:.4} psnr={psnr:.2}dB");
        }
    }
}

#[derive(FromArgs, Debug)]
/// Round-trips a synthetic 4x4 tile through one codec and reports fidelity.
#[argh(subcommand, name = "psnr")]
struct PsnrCmd {
    /// format to exercise: bc1, bc2, bc3, bc4u, bc4s, bc5u, bc5s, bc6hu, bc6hs, bc7
    #[argh(option)]
    format: Format,

    /// test pattern: solid, gradient, checker (default: gradient)
    #[argh(option, default = "Pattern::Gradient")]
    pattern: Pattern,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Psnr(PsnrCmd),
}

#[derive(FromArgs, Debug)]
/// Diagnostic tool for texel-block-compress: synthetic round-trip and PSNR reporting.
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

fn main() {
    let cli: TopLevel = argh::from_env();
    match cli.command {
        Commands::Psnr(cmd) => run_psnr(cmd.format, cmd.pattern),
    }
}
