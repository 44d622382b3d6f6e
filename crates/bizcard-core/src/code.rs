//! QR code generation for the vCard payload.
//!
//! The encoder is injected into the generator through [`CodeEncoder`]; the
//! default [`QrEncoder`] uses the `qrcode` crate with error correction level M
//! and a single byte-mode segment.

use qrcode::bits::Bits;
use qrcode::render::{svg, Renderer};
use qrcode::types::Color;
use qrcode::{EcLevel, QrCode, Version};

use crate::error::{CardError, CardResult};

/// Modules of white space around the symbol required by the QR standard.
pub const QUIET_ZONE: u32 = 4;

/// Turns payload bytes into a code pattern.
pub trait CodeEncoder: Send + Sync {
    fn encode(&self, payload: &[u8]) -> CardResult<CodePattern>;
}

/// Standard QR encoder: EC level M, byte mode, smallest fitting version.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl CodeEncoder for QrEncoder {
    fn encode(&self, payload: &[u8]) -> CardResult<CodePattern> {
        for version in 1..=40 {
            let mut bits = Bits::new(Version::Normal(version));
            if bits.push_byte_data(payload).is_err() || bits.push_terminator(EcLevel::M).is_err() {
                continue;
            }
            let code = QrCode::with_bits(bits, EcLevel::M)?;
            return Ok(CodePattern::from_qr(&code));
        }
        Err(CardError::CodeEncoding(format!(
            "payload of {} bytes exceeds QR capacity",
            payload.len()
        )))
    }
}

/// Colors and minimum size used when rendering a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    pub dark: String,
    pub light: String,
    pub min_size: u32,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            dark: "#111111".to_string(),
            light: "#ffffff".to_string(),
            min_size: 240,
        }
    }
}

/// Greyscale raster of a pattern, one byte per pixel, row major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaRaster {
    pub size: usize,
    pub pixels: Vec<u8>,
}

impl LumaRaster {
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.size + x]
    }
}

/// Square module matrix of an encoded QR symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePattern {
    version: i16,
    width: usize,
    modules: Vec<Color>,
}

impl CodePattern {
    pub fn from_qr(code: &QrCode) -> Self {
        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        };
        Self {
            version,
            width: code.width(),
            modules: code.to_colors(),
        }
    }

    /// Modules per side, quiet zone excluded.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x] == Color::Dark
    }

    /// Standalone SVG. Width/height attributes are dropped so CSS controls
    /// the displayed size; the viewBox is kept.
    pub fn to_svg(&self, style: &CodeStyle) -> String {
        let svg_string = Renderer::<svg::Color<'_>>::new(&self.modules, self.width, QUIET_ZONE)
            .min_dimensions(style.min_size, style.min_size)
            .dark_color(svg::Color(&style.dark))
            .light_color(svg::Color(&style.light))
            .build();

        strip_svg_dimensions(&svg_string)
    }

    /// Black-on-white raster with `scale` pixels per module.
    pub fn to_luma(&self, scale: usize, quiet_zone: usize) -> LumaRaster {
        let modules = self.width + 2 * quiet_zone;
        let size = modules * scale;
        let mut pixels = vec![255u8; size * size];
        for y in 0..self.width {
            for x in 0..self.width {
                if !self.is_dark(x, y) {
                    continue;
                }
                let px = (x + quiet_zone) * scale;
                let py = (y + quiet_zone) * scale;
                for dy in 0..scale {
                    let row = (py + dy) * size;
                    pixels[row + px..row + px + scale].fill(0);
                }
            }
        }
        LumaRaster { size, pixels }
    }
}

/// `<svg ... width="N" height="N" viewBox=...>` → `<svg ... viewBox=...>`
fn strip_svg_dimensions(svg: &str) -> String {
    let Some(open_end) = svg.find("<svg").and_then(|start| svg[start..].find('>').map(|e| start + e))
    else {
        return svg.to_string();
    };
    let (head, tail) = svg.split_at(open_end);
    let head = head
        .split(' ')
        .filter(|attr| !attr.starts_with("width=\"") && !attr.starts_with("height=\""))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}{}", head, tail)
}
