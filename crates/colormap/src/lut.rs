//! Color lookup tables and the breakpoint interpolation engine.

use heatview_core::{Error, Result};

/// RGBA color with channel values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// A breakpoint: position in [0, 1] mapped to an RGBA color.
#[derive(Debug, Clone, Copy)]
pub struct Breakpoint {
    pub pos: f32,
    pub color: Rgba,
}

impl Breakpoint {
    pub const fn new(pos: f32, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            pos,
            color: Rgba::new(r, g, b, a),
        }
    }
}

/// An ordered sequence of breakpoints defining a piecewise-linear colormap.
///
/// Positions are non-decreasing and lie in [0, 1]; the first and last
/// breakpoints define the clamp colors for out-of-range queries. The table
/// is immutable once constructed. An `inverted` table reflects every query
/// about 0.5 before lookup.
#[derive(Debug, Clone)]
pub struct ColorTable {
    stops: Vec<Breakpoint>,
    inverted: bool,
}

impl ColorTable {
    /// Create a table from breakpoints, validating the LUT invariants.
    pub fn new(stops: Vec<Breakpoint>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::InvalidColorTable {
                reason: "fewer than 2 breakpoints",
            });
        }
        for stop in &stops {
            if !stop.pos.is_finite() || stop.pos < 0.0 || stop.pos > 1.0 {
                return Err(Error::InvalidColorTable {
                    reason: "breakpoint position outside [0, 1]",
                });
            }
        }
        if stops.windows(2).any(|w| w[0].pos > w[1].pos) {
            return Err(Error::InvalidColorTable {
                reason: "breakpoint positions not sorted ascending",
            });
        }

        Ok(Self {
            stops,
            inverted: false,
        })
    }

    /// Create a table from the parallel-array form used at the wasm
    /// boundary: `positions[i]` pairs with `colors[4*i .. 4*i+4]` (RGBA).
    pub fn from_raw(positions: &[f32], colors: &[u8]) -> Result<Self> {
        if colors.len() != positions.len() * 4 {
            return Err(Error::InvalidColorTable {
                reason: "color data length is not 4x the position count",
            });
        }
        let stops = positions
            .iter()
            .zip(colors.chunks_exact(4))
            .map(|(&pos, c)| Breakpoint::new(pos, c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(stops)
    }

    /// Toggle the polarity flag.
    pub fn invert(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    /// Set the polarity flag.
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Whether queries are reflected about 0.5 before lookup.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The breakpoints, sorted ascending by position.
    pub fn stops(&self) -> &[Breakpoint] {
        &self.stops
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Interpolate the table at `position`.
    ///
    /// Positions at or below 0 return the first breakpoint's color
    /// unchanged, at or above 1 the last's; in between, the bracketing
    /// breakpoint pair is located and each channel is linearly
    /// interpolated and truncated toward zero to a byte. Out-of-[0,1]
    /// inputs are expected from normalization noise at the range edges.
    pub fn sample(&self, position: f32) -> Rgba {
        let pos = if self.inverted { 1.0 - position } else { position };

        let n = self.stops.len();
        if pos <= 0.0 {
            return self.stops[0].color;
        }
        if pos >= 1.0 {
            return self.stops[n - 1].color;
        }

        // Seed the bracket search assuming roughly uniform breakpoint
        // spacing. Successive queries from the rasterizer are spatially
        // close, so the scan from the seed is short in practice.
        let mut i = ((pos * (n - 1) as f32) as usize).min(n - 2);
        if self.stops[i].pos > pos {
            while i > 0 && self.stops[i].pos > pos {
                i -= 1;
            }
        } else {
            while i < n - 2 && self.stops[i + 1].pos < pos {
                i += 1;
            }
        }

        let lo = self.stops[i];
        let hi = self.stops[i + 1];
        let x = (pos - lo.pos) / (hi.pos - lo.pos);

        // Truncating cast, not rounding: golden-image consumers depend on
        // the exact byte values.
        Rgba::new(
            (x * hi.color.r as f32 + (1.0 - x) * lo.color.r as f32) as u8,
            (x * hi.color.g as f32 + (1.0 - x) * lo.color.g as f32) as u8,
            (x * hi.color.b as f32 + (1.0 - x) * lo.color.b as f32) as u8,
            (x * hi.color.a as f32 + (1.0 - x) * lo.color.a as f32) as u8,
        )
    }
}
