//! Named colormaps shipped with the plotting GUI.

use crate::lut::{Breakpoint, ColorTable};

/// Built-in colormap presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Dark blue -> blue -> white -> red -> dark red (divergent data)
    Seismic,
    /// Indigo -> blue -> white -> yellow -> orange -> red -> dark red
    SymGrad,
    /// SymGrad with a turquoise band below the white midpoint
    SymGradTurquoise,
}

impl Preset {
    /// All available presets, useful for UI combo boxes.
    pub const ALL: &[Preset] = &[Self::Seismic, Self::SymGrad, Self::SymGradTurquoise];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Seismic => "Seismic",
            Self::SymGrad => "Symmetric Gradient",
            Self::SymGradTurquoise => "Symmetric Gradient (Turquoise)",
        }
    }

    pub(crate) fn stops(&self) -> &'static [Breakpoint] {
        match self {
            Self::Seismic => SEISMIC_STOPS,
            Self::SymGrad => SYMGRAD_STOPS,
            Self::SymGradTurquoise => SYMGRAD_TURQUOISE_STOPS,
        }
    }
}

const SEISMIC_STOPS: &[Breakpoint] = &[
    Breakpoint::new(0.0, 0, 0, 150, 255),
    Breakpoint::new(0.25, 0, 0, 255, 255),
    Breakpoint::new(0.5, 255, 255, 255, 255),
    Breakpoint::new(0.75, 255, 0, 0, 255),
    Breakpoint::new(1.0, 150, 0, 0, 255),
];

const SYMGRAD_STOPS: &[Breakpoint] = &[
    Breakpoint::new(0.0, 75, 0, 130, 255),
    Breakpoint::new(0.333, 0, 0, 255, 255),
    Breakpoint::new(0.5, 255, 255, 255, 255),
    Breakpoint::new(0.625, 255, 255, 0, 255),
    Breakpoint::new(0.75, 255, 165, 0, 255),
    Breakpoint::new(0.875, 255, 0, 0, 255),
    Breakpoint::new(1.0, 150, 0, 0, 255),
];

const SYMGRAD_TURQUOISE_STOPS: &[Breakpoint] = &[
    Breakpoint::new(0.0, 75, 0, 130, 255),
    Breakpoint::new(0.29, 0, 0, 255, 255),
    Breakpoint::new(0.38, 0, 255, 255, 255),
    Breakpoint::new(0.5, 255, 255, 255, 255),
    Breakpoint::new(0.625, 255, 255, 0, 255),
    Breakpoint::new(0.75, 255, 165, 0, 255),
    Breakpoint::new(0.875, 255, 0, 0, 255),
    Breakpoint::new(1.0, 150, 0, 0, 255),
];

impl ColorTable {
    /// Build a table from a named preset.
    pub fn from_preset(preset: Preset) -> Self {
        // Preset tables are static and well-formed, so validation cannot
        // fail here.
        Self::new(preset.stops().to_vec()).expect("preset tables are valid")
    }
}
