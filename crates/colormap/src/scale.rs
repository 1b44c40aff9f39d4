//! Value scale transforms applied to samples before normalization.

/// Floor sentinel for log10 of non-positive values.
///
/// Keeps the transform total over invalid-for-log inputs while still
/// sorting below every valid log the engine encounters.
pub const LOG_FLOOR: f32 = -5.0;

/// Scale applied to sample values before range normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleType {
    #[default]
    Linear,
    Log,
    SymLog,
}

impl ScaleType {
    /// Decode the wire representation used at the wasm boundary
    /// (0 = linear, 1 = log, 2 = symlog).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Linear),
            1 => Some(Self::Log),
            2 => Some(Self::SymLog),
            _ => None,
        }
    }
}

/// Transform a raw sample value according to the selected scale.
///
/// - `Linear` is the identity.
/// - `Log` is `log10(z)`, with non-positive inputs mapped to [`LOG_FLOOR`].
/// - `SymLog` is the identity inside `|z| <= linthresh` (avoiding the log
///   singularity at zero) and a sign-preserving compressive extension
///   outside: `sign(z) * linthresh * (1 + log10(|z|/linthresh)/linscale)`.
///   Continuous at `±linthresh`.
pub fn transform(z: f32, scale: ScaleType, linthresh: f32, linscale: f32) -> f32 {
    match scale {
        ScaleType::Linear => z,
        ScaleType::Log => {
            if z <= 0.0 {
                LOG_FLOOR
            } else {
                z.log10()
            }
        }
        ScaleType::SymLog => {
            if z.abs() <= linthresh {
                z
            } else {
                let zt = linthresh * (1.0 + (z.abs() / linthresh).log10() / linscale);
                if z < 0.0 {
                    -zt
                } else {
                    zt
                }
            }
        }
    }
}
