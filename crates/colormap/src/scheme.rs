//! Built-in colour schemes and the multi-stop interpolation engine.
//!
//! Stop tables are sampled from the standard scientific colormaps of the
//! same names; values between stops are interpolated linearly in RGB.

use medvis_core::Rgba;

/// 8-bit RGB colour used in the stop tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA with components in `[0, 1]`.
    pub fn to_rgba(self) -> Rgba {
        Rgba::from_rgba8(self.r, self.g, self.b, 255)
    }
}

/// A colour stop: position in [0, 1] mapped to an RGB colour.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available colour schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Black -> White
    #[default]
    Gray,
    /// Black -> Blue-grey -> White (structural MR/CT)
    Bone,
    /// Black -> Red -> Yellow -> White (activation maps)
    Hot,
    /// Dark blue -> Cyan -> Yellow -> Dark red
    Jet,
    /// Purple -> Teal -> Yellow (perceptually uniform)
    Viridis,
    /// Black -> Purple -> Orange -> Pale yellow
    Inferno,
    /// Black -> Purple -> Salmon -> Pale yellow
    Magma,
    /// Blue -> Magenta -> Orange -> Yellow
    Plasma,
    /// Blue -> Light grey -> Red (signed data)
    Coolwarm,
    /// White -> Dark red
    Reds,
    /// White -> Dark blue
    Blues,
    /// White -> Dark green
    Greens,
}

impl ColorScheme {
    /// All available schemes.
    pub const ALL: &[ColorScheme] = &[
        Self::Gray,
        Self::Bone,
        Self::Hot,
        Self::Jet,
        Self::Viridis,
        Self::Inferno,
        Self::Magma,
        Self::Plasma,
        Self::Coolwarm,
        Self::Reds,
        Self::Blues,
        Self::Greens,
    ];

    /// Lookup name, as accepted by [`ColorScheme::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Bone => "bone",
            Self::Hot => "hot",
            Self::Jet => "jet",
            Self::Viridis => "viridis",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Plasma => "plasma",
            Self::Coolwarm => "coolwarm",
            Self::Reds => "reds",
            Self::Blues => "blues",
            Self::Greens => "greens",
        }
    }

    /// Case-insensitive lookup; `grey` is accepted for `gray`.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        if lower == "grey" {
            return Some(Self::Gray);
        }
        Self::ALL.iter().copied().find(|s| s.name() == lower)
    }
}

// ─── Colour stop definitions ──────────────────────────────────────────

const BONE_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 0, 0, 0),
    ColorStop::new(0.365, 81, 81, 113),
    ColorStop::new(0.746, 166, 198, 198),
    ColorStop::new(1.000, 255, 255, 255),
];

const HOT_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 11, 0, 0),
    ColorStop::new(0.365, 255, 0, 0),
    ColorStop::new(0.746, 255, 255, 0),
    ColorStop::new(1.000, 255, 255, 255),
];

const JET_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 0, 0, 128),
    ColorStop::new(0.125, 0, 0, 255),
    ColorStop::new(0.375, 0, 255, 255),
    ColorStop::new(0.625, 255, 255, 0),
    ColorStop::new(0.875, 255, 0, 0),
    ColorStop::new(1.000, 128, 0, 0),
];

const VIRIDIS_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 68, 1, 84),
    ColorStop::new(0.25, 59, 82, 139),
    ColorStop::new(0.50, 33, 145, 140),
    ColorStop::new(0.75, 94, 201, 98),
    ColorStop::new(1.00, 253, 231, 37),
];

const INFERNO_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 0, 0, 4),
    ColorStop::new(0.25, 87, 16, 110),
    ColorStop::new(0.50, 188, 55, 84),
    ColorStop::new(0.75, 249, 142, 9),
    ColorStop::new(1.00, 252, 255, 164),
];

const MAGMA_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 0, 0, 4),
    ColorStop::new(0.25, 81, 18, 124),
    ColorStop::new(0.50, 183, 55, 121),
    ColorStop::new(0.75, 252, 137, 97),
    ColorStop::new(1.00, 252, 253, 191),
];

const PLASMA_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 13, 8, 135),
    ColorStop::new(0.25, 126, 3, 168),
    ColorStop::new(0.50, 204, 71, 120),
    ColorStop::new(0.75, 248, 149, 64),
    ColorStop::new(1.00, 240, 249, 33),
];

const COOLWARM_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 59, 76, 192),
    ColorStop::new(0.25, 141, 176, 254),
    ColorStop::new(0.50, 221, 221, 221),
    ColorStop::new(0.75, 244, 154, 123),
    ColorStop::new(1.00, 180, 4, 38),
];

const REDS_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 255, 245, 240),
    ColorStop::new(0.5, 251, 106, 74),
    ColorStop::new(1.0, 103, 0, 13),
];

const BLUES_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 247, 251, 255),
    ColorStop::new(0.5, 107, 174, 214),
    ColorStop::new(1.0, 8, 48, 107),
];

const GREENS_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 247, 252, 245),
    ColorStop::new(0.5, 116, 196, 118),
    ColorStop::new(1.0, 0, 68, 27),
];

// ─── Interpolation engine ──────────────────────────────────────────────

/// Interpolate between stops sorted by position. `t` outside the stop
/// range clamps to the end colours.
pub(crate) fn multi_stop<T: Copy>(stops: &[T], t: f64, stop: impl Fn(T) -> (f64, Rgba)) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(&first), Some(&last)) => (stop(first), stop(last)),
        _ => return Rgba::TRANSPARENT,
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (stop(pair[0]), stop(pair[1]));
        if t <= hi.0 {
            let ratio = (t - lo.0) / (hi.0 - lo.0);
            return lo.1.lerp(hi.1, ratio);
        }
    }
    last.1
}

fn table_stop(stops: &[ColorStop], t: f64) -> Rgba {
    multi_stop(stops, t, |s| (s.t, s.color.to_rgba()))
}

/// Evaluate a colour scheme at normalised position `t` ∈ [0, 1].
///
/// `Gray` is an exact linear ramp; every other scheme interpolates its stop
/// table. The result is always opaque.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgba {
    match scheme {
        ColorScheme::Gray => {
            let v = t.clamp(0.0, 1.0);
            Rgba::opaque(v, v, v)
        }
        ColorScheme::Bone => table_stop(BONE_STOPS, t),
        ColorScheme::Hot => table_stop(HOT_STOPS, t),
        ColorScheme::Jet => table_stop(JET_STOPS, t),
        ColorScheme::Viridis => table_stop(VIRIDIS_STOPS, t),
        ColorScheme::Inferno => table_stop(INFERNO_STOPS, t),
        ColorScheme::Magma => table_stop(MAGMA_STOPS, t),
        ColorScheme::Plasma => table_stop(PLASMA_STOPS, t),
        ColorScheme::Coolwarm => table_stop(COOLWARM_STOPS, t),
        ColorScheme::Reds => table_stop(REDS_STOPS, t),
        ColorScheme::Blues => table_stop(BLUES_STOPS, t),
        ColorScheme::Greens => table_stop(GREENS_STOPS, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gray_is_linear() {
        let c = evaluate(ColorScheme::Gray, 0.5);
        assert_eq!(c, Rgba::opaque(0.5, 0.5, 0.5));
        assert_eq!(evaluate(ColorScheme::Gray, 0.0), Rgba::BLACK);
        assert_eq!(evaluate(ColorScheme::Gray, 1.0), Rgba::WHITE);
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(evaluate(ColorScheme::Viridis, 0.0).to_rgba8(), [68, 1, 84, 255]);
        assert_eq!(evaluate(ColorScheme::Viridis, 1.0).to_rgba8(), [253, 231, 37, 255]);
    }

    #[test]
    fn hot_passes_through_red() {
        let c = evaluate(ColorScheme::Hot, 0.365);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn interpolates_between_stops() {
        // Halfway between the 0.0 and 0.5 Reds stops
        let c = evaluate(ColorScheme::Reds, 0.25);
        assert_relative_eq!(c.r, (255.0 + 251.0) / 2.0 / 255.0, epsilon = 1e-12);
        assert_relative_eq!(c.g, (245.0 + 106.0) / 2.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn clamping_outside_unit_interval() {
        assert_eq!(
            evaluate(ColorScheme::Jet, -0.5),
            evaluate(ColorScheme::Jet, 0.0)
        );
        assert_eq!(
            evaluate(ColorScheme::Jet, 1.5),
            evaluate(ColorScheme::Jet, 1.0)
        );
    }

    #[test]
    fn from_name_lookup() {
        assert_eq!(ColorScheme::from_name("Viridis"), Some(ColorScheme::Viridis));
        assert_eq!(ColorScheme::from_name("grey"), Some(ColorScheme::Gray));
        assert_eq!(ColorScheme::from_name("rainbow"), None);
    }

    #[test]
    fn all_schemes_round_trip_names() {
        for &scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::from_name(scheme.name()), Some(scheme));
        }
    }

    #[test]
    fn all_schemes_opaque_and_valid() {
        for &scheme in ColorScheme::ALL {
            for i in 0..=10 {
                let c = evaluate(scheme, i as f64 / 10.0);
                assert!(c.is_valid(), "{} at {}", scheme.name(), i);
                assert_eq!(c.a, 1.0);
            }
        }
    }
}
