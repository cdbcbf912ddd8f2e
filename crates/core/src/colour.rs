//! RGBA colours and colour specification resolution.
//!
//! Callers describe colours the way plotting code usually does: a name
//! (`"red"`, `"tab:blue"`, `"k"`), a hex string (`"#ff8800"`), a grey level
//! (`"0.25"`) or a numeric RGB/RGBA tuple. [`ColourSpec`] captures all of
//! these and a [`ColourResolver`] turns the textual forms into [`Rgba`].

use std::fmt;
use std::str::FromStr;

use palette::{Srgb, Srgba};

use crate::error::{Error, Result};

/// RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black, the colour of every unset mask element.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from RGB components.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Colour from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantise to 8-bit channels, clamping out-of-range components.
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array().map(quantise)
    }

    /// Whether every component lies in `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        self.to_array()
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Linear interpolation towards `other`; `t = 0` gives `self`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[f64; 3]> for Rgba {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::opaque(r, g, b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NamedColours.resolve(s)
    }
}

/// Map a `[0, 1]` component to `0..=255`. NaN maps to 0.
pub(crate) fn quantise(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Any of the accepted ways of specifying a colour.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourSpec {
    /// Name, hex string or grey level, resolved by a [`ColourResolver`]
    Name(String),
    /// Opaque RGB triple in `[0, 1]`
    Rgb([f64; 3]),
    /// RGBA quadruple in `[0, 1]`
    Rgba([f64; 4]),
}

impl ColourSpec {
    /// Resolve with the built-in [`NamedColours`] table.
    pub fn to_rgba(&self) -> Result<Rgba> {
        self.resolve_with(&NamedColours)
    }

    /// Resolve textual specs through `resolver`; numeric specs are validated
    /// and passed through.
    pub fn resolve_with<R: ColourResolver + ?Sized>(&self, resolver: &R) -> Result<Rgba> {
        match self {
            ColourSpec::Name(name) => resolver.resolve(name),
            ColourSpec::Rgb(rgb) => checked(Rgba::from(*rgb)),
            ColourSpec::Rgba(rgba) => checked(Rgba::from(*rgba)),
        }
    }
}

fn checked(colour: Rgba) -> Result<Rgba> {
    if colour.is_valid() {
        Ok(colour)
    } else {
        Err(Error::InvalidParameter {
            name: "colour",
            value: format!("{:?}", colour.to_array()),
            reason: "components must lie in [0, 1]".to_string(),
        })
    }
}

impl From<&str> for ColourSpec {
    fn from(s: &str) -> Self {
        ColourSpec::Name(s.to_string())
    }
}

impl From<String> for ColourSpec {
    fn from(s: String) -> Self {
        ColourSpec::Name(s)
    }
}

impl From<&String> for ColourSpec {
    fn from(s: &String) -> Self {
        ColourSpec::Name(s.clone())
    }
}

impl From<[f64; 3]> for ColourSpec {
    fn from(rgb: [f64; 3]) -> Self {
        ColourSpec::Rgb(rgb)
    }
}

impl From<[f64; 4]> for ColourSpec {
    fn from(rgba: [f64; 4]) -> Self {
        ColourSpec::Rgba(rgba)
    }
}

impl From<(f64, f64, f64)> for ColourSpec {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        ColourSpec::Rgb([r, g, b])
    }
}

impl From<(f64, f64, f64, f64)> for ColourSpec {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        ColourSpec::Rgba([r, g, b, a])
    }
}

impl From<Rgba> for ColourSpec {
    fn from(c: Rgba) -> Self {
        ColourSpec::Rgba(c.to_array())
    }
}

/// Resolves textual colour specifications to RGBA.
pub trait ColourResolver {
    fn resolve(&self, spec: &str) -> Result<Rgba>;
}

/// Built-in resolver.
///
/// Accepts single-letter base colours, the Tableau palette (`tab:*`) and its
/// cycle aliases `C0`..`C9`, every CSS named colour, `#rgb[a]` and
/// `#rrggbb[aa]` hex strings, and grey-level strings such as `"0.75"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedColours;

impl ColourResolver for NamedColours {
    fn resolve(&self, spec: &str) -> Result<Rgba> {
        let unknown = || Error::UnknownColour(spec.to_string());
        let s = spec.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(unknown);
        }

        let lower = s.to_ascii_lowercase();
        if lower == "none" || lower == "transparent" {
            return Ok(Rgba::TRANSPARENT);
        }
        if let Some(&(_, [r, g, b])) = BASE_COLOURS.iter().find(|(n, _)| *n == lower) {
            return Ok(Rgba::opaque(r, g, b));
        }
        if let Some(hex) = tableau(&lower) {
            return parse_hex(hex).ok_or_else(unknown);
        }
        if let Some(c) = palette::named::from_str(&lower) {
            return Ok(Rgba::from_rgba8(c.red, c.green, c.blue, u8::MAX));
        }

        // Grey level, e.g. "0.75"
        if let Ok(level) = lower.parse::<f64>() {
            if (0.0..=1.0).contains(&level) {
                return Ok(Rgba::opaque(level, level, level));
            }
            return Err(Error::InvalidParameter {
                name: "colour",
                value: spec.to_string(),
                reason: "grey level must lie in [0, 1]".to_string(),
            });
        }

        Err(unknown())
    }
}

/// Parse `rgb`, `rgba`, `rrggbb` or `rrggbbaa` (without the leading `#`).
fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 | 6 => {
            let c: Srgb<u8> = hex.parse().ok()?;
            Some(Rgba::from_rgba8(c.red, c.green, c.blue, u8::MAX))
        }
        4 | 8 => {
            let c: Srgba<u8> = hex.parse().ok()?;
            Some(Rgba::from_rgba8(c.red, c.green, c.blue, c.alpha))
        }
        _ => None,
    }
}

/// Hex code of a `tab:*` name or a `cN` cycle alias (lowercase input).
fn tableau(name: &str) -> Option<&'static str> {
    if let Some(n) = name.strip_prefix('c').and_then(|d| d.parse::<usize>().ok()) {
        return Some(TABLEAU[n % TABLEAU.len()].1);
    }
    let name = if name == "tab:grey" { "tab:gray" } else { name };
    TABLEAU.iter().find(|(n, _)| *n == name).map(|&(_, hex)| hex)
}

// ─── Colour tables ────────────────────────────────────────────────────

const BASE_COLOURS: &[(&str, [f64; 3])] = &[
    ("b", [0.0, 0.0, 1.0]),
    ("g", [0.0, 0.5, 0.0]),
    ("r", [1.0, 0.0, 0.0]),
    ("c", [0.0, 0.75, 0.75]),
    ("m", [0.75, 0.0, 0.75]),
    ("y", [0.75, 0.75, 0.0]),
    ("k", [0.0, 0.0, 0.0]),
    ("w", [1.0, 1.0, 1.0]),
];

/// Tableau palette in default colour-cycle order
const TABLEAU: &[(&str, &str)] = &[
    ("tab:blue", "1f77b4"),
    ("tab:orange", "ff7f0e"),
    ("tab:green", "2ca02c"),
    ("tab:red", "d62728"),
    ("tab:purple", "9467bd"),
    ("tab:brown", "8c564b"),
    ("tab:pink", "e377c2"),
    ("tab:gray", "7f7f7f"),
    ("tab:olive", "bcbd22"),
    ("tab:cyan", "17becf"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_named_colours() {
        assert_eq!("red".parse::<Rgba>().unwrap(), Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!("Blue".parse::<Rgba>().unwrap(), Rgba::opaque(0.0, 0.0, 1.0));
        assert_eq!("k".parse::<Rgba>().unwrap(), Rgba::BLACK);
        assert_eq!("none".parse::<Rgba>().unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_base_colour_fractions() {
        let c = "c".parse::<Rgba>().unwrap();
        assert_relative_eq!(c.g, 0.75);
        assert_relative_eq!(c.b, 0.75);
    }

    #[test]
    fn test_tableau_colour() {
        let c = "tab:orange".parse::<Rgba>().unwrap();
        assert_eq!(c.to_rgba8(), [0xff, 0x7f, 0x0e, 0xff]);
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!("#f00".parse::<Rgba>().unwrap(), Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!("#00ff00".parse::<Rgba>().unwrap(), Rgba::opaque(0.0, 1.0, 0.0));
        let c = "#0000ff80".parse::<Rgba>().unwrap();
        assert_relative_eq!(c.a, 128.0 / 255.0);
        let c = "#fff0".parse::<Rgba>().unwrap();
        assert_eq!(c, Rgba::WHITE.with_alpha(0.0));
    }

    #[test]
    fn test_css_names() {
        let c = "darkviolet".parse::<Rgba>().unwrap();
        assert_eq!(c.to_rgba8(), [0x94, 0x00, 0xd3, 0xff]);
        assert_eq!("SlateGray".parse::<Rgba>().unwrap().to_rgba8(), [0x70, 0x80, 0x90, 0xff]);
        assert_eq!("lavender".parse::<Rgba>().unwrap().to_rgba8(), [0xe6, 0xe6, 0xfa, 0xff]);
        assert_eq!("green".parse::<Rgba>().unwrap().to_rgba8(), [0x00, 0x80, 0x00, 0xff]);
    }

    #[test]
    fn test_cycle_aliases() {
        assert_eq!("C0".parse::<Rgba>().unwrap(), "tab:blue".parse::<Rgba>().unwrap());
        assert_eq!("C3".parse::<Rgba>().unwrap(), "tab:red".parse::<Rgba>().unwrap());
        assert_eq!("tab:grey".parse::<Rgba>().unwrap(), "tab:gray".parse::<Rgba>().unwrap());
        // Single letter "c" stays cyan
        assert_relative_eq!("c".parse::<Rgba>().unwrap().b, 0.75);
    }

    #[test]
    fn test_bad_hex() {
        assert!(matches!("#12345".parse::<Rgba>(), Err(Error::UnknownColour(_))));
        assert!(matches!("#gg0000".parse::<Rgba>(), Err(Error::UnknownColour(_))));
        assert!(matches!("#+f0".parse::<Rgba>(), Err(Error::UnknownColour(_))));
    }

    #[test]
    fn test_grey_level() {
        let c = "0.25".parse::<Rgba>().unwrap();
        assert_eq!(c, Rgba::opaque(0.25, 0.25, 0.25));
        assert!(matches!(
            "1.5".parse::<Rgba>(),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_unknown_name() {
        let err = "notacolour".parse::<Rgba>().unwrap_err();
        assert!(matches!(err, Error::UnknownColour(ref s) if s == "notacolour"));
    }

    #[test]
    fn test_spec_tuples() {
        let spec = ColourSpec::from((0.2, 0.4, 0.6));
        assert_eq!(spec.to_rgba().unwrap(), Rgba::opaque(0.2, 0.4, 0.6));

        let spec = ColourSpec::from([0.1, 0.2, 0.3, 0.5]);
        assert_eq!(spec.to_rgba().unwrap(), Rgba::new(0.1, 0.2, 0.3, 0.5));

        let spec = ColourSpec::from([1.2, 0.0, 0.0]);
        assert!(spec.to_rgba().is_err());
    }

    #[test]
    fn test_custom_resolver() {
        struct AlwaysGreen;
        impl ColourResolver for AlwaysGreen {
            fn resolve(&self, _spec: &str) -> Result<Rgba> {
                Ok(Rgba::opaque(0.0, 1.0, 0.0))
            }
        }

        let spec = ColourSpec::from("anything");
        assert_eq!(
            spec.resolve_with(&AlwaysGreen).unwrap(),
            Rgba::opaque(0.0, 1.0, 0.0)
        );
        // Numeric specs bypass the resolver
        let spec = ColourSpec::from([0.0, 0.0, 1.0]);
        assert_eq!(spec.resolve_with(&AlwaysGreen).unwrap(), Rgba::opaque(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_display_and_quantise() {
        assert_eq!(Rgba::opaque(1.0, 0.0, 0.0).to_string(), "#ff0000ff");
        assert_eq!(Rgba::new(2.0, -1.0, f64::NAN, 0.5).to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.a, 1.0);
    }
}
