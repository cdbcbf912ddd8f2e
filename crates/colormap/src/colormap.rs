//! Colormap resolver trait, name lookup and custom colormaps.

use medvis_core::{ColourSpec, Error, Result, Rgba};

use crate::scheme::{evaluate, multi_stop, ColorScheme};

/// Maps a normalised value in `[0, 1]` to an RGBA colour.
pub trait Colormap {
    /// Colour at position `t`. Values outside `[0, 1]` clamp to the ends.
    fn rgba(&self, t: f64) -> Rgba;

    /// Name used for lookup and display.
    fn name(&self) -> &str;
}

impl Colormap for ColorScheme {
    fn rgba(&self, t: f64) -> Rgba {
        evaluate(*self, t)
    }

    fn name(&self) -> &str {
        ColorScheme::name(self)
    }
}

impl<C: Colormap + ?Sized> Colormap for &C {
    fn rgba(&self, t: f64) -> Rgba {
        (**self).rgba(t)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Colormap + ?Sized> Colormap for Box<C> {
    fn rgba(&self, t: f64) -> Rgba {
        (**self).rgba(t)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A colormap traversed from its high end to its low end.
#[derive(Debug, Clone)]
pub struct Reversed<C> {
    inner: C,
    name: String,
}

impl<C: Colormap> Reversed<C> {
    pub fn new(inner: C) -> Self {
        let name = format!("{}_r", inner.name());
        Self { inner, name }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Colormap> Colormap for Reversed<C> {
    fn rgba(&self, t: f64) -> Rgba {
        self.inner.rgba(1.0 - t)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Colormap interpolating linearly between arbitrary colour stops.
///
/// Unlike the built-in schemes, stops may carry their own alpha.
#[derive(Debug, Clone)]
pub struct LinearColormap {
    name: String,
    stops: Vec<(f64, Rgba)>,
}

impl LinearColormap {
    /// Build from explicit `(position, colour)` stops.
    ///
    /// Positions must start at 0, end at 1 and increase strictly.
    pub fn from_stops(name: impl Into<String>, stops: Vec<(f64, Rgba)>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::InvalidParameter {
                name: "stops",
                value: stops.len().to_string(),
                reason: "a colormap needs at least two stops".to_string(),
            });
        }
        let first = stops[0].0;
        let last = stops[stops.len() - 1].0;
        if first != 0.0 || last != 1.0 {
            return Err(Error::InvalidParameter {
                name: "stops",
                value: format!("[{first}, {last}]"),
                reason: "stop positions must span exactly [0, 1]".to_string(),
            });
        }
        if stops.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(Error::InvalidParameter {
                name: "stops",
                value: format!("{:?}", stops.iter().map(|s| s.0).collect::<Vec<_>>()),
                reason: "stop positions must increase strictly".to_string(),
            });
        }
        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    /// Build from evenly spaced colours.
    pub fn from_colours<C>(name: impl Into<String>, colours: &[C]) -> Result<Self>
    where
        C: Clone + Into<ColourSpec>,
    {
        let n = colours.len();
        let stops = colours
            .iter()
            .enumerate()
            .map(|(i, c)| -> Result<(f64, Rgba)> {
                let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                Ok((t, Into::<ColourSpec>::into(c.clone()).to_rgba()?))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_stops(name, stops)
    }

    pub fn stops(&self) -> &[(f64, Rgba)] {
        &self.stops
    }
}

impl Colormap for LinearColormap {
    fn rgba(&self, t: f64) -> Rgba {
        multi_stop(&self.stops, t, |s| s)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Look up a built-in colormap by name. A `_r` suffix selects the reversed map.
pub fn get_cmap(name: &str) -> Result<Box<dyn Colormap + Send + Sync>> {
    if let Some(scheme) = ColorScheme::from_name(name) {
        return Ok(Box::new(scheme));
    }
    if let Some(base) = name.trim().strip_suffix("_r") {
        if let Some(scheme) = ColorScheme::from_name(base) {
            return Ok(Box::new(Reversed::new(scheme)));
        }
    }
    Err(Error::UnknownColormap(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lookup_by_name() {
        let cmap = get_cmap("viridis").unwrap();
        assert_eq!(cmap.name(), "viridis");
        assert_eq!(cmap.rgba(0.3), evaluate(ColorScheme::Viridis, 0.3));
    }

    #[test]
    fn lookup_reversed() {
        let cmap = get_cmap("gray_r").unwrap();
        assert_eq!(cmap.name(), "gray_r");
        assert_eq!(cmap.rgba(0.0), Rgba::WHITE);
        assert_eq!(cmap.rgba(1.0), Rgba::BLACK);
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(
            get_cmap("not_a_map"),
            Err(Error::UnknownColormap(ref n)) if n == "not_a_map"
        ));
    }

    #[test]
    fn linear_from_colours() {
        let cmap = LinearColormap::from_colours("fade", &["black", "red", "white"]).unwrap();
        assert_eq!(cmap.stops().len(), 3);
        assert_eq!(cmap.rgba(0.5), Rgba::opaque(1.0, 0.0, 0.0));
        let c = cmap.rgba(0.25);
        assert_relative_eq!(c.r, 0.5);
        assert_relative_eq!(c.g, 0.0);
    }

    #[test]
    fn linear_keeps_stop_alpha() {
        let cmap = LinearColormap::from_colours(
            "ghost",
            &[ColourSpec::from([1.0, 0.0, 0.0, 0.0]), ColourSpec::from("red")],
        )
        .unwrap();
        assert_relative_eq!(cmap.rgba(0.5).a, 0.5);
    }

    #[test]
    fn linear_rejects_bad_stops() {
        assert!(LinearColormap::from_colours("one", &["red"]).is_err());
        assert!(LinearColormap::from_stops(
            "gap",
            vec![(0.0, Rgba::BLACK), (0.8, Rgba::WHITE)]
        )
        .is_err());
        assert!(LinearColormap::from_stops(
            "unsorted",
            vec![(0.0, Rgba::BLACK), (0.6, Rgba::WHITE), (0.4, Rgba::BLACK), (1.0, Rgba::WHITE)]
        )
        .is_err());
        assert!(matches!(
            LinearColormap::from_colours("bad", &["red", "nope"]),
            Err(Error::UnknownColour(_))
        ));
    }

    #[test]
    fn reversed_wraps_any_colormap() {
        let cmap = LinearColormap::from_colours("rb", &["red", "blue"]).unwrap();
        let rev = Reversed::new(cmap);
        assert_eq!(rev.name(), "rb_r");
        assert_eq!(rev.rgba(0.0), Rgba::opaque(0.0, 0.0, 1.0));
    }
}
