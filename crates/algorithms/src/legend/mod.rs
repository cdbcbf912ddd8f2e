//! Colour legends
//!
//! [`create_legend`] pairs colours with labels and hands one placeholder
//! marker per pair to a [`LegendSurface`]. The surface is always passed in
//! explicitly; [`Axes`] is the built-in one.

mod axes;
mod handle;

pub use axes::{Axes, Legend};
pub use handle::{LegendEntry, Marker, MarkerHandle, DEFAULT_MARKER_SIZE};

use tracing::debug;

use medvis_core::{ColourResolver, ColourSpec, Error, NamedColours, Result};

/// Placement of a legend on its surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl Location {
    pub fn name(&self) -> &'static str {
        match self {
            Location::Best => "best",
            Location::UpperRight => "upper right",
            Location::UpperLeft => "upper left",
            Location::LowerLeft => "lower left",
            Location::LowerRight => "lower right",
            Location::Right => "right",
            Location::CenterLeft => "center left",
            Location::CenterRight => "center right",
            Location::LowerCenter => "lower center",
            Location::UpperCenter => "upper center",
            Location::Center => "center",
        }
    }
}

/// Presentation options forwarded untouched to the surface
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOptions {
    pub location: Location,
    pub title: Option<String>,
    /// Number of columns entries are laid out in
    pub columns: usize,
    /// Draw a frame around the legend
    pub frame: bool,
    /// Label font size in points
    pub font_size: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            location: Location::Best,
            title: None,
            columns: 1,
            frame: true,
            font_size: 10.0,
        }
    }
}

impl LegendOptions {
    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

/// Anything a legend can be attached to.
pub trait LegendSurface {
    /// Attach a legend built from `entries`, returning the stored artifact.
    fn legend(&mut self, entries: Vec<LegendEntry>, options: LegendOptions) -> Result<&Legend>;
}

/// Create a legend mapping `colours` to `labels` on `surface`.
///
/// Every colour becomes a [`MarkerHandle::swatch`] whose only visible part
/// is its face colour.
///
/// # Errors
/// * [`Error::LengthMismatch`] when the slices differ in length
/// * [`Error::UnknownColour`] and friends when a colour does not resolve
///
/// Nothing is attached to `surface` when an error is returned.
pub fn create_legend<'s, C, L, S>(
    colours: &[C],
    labels: &[L],
    surface: &'s mut S,
    options: LegendOptions,
) -> Result<&'s Legend>
where
    C: Clone + Into<ColourSpec>,
    L: AsRef<str>,
    S: LegendSurface + ?Sized,
{
    create_legend_with(&NamedColours, colours, labels, surface, options)
}

/// [`create_legend`] resolving colour names through `resolver`.
pub fn create_legend_with<'s, R, C, L, S>(
    resolver: &R,
    colours: &[C],
    labels: &[L],
    surface: &'s mut S,
    options: LegendOptions,
) -> Result<&'s Legend>
where
    R: ColourResolver + ?Sized,
    C: Clone + Into<ColourSpec>,
    L: AsRef<str>,
    S: LegendSurface + ?Sized,
{
    if colours.len() != labels.len() {
        return Err(Error::LengthMismatch {
            colours: colours.len(),
            labels: labels.len(),
        });
    }

    let entries = colours
        .iter()
        .zip(labels)
        .map(|(colour, label)| -> Result<LegendEntry> {
            let face = Into::<ColourSpec>::into(colour.clone()).resolve_with(resolver)?;
            Ok(LegendEntry::new(label.as_ref(), MarkerHandle::swatch(face)))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        entries = entries.len(),
        location = options.location.name(),
        "creating legend"
    );
    surface.legend(entries, options)
}
