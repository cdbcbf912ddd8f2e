//! Legend artifact and the in-crate plotting surface

use ndarray::{s, Array3};
use tracing::debug;

use medvis_core::{Error, Result, Rgba};

use super::handle::LegendEntry;
use super::{LegendOptions, LegendSurface};

/// A legend: ordered entries plus the options it was created with
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    options: LegendOptions,
}

impl Legend {
    pub fn new(entries: Vec<LegendEntry>, options: LegendOptions) -> Self {
        Self { entries, options }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn options(&self) -> &LegendOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Face colours, in entry order
    pub fn colours(&self) -> Vec<Rgba> {
        self.entries.iter().map(|e| e.handle.face_colour).collect()
    }

    /// Render the entry glyphs into an RGBA image.
    ///
    /// Each glyph occupies a `swatch`×`swatch` cell; cells are laid out in
    /// `options.columns` columns, filled column by column. Pixels outside a
    /// glyph are transparent. The output has shape
    /// `(rows * swatch, columns * swatch, 4)`.
    pub fn render_swatches(&self, swatch: usize) -> Result<Array3<f64>> {
        if swatch == 0 {
            return Err(Error::InvalidParameter {
                name: "swatch",
                value: swatch.to_string(),
                reason: "swatch size must be at least one pixel".to_string(),
            });
        }
        if self.options.columns == 0 {
            return Err(Error::InvalidParameter {
                name: "columns",
                value: "0".to_string(),
                reason: "a legend needs at least one column".to_string(),
            });
        }

        let n = self.entries.len();
        let columns = self.options.columns.min(n.max(1));
        let rows = n.div_ceil(columns);
        let mut image = Array3::<f64>::zeros((rows * swatch, columns * swatch, 4));

        let half = swatch as f64 / 2.0;
        for (i, entry) in self.entries.iter().enumerate() {
            let (row, col) = (i % rows, i / rows);
            let face = entry.handle.face_colour.to_array();
            let mut cell = image.slice_mut(s![
                row * swatch..(row + 1) * swatch,
                col * swatch..(col + 1) * swatch,
                ..
            ]);
            for y in 0..swatch {
                for x in 0..swatch {
                    let dy = (y as f64 + 0.5 - half) / half;
                    let dx = (x as f64 + 0.5 - half) / half;
                    if entry.handle.marker.covers(dy, dx) {
                        for (k, &v) in face.iter().enumerate() {
                            cell[[y, x, k]] = v;
                        }
                    }
                }
            }
        }

        debug!(entries = n, rows, columns, swatch, "rendered legend swatches");
        Ok(image)
    }
}

/// Minimal plotting surface holding at most one legend.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    legend: Option<Legend>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legend currently attached to the axes, if any
    pub fn current_legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Detach and return the current legend
    pub fn remove_legend(&mut self) -> Option<Legend> {
        self.legend.take()
    }
}

impl LegendSurface for Axes {
    fn legend(&mut self, entries: Vec<LegendEntry>, options: LegendOptions) -> Result<&Legend> {
        if self.legend.is_some() {
            debug!("replacing existing legend");
        }
        let legend: &Legend = self.legend.insert(Legend::new(entries, options));
        Ok(legend)
    }
}
