//! Render settings, loadable from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::drawer::LabelDrawer;
use crate::error::RenderError;

/// Smallest cell size the raster renderer will use.
pub const MIN_SCALE: u32 = 8;
/// Largest configurable cell size.
pub const MAX_SCALE: u32 = 1024;
/// Largest configurable gap between diagram nodes.
pub const MAX_DIAGRAM_SPACING: u32 = 1024;
/// Largest image either renderer will allocate, in pixels.
pub const MAX_PIXELS: u64 = 1 << 26;
const MAX_SCALE_INTERVAL: u32 = 50;

/// Options shared by the raster and diagram renderers.
///
/// ```toml
/// scale = 32
/// font = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
/// label_size = 0.75
/// diagram_spacing = 40
/// node_radius = 10
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Pixels per cell side. Derived from the grid when unset.
    pub scale: Option<u32>,
    /// TrueType font for labels. No labels are drawn without one.
    pub font: Option<PathBuf>,
    /// Label font size as a fraction of the cell size.
    pub label_size: f32,
    /// Pixels between neighbouring diagram nodes.
    pub diagram_spacing: u32,
    /// Diagram node radius in pixels.
    pub node_radius: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: None,
            font: None,
            label_size: 0.75,
            diagram_spacing: 40,
            node_radius: 10,
        }
    }
}

impl RenderOptions {
    /// Parse options from TOML text. `origin` is only used in errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, RenderError> {
        let opts: Self = toml::from_str(text).map_err(|source| RenderError::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        opts.check()?;
        Ok(opts)
    }

    /// Read options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        Self::from_toml_str(&text, path)
    }

    /// Reject values no renderer can honour.
    pub fn check(&self) -> Result<(), RenderError> {
        match self.scale {
            Some(0) => return Err(invalid("scale", "must be at least 1")),
            Some(s) if s > MAX_SCALE => {
                return Err(invalid("scale", &format!("must be at most {MAX_SCALE}")));
            }
            _ => {}
        }
        if !(self.label_size > 0.0 && self.label_size <= 1.0) {
            return Err(invalid("label_size", "must be in (0, 1]"));
        }
        if self.node_radius == 0 {
            return Err(invalid("node_radius", "must be at least 1"));
        }
        if self.diagram_spacing > MAX_DIAGRAM_SPACING {
            return Err(invalid(
                "diagram_spacing",
                &format!("must be at most {MAX_DIAGRAM_SPACING}"),
            ));
        }
        if u64::from(self.diagram_spacing) <= 2 * u64::from(self.node_radius) {
            return Err(invalid(
                "diagram_spacing",
                "must exceed the node diameter",
            ));
        }
        Ok(())
    }

    /// Cell size for a grid whose heaviest weight above 1 is `max_weight`.
    ///
    /// Uses the configured scale if any. Otherwise cells start at 50 pixels
    /// and shrink as weights get heavier, never below [`MIN_SCALE`].
    pub fn scale_for(&self, max_weight: u32) -> u32 {
        if let Some(s) = self.scale {
            return s;
        }
        let steps = max_weight / MAX_SCALE_INTERVAL;
        MAX_SCALE_INTERVAL
            .saturating_sub(MAX_SCALE_INTERVAL.saturating_mul(steps))
            .max(MIN_SCALE)
    }

    /// Load the label font, if one is configured.
    pub fn drawer(&self) -> Result<Option<LabelDrawer>, RenderError> {
        match &self.font {
            Some(path) => LabelDrawer::from_file(path).map(Some),
            None => {
                log::warn!("no font configured, labels will be omitted");
                Ok(None)
            }
        }
    }
}

/// Image dimensions as `u32`, or an error naming `option` when the image
/// would exceed [`MAX_PIXELS`].
pub(crate) fn canvas(
    width: u64,
    height: u64,
    option: &'static str,
) -> Result<(u32, u32), RenderError> {
    let too_big = || {
        invalid(
            option,
            &format!("a {width}x{height}px image exceeds {MAX_PIXELS} pixels"),
        )
    };
    let pixels = width.checked_mul(height).ok_or_else(too_big)?;
    if pixels > MAX_PIXELS {
        return Err(too_big());
    }
    let w = u32::try_from(width).map_err(|_| too_big())?;
    let h = u32::try_from(height).map_err(|_| too_big())?;
    Ok((w, h))
}

fn invalid(name: &'static str, reason: &str) -> RenderError {
    RenderError::InvalidOption {
        name,
        reason: reason.to_string(),
    }
}
