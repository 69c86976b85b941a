//! Logo template parsing and the per-color tinted image cache.
//!
//! The logo ships as a text-art template in which `#` marks the solid fill
//! region and spaces are transparent. Tinting substitutes the fill region
//! with a palette color, once per color at startup; after that, getting a
//! tinted logo is a plain map lookup.

use std::collections::HashMap;

use ratatui::style::Color;
use thiserror::Error;
use windrift_core::ColorId;

/// The cell marking the tintable fill region of a template.
pub const FILL_MARKER: char = '#';

/// The built-in logo template: a retro four-pane window.
pub const DEFAULT_TEMPLATE: &str = "\
##############################################
##############################################
##                                          ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
##                                          ##
## ################## ## ################## ##
## ################## ## ################## ##
##                                          ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
## ################## ## ################## ##
##                                          ##
##############################################
##############################################";

/// Errors raised while turning a template into tinted images.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template contained no rows at all.
    #[error("logo template is empty")]
    Empty,
    /// The template had rows but no `#` fill cells to tint.
    #[error("logo template has no fill region to tint")]
    NoFillRegion,
}

/// A logo tinted with a single palette color.
///
/// `mask[y][x]` is true where the template's fill region was; those cells
/// are drawn as full blocks in the tint color, everything else is
/// transparent.
#[derive(Debug, Clone)]
pub struct LogoImage {
    width: u16,
    height: u16,
    mask: Vec<Vec<bool>>,
    tint: Color,
}

impl LogoImage {
    /// Natural width of the logo, in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Natural height of the logo, in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The larger of the logo's natural dimensions.
    pub fn max_dimension(&self) -> u16 {
        self.width.max(self.height)
    }

    /// The color this logo was tinted with.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Whether the cell at (x, y) belongs to the fill region.
    pub fn filled(&self, x: u16, y: u16) -> bool {
        self.mask
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }
}

/// The startup-built map from palette color to tinted logo.
///
/// Fully populated before the animation loop starts and read-only after;
/// there is one entry per requested color and entries are never evicted.
#[derive(Debug)]
pub struct ImageCache {
    images: HashMap<ColorId, LogoImage>,
}

impl ImageCache {
    /// Parse `template` and build one tinted logo per color.
    ///
    /// Fails when the template is empty or contains no fill cells; callers
    /// treat that as fatal to startup.
    pub fn init(template: &str, colors: &[ColorId]) -> Result<Self, TemplateError> {
        let mask = parse_mask(template)?;
        let height = mask.len() as u16;
        let width = mask.iter().map(|row| row.len()).max().unwrap_or(0) as u16;

        let images = colors
            .iter()
            .map(|&color| {
                let image = LogoImage {
                    width,
                    height,
                    mask: mask.clone(),
                    tint: color.color(),
                };
                (color, image)
            })
            .collect();

        Ok(Self { images })
    }

    /// Look up the tinted logo for a color.
    pub fn get(&self, color: ColorId) -> Option<&LogoImage> {
        self.images.get(&color)
    }
}

/// Extract the fill mask from a text template.
fn parse_mask(template: &str) -> Result<Vec<Vec<bool>>, TemplateError> {
    let mask: Vec<Vec<bool>> = template
        .lines()
        .map(|line| line.chars().map(|c| c == FILL_MARKER).collect())
        .collect();

    if mask.is_empty() {
        return Err(TemplateError::Empty);
    }
    if !mask.iter().any(|row| row.contains(&true)) {
        return Err(TemplateError::NoFillRegion);
    }

    Ok(mask)
}
