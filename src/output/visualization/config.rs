//! Plot configuration shared across visualization modules
//!
//! This module defines the common configuration structure used by both
//! the shape-map heatmap and the untapered-sizes scatter plot.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `accent_color`: Color of the overlay curve / scatter markers
/// - `background`: Background color
/// - `marker_size`: Scatter marker radius in pixels
/// - `line_width`: Overlay line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use taper_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::shape_map("GaAs Shape Map");
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// config.accent_color = BLACK;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Color of the overlay curve / scatter markers (default: GREEN)
    pub accent_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Scatter marker radius in pixels (default: 4)
    pub marker_size: u32,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: String::new(),
            accent_color: GREEN,
            background: WHITE,
            marker_size: 4,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::shape_map(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for the tapering heatmap with optional custom title
    ///
    /// Sets xlabel to "V/III flux ratio", ylabel to "Growth time (min)",
    /// and title to the custom value or "Shape Map".
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::shape_map("GaAs Shape Map");
    /// let config = PlotConfig::shape_map(format!("Shape map, lambda = {}", lambda));
    ///
    /// // With default title
    /// let config = PlotConfig::shape_map(None::<&str>);
    /// ```
    pub fn shape_map(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "V/III flux ratio".to_string();
        config.ylabel = "Growth time (min)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Shape Map".to_string());
        config
    }

    /// Create config for the untapered-sizes scatter plot with optional
    /// custom title
    ///
    /// Sets xlabel to "NW length", ylabel to "Diameter of straight NW",
    /// and title to the custom value or "Untapered Sizes".
    pub fn untapered_sizes(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "NW length".to_string();
        config.ylabel = "Diameter of straight NW".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Untapered Sizes".to_string());
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
