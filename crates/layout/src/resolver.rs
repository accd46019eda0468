//! Derives authoritative size and viewport for a source document root.
use crate::error::LayoutError;
use log::{debug, warn};
use serde::Serialize;
use tandem_dom::Element;
use tandem_units::parsers::parse_view_box;
use tandem_units::{CanonicalLength, ViewportRect};

/// Width, height and viewport of a document, all in canonical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedDimensions {
    pub width: f64,
    pub height: f64,
    pub viewport: ViewportRect,
}

impl ResolvedDimensions {
    pub fn new(width: f64, height: f64, viewport: ViewportRect) -> Self {
        Self {
            width,
            height,
            viewport,
        }
    }

    /// Uniformly scales the outer size so the height becomes `target`.
    /// The viewport is left as is.
    pub(crate) fn scaled_to_height(self, target: f64) -> Self {
        let factor = target / self.height;
        Self {
            width: self.width * factor,
            height: target,
            viewport: self.viewport,
        }
    }
}

fn declared_length(root: &Element, name: &str) -> CanonicalLength {
    let length = CanonicalLength::from_attr(root.attr(name));
    if length.is_unresolvable() {
        warn!(
            "Ignoring {}=\"{}\": not convertible to an absolute length",
            name,
            root.attr(name).unwrap_or_default()
        );
    }
    length
}

/// Resolves the outer size and viewport of an SVG root element.
///
/// Declared `width`/`height` win when present. When both are absent (or
/// unresolvable) the `viewBox` size is adopted. Without a `viewBox`, one
/// anchored at the origin is synthesized from the effective size.
pub fn resolve(root: &Element) -> Result<ResolvedDimensions, LayoutError> {
    let declared_width = declared_length(root, "width").px();
    let declared_height = declared_length(root, "height").px();

    let view_box = root
        .attr("viewBox")
        .map(|value| {
            parse_view_box(value).map_err(|source| LayoutError::MalformedViewport {
                value: value.to_string(),
                source,
            })
        })
        .transpose()?;

    let (width, height) = match (declared_width, declared_height, view_box) {
        (None, None, Some(vb)) => (Some(vb.width), Some(vb.height)),
        (w, h, _) => (w, h),
    };

    let viewport = view_box.unwrap_or_else(|| {
        ViewportRect::from_size(width.unwrap_or(0.0), height.unwrap_or(0.0))
    });

    let resolved = match (width, height) {
        (Some(width), Some(height)) => ResolvedDimensions::new(width, height, viewport),
        (None, None) => {
            return Err(LayoutError::MissingDimensions {
                missing: "width and height",
            });
        }
        (None, Some(_)) => return Err(LayoutError::MissingDimensions { missing: "width" }),
        (Some(_), None) => return Err(LayoutError::MissingDimensions { missing: "height" }),
    };

    debug!(
        "Resolved <{}>: {}x{} px, viewBox {}",
        root.name(),
        resolved.width,
        resolved.height,
        resolved.viewport
    );
    Ok(resolved)
}
