//! Assembles the composite document from a plan and the two source roots.
use crate::compositor::{LayoutPlan, Side};
use crate::resolver::ResolvedDimensions;
use log::{info, warn};
use tandem_dom::{Document, Element, SVG_NS};
use tandem_units::ViewportRect;

/// Creates the nested `<svg>` frame for one side and copies the source content into it.
fn frame(dims: &ResolvedDimensions, x: f64, source: &Element, side: Side) -> Element {
    if let Some(ns) = source.namespace().filter(|ns| *ns != SVG_NS) {
        warn!(
            "{} document declares default namespace '{}'; its content is placed in the SVG namespace",
            side, ns
        );
    }

    let mut frame = Element::new("svg");
    // Prefixed declarations travel with the content that may use them.
    for (prefix, uri) in source.prefixed_namespaces() {
        frame.set_attr(format!("xmlns:{}", prefix), uri);
    }
    frame.set_attr("x", x.to_string());
    frame.set_attr("y", "0");
    frame.set_attr("width", dims.width.to_string());
    frame.set_attr("height", dims.height.to_string());
    frame.set_attr("viewBox", dims.viewport.to_string());
    if let Some(aspect) = source.attr("preserveAspectRatio") {
        frame.set_attr("preserveAspectRatio", aspect);
    }

    for child in source.children() {
        frame.append(child.clone());
    }
    frame
}

/// Builds the composite: a canvas-sized root holding one frame per side.
///
/// Source children are deep-copied in order; the sources are not modified.
pub fn embed(plan: &LayoutPlan, left: &Element, right: &Element) -> Document {
    let canvas = ViewportRect::from_size(plan.canvas_width, plan.canvas_height);
    let mut root = Element::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("width", format!("{}px", plan.canvas_width))
        .with_attr("height", format!("{}px", plan.canvas_height))
        .with_attr("viewBox", canvas.to_string());

    for (side, source) in [(Side::Left, left), (Side::Right, right)] {
        let (dims, x) = plan.side(side);
        root.append(frame(dims, x, source, side));
    }

    info!(
        "Composed {}x{} px canvas from {} + {} source nodes",
        plan.canvas_width,
        plan.canvas_height,
        left.children().len(),
        right.children().len()
    );
    Document::new(root)
}
