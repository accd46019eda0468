//! The composition pipeline: load → resolve → plan → embed → write → export.
use crate::config::{CombineOptions, ExportOptions};
use crate::error::CombineError;
use log::{info, warn};
use std::path::Path;
use tandem_dom::Document;
use tandem_export::Exporter;
use tandem_layout::{embed, plan, resolve, LayoutPlan, Side};

/// The assembled document together with the plan that produced it.
#[derive(Debug, Clone)]
pub struct Composite {
    pub document: Document,
    pub plan: LayoutPlan,
}

impl Composite {
    pub fn to_svg(&self) -> Result<Vec<u8>, CombineError> {
        Ok(self.document.to_bytes()?)
    }

    /// Serializes and writes the composite, returning the bytes written.
    pub fn write_to(&self, path: &Path) -> Result<Vec<u8>, CombineError> {
        let svg = self.to_svg()?;
        std::fs::write(path, &svg).map_err(|source| CombineError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {} ({} bytes)", path.display(), svg.len());
        Ok(svg)
    }
}

pub fn load_document(path: &Path) -> Result<Document, CombineError> {
    info!("Loading {}", path.display());
    let document = Document::from_file(path).map_err(|source| CombineError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    if document.root().local_name() != "svg" {
        warn!(
            "{}: root element is <{}>, not <svg>",
            path.display(),
            document.root().name()
        );
    }
    Ok(document)
}

/// Builds the side-by-side composite in memory. Nothing is written.
pub fn compose(
    left: &Document,
    right: &Document,
    options: &CombineOptions,
) -> Result<Composite, CombineError> {
    let resolve_side = |side: Side, document: &Document| {
        resolve(document.root()).map_err(|source| CombineError::Dimensions { side, source })
    };
    let left_dims = resolve_side(Side::Left, left)?;
    let right_dims = resolve_side(Side::Right, right)?;

    let plan = plan(left_dims, right_dims, options.gap, options.match_height)?;
    let document = embed(&plan, left.root(), right.root());
    Ok(Composite { document, plan })
}

/// Loads both inputs, composes them and writes the result to `out`.
///
/// Sizing errors surface before `out` is touched.
pub fn combine_files(
    left: &Path,
    right: &Path,
    out: &Path,
    options: &CombineOptions,
) -> Result<Composite, CombineError> {
    let left = load_document(left)?;
    let right = load_document(right)?;
    let composite = compose(&left, &right, options)?;
    composite.write_to(out)?;
    Ok(composite)
}

/// Renders already-serialized composite SVG to EPS at `out`.
///
/// Returns the name of the converter that produced the file.
pub fn export_eps(
    svg: &[u8],
    out: &Path,
    options: &ExportOptions,
) -> Result<&'static str, CombineError> {
    let exporter = Exporter::from_options(options);
    let tool = exporter.export(svg, out)?;
    info!("Wrote {} using {}", out.display(), tool);
    Ok(tool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_layout::LayoutError;

    fn doc(markup: &str) -> Document {
        Document::parse(markup).unwrap()
    }

    #[test]
    fn test_compose_builds_plan_and_document() {
        let left = doc(r#"<svg width="100" height="50"/>"#);
        let right = doc(r#"<svg viewBox="0 0 80 50"/>"#);
        let composite = compose(&left, &right, &CombineOptions::new().gap(10.0)).unwrap();
        assert_eq!(composite.plan.canvas_width, 190.0);
        assert_eq!(composite.document.root().attr("width"), Some("190px"));
    }

    #[test]
    fn test_compose_reports_failing_side() {
        let left = doc(r#"<svg width="100" height="50"/>"#);
        let right = doc(r#"<svg width="10%"/>"#);
        match compose(&left, &right, &CombineOptions::new()) {
            Err(CombineError::Dimensions { side, source }) => {
                assert_eq!(side, Side::Right);
                assert!(matches!(source, LayoutError::MissingDimensions { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_compose_rejects_negative_gap() {
        let left = doc(r#"<svg width="1" height="1"/>"#);
        let right = doc(r#"<svg width="1" height="1"/>"#);
        assert!(matches!(
            compose(&left, &right, &CombineOptions::new().gap(-3.0)),
            Err(CombineError::Layout(LayoutError::InvalidGap(_)))
        ));
    }
}
