pub mod fixtures;
pub mod svg_assertions;

use std::path::{Path, PathBuf};
use tandem::{combine_files, CombineOptions, Composite};
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Geometry attributes of one nested frame in a composite.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub view_box: String,
}

/// A composite written to disk, with helpers to inspect it through an independent parser.
pub struct GeneratedSvg {
    pub text: String,
    pub composite: Composite,
}

impl GeneratedSvg {
    pub fn parse(&self) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(&self.text).expect("composite must be well-formed XML")
    }

    /// `(width, height, viewBox)` attributes of the outer root.
    pub fn canvas(&self) -> (String, String, String) {
        let doc = self.parse();
        let root = doc.root_element();
        let attr = |name: &str| root.attribute(name).unwrap_or_default().to_string();
        (attr("width"), attr("height"), attr("viewBox"))
    }

    pub fn frames(&self) -> Vec<FrameGeometry> {
        let doc = self.parse();
        doc.root_element()
            .children()
            .filter(|n| n.is_element())
            .map(|frame| {
                let number = |name: &str| {
                    frame
                        .attribute(name)
                        .and_then(|v| v.parse::<f64>().ok())
                        .unwrap_or(f64::NAN)
                };
                FrameGeometry {
                    x: number("x"),
                    y: number("y"),
                    width: number("width"),
                    height: number("height"),
                    view_box: frame.attribute("viewBox").unwrap_or_default().to_string(),
                }
            })
            .collect()
    }

    /// Save the composite next to the test binary for manual inspection.
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.svg", name), &self.text)
    }
}

/// A scratch directory holding input SVGs.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Writes both inputs, runs the composition and reads the output back.
pub fn combine_sources(
    ws: &Workspace,
    left: &str,
    right: &str,
    options: &CombineOptions,
) -> Result<GeneratedSvg, Box<dyn std::error::Error>> {
    let left_path = ws.write("left.svg", left)?;
    let right_path = ws.write("right.svg", right)?;
    let out = ws.path("out.svg");
    let composite = combine_files(&left_path, &right_path, &out, options)?;
    read_generated(&out, composite)
}

fn read_generated(
    out: &Path,
    composite: Composite,
) -> Result<GeneratedSvg, Box<dyn std::error::Error>> {
    Ok(GeneratedSvg {
        text: std::fs::read_to_string(out)?,
        composite,
    })
}
