/// An SVG sized by width/height attributes only.
pub fn sized_svg(width: &str, height: &str, content: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">{}</svg>"#,
        width, height, content
    )
}

/// An SVG sized by its viewBox only.
pub fn view_box_svg(view_box: &str, content: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">{}</svg>"#,
        view_box, content
    )
}

/// An SVG with both size attributes and a viewBox.
pub fn full_svg(width: &str, height: &str, view_box: &str, content: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}">{}</svg>"#,
        width, height, view_box, content
    )
}

/// A document that uses xlink references, as exported by older editors.
pub fn xlink_svg() -> String {
    r##"<?xml version="1.0" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="40" height="40">
  <defs><circle id="dot" r="5"/></defs>
  <use xlink:href="#dot" x="20" y="20"/>
  <text x="2" y="38">A &amp; B</text>
</svg>"##
        .to_string()
}

pub const RECT: &str = r#"<rect x="0" y="0" width="10" height="10" fill="red"/>"#;
pub const CIRCLE: &str = r#"<circle cx="5" cy="5" r="5" fill="blue"/>"#;
