/// Assert that two floats agree within `1e-9`.
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {
        let (actual, expected): (f64, f64) = ($actual, $expected);
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    };
}

/// Assert that the composite's serialized text contains a fragment.
#[macro_export]
macro_rules! assert_svg_contains {
    ($svg:expr, $fragment:expr) => {
        assert!(
            $svg.text.contains($fragment),
            "SVG should contain '{}', but was:\n{}",
            $fragment,
            $svg.text
        );
    };
}
