use crate::domain::{DesignCode, Rgb};

/// A reserved color code and the RGB range it covers.
#[derive(Debug, Clone, Copy)]
pub struct ColorRule {
    pub name: &'static str,
    pub code: DesignCode,
    pub matches: fn(Rgb) -> bool,
}

// Ranges are independent; one sample can land in more than one.
pub const COLOR_RULES: &[ColorRule] = &[
    ColorRule {
        name: "red",
        code: DesignCode::new("29.01.01"),
        matches: |c| c.red > 200.0 && c.green < 100.0 && c.blue < 100.0,
    },
    ColorRule {
        name: "yellow",
        code: DesignCode::new("29.01.02"),
        matches: |c| c.red > 200.0 && c.green > 200.0 && c.blue < 100.0,
    },
    ColorRule {
        name: "green",
        code: DesignCode::new("29.01.03"),
        matches: |c| c.red < 100.0 && c.green > 200.0 && c.blue < 100.0,
    },
    ColorRule {
        name: "blue",
        code: DesignCode::new("29.01.04"),
        matches: |c| c.red < 100.0 && c.green < 100.0 && c.blue > 200.0,
    },
    ColorRule {
        name: "white",
        code: DesignCode::new("29.01.06"),
        matches: |c| c.red > 200.0 && c.green > 200.0 && c.blue > 200.0,
    },
    ColorRule {
        name: "black",
        code: DesignCode::new("29.01.08"),
        matches: |c| c.red < 50.0 && c.green < 50.0 && c.blue < 50.0,
    },
];

pub fn match_color(color: Rgb) -> impl Iterator<Item = DesignCode> {
    COLOR_RULES
        .iter()
        .filter(move |rule| (rule.matches)(color))
        .map(|rule| rule.code)
}
