// File: crates/endlabel-core/src/theme.rs
// Summary: Colors, light/dark theming and per-series palettes.

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// `#rrggbb`; alpha is emitted separately by backends that need it.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
}

/// d3 `schemeCategory10`.
const CATEGORY10: [u32; 10] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
    0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
];

/// Series color assignment. Every variant is a pure function of the series index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Palette {
    /// Blue for even indices, red for odd ones.
    #[default]
    Alternating,
    /// Ten categorical colors, cycled.
    Category10,
}

impl Palette {
    pub fn color(&self, index: usize) -> Color {
        match self {
            Palette::Alternating => {
                if index % 2 == 0 { Color::BLUE } else { Color::RED }
            }
            Palette::Category10 => Color::from_hex(CATEGORY10[index % CATEGORY10.len()]),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "alternating" | "two-tone" => Some(Palette::Alternating),
            "category10" | "categorical" => Some(Palette::Category10),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(255, 255, 255),
            axis_line: Color::from_rgb(0, 0, 0),
            axis_label: Color::from_rgb(0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
