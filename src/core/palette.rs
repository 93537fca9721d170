/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional). Anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::new(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        ))
    }

    /// CSS colour string usable as a canvas gradient stop.
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Source colours of the trail, darkest first.
pub const PALETTE_HEX: [&str; 5] = [
    "#050A1A", // near-black navy
    "#0B1B3F", // deep navy
    "#112A60", // medium-dark blue
    "#1B3B8A", // strong blue
    "#274CBB", // royal blue
];

/// `PALETTE_HEX`, pre-parsed.
pub const PALETTE: [Rgb; 5] = [
    Rgb::new(0x05, 0x0A, 0x1A),
    Rgb::new(0x0B, 0x1B, 0x3F),
    Rgb::new(0x11, 0x2A, 0x60),
    Rgb::new(0x1B, 0x3B, 0x8A),
    Rgb::new(0x27, 0x4C, 0xBB),
];
