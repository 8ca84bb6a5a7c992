//! Color scales for the choropleth fills.

/// Fill for territories with no metric value.
pub const MISSING_COLOR: Rgb = Rgb(211, 211, 211); // lightgrey

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Named diverging/sequential scales, matching the conventional anchor
/// colors of their namesakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMap {
    /// Red through yellow to green; static map default.
    #[default]
    RdYlGn,
    /// Yellow through orange to red; interactive map default.
    YlOrRd,
}

impl ColorMap {
    /// Parses a colormap name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "rdylgn" => Some(Self::RdYlGn),
            "ylorrd" => Some(Self::YlOrRd),
            _ => None,
        }
    }

    fn anchors(self) -> &'static [Rgb] {
        match self {
            Self::RdYlGn => &[
                Rgb(165, 0, 38),
                Rgb(253, 174, 97),
                Rgb(255, 255, 191),
                Rgb(166, 217, 106),
                Rgb(0, 104, 55),
            ],
            Self::YlOrRd => &[
                Rgb(255, 255, 204),
                Rgb(254, 217, 118),
                Rgb(253, 141, 60),
                Rgb(227, 26, 28),
                Rgb(128, 0, 38),
            ],
        }
    }

    /// Piecewise-linear sample at `t` in `0.0..=1.0` (clamped).
    pub fn sample(self, t: f64) -> Rgb {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (anchors.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(anchors.len() - 1);
        let frac = scaled - lower as f64;
        let blend = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8
        };
        let (a, b) = (anchors[lower], anchors[upper]);
        Rgb(blend(a.0, b.0), blend(a.1, b.1), blend(a.2, b.2))
    }
}
