use std::fmt;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        return m1 + (m2 - m1) * hue * 6.0;
    };
    if hue < 0.5 {
        return m2;
    };
    if hue < TWO_THIRDS {
        return m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0;
    };
    m1
}

/// Converts HLS color to RGB.
/// All components are in [0, 1] range.
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    };
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - (lightness * saturation)
    };
    let m1 = 2.0 * lightness - m2;
    (
        hue_to_channel(m1, m2, hue + ONE_THIRD),
        hue_to_channel(m1, m2, hue),
        hue_to_channel(m1, m2, hue - ONE_THIRD),
    )
}

// Channels are truncated, not rounded
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

/// Formats float the same way as shortest round-trip representation,
/// but always keeps the fractional part ("1.0" instead of "1").
pub(super) fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    // Implicit alpha means full opacity
    pub alpha: Option<u8>,
}

impl Color {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: None }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha: Some(alpha) }
    }

    pub fn from_hls(hue: f64, lightness: f64, saturation: f64) -> Self {
        let (red, green, blue) = hls_to_rgb(hue, lightness, saturation);
        Self::rgb(to_byte(red), to_byte(green), to_byte(blue))
    }

    pub fn opacity(&self) -> f64 {
        match self.alpha {
            Some(alpha) => f64::from(alpha) / 255.0,
            None => 1.0,
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        let [red, green, blue] = value;
        Self::rgb(red, green, blue)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = value;
        Self::rgba(red, green, blue, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = match self.alpha {
            Some(_) => format_decimal(self.opacity()),
            None => "1".to_string(),
        };
        write!(
            formatter,
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            alpha,
        )
    }
}
