use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as the `#rrggbb` hex notation palettes are written in, with
/// `#rrggbbaa` for translucent colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`, leading `#` optional.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let alpha = if hex.len() == 8 {
            hex_channel(hex, 6)?
        } else {
            1.0
        };
        Ok(Self {
            red: hex_channel(hex, 0)?,
            green: hex_channel(hex, 2)?,
            blue: hex_channel(hex, 4)?,
            alpha,
        })
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let (red, green, blue) = self.to_rgb8();
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            let alpha = channel_to_u8(self.alpha);
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    /// Channels quantized to bytes for backends that draw in 8-bit color.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(input: String) -> ChartResult<Self> {
        Self::from_hex(&input)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

fn hex_channel(hex: &str, start: usize) -> ChartResult<f64> {
    let pair = hex
        .get(start..start + 2)
        .ok_or_else(|| ChartError::InvalidData(format!("color `{hex}` is not valid hex")))?;
    let value = u8::from_str_radix(pair, 16)
        .map_err(|_| ChartError::InvalidData(format!("color `{hex}` is not valid hex")))?;
    Ok(f64::from(value) / 255.0)
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
