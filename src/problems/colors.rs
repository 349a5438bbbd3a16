use crate::domain::model::Rgb;
use crate::utils::error::{Result, WarmupError};
use regex::Regex;
use std::sync::LazyLock;

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"));

/// Decodes a `#RRGGBB` color. The whole input must match; no surrounding text.
pub fn parse_hex_color(hex_color: &str) -> Result<Rgb> {
    if !HEX_COLOR_RE.is_match(hex_color) {
        return Err(WarmupError::range_error(
            "hex_color",
            hex_color,
            "expected `#` followed by exactly six hex digits",
        ));
    }

    let channel = |start: usize| {
        u8::from_str_radix(&hex_color[start..start + 2], 16).map_err(|e| {
            WarmupError::range_error("hex_color", hex_color, format!("bad channel: {}", e))
        })
    };

    Ok(Rgb {
        red: channel(1)?,
        green: channel(3)?,
        blue: channel(5)?,
    })
}

/// Converts `#RRGGBB` to the `(R, G, B)` form.
pub fn hex_to_rgb(hex_color: &str) -> Result<String> {
    parse_hex_color(hex_color).map(|rgb| rgb.to_string())
}
