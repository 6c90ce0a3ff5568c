/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Soft outer glow in the given colour, for `box-shadow`.
pub fn glow_shadow_css((r, g, b): (u8, u8, u8)) -> String {
    format!("0 0 18px {}", rgba_css(r, g, b, 0.35))
}
