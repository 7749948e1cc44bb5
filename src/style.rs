// Inline-style values written by the intro animation and canvas sizing.
// Kept free of `web_sys` so the host tests can include it directly.

#[inline]
pub fn opacity(v: f32) -> String {
    format!("{:.3}", v.clamp(0.0, 1.0))
}

#[inline]
pub fn translate_y(percent: f32) -> String {
    format!("translateY({:.3}%)", percent)
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v.max(0.0).round() as i64)
}
