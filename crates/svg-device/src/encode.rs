//! Primitive encoders: one SVG fragment per drawing event.
//!
//! Every x/y coordinate passes through [`to_user_units`] before it is
//! written. Encoders are pure; they format a fragment and nothing else.

use crate::units::to_user_units;

/// Fixed paint color for every primitive. The host runtime resolves real
/// colors before emitting events; this engine emits a single constant.
pub const PAINT: &str = "black";

/// Encode a circle.
///
/// The center passes through the coordinate transform; the radius is used
/// as-is in device units. That asymmetry matches the reference output and
/// is preserved deliberately.
pub fn circle(x: f64, y: f64, r: f64) -> String {
    format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{r}\" stroke=\"{PAINT}\" fill=\"{PAINT}\"/>",
        to_user_units(x),
        to_user_units(y),
    )
}

/// Encode a straight line between two endpoints.
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{PAINT}\" fill=\"none\"/>",
        to_user_units(x1),
        to_user_units(y1),
        to_user_units(x2),
        to_user_units(y2),
    )
}

/// Encode a polyline.
///
/// The points attribute is the interleaved `"x,y"` pairs, space-separated,
/// in input order. Degenerate inputs (fewer than two points) are encoded
/// as-is; the result is a well-formed if pointless element.
pub fn polyline(x: &[f64], y: &[f64]) -> String {
    let points = x
        .iter()
        .zip(y)
        .map(|(&px, &py)| format!("{},{}", to_user_units(px), to_user_units(py)))
        .collect::<Vec<_>>()
        .join(" ");
    format!("<polyline points=\"{points}\" stroke=\"{PAINT}\" fill=\"none\"/>")
}

/// Encode a text run anchored at (x, y).
///
/// The rotation is negated about the anchor to compensate for the
/// vertical-axis inversion between device space and SVG space. Content is
/// written verbatim: markup-significant characters are NOT escaped, the
/// host runtime owns its strings (see the crate docs).
pub fn text(x: f64, y: f64, rot: f64, content: &str) -> String {
    let ux = to_user_units(x);
    let uy = to_user_units(y);
    // Keep unrotated text at plain 0 rather than -0.
    let angle = if rot == 0.0 { 0.0 } else { -rot };
    format!(
        "<text x=\"{ux}\" y=\"{uy}\" transform=\"rotate({angle},{ux},{uy})\" fill=\"{PAINT}\">{content}</text>",
    )
}
