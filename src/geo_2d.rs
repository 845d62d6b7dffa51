/*!
 * Plane geometry for the point model.
 *
 * - `Point`: plain coordinates, ordered by distance from the origin.
 * - `ColorPoint`: a `Point` with a color, checked by a `ColorRule` at construction.
 *   Built with `ColorPoint::restricted` (or `ColorRule::Palette`) it only accepts
 *   colors allowed by a `Palette`.
 * - `Scalar`: loosely typed coordinate input, checked to be a number.
 */

mod proc_errors;
mod point;
mod scalar;
mod palette;
mod color_point;

// Re-export errors
pub use proc_errors::{
    GeoError,
    ProcResult,
    err_str,
};
// Re-export the point model
pub use point::Point;
pub use scalar::{
    Axis,
    Scalar,
};
pub use palette::{
    Palette,
    DEFAULT_COLORS,
};
pub use color_point::{
    ColorPoint,
    ColorRule,
    RuleKind,
    DEFAULT_COLOR,
};
