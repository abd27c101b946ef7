//! The drawing command protocol
//!
//! Layout code issues these commands in order; an implementation decides
//! what they turn into. [`SceneContext`](crate::SceneContext) records them
//! as a scene tree.

use notecanvas_core::Rect;
use notecanvas_text::FontSpec;

use crate::error::Result;
use crate::state::LineCap;

/// Immediate-mode vector drawing commands
pub trait RenderContext {
    /// Handle returned for an opened group
    type Group;

    // Paint state

    fn save(&mut self) -> &mut Self;
    fn restore(&mut self) -> &mut Self;
    fn set_fill_style(&mut self, style: impl Into<String>) -> &mut Self;
    /// Fill and stroke used by [`clear_rect`](Self::clear_rect)
    fn set_background_fill_style(&mut self, style: impl Into<String>) -> &mut Self;
    fn set_stroke_style(&mut self, style: impl Into<String>) -> &mut Self;
    fn set_line_width(&mut self, width: f64) -> &mut Self;
    /// Dash lengths; an empty slice means a solid line
    fn set_line_dash(&mut self, dash: &[f64]) -> &mut Self;
    fn set_line_cap(&mut self, cap: LineCap) -> &mut Self;
    fn set_font(&mut self, font: impl Into<FontSpec>) -> &mut Self;
    fn set_shadow_color(&mut self, color: impl Into<String>) -> &mut Self;
    fn set_shadow_blur(&mut self, blur: f64) -> &mut Self;

    // Rectangles

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self;
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self;
    /// Invisible rectangle used as a hit-testing surface
    fn pointer_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self;

    // Paths

    fn begin_path(&mut self) -> &mut Self;
    fn move_to(&mut self, x: f64, y: f64) -> &mut Self;
    fn line_to(&mut self, x: f64, y: f64) -> &mut Self;
    fn bezier_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self;
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self;
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> &mut Self;
    fn close_path(&mut self) -> &mut Self;
    fn fill(&mut self) -> &mut Self;
    fn stroke(&mut self) -> &mut Self;

    // Text

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> &mut Self;
    /// Bounds of `text` in the current font, relative to its baseline origin
    fn measure_text(&self, text: &str) -> Rect;

    // Structure

    fn open_group(&mut self, category: Option<&str>, id: Option<&str>) -> Self::Group;
    fn close_group(&mut self) -> Result<&mut Self>;
    /// Group whose children are rotated by `degrees` around `(x, y)`
    fn open_rotation(&mut self, degrees: f64, x: f64, y: f64) -> Self::Group;
    fn close_rotation(&mut self) -> Result<&mut Self>;

    // Surface

    fn scale(&mut self, x: f64, y: f64) -> &mut Self;
    fn resize(&mut self, width: f64, height: f64) -> &mut Self;
    fn clear(&mut self) -> &mut Self;
}
