//! Model and projection matrices for segment displays.

use glam::{Affine2, Mat2, Mat4, Vec2, Vec4};

use crate::font::CHARACTER_HEIGHT;

/// Build the 2D model transform for a display.
///
/// Order: translate to `position`, scale uniformly, then (for a non-zero
/// slant) shear x by `-slant * y`. A positive slant pulls the bottom of each
/// cell left, so the cell is first pushed right by `CHARACTER_HEIGHT * slant`
/// to keep the bottom-left corner on `position`.
pub fn model_transform(position: Vec2, scale: f32, slant: f32) -> Affine2 {
    let mut m = Affine2::from_translation(position) * Affine2::from_scale(Vec2::splat(scale));
    if slant != 0.0 {
        if slant > 0.0 {
            m = m * Affine2::from_translation(Vec2::new(CHARACTER_HEIGHT as f32 * slant, 0.0));
        }
        m = m * Affine2::from_mat2(Mat2::from_cols(Vec2::X, Vec2::new(-slant, 1.0)));
    }
    m
}

/// Lift a 2D affine transform into the 4x4 matrix the shader expects.
/// z passes through untouched.
pub fn affine_to_mat4(m: Affine2) -> Mat4 {
    Mat4::from_cols(
        m.matrix2.x_axis.extend(0.0).extend(0.0),
        m.matrix2.y_axis.extend(0.0).extend(0.0),
        Vec4::Z,
        m.translation.extend(0.0).extend(1.0),
    )
}

/// Pixel-space projection: origin top-left, y down, `width` x `height`.
pub fn pixel_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width.max(1.0), height.max(1.0), 0.0, -1.0, 1.0)
}
