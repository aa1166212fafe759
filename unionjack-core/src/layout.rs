//! Sizing and placement helpers for displays.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::display::Display;
use crate::font::{CHARACTER_HEIGHT, CHARACTER_WIDTH};

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Rectangle spanning `min` to `max`.
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self {
            x: min.x,
            y: min.y,
            w: max.x - min.x,
            h: max.y - min.y,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= (self.x + self.w) && py >= self.y && py <= (self.y + self.h)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }
}

impl<B: Backend> Display<B> {
    /// Rendered height: one cell, scaled.
    pub fn height(&self) -> f32 {
        CHARACTER_HEIGHT as f32 * self.scale
    }

    /// Rendered width: all cells plus the horizontal run added by the slant.
    ///
    /// The shear widens the row by `CHARACTER_HEIGHT * |slant|` whichever
    /// way it leans.
    pub fn width(&self) -> f32 {
        ((CHARACTER_WIDTH as f32 * self.len() as f32)
            + (CHARACTER_HEIGHT as f32 * self.slant.abs()))
            * self.scale
    }

    /// Box from `position` with size `(width, height)`.
    ///
    /// The box is axis-aligned while the rendered row is a parallelogram, so
    /// the two slanted ends leave empty corners inside it. It is meant for
    /// placement, not hit testing of individual segments.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_corners(
            self.position,
            self.position + Vec2::new(self.width(), self.height()),
        )
    }

    /// Place directly under `other`, left edges aligned.
    pub fn below<O: Backend>(&mut self, other: &Display<O>) -> &mut Self {
        self.position = other.get_position() + Vec2::new(0.0, other.height());
        self
    }

    /// Place to the right of `other`, bottom edges aligned.
    pub fn right_of<O: Backend>(&mut self, other: &Display<O>) -> &mut Self {
        self.position =
            other.get_position() + Vec2::new(other.width(), other.height() - self.height());
        self
    }
}
