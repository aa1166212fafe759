//! The set of displays shown in the window.
//!
//! Builds one `Display` per `DisplaySpec`, resolves relative placements in
//! order, and keeps clock displays current.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDateTime;
use glam::{Mat4, Vec2};

use unionjack_core::{Backend, Display, DrawTarget, Rect, SegmentFont};

use crate::config::{DisplaySpec, MAX_DISPLAY_LENGTH, Placement};

/// Shown when a clock format cannot be rendered.
const CLOCK_ERROR_TEXT: &str = "--:--:--";

struct Panel<B: Backend> {
    display: Display<B>,
    clock: Option<String>,
}

pub struct Readout<B: Backend> {
    panels: Vec<Panel<B>>,
}

impl<B: Backend> Readout<B> {
    /// Create and place every display. Specs should already be validated;
    /// an over-long display or a forward placement is still reported here.
    pub fn build(
        backend: &B,
        font: &Arc<SegmentFont<B>>,
        specs: &[DisplaySpec],
    ) -> anyhow::Result<Self> {
        let mut panels: Vec<Panel<B>> = Vec::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            anyhow::ensure!(
                spec.length <= MAX_DISPLAY_LENGTH,
                "display {index}: length {} exceeds the limit of {MAX_DISPLAY_LENGTH}",
                spec.length
            );
            let mut display = Display::new(backend, font.clone(), spec.length)
                .with_context(|| format!("creating display {index}"))?;

            display.scale(spec.scale).slant(spec.slant);
            if spec.on.is_some() || spec.off.is_some() {
                let on = spec.on.unwrap_or(display.on_color());
                let off = spec.off.unwrap_or(display.off_color());
                display.colors(on, off);
            }
            if let Some(text) = &spec.text {
                display.display(text);
            }

            match spec.placement {
                Placement::At([x, y]) => {
                    display.position(Vec2::new(x, y));
                }
                Placement::Below(target) => {
                    let other = panels.get(target).with_context(|| {
                        format!("display {index}: no display {target} above")
                    })?;
                    display.below(&other.display);
                }
                Placement::RightOf(target) => {
                    let other = panels.get(target).with_context(|| {
                        format!("display {index}: no display {target} to the left")
                    })?;
                    display.right_of(&other.display);
                }
            }

            let bounds = display.bounding_box();
            tracing::debug!(
                index,
                length = spec.length,
                bounds = ?bounds,
                "display placed"
            );

            panels.push(Panel {
                display,
                clock: spec.clock.clone(),
            });
        }

        Ok(Self { panels })
    }

    /// Update clock displays to `now`. Returns true if any text changed.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let mut changed = false;
        for panel in &mut self.panels {
            let Some(format) = &panel.clock else {
                continue;
            };
            let mut text = String::new();
            if write!(text, "{}", now.format(format)).is_err() {
                text = CLOCK_ERROR_TEXT.to_string();
            }
            let before = panel.display.activations();
            panel.display.display(&text);
            changed |= panel.display.activations() != before;
        }
        changed
    }

    pub fn has_clock(&self) -> bool {
        self.panels.iter().any(|p| p.clock.is_some())
    }

    /// Draw every display, one instanced call each.
    pub fn draw<T>(&mut self, backend: &B, target: &mut T, view_projection: Mat4)
    where
        T: DrawTarget<B> + ?Sized,
    {
        for panel in &mut self.panels {
            panel.display.draw(backend, target, view_projection);
        }
    }

    pub fn displays(&self) -> impl Iterator<Item = &Display<B>> {
        self.panels.iter().map(|p| &p.display)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Union of all bounding boxes, or `None` with no displays.
    pub fn bounds(&self) -> Option<Rect> {
        self.displays()
            .map(|d| d.bounding_box())
            .reduce(|a, b| a.union(&b))
    }
}
