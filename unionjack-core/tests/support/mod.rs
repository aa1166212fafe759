// unionjack-core/tests/support/mod.rs
//
// In-memory backend shared by the integration tests. Records every call so
// tests can assert on what a display asked the GPU to do, and keeps the
// contents of value buffers so the shader rule can be replayed on the CPU.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

use unionjack_core::{
    Backend, Display, DrawTarget, InstancedDraw, SegmentFont, SegmentUniforms, SegmentVertex,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateFont { vertices: usize },
    CreateValues { id: usize, len: usize },
    WriteValues { id: usize, values: Vec<u32> },
    CreateOffsets { id: usize, offsets: Vec<[f32; 2]> },
    CreateUniforms { id: usize },
    WriteUniforms { id: usize, uniforms: SegmentUniforms },
}

#[derive(Debug)]
pub struct FakeError(pub &'static str);

impl std::fmt::Display for FakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fake backend failure: {}", self.0)
    }
}

impl std::error::Error for FakeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub usize);

#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<Call>>,
    pub values: RefCell<HashMap<usize, Vec<u32>>>,
    pub fail_offsets: bool,
    next_id: Cell<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_offsets() -> Self {
        Self {
            fail_offsets: true,
            ..Self::default()
        }
    }

    fn next(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn value_writes(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::WriteValues { .. }))
            .count()
    }

    pub fn last_uniforms(&self) -> Option<SegmentUniforms> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            Call::WriteUniforms { uniforms, .. } => Some(*uniforms),
            _ => None,
        })
    }

    pub fn buffer_values(&self, handle: Handle) -> Vec<u32> {
        self.values.borrow().get(&handle.0).cloned().unwrap_or_default()
    }
}

impl Backend for RecordingBackend {
    type Error = FakeError;
    type Font = usize;
    type ValueBuffer = Handle;
    type OffsetBuffer = Handle;
    type UniformBuffer = Handle;

    fn create_font(&self, template: &[SegmentVertex]) -> Result<usize, FakeError> {
        self.calls.borrow_mut().push(Call::CreateFont {
            vertices: template.len(),
        });
        Ok(template.len())
    }

    fn create_value_buffer(&self, values: &[u32]) -> Result<Handle, FakeError> {
        let id = self.next();
        self.values.borrow_mut().insert(id, values.to_vec());
        self.calls.borrow_mut().push(Call::CreateValues {
            id,
            len: values.len(),
        });
        Ok(Handle(id))
    }

    fn write_values(&self, buffer: &Handle, values: &[u32]) {
        self.values.borrow_mut().insert(buffer.0, values.to_vec());
        self.calls.borrow_mut().push(Call::WriteValues {
            id: buffer.0,
            values: values.to_vec(),
        });
    }

    fn create_offset_buffer(&self, offsets: &[[f32; 2]]) -> Result<Handle, FakeError> {
        if self.fail_offsets {
            return Err(FakeError("offset buffer"));
        }
        let id = self.next();
        self.calls.borrow_mut().push(Call::CreateOffsets {
            id,
            offsets: offsets.to_vec(),
        });
        Ok(Handle(id))
    }

    fn create_uniform_buffer(&self, _font: &usize) -> Result<Handle, FakeError> {
        let id = self.next();
        self.calls.borrow_mut().push(Call::CreateUniforms { id });
        Ok(Handle(id))
    }

    fn write_uniforms(&self, buffer: &Handle, uniforms: &SegmentUniforms) {
        self.calls.borrow_mut().push(Call::WriteUniforms {
            id: buffer.0,
            uniforms: *uniforms,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub font_vertices: usize,
    pub values: Handle,
    pub offsets: Handle,
    pub uniforms: Handle,
    pub vertex_count: u32,
    pub instance_count: u32,
}

#[derive(Default)]
pub struct Recorder {
    pub draws: Vec<RecordedDraw>,
}

impl DrawTarget<RecordingBackend> for Recorder {
    fn draw_instanced(&mut self, draw: InstancedDraw<'_, RecordingBackend>) {
        self.draws.push(RecordedDraw {
            font_vertices: *draw.font,
            values: *draw.values,
            offsets: *draw.offsets,
            uniforms: *draw.uniforms,
            vertex_count: draw.vertex_count,
            instance_count: draw.instance_count,
        });
    }
}

/// Backend, shared font, and a display of `length` slots.
pub fn display(length: usize) -> (RecordingBackend, Display<RecordingBackend>) {
    let backend = RecordingBackend::new();
    let font = SegmentFont::new(&backend).unwrap();
    let display = Display::new(&backend, font, length).unwrap();
    (backend, display)
}

pub fn font(backend: &RecordingBackend) -> Arc<SegmentFont<RecordingBackend>> {
    SegmentFont::new(backend).unwrap()
}

/// Approximate float equality (within epsilon).
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}
