//! # Mesh Handle
//!
//! WASM-friendly wrapper for render buffers that can be transferred to
//! JavaScript.

use hexsphere::RenderBuffers;
use wasm_bindgen::prelude::*;

/// A handle to planet buffers that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = session.buffers();
///
/// gl.bufferData(gl.ARRAY_BUFFER, mesh.vertices(), gl.STATIC_DRAW);   // Float32Array
/// gl.bufferData(gl.ARRAY_BUFFER, mesh.colors(), gl.STATIC_DRAW);     // Float32Array, RGBA
/// gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, mesh.indices(), gl.STATIC_DRAW);
///
/// if (mesh.has_lines()) {
///   gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, mesh.lines(), gl.STATIC_DRAW);
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex colors as [r, g, b, a, ...]
    colors: Vec<f32>,
    /// Optional wireframe pairs as [a, b, a, b, ...]
    lines: Option<Vec<u32>>,
    /// Optional tile walls as [origin, i1, i2, ...]
    sides: Option<Vec<u32>>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex colors as a Float32Array.
    ///
    /// Format: [r, g, b, a, r, g, b, a, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn colors(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.colors[..])
    }

    /// Returns the wireframe line indices as a Uint32Array, if built.
    #[wasm_bindgen]
    pub fn lines(&self) -> Option<js_sys::Uint32Array> {
        self.lines
            .as_ref()
            .map(|l| js_sys::Uint32Array::from(&l[..]))
    }

    /// Returns the side triangle indices as a Uint32Array, if built.
    #[wasm_bindgen]
    pub fn sides(&self) -> Option<js_sys::Uint32Array> {
        self.sides
            .as_ref()
            .map(|s| js_sys::Uint32Array::from(&s[..]))
    }

    /// Returns true if line indices were built.
    #[wasm_bindgen]
    pub fn has_lines(&self) -> bool {
        self.lines.is_some()
    }

    /// Returns true if side indices were built.
    #[wasm_bindgen]
    pub fn has_sides(&self) -> bool {
        self.sides.is_some()
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from exported buffers.
    pub fn from_buffers(buffers: RenderBuffers) -> Self {
        let vertex_count = buffers.vertex_count() as u32;
        let triangle_count = buffers.triangle_count() as u32;

        Self {
            vertices: buffers.vertices,
            indices: buffers.indices,
            colors: buffers.colors,
            lines: buffers.lines,
            sides: buffers.sides,
            vertex_count,
            triangle_count,
        }
    }

    /// Raw vertex positions, for host-side callers.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }

    /// Raw triangle indices, for host-side callers.
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    /// Raw vertex colors, for host-side callers.
    pub fn color_data(&self) -> &[f32] {
        &self.colors
    }

    /// Raw side indices, for host-side callers.
    pub fn side_data(&self) -> Option<&[u32]> {
        self.sides.as_deref()
    }
}
