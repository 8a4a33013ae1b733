//! Free-form polygon storage.

use serde::{Deserialize, Serialize};

use shapekit_core::Point;

/// Fewest vertices a polygon may be reduced to.
pub const MIN_VERTICES: usize = 3;

/// A closed polygon edited vertex by vertex.
///
/// The last vertex connects back to the first. Vertex order is the order the
/// vertices were created and inserted; it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeformPolygon {
    vertices: Vec<Point>,
}

impl FreeformPolygon {
    /// Creates an empty polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from the corners of the rectangle centred on `center`.
    pub fn from_rect(center: Point, width: f64, height: f64) -> Self {
        let mut polygon = Self::new();
        polygon.reset_to_rect(center, width, height);
        polygon
    }

    /// Replaces all vertices with the rectangle corners TL, TR, BR, BL.
    pub fn reset_to_rect(&mut self, center: Point, width: f64, height: f64) {
        let hw = width / 2.0;
        let hh = height / 2.0;
        self.vertices = vec![
            Point::new(center.x - hw, center.y - hh),
            Point::new(center.x + hw, center.y - hh),
            Point::new(center.x + hw, center.y + hh),
            Point::new(center.x - hw, center.y + hh),
        ];
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Inserts `point` after the start of edge `edge_index`.
    ///
    /// Returns the index the new vertex landed at, or `None` when the edge
    /// does not exist.
    pub fn insert_vertex(&mut self, edge_index: usize, point: Point) -> Option<usize> {
        if edge_index >= self.vertices.len() {
            return None;
        }
        let at = edge_index + 1;
        self.vertices.insert(at, point);
        Some(at)
    }

    /// Removes vertex `index` unless that would leave fewer than
    /// [`MIN_VERTICES`]. Returns whether a vertex was removed.
    pub fn delete_vertex(&mut self, index: usize) -> bool {
        if self.vertices.len() <= MIN_VERTICES || index >= self.vertices.len() {
            return false;
        }
        self.vertices.remove(index);
        true
    }

    /// Moves vertex `index` to `point`. Returns `false` for a bad index.
    pub fn move_vertex(&mut self, index: usize, point: Point) -> bool {
        match self.vertices.get_mut(index) {
            Some(vertex) => {
                *vertex = point;
                true
            }
            None => false,
        }
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
