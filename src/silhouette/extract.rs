use rayon::prelude::*;

use crate::{foundation::core::BezPath, silhouette::snapshot::ContentSnapshot};

/// Snapshots at least this large scan their rows on the rayon pool.
const PARALLEL_SCAN_MIN_PIXELS: usize = 1 << 16;

/// Integer pixel coordinate on a silhouette edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OutlinePoint {
    pub x: u32,
    pub y: u32,
}

impl OutlinePoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Per-row boundary columns found by the horizontal scans, in row order.
///
/// A row with no opaque pixel appears in neither list, so both lists always have the same
/// length and the same `y` values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeScan {
    pub left: Vec<OutlinePoint>,
    pub right: Vec<OutlinePoint>,
}

/// Closed polygon approximating the boundary of the non-transparent content.
///
/// The polygon walks the left boundary top to bottom and the right boundary bottom to top.
/// It is not a contour tracer: rows with several disjoint opaque runs only contribute their
/// outermost columns, and fully transparent rows are skipped over.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SilhouetteOutline {
    points: Vec<OutlinePoint>,
}

impl SilhouetteOutline {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stitch the two edge sequences into a closed loop.
    ///
    /// Returns an empty outline when either side has fewer than two points.
    pub fn from_edges(edges: &EdgeScan) -> Self {
        let (left, right) = (&edges.left, &edges.right);
        if left.len() < 2 || right.len() < 2 {
            return Self::empty();
        }

        let mut b = OutlineBuilder::with_capacity(left.len() + right.len() + 1);
        for &p in left {
            b.push(p);
        }
        for &p in right.iter().rev() {
            b.push(p);
        }
        b.push(left[0]);
        Self { points: b.finish() }
    }

    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last point coincide. Vacuously true for the empty outline.
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// Polyline through every point. The loop is closed geometrically by the repeated end
    /// point rather than a `ClosePath` element, so round caps meet at the seam.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter();
        if let Some(first) = it.next() {
            path.move_to((f64::from(first.x), f64::from(first.y)));
            for p in it {
                path.line_to((f64::from(p.x), f64::from(p.y)));
            }
        }
        path
    }
}

/// Drops repeated points and vertices lying on the segment between their neighbours.
struct OutlineBuilder {
    out: Vec<OutlinePoint>,
}

impl OutlineBuilder {
    fn with_capacity(n: usize) -> Self {
        Self {
            out: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, p: OutlinePoint) {
        if self.out.last() == Some(&p) {
            return;
        }
        while let [.., a, b] = self.out.as_slice() {
            if !is_between(*a, *b, p) {
                break;
            }
            self.out.pop();
        }
        self.out.push(p);
    }

    fn finish(self) -> Vec<OutlinePoint> {
        self.out
    }
}

/// `b` lies strictly inside segment `a -> c` (collinear, same direction on both sides).
fn is_between(a: OutlinePoint, b: OutlinePoint, c: OutlinePoint) -> bool {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));
    let (ux, uy) = (bx - ax, by - ay);
    let (vx, vy) = (cx - bx, cy - by);
    ux * vy - uy * vx == 0 && ux * vx + uy * vy > 0
}

/// Find the first non-transparent column of every row, from each side.
pub fn scan_edges(snapshot: &ContentSnapshot<'_>) -> EdgeScan {
    let height = snapshot.height();
    let rows: Vec<Option<(u32, u32)>> =
        if snapshot.size().pixel_count() >= PARALLEL_SCAN_MIN_PIXELS {
            (0..height)
                .into_par_iter()
                .map(|y| scan_row(snapshot, y))
                .collect()
        } else {
            (0..height).map(|y| scan_row(snapshot, y)).collect()
        };

    let mut edges = EdgeScan::default();
    for (y, cols) in (0u32..).zip(rows) {
        if let Some((l, r)) = cols {
            edges.left.push(OutlinePoint::new(l, y));
            edges.right.push(OutlinePoint::new(r, y));
        }
    }
    edges
}

fn scan_row(snapshot: &ContentSnapshot<'_>, y: u32) -> Option<(u32, u32)> {
    let row = snapshot.row(y)?;
    let left = row.chunks_exact(4).position(|px| px[3] != 0)?;
    let right = row.chunks_exact(4).rposition(|px| px[3] != 0)?;
    Some((left as u32, right as u32))
}

/// Extract the silhouette outline of a content snapshot.
///
/// Every pixel may be read; nothing is cached between calls because content can change
/// arbitrarily between redraws.
#[tracing::instrument(skip(snapshot), fields(width = snapshot.width(), height = snapshot.height()))]
pub fn extract_outline(snapshot: &ContentSnapshot<'_>) -> SilhouetteOutline {
    if snapshot.is_empty() {
        return SilhouetteOutline::empty();
    }
    let edges = scan_edges(snapshot);
    let outline = SilhouetteOutline::from_edges(&edges);
    tracing::debug!(
        rows = edges.left.len(),
        points = outline.len(),
        "extracted silhouette"
    );
    outline
}

#[cfg(test)]
#[path = "../../tests/unit/silhouette/extract.rs"]
mod tests;
