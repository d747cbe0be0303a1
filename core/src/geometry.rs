// 2D points, triangles and the recursive midpoint subdivision
// that produces the Sierpinski leaf set.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Arithmetic mean of two points
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

// Vertex order is the draw path: p1 -> p2 -> p3 -> close
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    // Twice the signed area; sign depends on winding.
    pub fn signed_area2(&self) -> f64 {
        (self.p2.x - self.p1.x) * (self.p3.y - self.p1.y)
            - (self.p3.x - self.p1.x) * (self.p2.y - self.p1.y)
    }

    pub fn area(&self) -> f64 {
        self.signed_area2().abs() / 2.0
    }

    // Map every vertex through `f`, keeping the vertex order
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(f(self.p1), f(self.p2), f(self.p3))
    }
}

// Number of leaves produced at `order`, None if it does not fit in usize
pub fn triangle_count(order: u32) -> Option<usize> {
    3usize.checked_pow(order)
}

// Subdivide (p1, p2, p3) `order` times and return the 3^order leaf triangles.
//
// Each level keeps the three corner triangles formed by the vertex and the
// midpoints of its two adjacent edges, in the order p1, p2, p3. The inverted
// centre triangle is dropped.
pub fn subdivide(order: u32, p1: Point, p2: Point, p3: Point) -> Vec<Triangle> {
    if order == 0 {
        return vec![Triangle::new(p1, p2, p3)];
    }

    let m12 = midpoint(p1, p2);
    let m23 = midpoint(p2, p3);
    let m31 = midpoint(p3, p1);

    let mut leaves = Vec::with_capacity(triangle_count(order).unwrap_or(0));
    leaves.extend(subdivide(order - 1, p1, m12, m31));
    leaves.extend(subdivide(order - 1, m12, p2, m23));
    leaves.extend(subdivide(order - 1, m31, m23, p3));
    leaves
}
