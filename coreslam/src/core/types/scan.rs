//! Sensor-frame scan points.

/// One usable laser return, in the sensor frame.
///
/// `x_mm` points along the sensor's forward axis. `distance_mm` keeps the
/// raw range so that map integration can size the obstacle smear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPoint {
    /// Forward offset in millimeters
    pub x_mm: f64,
    /// Leftward offset in millimeters
    pub y_mm: f64,
    /// Measured range in millimeters
    pub distance_mm: f64,
}

/// Points derived from one raw scan.
///
/// Rebuilt every cycle; `span` records how many virtual sub-rays each raw
/// ray was expanded into.
#[derive(Debug, Clone, Default)]
pub struct ScanPointSet {
    points: Vec<ScanPoint>,
    span: usize,
}

impl ScanPointSet {
    /// Create an empty set for the given span.
    pub fn with_capacity(span: usize, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            span,
        }
    }

    /// Append a point.
    #[inline]
    pub fn push(&mut self, point: ScanPoint) {
        self.points.push(point);
    }

    /// Number of virtual sub-rays per raw ray.
    #[inline]
    pub fn span(&self) -> usize {
        self.span
    }

    /// Points in acquisition order.
    #[inline]
    pub fn points(&self) -> &[ScanPoint] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no ray survived filtering.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, ScanPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ScanPointSet {
    type Item = &'a ScanPoint;
    type IntoIter = std::slice::Iter<'a, ScanPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
