// File: crates/gplot-core/src/numa.rs
// Summary: Growable numeric sequence with implicit x-parameters (startx, delx).

/// Ordered, append-only sequence of `f64` values.
///
/// `startx` and `delx` describe the implicit abscissa of each sample, used when a
/// series is plotted without an explicit x-sequence: `x(i) = startx + i * delx`.
#[derive(Clone, Debug, PartialEq)]
pub struct Numa {
    values: Vec<f64>,
    startx: f64,
    delx: f64,
}

impl Numa {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity), startx: 0.0, delx: 1.0 }
    }

    /// Set the implicit x-parameters, keeping the data.
    pub fn with_parameters(mut self, startx: f64, delx: f64) -> Self {
        self.startx = startx;
        self.delx = delx;
        self
    }

    /// Returns `(startx, delx)`.
    pub fn parameters(&self) -> (f64, f64) {
        (self.startx, self.delx)
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Implicit abscissa of sample `index`.
    pub fn x_at(&self, index: usize) -> f64 {
        self.startx + index as f64 * self.delx
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for Numa {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<f64>> for Numa {
    fn from(values: Vec<f64>) -> Self {
        Self { values, startx: 0.0, delx: 1.0 }
    }
}

impl FromIterator<f64> for Numa {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<f64> for Numa {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
