/// Running count of mesh triangles emitted during one compile pass.
///
/// Checked before every triangle. Once a triangle is refused the budget
/// stays exceeded for the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleBudget {
    max: usize,
    used: usize,
    exceeded: bool,
}

impl TriangleBudget {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            used: 0,
            exceeded: false,
        }
    }

    /// Claims one triangle; false when the budget is spent
    pub fn try_take(&mut self) -> bool {
        if self.exceeded || self.used >= self.max {
            self.exceeded = true;
            return false;
        }
        self.used += 1;
        true
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }
}
