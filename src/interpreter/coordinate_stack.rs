use crate::matrix::{self, Matrix};

/// Nested coordinate systems. The stack is never empty: the bottom entry is
/// the base system the run starts with and it can't be popped.
#[derive(Debug)]
pub struct CoordinateStack {
    stack: Vec<Matrix>,
}

impl CoordinateStack {
    pub fn new() -> Self {
        Self { stack: vec![matrix::identity()] }
    }

    pub fn peek(&self) -> &Matrix {
        // the base system is never removed
        &self.stack[self.height() - 1]
    }

    pub fn height(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self) {
        let top = self.peek().clone();
        self.stack.push(top);
    }

    /// Returns false and leaves the stack alone if only the base system is left.
    pub fn pop(&mut self) -> bool {
        if self.height() == 1 {
            return false;
        }

        self.stack.pop();
        true
    }

    /// Replaces the top with `top * transformation`, so the new transformation
    /// acts in the local frame before everything already on the top.
    pub fn apply_transformation(&mut self, mut transformation: Matrix) {
        let top = self.height() - 1;
        matrix::multiply(&self.stack[top], &mut transformation);
        self.stack[top] = transformation;
    }

    /// Transforms a point list from the current coordinate system into screen space.
    pub fn transform(&self, points: &mut Matrix) {
        matrix::multiply(self.peek(), points);
    }
}
