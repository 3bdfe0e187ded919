//! Per-property binding between a style expression and its evaluator tree.
//!
//! The host creates one binding per dynamic style property, calls
//! `refresh` on every frame and applies the value whenever one comes back.
//! Constant trees deliver once; trees that read the environment deliver on
//! every refresh.

use crate::evaluator::Evaluator;

#[derive(Debug)]
pub struct StyleBinding<E: Evaluator> {
    tree: E,
    current: Option<E::Output>,
}

impl<E: Evaluator> StyleBinding<E> {
    pub fn new(tree: E) -> Self {
        StyleBinding {
            tree,
            current: None,
        }
    }

    /// Evaluate if needed and return the value to apply.
    ///
    /// Returns `None` once a constant tree has delivered its value.
    pub fn refresh(&mut self) -> Option<&E::Output> {
        if self.current.is_some() && self.tree.is_constant() {
            return None;
        }
        self.current = Some(self.tree.evaluate());
        self.current.as_ref()
    }

    /// Swap in the tree for a newly assigned expression, returning the old
    /// one. The next `refresh` delivers again.
    pub fn replace(&mut self, tree: E) -> E {
        self.current = None;
        std::mem::replace(&mut self.tree, tree)
    }

    /// Last delivered value.
    pub fn current(&self) -> Option<&E::Output> {
        self.current.as_ref()
    }

    pub fn tree(&self) -> &E {
        &self.tree
    }

    pub fn is_constant(&self) -> bool {
        self.tree.is_constant()
    }
}
