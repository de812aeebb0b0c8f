use std::cell::Cell;
use std::rc::Rc;

/// A value for testing element lifecycles: every clone bumps a shared counter when dropped, so a
/// test can assert exactly when a container releases the elements it holds.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// The number of clones dropped so far, counting the original.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
