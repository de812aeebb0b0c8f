use std::fmt::{self, Debug, Display, Formatter};

use super::list::DoublyLinkedList;

/// A borrowed view of a [`DoublyLinkedList`] that formats back-to-front, created by
/// [`DoublyLinkedList::display_backward`].
pub struct DisplayBackward<'a, T> {
    pub(crate) inner: &'a DoublyLinkedList<T>,
}

impl<'a, T: Debug> Debug for DisplayBackward<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter().rev()).finish()
    }
}

impl<'a, T: Debug> Display for DisplayBackward<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
