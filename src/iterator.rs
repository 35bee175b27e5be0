// =============================================================================
// Iterator pattern: explicit cursor traversal over a fixed sequence
// =============================================================================

/// A stateful cursor over an owned sequence, traversed with explicit
/// `has_next`/`next` calls.
///
/// Single-pass and not restartable: there is no reset, and the cursor
/// only moves forward. Calling [`next`](SequenceIterator::next) past
/// the end is safe and yields `None`.
///
/// Named `SequenceIterator` because `Iterator` is taken by the std
/// trait; the [`IntoIterator`] impl bridges into that ecosystem.
pub struct SequenceIterator<T> {
    elements: Vec<T>,
    cursor: usize,
}

impl<T> SequenceIterator<T> {
    /// Captures `elements` by value; the cursor starts at 0.
    pub fn new(elements: Vec<T>) -> Self {
        SequenceIterator {
            elements,
            cursor: 0,
        }
    }

    /// True while elements remain. Pure query, never moves the cursor.
    pub fn has_next(&self) -> bool {
        self.cursor < self.elements.len()
    }

    /// Yields the element under the cursor and advances by one, or
    /// `None` once the sequence is exhausted.
    pub fn next(&mut self) -> Option<&T> {
        if self.cursor >= self.elements.len() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        Some(&self.elements[index])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements not yet visited.
    pub fn remaining(&self) -> usize {
        self.elements.len() - self.cursor
    }
}

impl<T> IntoIterator for SequenceIterator<T> {
    type Item = T;
    type IntoIter = std::iter::Skip<std::vec::IntoIter<T>>;

    /// Consumes the cursor, yielding the not-yet-visited elements by
    /// value so the traversal composes with `for` loops and adapters.
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter().skip(self.cursor)
    }
}
