use std::collections::VecDeque;

use crate::automaton::Row;
use crate::cell::Rgb;

/// A bounded trailing window of generations.
///
/// Rows are kept oldest first, so iterating top to bottom paints the
/// scroll: the newest generation is always the last row, and once the
/// buffer is full every push drops exactly one whole row off the front.
#[derive(Clone, Debug)]
pub struct ScrollBuffer {
    rows: VecDeque<Row>,
    capacity: usize,
}

impl ScrollBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a generation, evicting the oldest one first when full.
    pub fn push(&mut self, row: Row) {
        if self.rows.len() == self.capacity {
            self.rows.pop_front();
        }

        self.rows.push_back(row);
    }

    /// Row `index` generations behind the front, 0 being the oldest still
    /// held. `None` past the end, which callers paint as empty space.
    pub fn get(&self, index: usize) -> Option<&[Rgb]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Rows oldest to newest.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // rows tagged by their first cell's red channel
    fn tagged(tag: u8) -> Row {
        vec![Rgb::new(tag, 0, 0)]
    }

    fn tag_of(row: &[Rgb]) -> u8 {
        row[0].r
    }

    #[test]
    fn fills_up_to_capacity_then_holds() {
        let mut buf = ScrollBuffer::new(3);

        for n in 0..10 {
            buf.push(tagged(n));
            assert_eq!(buf.len(), usize::min(n as usize + 1, 3));
        }
    }

    #[test]
    fn eviction_is_oldest_first() {
        let mut buf = ScrollBuffer::new(3);

        for n in 0..5 {
            buf.push(tagged(n));
        }

        let tags: Vec<u8> = buf.rows().map(tag_of).collect();
        assert_eq!(tags, vec![2, 3, 4]);
    }

    #[test]
    fn get_walks_oldest_to_newest() {
        let mut buf = ScrollBuffer::new(2);
        buf.push(tagged(7));
        buf.push(tagged(8));

        assert_eq!(buf.get(0).map(tag_of), Some(7));
        assert_eq!(buf.get(1).map(tag_of), Some(8));
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buf = ScrollBuffer::new(2);
        buf.push(tagged(1));
        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.get(0), None);
    }

    proptest! {
        #[test]
        fn capacity_invariant_holds_under_any_push_sequence(
            pushes in 0usize..64,
            capacity in 1usize..16,
        ) {
            let mut buf = ScrollBuffer::new(capacity);

            for n in 0..pushes {
                buf.push(tagged(n as u8));
                prop_assert!(buf.len() <= capacity);
            }

            prop_assert_eq!(buf.len(), usize::min(pushes, capacity));
        }

        #[test]
        fn surviving_rows_are_the_newest_in_push_order(
            pushes in 1usize..64,
            capacity in 1usize..16,
        ) {
            let mut buf = ScrollBuffer::new(capacity);

            for n in 0..pushes {
                buf.push(tagged(n as u8));
            }

            let oldest = pushes - usize::min(pushes, capacity);
            let expected: Vec<u8> = (oldest..pushes).map(|n| n as u8).collect();
            let tags: Vec<u8> = buf.rows().map(tag_of).collect();

            prop_assert_eq!(tags, expected);
        }
    }
}
