//! Growable circular deque with random access.
//!
//! [`RingDeque`] keeps its elements in a circular window of a backing
//! array, so pushing and popping at either end is O(1) and any element
//! can be read or replaced through its logical index in O(1), negative
//! indices counting from the back. A push onto a full deque doubles the
//! usable capacity first, keeping insertion O(1) amortized.
//!
//! # Examples
//! ```
//! use ring_deque::RingDeque;
//!
//! let mut deque = RingDeque::new(4);
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.get(0), Ok(&0));
//! assert_eq!(deque.get(-1), Ok(&2));
//!
//! deque.rotate(1)?;
//! assert_eq!(deque.pop_front(), Ok(2));
//! assert_eq!(deque.pop_front(), Ok(0));
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert!(deque.pop_front().is_err());
//! # Ok::<_, ring_deque::RingDequeError>(())
//! ```

use std::{fmt, iter};

/// Circular double-ended buffer.
///
/// The backing array holds one slot more than the usable capacity; the
/// window `head..tail` (mod `buf.len()`) holds the elements, and the
/// spare slot keeps `head == tail` unambiguous as "empty".
#[derive(Clone)]
pub struct RingDeque<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RingDequeError {
    EmptyBuffer,
    IndexOutOfRange { index: isize, len: usize },
}

impl fmt::Display for RingDequeError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyBuffer => write!(fmt, "pop from an empty buffer"),
            Self::IndexOutOfRange { index, len } => {
                write!(fmt, "index out of range: {index} (len: {len})")
            }
        }
    }
}

impl std::error::Error for RingDequeError {}

impl<T> RingDeque<T> {
    pub fn new(capacity: usize) -> Self {
        let buf = iter::repeat_with(|| None).take(capacity + 1).collect();
        Self { buf, head: 0, tail: 0 }
    }

    /// Pre-populated deque; the usable capacity is `capacity` or the
    /// number of initial elements, whichever is larger.
    pub fn with_contents(
        capacity: usize,
        contents: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut buf: Vec<_> = contents.into_iter().map(Some).collect();
        let tail = buf.len();
        let n = buf.len().max(capacity) + 1;
        buf.resize_with(n, || None);
        Self { buf, head: 0, tail }
    }

    pub fn len(&self) -> usize {
        (self.tail + self.buf.len() - self.head) % self.buf.len()
    }
    pub fn is_empty(&self) -> bool { self.head == self.tail }
    pub fn is_full(&self) -> bool { self.len() == self.buf.len() - 1 }
    pub fn capacity(&self) -> usize { self.buf.len() - 1 }

    pub fn push_back(&mut self, elt: T) {
        if self.is_full() {
            self.grow();
        }
        self.buf[self.tail] = Some(elt);
        self.tail = (self.tail + 1) % self.buf.len();
    }
    pub fn push_front(&mut self, elt: T) {
        if self.is_full() {
            self.grow();
        }
        self.head = (self.head + self.buf.len() - 1) % self.buf.len();
        self.buf[self.head] = Some(elt);
    }
    pub fn pop_back(&mut self) -> Result<T, RingDequeError> {
        if self.is_empty() {
            return Err(RingDequeError::EmptyBuffer);
        }
        self.tail = (self.tail + self.buf.len() - 1) % self.buf.len();
        Ok(self.buf[self.tail].take().unwrap())
    }
    pub fn pop_front(&mut self) -> Result<T, RingDequeError> {
        if self.is_empty() {
            return Err(RingDequeError::EmptyBuffer);
        }
        let elt = self.buf[self.head].take().unwrap();
        self.head = (self.head + 1) % self.buf.len();
        Ok(elt)
    }

    /// Moves `k` elements from the back around to the front (`k < 0`:
    /// the other way around), one at a time. O(|k|). Never grows: each
    /// push is preceded by its pop, so a slot is always free.
    pub fn rotate(&mut self, k: isize) -> Result<(), RingDequeError> {
        if k > 0 {
            for _ in 0..k {
                let elt = self.pop_back()?;
                self.push_front(elt);
            }
        } else {
            for _ in 0..k.unsigned_abs() {
                let elt = self.pop_front()?;
                self.push_back(elt);
            }
        }
        Ok(())
    }

    fn index(&self, i: isize) -> Result<usize, RingDequeError> {
        let len = self.len();
        let norm = if i < 0 { i + len as isize } else { i };
        if !(0..len as isize).contains(&norm) {
            return Err(RingDequeError::IndexOutOfRange { index: i, len });
        }
        Ok((self.head + norm as usize) % self.buf.len())
    }
    pub fn get(&self, i: isize) -> Result<&T, RingDequeError> {
        let i = self.index(i)?;
        Ok(self.buf[i].as_ref().unwrap())
    }
    pub fn get_mut(&mut self, i: isize) -> Result<&mut T, RingDequeError> {
        let i = self.index(i)?;
        Ok(self.buf[i].as_mut().unwrap())
    }

    /// Replaces the element at logical index `i`, returning the old one.
    pub fn set(&mut self, i: isize, elt: T) -> Result<T, RingDequeError> {
        let i = self.index(i)?;
        Ok(self.buf[i].replace(elt).unwrap())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).map(move |i| {
            self.buf[(self.head + i) % self.buf.len()].as_ref().unwrap()
        })
    }

    // relayout from a fresh head so the window is contiguous again
    fn grow(&mut self) {
        let len = self.len();
        let cap = ((self.buf.len() - 1) * 2).max(1);
        let mut buf = Vec::with_capacity(cap + 1);
        let old_len = self.buf.len();
        for i in 0..len {
            buf.push(self.buf[(self.head + i) % old_len].take());
        }
        buf.resize_with(cap + 1, || None);
        self.buf = buf;
        self.head = 0;
        self.tail = len;
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_contents(0, iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}
