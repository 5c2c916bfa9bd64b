//! Wrapping index over a non-empty sequence.
//!
//! An empty sequence has no carousel: [`Carousel::new`] returns `None` and the
//! view renders nothing, so the modulo below never sees zero.

use std::num::NonZeroUsize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items cycled through.
    pub fn count(&self) -> usize {
        self.len.get()
    }

    /// Step forward, wrapping to the first item. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = advance(self.index, self.len);
        self.index
    }

    /// Step back, wrapping to the last item. Returns the new index.
    pub fn retreat(&mut self) -> usize {
        self.index = retreat(self.index, self.len);
        self.index
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len.get() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

/// `(index + 1) mod len`
pub fn advance(index: usize, len: NonZeroUsize) -> usize {
    (index + 1) % len.get()
}

/// `(index - 1 + len) mod len`
pub fn retreat(index: usize, len: NonZeroUsize) -> usize {
    let len = len.get();
    (index % len + len - 1) % len
}
