use core::iter::FusedIterator;

use crate::arith::{bit_to_element, clear_right_most_bit};
use crate::{Element, Mask};

/// Iterator over the elements in a mask, from the least to the most
/// significant set bit.
///
/// Created by [`split`](crate::split) and
/// [`split_with_base`](crate::split_with_base). It works on its own copy of
/// the mask, so the mask it came from is never touched; splitting the same
/// mask again, or cloning the iterator, starts over.
///
/// A set bit with no corresponding element is skipped.
#[derive(Clone, Debug)]
pub struct Split<M, E> {
    remaining: M,
    base: E,
}

impl<M: Mask, E: Element> Split<M, E> {
    /// Creates an iterator over the elements in `mask`, counting from `base`.
    #[inline]
    pub fn new(mask: M, base: E) -> Self {
        Self {
            remaining: mask,
            base,
        }
    }

    /// Returns the element at bit zero.
    #[inline]
    pub fn base(&self) -> E {
        self.base
    }

    /// Returns the bits not yet visited.
    #[inline]
    pub fn remaining(&self) -> M {
        self.remaining
    }
}

impl<M: Mask, E: Element> Iterator for Split<M, E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            let element = bit_to_element(self.remaining, self.base);
            self.remaining = clear_right_most_bit(self.remaining);
            if element.is_some() {
                return element;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining.len() as usize))
    }
}

impl<M: Mask, E: Element> FusedIterator for Split<M, E> {}
