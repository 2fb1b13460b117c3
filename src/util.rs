//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [NumberSet] used for
//! storing the candidate numbers of a cell.

use std::collections::HashSet;
use std::hash::Hash;
use std::slice::Iter;

/// A set of cell numbers that is implemented as a bit vector. Each number in
/// the range of possible elements is represented by one bit in a vector of
/// words. This generally has better performance than a `HashSet` and iterates
/// in ascending order, which the solver relies on when trying candidates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberSet {
    min: usize,
    max: usize,
    len: usize,
    content: Vec<u64>
}

/// An enumeration of the errors that can happen when using a [NumberSet].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NumberSetError {

    /// Indicates that the bounds provided in the constructor are invalid,
    /// that is, the minimum is greater than the maximum.
    InvalidBounds,

    /// Indicates that a number that was queried to be inserted or removed is
    /// out of the bounds of the `NumberSet` in question.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, NumberSetError>`.
pub type NumberSetResult<V> = Result<V, NumberSetError>;

struct BitIterator {
    bit_index: usize,
    value: u64
}

impl BitIterator {
    fn new(value: u64) -> BitIterator {
        BitIterator {
            bit_index: 0,
            value
        }
    }

    fn progress(&mut self) {
        let diff = self.value.trailing_zeros() as usize;
        self.value >>= diff;
        self.bit_index += diff;
    }
}

impl Iterator for BitIterator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.value != 0 && (self.value & 1) == 0 {
            self.progress();
        }

        let result = if self.value == 0 { None } else { Some(self.bit_index) };
        self.value &= 0xfffffffffffffffe;
        result
    }
}

/// An iterator over the numbers contained in a [NumberSet], in ascending
/// order.
pub struct NumberSetIter<'a> {
    offset: usize,
    current: BitIterator,
    content: Iter<'a, u64>
}

impl<'a> NumberSetIter<'a> {
    fn new(set: &'a NumberSet) -> NumberSetIter<'a> {
        let mut iter = set.content.iter();
        let first_bit_iterator = if let Some(&first) = iter.next() {
            BitIterator::new(first)
        }
        else {
            BitIterator::new(0)
        };

        NumberSetIter {
            offset: set.min,
            current: first_bit_iterator,
            content: iter
        }
    }
}

const WORD_BITS: usize = 64;

impl<'a> Iterator for NumberSetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(bit_index) = self.current.next() {
                return Some(self.offset + bit_index);
            }

            if let Some(&next_content) = self.content.next() {
                self.current = BitIterator::new(next_content);
                self.offset += WORD_BITS;
            }
            else {
                return None;
            }
        }
    }
}

impl NumberSet {

    /// Creates a new, empty `NumberSet` with the given (inclusive) bounds.
    /// Inserting or removing values outside `min..=max` later yields a
    /// `NumberSetError::OutOfBounds`.
    ///
    /// # Errors
    ///
    /// If `min > max`. In that case, a `NumberSetError::InvalidBounds` is
    /// returned.
    pub fn new(min: usize, max: usize) -> NumberSetResult<NumberSet> {
        if min > max {
            Err(NumberSetError::InvalidBounds)
        }
        else {
            let required_words = (max - min + WORD_BITS) >> 6;

            Ok(NumberSet {
                min,
                max,
                len: 0,
                content: vec![0u64; required_words]
            })
        }
    }

    /// Creates a new singleton `NumberSet` with the given (inclusive) bounds
    /// which contains only the element specified by `content`.
    ///
    /// # Errors
    ///
    /// * `NumberSetError::InvalidBounds`: If `min > max`.
    /// * `NumberSetError::OutOfBounds`: If `content < min` or
    /// `content > max`.
    pub fn singleton(min: usize, max: usize, content: usize)
            -> NumberSetResult<NumberSet> {
        let mut result = NumberSet::new(min, max)?;
        result.insert(content)?;
        Ok(result)
    }

    /// Creates a new `NumberSet` that includes all numbers in the given
    /// (inclusive) bounds. Note that these bounds also apply later.
    ///
    /// # Errors
    ///
    /// If `min > max`. In that case, a `NumberSetError::InvalidBounds` is
    /// returned.
    pub fn range(min: usize, max: usize) -> NumberSetResult<NumberSet> {
        if min > max {
            Err(NumberSetError::InvalidBounds)
        }
        else {
            let mut content = Vec::new();
            let ones = max - min + 1;
            let ones_words = ones >> 6;

            for _ in 0..ones_words {
                content.push(!0);
            }

            let remaining_ones = ones - (ones_words << 6);

            if remaining_ones > 0 {
                content.push((1 << remaining_ones) - 1);
            }

            Ok(NumberSet {
                min,
                max,
                len: ones,
                content
            })
        }
    }

    fn compute_index(&self, number: usize) -> NumberSetResult<(usize, u64)> {
        if number < self.min || number > self.max {
            Err(NumberSetError::OutOfBounds)
        }
        else {
            let index = number - self.min;
            let word_index = index >> 6;
            let sub_word_index = index & 63;
            let mask = 1u64 << sub_word_index;
            Ok((word_index, mask))
        }
    }

    /// Returns the minimum value that this set can contain (inclusive).
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the maximum value that this set can contain (inclusive).
    pub fn max(&self) -> usize {
        self.max
    }

    /// Indicates whether this set contains the given number, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// bounds, `false` will be returned.
    pub fn contains(&self, number: usize) -> bool {
        if let Ok((word_index, mask)) = self.compute_index(number) {
            (self.content[word_index] & mask) > 0
        }
        else {
            false
        }
    }

    /// Inserts the given number into this set, such that
    /// [NumberSet::contains] returns `true` for it afterwards. This method
    /// returns `true` if the set has changed (i.e. the number was not present
    /// before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `number` is less than [NumberSet::min] or greater than
    /// [NumberSet::max]. In that case, `NumberSetError::OutOfBounds` is
    /// returned.
    pub fn insert(&mut self, number: usize) -> NumberSetResult<bool> {
        let (word_index, mask) = self.compute_index(number)?;
        let word = &mut self.content[word_index];

        if *word & mask == 0 {
            self.len += 1;
            *word |= mask;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the given number from this set, such that
    /// [NumberSet::contains] returns `false` for it afterwards. This method
    /// returns `true` if the set has changed (i.e. the number was present
    /// before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `number` is less than [NumberSet::min] or greater than
    /// [NumberSet::max]. In that case, `NumberSetError::OutOfBounds` is
    /// returned.
    pub fn remove(&mut self, number: usize) -> NumberSetResult<bool> {
        let (word_index, mask) = self.compute_index(number)?;
        let word = &mut self.content[word_index];

        if *word & mask > 0 {
            *word &= !mask;
            self.len -= 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes all numbers from this set, such that [NumberSet::contains]
    /// will return `false` for all inputs and [NumberSet::is_empty] will
    /// return `true`.
    pub fn clear(&mut self) {
        for i in 0..self.content.len() {
            self.content[i] = 0;
        }

        self.len = 0;
    }

    /// Returns an iterator over the numbers contained in this set in
    /// ascending order.
    pub fn iter(&self) -> NumberSetIter<'_> {
        NumberSetIter::new(self)
    }

    /// Indicates whether this set is empty, i.e. contains no numbers. If this
    /// method returns `true`, [NumberSet::contains] will return `false` for
    /// all inputs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Creates a new [NumberSet] that contains the specified elements. First, the
/// minimum and maximum values must be specified. Then, after a semicolon, a
/// comma-separated list of the contained values must be provided. For empty
/// sets, [NumberSet::new] can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_heuristics::set;
/// use sudoku_heuristics::util::NumberSet;
///
/// let set = set!(1, 5; 2, 4);
/// assert_eq!(1, set.min());
/// assert_eq!(5, set.max());
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// ```
#[macro_export]
macro_rules! set {
    ($set:expr; $e:expr) => {
        ($set).insert($e).unwrap()
    };

    ($set:expr; $e:expr, $($es:expr),+) => {
        set!($set; $e);
        set!($set; $($es),+)
    };

    ($min:expr, $max:expr; $($es:expr),+) => {
        {
            let mut set = NumberSet::new($min, $max).unwrap();
            set!(set; $($es),+);
            set
        }
    };
}

/// Determines whether the given iterator contains at least two equal elements
/// as defined by the [Eq](std::cmp::Eq) trait. The duplication detection is
/// implemented with a [HashSet](std::collections::HashSet), so it is required
/// that the item type implements the [Hash](std::hash::Hash) trait in a
/// consistent way.
pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|e| !set.insert(e))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = NumberSet::new(1, 9).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(3));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn range_set_is_full() {
        let set = NumberSet::range(1, 9).unwrap();
        assert!(!set.is_empty());
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(set.contains(9));
        assert_eq!(9, set.len());
    }

    #[test]
    fn singleton_set_contains_only_given_element() {
        let set = NumberSet::singleton(1, 9, 3).unwrap();
        assert!(!set.is_empty());
        assert!(!set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(9));
        assert_eq!(1, set.len());
    }

    #[test]
    fn set_macro_has_specified_range() {
        let set = set!(2, 5; 3);
        assert_eq!(2, set.min());
        assert_eq!(5, set.max());
    }

    #[test]
    fn set_macro_contains_specified_elements() {
        let set = set!(2, 8; 3, 7, 8);
        assert_eq!(3, set.len());
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(set.contains(8));
        assert!(!set.contains(5));
    }

    #[test]
    fn set_creation_error() {
        assert_eq!(Err(NumberSetError::InvalidBounds), NumberSet::new(1, 0));
        assert_eq!(Err(NumberSetError::InvalidBounds), NumberSet::new(5, 3));
    }

    #[test]
    fn set_insertion_error() {
        let mut set = NumberSet::new(1, 5).unwrap();
        assert_eq!(Err(NumberSetError::OutOfBounds), set.insert(0));
        assert_eq!(Err(NumberSetError::OutOfBounds), set.insert(6));
    }

    #[test]
    fn manipulation() {
        let mut set = NumberSet::new(1, 9).unwrap();
        set.insert(2).unwrap();
        set.insert(4).unwrap();
        set.insert(6).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(set.contains(6));
        assert_eq!(3, set.len());

        set.remove(4).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(!set.contains(4));
        assert!(set.contains(6));
        assert_eq!(2, set.len());

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(2));
        assert!(!set.contains(4));
        assert!(!set.contains(6));
        assert_eq!(0, set.len());
    }

    #[test]
    fn iteration_is_ascending() {
        let mut set = NumberSet::new(1, 100).unwrap();
        set.insert(12).unwrap();
        set.insert(1).unwrap();
        set.insert(64).unwrap();
        set.insert(23).unwrap();
        set.insert(65).unwrap();
        set.insert(100).unwrap();
        set.insert(42).unwrap();

        let numbers: Vec<usize> = set.iter().collect();

        assert_eq!(vec![1, 12, 23, 42, 64, 65, 100], numbers);
    }

    #[test]
    fn range_set_spans_multiple_words() {
        let set = NumberSet::range(1, 81).unwrap();

        assert_eq!(81, set.len());
        assert!(set.contains(1));
        assert!(set.contains(64));
        assert!(set.contains(65));
        assert!(set.contains(81));
        assert!(!set.contains(82));
        assert_eq!(81, set.iter().count());
    }

    #[test]
    fn double_insert() {
        let mut set = NumberSet::new(1, 9).unwrap();
        assert!(set.insert(3).unwrap());
        assert!(set.insert(4).unwrap());
        assert!(!set.insert(3).unwrap());

        assert!(set.contains(3));
        assert_eq!(2, set.len());
    }

    #[test]
    fn double_remove() {
        let mut set = NumberSet::range(1, 9).unwrap();
        assert!(set.remove(3).unwrap());
        assert!(set.remove(5).unwrap());
        assert!(!set.remove(3).unwrap());

        assert!(!set.contains(3));
        assert_eq!(7, set.len());
    }

    #[test]
    fn contains_duplicate_false() {
        let vec = vec![1, 5, 2, 4, 3];
        assert!(!contains_duplicate(vec.iter()));
        assert!(!contains_duplicate(vec.iter().map(|i| i.to_string())));
    }

    #[test]
    fn contains_duplicate_true() {
        let vec = vec![1, 5, 2, 4, 5];
        assert!(contains_duplicate(vec.iter()));
        assert!(contains_duplicate(vec.iter().map(|i| i.to_string())));
    }
}
