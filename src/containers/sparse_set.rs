//! A set for keeping track of which values are still part of a domain, allows O(1) removals and
//! O(|D|) traversal of the domain (where D are the values which are currently in the domain).
//!
//! The implementation follows [\[1\]](https://hal.science/hal-01339250/document): the structure
//! keeps the first [`SparseSet::size`] elements of its backing vector in the domain, and a removal
//! swaps the removed element with the element at position [`SparseSet::size`] - 1 before
//! decrementing [`SparseSet::size`]. A function `mapping` has to be provided which maps every
//! value to an index in \[0..|D_{original}|\) in a bijective manner.
//!
//! # Bibliography
//! \[1\] V. le C. de Saint-Marcq, P. Schaus, C. Solnon, and C. Lecoutre, ‘Sparse-sets for domain
//! implementation’, in CP workshop on Techniques foR Implementing Constraint programming Systems
//! (TRICS), 2013, pp. 1–10.

use crate::xword_assert_moderate;

/// A set for keeping track of which values are still part of a domain based on
/// [\[1\]](https://hal.science/hal-01339250/document). See the module level documentation for more
/// information.
///
/// It provides O(1) removals of values from the domain and O(|D|) traversal of the domain (where D
/// are the values which are currently in the domain).
///
/// Note that it is required that each element contained in the domain can be uniquely mapped to an
/// index in the range \[0, |D_{original}|\) (i.e. the mapping function is bijective).
///
/// # Bibliography
/// \[1\] V. le C. de Saint-Marcq, P. Schaus, C. Solnon, and C. Lecoutre, ‘Sparse-sets for domain
/// implementation’, in CP workshop on Techniques foR Implementing Constraint programming Systems
/// (TRICS), 2013, pp. 1–10.
#[derive(Debug, Clone)]
pub(crate) struct SparseSet<T> {
    /// The number of elements which are currently in the domain.
    size: usize,
    /// The current state of the domain, this structure guarantees that the first
    /// [`size`][SparseSet::size] elements are part of the domain.
    domain: Vec<T>,
    /// Stores for each value of T what its corresponding index is in
    /// [`domain`][`SparseSet::domain`].
    indices: Vec<usize>,
    /// A bijective function which takes as input an element `T` and returns an index in the range
    /// \[0, |D_{original}|\) to be used for retrieving values from
    /// [`indices`][`SparseSet::indices`].
    mapping: fn(&T) -> usize,
}

impl<T> SparseSet<T> {
    /// Assumption: It is assumed that `mapping` is a bijective function which will return an
    /// index which is in the range \[0, |D_{original}|\) (where D_{original} is the initial
    /// domain before any operations have been performed).
    pub(crate) fn new(input: Vec<T>, mapping: fn(&T) -> usize) -> Self {
        let input_len = input.len();
        SparseSet {
            size: input_len,
            domain: input,
            indices: (0..input_len).collect::<Vec<_>>(),
            mapping,
        }
    }

    /// Determines whether the domain represented by the [`SparseSet`] is empty.
    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns how many elements are part of the domain.
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    /// Swaps the elements at positions `i` and `j` in [`domain`][SparseSet::domain] and swaps the
    /// corresponding indices in [`indices`][SparseSet::indices].
    fn swap(&mut self, i: usize, j: usize) {
        self.domain.swap(i, j);
        self.indices[(self.mapping)(&self.domain[i])] = i;
        self.indices[(self.mapping)(&self.domain[j])] = j;
    }

    /// Remove the value of `to_remove` from the domain; if the value is not in the domain then
    /// this method does not perform any operations.
    pub(crate) fn remove(&mut self, to_remove: &T) {
        if self.indices[(self.mapping)(to_remove)] < self.size {
            self.size -= 1;
            self.swap(self.indices[(self.mapping)(to_remove)], self.size);
        }
        xword_assert_moderate!(!self.contains(to_remove));
    }

    /// Determines whether the `element` is contained in the domain of the sparse-set.
    pub(crate) fn contains(&self, element: &T) -> bool {
        (self.mapping)(element) < self.indices.len()
            && self.indices[(self.mapping)(element)] < self.size
    }

    /// Returns an iterator which goes over the values in the domain of the sparse-set.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.domain[..self.size].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SparseSet;

    fn mapping_function(input: &u32) -> usize {
        *input as usize
    }

    #[test]
    fn test_len() {
        let sparse_set = SparseSet::new(vec![0, 1, 2], mapping_function);
        assert_eq!(sparse_set.len(), 3);
    }

    #[test]
    fn removal_adjusts_size() {
        let mut sparse_set = SparseSet::new(vec![0, 1, 2], mapping_function);
        assert_eq!(sparse_set.len(), 3);
        sparse_set.remove(&0);
        assert_eq!(sparse_set.len(), 2);
    }

    #[test]
    fn removal_keeps_other_elements() {
        let mut sparse_set = SparseSet::new(vec![0, 1, 2], mapping_function);
        sparse_set.remove(&1);
        assert!(!sparse_set.contains(&1));
        assert!(sparse_set.contains(&0));
        assert!(sparse_set.contains(&2));
        assert_eq!(sparse_set.iter().copied().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn removing_an_absent_element_is_a_no_op() {
        let mut sparse_set = SparseSet::new(vec![0, 1, 2], mapping_function);
        sparse_set.remove(&1);
        sparse_set.remove(&1);
        assert_eq!(sparse_set.len(), 2);
    }

    #[test]
    fn remove_all_elements_leads_to_empty_set() {
        let mut sparse_set = SparseSet::new(vec![0, 1, 2], mapping_function);
        sparse_set.remove(&0);
        sparse_set.remove(&1);
        sparse_set.remove(&2);
        assert!(sparse_set.is_empty());
    }
}
