//! Segment tree laid out as an implicit complete binary tree.
//!
//! Node `0` is the root and node `i` has children `2 * i + 1` and
//! `2 * i + 2`. The node covering `[start, end]` splits at
//! `mid = start + (end - start) / 2` into `[start, mid]` and
//! `[mid + 1, end]`, so leaves sit at different depths when the length is
//! not a power of two, and slots below such shallow leaves stay empty.
//!
//! Folds only ever descend into children that intersect the requested
//! range, hence the operator needs no identity element.
//!
//! ```
//! use range_min_tree::{RangeMinError, RangeMinTree};
//!
//! let mut tree: RangeMinTree<i32> = vec![2, 8, 5, 3, 9, 4, 1].into();
//! assert_eq!(tree.query(0, 5), Ok(2));
//! assert_eq!(tree.query(4, 5), Ok(4));
//!
//! tree.update(5, 6).unwrap();
//! assert_eq!(tree.query(4, 5), Ok(6));
//! assert_eq!(tree.fold(..), Ok(1));
//!
//! let err = tree.query(2, 1).unwrap_err();
//! assert!(matches!(err, RangeMinError::InvalidRange { .. }));
//! ```

use std::{
    fmt,
    ops::{Deref, DerefMut, Index, Range, RangeBounds},
};

use op_min::OpMin;
use semigroup::Semigroup;
use thiserror::Error;
use usize_bounds::{UsizeBounds, UsizeOob};

pub type RangeMinTree<T> = RecSegtree<OpMin<T>>;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RangeMinError {
    /// The half-open range `start..end` is empty, inverted, or reaches
    /// past `len`.
    #[error("range {start}..{end} is empty or out of range for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("index {index} out of range for length {len}")]
    InvalidIndex { index: usize, len: usize },
    #[error("tree is empty")]
    EmptyTree,
}

impl From<UsizeOob> for RangeMinError {
    fn from(e: UsizeOob) -> Self {
        let (start, end) = e.bounds();
        RangeMinError::InvalidRange { start, end, len: e.len() }
    }
}

#[derive(Clone)]
pub struct RecSegtree<S: Semigroup> {
    tree: Vec<Option<S::Set>>,
    len: usize,
    semigroup: S,
}

/// Mutable access to one element; ancestors are recomputed on drop.
pub struct PeekMut<'a, S: Semigroup> {
    self_: &'a mut RecSegtree<S>,
    node: usize,
}

fn capacity_for(len: usize) -> usize {
    if len == 0 { 0 } else { 2 * len.next_power_of_two() - 1 }
}

impl<S: Semigroup> RecSegtree<S> {
    fn new(a: Vec<S::Set>, semigroup: S) -> Self {
        let len = a.len();
        let tree = (0..capacity_for(len)).map(|_| None).collect();
        let mut self_ = Self { tree, len, semigroup };
        if len > 0 {
            self_.build_rec(0, 0, len - 1, &mut a.into_iter());
        }
        self_
    }

    /// Builds the tree over `a` in `O(a.len())` time.
    pub fn build(a: Vec<S::Set>) -> Self
    where
        S: Default,
    {
        Self::new(a, S::default())
    }

    // Leaves are reached left to right, so `a` is consumed in order.
    fn build_rec<I>(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        a: &mut I,
    ) where
        I: Iterator<Item = S::Set>,
    {
        if start == end {
            let Some(x) = a.next() else { unreachable!() };
            self.tree[node] = Some(x);
            return;
        }
        let mid = start + (end - start) / 2;
        self.build_rec(2 * node + 1, start, mid, a);
        self.build_rec(2 * node + 2, mid + 1, end, a);
        self.fix(node);
    }

    fn node(&self, node: usize) -> &S::Set {
        match &self.tree[node] {
            Some(x) => x,
            None => unreachable!("node {node} is not populated"),
        }
    }

    fn fix(&mut self, node: usize) {
        let (l, r) = (2 * node + 1, 2 * node + 2);
        let x = self.semigroup.op(self.node(l), self.node(r));
        self.tree[node] = Some(x);
    }

    fn check_index(&self, index: usize) -> Result<(), RangeMinError> {
        if self.len == 0 {
            Err(RangeMinError::EmptyTree)
        } else if index >= self.len {
            Err(RangeMinError::InvalidIndex { index, len: self.len })
        } else {
            Ok(())
        }
    }

    fn leaf(&self, index: usize) -> usize {
        let (mut node, mut start, mut end) = (0, 0, self.len - 1);
        while start < end {
            let mid = start + (end - start) / 2;
            if index <= mid {
                node = 2 * node + 1;
                end = mid;
            } else {
                node = 2 * node + 2;
                start = mid + 1;
            }
        }
        node
    }

    fn leaves_rec(
        node: usize,
        start: usize,
        end: usize,
        res: &mut Vec<usize>,
    ) {
        if start == end {
            res.push(node);
            return;
        }
        let mid = start + (end - start) / 2;
        Self::leaves_rec(2 * node + 1, start, mid, res);
        Self::leaves_rec(2 * node + 2, mid + 1, end, res);
    }

    fn leaves(&self) -> Vec<usize> {
        let mut res = Vec::with_capacity(self.len);
        if self.len > 0 {
            Self::leaves_rec(0, 0, self.len - 1, &mut res);
        }
        res
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of slots, `2 * len.next_power_of_two() - 1`, or `0` when
    /// empty.
    pub fn capacity(&self) -> usize { self.tree.len() }

    pub fn get(&self, index: usize) -> Result<&S::Set, RangeMinError> {
        self.check_index(index)?;
        Ok(self.node(self.leaf(index)))
    }

    /// Overwrites one element, recomputing exactly the nodes on its
    /// root-to-leaf path. Nothing is touched on error.
    pub fn update(
        &mut self,
        index: usize,
        value: S::Set,
    ) -> Result<(), RangeMinError> {
        self.check_index(index)?;
        self.update_rec(0, 0, self.len - 1, index, value);
        Ok(())
    }

    fn update_rec(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        index: usize,
        value: S::Set,
    ) {
        if start == end {
            self.tree[node] = Some(value);
            return;
        }
        let mid = start + (end - start) / 2;
        if index <= mid {
            self.update_rec(2 * node + 1, start, mid, index, value);
        } else {
            self.update_rec(2 * node + 2, mid + 1, end, index, value);
        }
        self.fix(node);
    }

    pub fn peek_mut(
        &mut self,
        index: usize,
    ) -> Result<PeekMut<'_, S>, RangeMinError> {
        self.check_index(index)?;
        let node = self.leaf(index);
        Ok(PeekMut { self_: self, node })
    }

    pub fn into_vec(mut self) -> Vec<S::Set> {
        self.leaves()
            .into_iter()
            .map(|node| match self.tree[node].take() {
                Some(x) => x,
                None => unreachable!(),
            })
            .collect()
    }
}

impl<S: Semigroup> RecSegtree<S>
where
    S::Set: Clone,
{
    /// Folds `a[l..=r]`.
    pub fn query(&self, l: usize, r: usize) -> Result<S::Set, RangeMinError> {
        self.fold(l..=r)
    }

    /// Folds the elements in `range`, which must be non-empty.
    pub fn fold(
        &self,
        range: impl RangeBounds<usize>,
    ) -> Result<S::Set, RangeMinError> {
        if self.len == 0 {
            return Err(RangeMinError::EmptyTree);
        }
        let Range { start, end } = range.checked_to_range(self.len)?;
        if start == end {
            let len = self.len;
            return Err(RangeMinError::InvalidRange { start, end, len });
        }
        Ok(self.fold_rec(0, 0, self.len - 1, start, end - 1))
    }

    // [start, end] and [l, r] must intersect.
    fn fold_rec(
        &self,
        node: usize,
        start: usize,
        end: usize,
        l: usize,
        r: usize,
    ) -> S::Set {
        if l <= start && end <= r {
            return self.node(node).clone();
        }
        let mid = start + (end - start) / 2;
        if r <= mid {
            self.fold_rec(2 * node + 1, start, mid, l, r)
        } else if mid < l {
            self.fold_rec(2 * node + 2, mid + 1, end, l, r)
        } else {
            let x = self.fold_rec(2 * node + 1, start, mid, l, r);
            let y = self.fold_rec(2 * node + 2, mid + 1, end, l, r);
            self.semigroup.op(&x, &y)
        }
    }

    /// Copy of every slot in node order; `None` marks padding.
    pub fn snapshot(&self) -> Vec<Option<S::Set>> { self.tree.clone() }
}

impl<S: Semigroup + Default> From<Vec<S::Set>> for RecSegtree<S> {
    fn from(a: Vec<S::Set>) -> Self { Self::new(a, S::default()) }
}

impl<S: Semigroup> From<(Vec<S::Set>, S)> for RecSegtree<S> {
    fn from((a, semigroup): (Vec<S::Set>, S)) -> Self {
        Self::new(a, semigroup)
    }
}

impl<S: Semigroup + Default> FromIterator<S::Set> for RecSegtree<S> {
    fn from_iter<I: IntoIterator<Item = S::Set>>(iter: I) -> Self {
        let buf: Vec<_> = iter.into_iter().collect();
        buf.into()
    }
}

impl<S: Semigroup> From<RecSegtree<S>> for Vec<S::Set> {
    fn from(self_: RecSegtree<S>) -> Vec<S::Set> { self_.into_vec() }
}

impl<S: Semigroup> Index<usize> for RecSegtree<S> {
    type Output = S::Set;
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Semigroup> fmt::Debug for RecSegtree<S>
where
    S::Set: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.leaves().into_iter().map(|node| self.node(node)))
            .finish()
    }
}

impl<S: Semigroup> Deref for PeekMut<'_, S> {
    type Target = S::Set;
    fn deref(&self) -> &Self::Target { self.self_.node(self.node) }
}

impl<S: Semigroup> DerefMut for PeekMut<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.self_.tree[self.node] {
            Some(x) => x,
            None => unreachable!(),
        }
    }
}

impl<S: Semigroup> Drop for PeekMut<'_, S> {
    fn drop(&mut self) {
        let mut i = self.node;
        while i > 0 {
            i = (i - 1) / 2;
            self.self_.fix(i);
        }
    }
}
