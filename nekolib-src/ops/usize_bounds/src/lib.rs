use std::{
    fmt,
    ops::{
        Bound::{Excluded, Included, Unbounded},
        Range, RangeBounds,
    },
};

/// A range that does not fit in `0..len`.
///
/// Bounds are stored in half-open form. A bound that overflows `usize`
/// while being converted (`..=usize::MAX`, `(Excluded(usize::MAX), _)`)
/// is reported as `usize::MAX`, which is out of range for any length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UsizeOob {
    StartIndexLen(usize, usize, usize),
    EndIndexLen(usize, usize, usize),
    IndexOrder(usize, usize, usize),
}

impl UsizeOob {
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            UsizeOob::StartIndexLen(start, end, _)
            | UsizeOob::EndIndexLen(start, end, _)
            | UsizeOob::IndexOrder(start, end, _) => (start, end),
        }
    }
    pub fn len(&self) -> usize {
        match *self {
            UsizeOob::StartIndexLen(.., len)
            | UsizeOob::EndIndexLen(.., len)
            | UsizeOob::IndexOrder(.., len) => len,
        }
    }
}

impl fmt::Display for UsizeOob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsizeOob::StartIndexLen(start, _, len) => write!(
                f,
                "range start index {start} out of range for length {len}"
            ),
            UsizeOob::EndIndexLen(_, end, len) => {
                write!(f, "range end index {end} out of range for length {len}")
            }
            UsizeOob::IndexOrder(start, end, _) => {
                write!(f, "range starts at {start} but ends at {end}")
            }
        }
    }
}

impl std::error::Error for UsizeOob {}

pub trait UsizeBounds {
    fn to_range(&self, len: usize) -> Range<usize>;
    fn checked_to_range(&self, len: usize) -> Result<Range<usize>, UsizeOob>;
}

impl<R: RangeBounds<usize>> UsizeBounds for R {
    fn to_range(&self, len: usize) -> Range<usize> {
        match self.checked_to_range(len) {
            Ok(o) => o,
            Err(e) => panic!("{e}"),
        }
    }

    fn checked_to_range(&self, len: usize) -> Result<Range<usize>, UsizeOob> {
        let start = match self.start_bound() {
            Included(&s) => s,
            Excluded(&s) => s.saturating_add(1),
            Unbounded => 0,
        };
        let end = match self.end_bound() {
            Included(&e) => e.saturating_add(1),
            Excluded(&e) => e,
            Unbounded => len,
        };

        if start > len {
            Err(UsizeOob::StartIndexLen(start, end, len))
        } else if end > len {
            Err(UsizeOob::EndIndexLen(start, end, len))
        } else if start > end {
            Err(UsizeOob::IndexOrder(start, end, len))
        } else {
            // start <= end <= len
            Ok(start..end)
        }
    }
}

#[test]
fn in_bounds() {
    assert_eq!((..).checked_to_range(5), Ok(0..5));
    assert_eq!((1..).checked_to_range(5), Ok(1..5));
    assert_eq!((..3).checked_to_range(5), Ok(0..3));
    assert_eq!((..=3).checked_to_range(5), Ok(0..4));
    assert_eq!((2..2).checked_to_range(5), Ok(2..2));
    assert_eq!((5..).checked_to_range(5), Ok(5..5));
    assert_eq!((Excluded(1), Included(3)).checked_to_range(5), Ok(2..4));
    assert_eq!((..).checked_to_range(0), Ok(0..0));
}

#[test]
fn out_of_bounds() {
    use UsizeOob::*;

    assert_eq!((6..).checked_to_range(5), Err(StartIndexLen(6, 5, 5)));
    assert_eq!((0..6).checked_to_range(5), Err(EndIndexLen(0, 6, 5)));
    assert_eq!((0..=5).checked_to_range(5), Err(EndIndexLen(0, 6, 5)));
    assert_eq!((3..2).checked_to_range(5), Err(IndexOrder(3, 2, 5)));
    assert_eq!(
        (0..=usize::MAX).checked_to_range(5),
        Err(EndIndexLen(0, usize::MAX, 5))
    );
    assert_eq!(
        (Excluded(usize::MAX), Unbounded).checked_to_range(5),
        Err(StartIndexLen(usize::MAX, 5, 5))
    );
}

#[test]
fn messages() {
    assert_eq!(
        UsizeOob::StartIndexLen(6, 5, 5).to_string(),
        "range start index 6 out of range for length 5"
    );
    assert_eq!(
        UsizeOob::EndIndexLen(0, 6, 5).to_string(),
        "range end index 6 out of range for length 5"
    );
    assert_eq!(
        UsizeOob::IndexOrder(3, 2, 5).to_string(),
        "range starts at 3 but ends at 2"
    );
    assert_eq!(UsizeOob::IndexOrder(3, 2, 5).bounds(), (3, 2));
    assert_eq!(UsizeOob::IndexOrder(3, 2, 5).len(), 5);
}

#[test]
#[should_panic(expected = "range end index 4 out of range for length 3")]
fn to_range_panics() { (1..4).to_range(3); }
