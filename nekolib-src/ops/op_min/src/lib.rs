use std::fmt;

use semigroup::{Associative, BinaryOp, Commutative};

/// `min` as a semigroup. On ties the left operand is kept.
pub struct OpMin<T>(std::marker::PhantomData<fn(&T) -> T>);

impl<T> Default for OpMin<T> {
    fn default() -> Self { Self(std::marker::PhantomData) }
}

impl<T> Clone for OpMin<T> {
    fn clone(&self) -> Self { Self::default() }
}

impl<T> Copy for OpMin<T> {}

impl<T> fmt::Debug for OpMin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OpMin")
    }
}

impl<T: Ord + Clone> BinaryOp for OpMin<T> {
    type Set = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        if rhs < lhs { rhs.clone() } else { lhs.clone() }
    }
}

impl<T: Ord + Clone> Associative for OpMin<T> {}
impl<T: Ord + Clone> Commutative for OpMin<T> {}

#[test]
fn sanity_check() {
    let op_min: OpMin<i32> = Default::default();
    assert_eq!(op_min.op(&1, &2), 1);
    assert_eq!(op_min.op(&2, &1), 1);
    assert_eq!(op_min.op(&i32::MAX, &i32::MIN), i32::MIN);
}

#[test]
fn leftmost_on_ties() {
    use std::cmp::Ordering;

    #[derive(Clone, Debug)]
    struct Keyed(u32, &'static str);
    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering { self.0.cmp(&other.0) }
    }

    let op_min = OpMin::<Keyed>::default();
    assert_eq!(op_min.op(&Keyed(3, "left"), &Keyed(3, "right")).1, "left");
    assert_eq!(op_min.op(&Keyed(4, "left"), &Keyed(3, "right")).1, "right");
}

#[test]
fn owned_values() {
    let op_min = OpMin::<String>::default();
    let (a, b) = ("pear".to_owned(), "apple".to_owned());
    assert_eq!(op_min.op(&a, &b), "apple");
}
