//! Operator vocabulary for trees that only ever combine non-empty ranges.
//!
//! A segment tree that never folds an empty range needs no identity
//! element, so an associative [`BinaryOp`] is all it asks for. Element
//! types such as `String` or arbitrary `Ord` keys have no natural
//! "infinity", and they work unchanged.

pub trait BinaryOp {
    type Set;
    fn op(&self, lhs: &Self::Set, rhs: &Self::Set) -> Self::Set;
}

/// `op(op(a, b), c) == op(a, op(b, c))`.
pub trait Associative {}

/// `op(a, b) == op(b, a)`.
pub trait Commutative {}

pub trait Semigroup: BinaryOp + Associative {}
pub trait CommutativeSemigroup: BinaryOp + Associative + Commutative {}

impl<T: BinaryOp + Associative> Semigroup for T {}
impl<T: BinaryOp + Associative + Commutative> CommutativeSemigroup for T {}

/// Defines a zero-sized operator type.
///
/// ```
/// use semigroup::{def_semigroup, BinaryOp};
///
/// def_semigroup! {
///     OpMax = (i64, |x: &i64, y: &i64| *x.max(y), Commutative),
/// }
///
/// assert_eq!(OpMax::new().op(&3, &-4), 3);
/// ```
#[macro_export]
macro_rules! def_semigroup {
    ( $name:ident = ($ty:ty, $op:expr $(,)?) ) => {
        #[derive(Clone, Copy, Debug, Default)]
        struct $name;
        impl $name {
            #[allow(dead_code)]
            fn new() -> Self { Self }
        }
        impl $crate::BinaryOp for $name {
            type Set = $ty;
            fn op(&self, lhs: &Self::Set, rhs: &Self::Set) -> Self::Set {
                ($op)(lhs, rhs)
            }
        }
        impl $crate::Associative for $name {}
    };
    ( $name:ident = ($ty:ty, $op:expr, Commutative $(,)?) ) => {
        $crate::def_semigroup! { $name = ($ty, $op) }
        impl $crate::Commutative for $name {}
    };
    ( $($name:ident = ($($impl:tt)*)),* ) => { $(
        $crate::def_semigroup! { $name = ($($impl)*) }
    )* };
    ( $($name:ident = ($($impl:tt)*),)* ) => { $(
        $crate::def_semigroup! { $name = ($($impl)*) }
    )* };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_all<S: Semigroup>(s: &S, a: &[S::Set]) -> Option<S::Set>
    where
        S::Set: Clone,
    {
        let (first, rest) = a.split_first()?;
        Some(rest.iter().fold(first.clone(), |acc, x| s.op(&acc, x)))
    }

    #[test]
    fn simple_semigroup() {
        def_semigroup! {
            OpGcd = (u32, |&x: &u32, &y: &u32| {
                let (mut x, mut y) = (x, y);
                while y != 0 {
                    (x, y) = (y, x % y);
                }
                x
            }, Commutative),
            OpConcat = (String, |x: &String, y: &String| format!("{x}{y}")),
        }

        let gcd = OpGcd::new();
        assert_eq!(gcd.op(&12, &18), 6);
        assert_eq!(fold_all(&gcd, &[24, 36, 60]), Some(12));

        let concat = OpConcat::new();
        assert_eq!(concat.op(&"ab".to_owned(), &"c".to_owned()), "abc");
        let words: Vec<_> = ["x", "y", "z"].map(String::from).into();
        assert_eq!(fold_all(&concat, &words).as_deref(), Some("xyz"));
        assert_eq!(fold_all(&concat, &[]), None);
    }

    #[test]
    fn commutative_bound() {
        def_semigroup! { OpXor = (u8, |x: &u8, y: &u8| x ^ y, Commutative) }

        fn swap_ok<S: CommutativeSemigroup>(s: &S, a: &S::Set, b: &S::Set)
        where
            S::Set: PartialEq,
        {
            assert!(s.op(a, b) == s.op(b, a));
        }
        swap_ok(&OpXor::new(), &0b1010, &0b0110);
    }
}
