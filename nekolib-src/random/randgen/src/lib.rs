use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` independent draws from `bound`.
pub struct Seq<B> {
    pub bound: B,
    pub len: usize,
}

/// A non-empty inclusive index pair `(l, r)` with `l <= r < len`.
pub struct SubRange {
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Range<usize> {
    type Output = usize;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl<B: Gen> Gen for Seq<B> {
    type Output = Vec<B::Output>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (0..self.len).map(|_| self.bound.generate(rng)).collect()
    }
}

impl Gen for SubRange {
    type Output = (usize, usize);
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        assert!(self.len > 0, "no index pair exists for length 0");
        let i = (0..self.len).generate(rng);
        let j = (0..self.len).generate(rng);
        (i.min(j), i.max(j))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn seq_in_bounds() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let a = Seq { bound: -5..5_i32, len: 1000 }.generate(&mut rng);
        assert_eq!(a.len(), 1000);
        assert!(a.iter().all(|x| (-5..5).contains(x)));
        assert!((-5..5).all(|x| a.contains(&x)));
    }

    #[test]
    fn nested_seq() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);
        let a = Seq { bound: Seq { bound: 0..3_i32, len: 4 }, len: 5 }
            .generate(&mut rng);
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn sub_range_covers_all_pairs() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let n = 10_usize.pow(5);
        let len = 4;

        let mut map = BTreeMap::new();
        for _ in 0..n {
            let (l, r) = SubRange { len }.generate(&mut rng);
            assert!(l <= r && r < len);
            *map.entry((l, r)).or_insert(0) += 1;
        }
        // l == r has weight 1/16, l < r has weight 2/16
        assert_eq!(map.len(), len * (len + 1) / 2);
        for (&(l, r), &v) in &map {
            let expected = if l == r { n / 16 } else { n / 8 };
            assert!(v >= expected * 95 / 100);
            assert!(v <= expected * 105 / 100);
        }
    }

    #[test]
    #[should_panic]
    fn sub_range_empty() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        SubRange { len: 0 }.generate(&mut rng);
    }
}
