//! The probability distributions of the crate and the traits they are
//! accessed through.

use crate::statistics::{Max, Min};

mod binomial;

pub use self::binomial::{Binomial, BinomialError};

/// The probability mass function of a discrete distribution.
pub trait Discrete<K, T> {
    /// Returns the probability mass at `x`.
    fn pmf(&self, x: K) -> T;

    /// Returns the logarithm of the probability mass at `x`.
    fn ln_pmf(&self, x: K) -> T;
}

/// The cumulative distribution function of a discrete distribution and
/// the quantities derived from it.
pub trait DiscreteCDF<K, T>: Min<K> + Max<K>
where
    K: Sized + Ord + Clone + num_traits::Num,
    T: num_traits::Float,
{
    /// Returns the probability of a value less than or equal to `x`.
    fn cdf(&self, x: K) -> T;

    /// Returns the probability of a value greater than `x`
    /// (the survival function).
    fn sf(&self, x: K) -> T {
        T::one() - self.cdf(x)
    }

    /// Returns the smallest `x` in the domain with `cdf(x) >= p`,
    /// found by bisection over the domain.
    ///
    /// # Panics
    ///
    /// Panics if `p` is NaN.
    fn inverse_cdf(&self, p: T) -> K {
        assert!(!p.is_nan(), "inverse_cdf is undefined for NaN");
        if p <= T::zero() {
            return self.min();
        }
        if p >= T::one() {
            return self.max();
        }

        let two = K::one() + K::one();
        let mut low = self.min();
        let mut high = self.max();
        while low < high {
            let mid = low.clone() + (high.clone() - low.clone()) / two.clone();
            if self.cdf(mid.clone()) >= p {
                high = mid;
            } else {
                low = mid + K::one();
            }
        }
        low
    }
}


/// Generates the shared test scaffolding for a distribution with a
/// fallible constructor: `make`, `create_ok`, `create_err` and the
/// `test_exact`/`test_absolute` assertion helpers.
#[macro_export]
macro_rules! testing_boiler {
    ($($arg:ident: $ty:ty),+; $dist:ty; $err:ty) => {
        fn make($($arg: $ty),*) -> ::core::result::Result<$dist, $err> {
            <$dist>::new($($arg),*)
        }

        fn create_ok($($arg: $ty),*) -> $dist {
            match make($($arg),*) {
                Ok(d) => d,
                Err(e) => panic!("creation failed with error {:?}", e),
            }
        }

        #[allow(dead_code)]
        fn create_err($($arg: $ty),*) -> $err {
            match make($($arg),*) {
                Err(e) => e,
                Ok(d) => panic!("creation unexpectedly succeeded with {:?}", d),
            }
        }

        #[allow(dead_code)]
        fn test_exact<F, T>($($arg: $ty),*, expected: T, get_fn: F)
        where
            F: Fn($dist) -> T,
            T: ::core::cmp::PartialEq + ::core::fmt::Debug,
        {
            let x = get_fn(create_ok($($arg),*));
            assert_eq!(expected, x);
        }

        #[allow(dead_code)]
        fn test_absolute<F>($($arg: $ty),*, expected: f64, acc: f64, get_fn: F)
        where
            F: Fn($dist) -> f64,
        {
            let x = get_fn(create_ok($($arg),*));
            if expected.is_nan() {
                assert!(x.is_nan(), "expected NaN, got {x}");
            } else {
                $crate::prec::assert_almost_eq(expected, x, acc);
            }
        }
    };
}
