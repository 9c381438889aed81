//! Traits for summary statistics of distributions.

/// The summary statistics every distribution in this crate can report.
/// Each accessor returns `None` where the statistic is undefined for the
/// distribution's parameters.
pub trait Distribution<T: num_traits::Float> {
    /// Returns the mean, if it exists.
    fn mean(&self) -> Option<T> {
        None
    }

    /// Returns the variance, if it exists.
    fn variance(&self) -> Option<T> {
        None
    }

    /// Returns the standard deviation, if it exists.
    fn std_dev(&self) -> Option<T> {
        self.variance().map(|v| v.sqrt())
    }

    /// Returns the entropy, if it exists.
    fn entropy(&self) -> Option<T> {
        None
    }

    /// Returns the skewness, if it exists.
    fn skewness(&self) -> Option<T> {
        None
    }
}

/// The minimum value of a distribution's domain.
pub trait Min<T> {
    fn min(&self) -> T;
}

/// The maximum value of a distribution's domain.
pub trait Max<T> {
    fn max(&self) -> T;
}

/// The median of a distribution.
pub trait Median<T> {
    fn median(&self) -> T;
}

/// The mode of a distribution.
pub trait Mode<T> {
    fn mode(&self) -> T;
}
