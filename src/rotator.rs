use crate::config::Config;
use crate::strategy::Strategy;

/// Rotates slices with a strategy chosen once, typically from [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotator {
    strategy: Strategy,
}

impl Rotator {
    pub fn new(config: &Config) -> Self {
        Self {
            strategy: config.strategy,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Rotates `s` right by `rot` in place.
    pub fn rotate<T>(&self, s: &mut [T], rot: i64)
    where
        T: Clone,
    {
        self.strategy.rotate(s, rot);
    }

    /// Rotates `s` left by `rot` in place.
    pub fn rotate_left<T>(&self, s: &mut [T], rot: i64)
    where
        T: Clone,
    {
        match rot.checked_neg() {
            Some(neg) => self.strategy.rotate(s, neg),
            // -i64::MIN does not fit, split it into i64::MAX and one more
            None => {
                self.strategy.rotate(s, i64::MAX);
                self.strategy.rotate(s, 1);
            }
        }
    }
}

impl From<Strategy> for Rotator {
    fn from(strategy: Strategy) -> Self {
        Self { strategy }
    }
}
