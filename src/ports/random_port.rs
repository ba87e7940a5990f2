//! Random number source port trait.
//!
//! Every stochastic draw in the engine and news impacts goes through this
//! trait so tests can pin the draws.

pub trait RandomPort {
    /// Uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn uniform_between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_uniform() * (hi - lo)
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_uniform() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<R: RandomPort + ?Sized> RandomPort for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomPort + ?Sized> RandomPort for Box<R> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
