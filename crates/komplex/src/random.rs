//! rand impls to generate random values, mostly for testing.
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::Komplex;

/// Both parts of a sampled [`Komplex`] fall in `[-RANDOM_BOUND, RANDOM_BOUND)`.
pub const RANDOM_BOUND: f64 = 1000.0;

impl Distribution<Komplex> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> Komplex
    where
        R: Rng + ?Sized,
    {
        let re = rng.random_range(-RANDOM_BOUND..RANDOM_BOUND);
        let im = rng.random_range(-RANDOM_BOUND..RANDOM_BOUND);

        // bounded parts, so the modulus can't overflow
        Komplex::from_finite_cartesian(re, im)
    }
}

impl Komplex {
    /// Identical to calling [`rand::random::<Komplex>`]. Use [`Komplex::random_from`] to
    /// generate a value from an existing [`rand::Rng`].
    pub fn random() -> Self {
        rand::random()
    }

    /// Identical to calling [`rand::Rng::random<Komplex>`] on an existing source of
    /// [`rand::Rng`].
    pub fn random_from<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        rng.random()
    }
}
