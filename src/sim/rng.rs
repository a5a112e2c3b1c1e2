//! Random source used for obstacle sizing and spawn jitter

use rand::Rng;

/// Uniform float source
///
/// Every `rand::Rng` is a `RandomSource`; runs use a seeded `Pcg32` so a seed
/// and an input sequence fully determine the outcome.
pub trait RandomSource {
    /// Uniform draw from `[min, max)`; returns `min` when the range is empty
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        min + self.random::<f32>() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform(40.0, 70.0);
            assert!((40.0..70.0).contains(&v) || v == 70.0);
        }
    }

    #[test]
    fn test_empty_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(rng.uniform(5.0, 5.0), 5.0);
    }
}
