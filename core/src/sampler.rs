use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Picks random subsets without replacement.
pub trait Sampler {
    /// Returns `amount` distinct indices into a pool of `len` elements, or `None` when the pool is too small.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>>;

    /// Moves `amount` distinct elements out of `pool`, in unspecified order.
    fn sample<T>(&mut self, pool: Vec<T>, amount: usize) -> Option<Vec<T>> {
        let mut indices = self.sample_indices(pool.len(), amount)?;
        indices.sort_unstable();

        let mut picked = Vec::with_capacity(amount);
        let mut wanted = indices.into_iter().peekable();
        for (i, item) in pool.into_iter().enumerate() {
            if wanted.next_if_eq(&i).is_some() {
                picked.push(item);
            }
        }
        Some(picked)
    }
}

/// Uniform sampler over a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > len {
            log::warn!("cannot sample {} out of {} elements", amount, len);
            return None;
        }
        Some(rand::seq::index::sample(&mut self.rng, len, amount).into_vec())
    }
}
