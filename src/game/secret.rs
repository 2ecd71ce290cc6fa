//! Secret number sources
//!
//! A session never touches an RNG directly; it asks its `SecretSource`.
//! Seeded sources make a whole run reproducible from one `u64`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{MAX_GUESS, MIN_GUESS};

/// Supplies the secret for each new session
pub trait SecretSource {
    /// Draw a secret in `MIN_GUESS..=MAX_GUESS`
    fn draw(&mut self) -> u32;
}

/// Uniform secrets from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct SeededSecrets {
    seed: u64,
    rng: Pcg32,
}

impl SeededSecrets {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SecretSource for SeededSecrets {
    fn draw(&mut self) -> u32 {
        self.rng.random_range(MIN_GUESS..=MAX_GUESS)
    }
}

/// Replays a fixed list of secrets, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSecrets {
    secrets: Vec<u32>,
    next: usize,
}

impl ScriptedSecrets {
    /// An empty list draws `MIN_GUESS` every time
    pub fn new(secrets: Vec<u32>) -> Self {
        Self { secrets, next: 0 }
    }

    /// Always draws the same secret
    pub fn fixed(secret: u32) -> Self {
        Self::new(vec![secret])
    }
}

impl SecretSource for ScriptedSecrets {
    fn draw(&mut self) -> u32 {
        let Some(&secret) = self.secrets.get(self.next) else {
            return MIN_GUESS;
        };
        self.next = (self.next + 1) % self.secrets.len();
        secret
    }
}
