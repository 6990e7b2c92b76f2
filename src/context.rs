use crate::config::GeneratorConfig;
use crate::random::Dice;
use rand::Rng;

/// State threaded through every generation step: the run's config and its
/// single random source.
pub struct GenContext<'a, R: Rng + ?Sized> {
    pub config: &'a GeneratorConfig,
    pub dice: Dice<'a, R>,
}

impl<'a, R: Rng + ?Sized> GenContext<'a, R> {
    pub fn new(config: &'a GeneratorConfig, rng: &'a mut R) -> Self {
        Self {
            config,
            dice: Dice::new(rng),
        }
    }
}
