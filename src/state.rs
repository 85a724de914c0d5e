//! In-memory configuration holder.
//!
//! The configuration is only ever replaced wholesale; readers compare
//! `generation()` to notice a reload.

use crate::models::Configuration;

#[derive(Debug, Default)]
pub struct ConfigState {
    configuration: Configuration,
    generation: u64,
}

impl ConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Number of successful replacements so far (0 = never loaded)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }

    pub fn replace(&mut self, configuration: Configuration) {
        self.configuration = configuration;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_bumps_generation() {
        let mut state = ConfigState::new();
        assert!(!state.is_loaded());
        state.replace(Configuration::new().with_category("Media", vec![]));
        state.replace(Configuration::new());
        assert_eq!(state.generation(), 2);
        assert!(state.configuration().is_empty());
    }
}
