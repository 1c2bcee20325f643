//! Tunable generation parameters

use crate::GenerationError;

/// Range from which the carver's start cell is drawn, per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartRange {
    /// `[1, dim-3]`, so every stride-2 step from the start stays off the
    /// border. On a 3-cell axis the range collapses to `1`.
    #[default]
    Inset,
    /// `[0, dim-2)` shifted by one onto the interior, covering `[1, dim-2]`
    FullInterior,
}

impl StartRange {
    /// Draw one start coordinate on an axis of length `dim`
    pub(crate) fn draw(self, random: &mut impl crate::RandomStream, dim: usize) -> usize {
        match self {
            StartRange::Inset => random.next_in_range(1, (dim - 2).max(2)),
            StartRange::FullInterior => 1 + random.next_in_range(0, dim - 2),
        }
    }
}

/// Parameters of [crate::MazeGenerator]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Where the carver may start
    pub start_range: StartRange,
    /// Extra openings punched after carving are `width / perturbation_divisor`
    pub perturbation_divisor: usize,
}

impl GeneratorConfig {
    pub const DEFAULT_PERTURBATION_DIVISOR: usize = 2;

    pub fn with_start_range(mut self, start_range: StartRange) -> Self {
        self.start_range = start_range;
        self
    }

    pub fn with_perturbation_divisor(mut self, divisor: usize) -> Self {
        self.perturbation_divisor = divisor;
        self
    }

    /// Number of extra openings for a maze of given width
    pub fn extra_openings(&self, width: usize) -> usize {
        width / self.perturbation_divisor
    }

    pub(crate) fn validate(&self) -> Result<(), GenerationError> {
        if self.perturbation_divisor == 0 {
            return Err(GenerationError::InvalidConfig(
                "perturbation divisor must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_range: StartRange::default(),
            perturbation_divisor: Self::DEFAULT_PERTURBATION_DIVISOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{GeneratorConfig, StartRange},
        random::tests::ScriptedStream,
        GenerationError,
    };

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.start_range, StartRange::Inset);
        assert_eq!(config.perturbation_divisor, 2);
        assert_eq!(config.extra_openings(11), 5);
        assert_eq!(config.with_perturbation_divisor(3).extra_openings(11), 3);
    }

    #[test]
    fn zero_divisor_is_rejected() {
        let config = GeneratorConfig::default().with_perturbation_divisor(0);
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inset_range_bounds() {
        let mut random = ScriptedStream::new(vec![0, 6]);
        assert_eq!(StartRange::Inset.draw(&mut random, 10), 1);
        assert_eq!(StartRange::Inset.draw(&mut random, 10), 7);
        assert_eq!(random.requests, vec![(1, 8), (1, 8)]);
    }

    #[test]
    fn inset_range_on_narrowest_axis() {
        let mut random = ScriptedStream::new(vec![5]);
        assert_eq!(StartRange::Inset.draw(&mut random, 3), 1);
        assert_eq!(StartRange::Inset.draw(&mut random, 4), 1);
    }

    #[test]
    fn full_interior_range_bounds() {
        let mut random = ScriptedStream::new(vec![0, 7]);
        assert_eq!(StartRange::FullInterior.draw(&mut random, 10), 1);
        assert_eq!(StartRange::FullInterior.draw(&mut random, 10), 8);
        assert_eq!(random.requests, vec![(0, 8), (0, 8)]);
    }
}
