//! Provider configuration.

/// How a pixel coordinate is turned into a cell coordinate.
///
/// A point exactly on a cell edge belongs to the cell to its right/below
/// under `Floor`. Under `Round` the nearest cell boundary wins, so a point
/// past the middle of a cell resolves to the next cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointQuantization {
    #[default]
    Floor,
    Round,
}

impl PointQuantization {
    /// Quantize a cell-relative coordinate (`pixels / cell_size`).
    ///
    /// Negative and non-finite values land on cell 0.
    #[must_use]
    pub fn apply(self, cells: f64) -> usize {
        if !cells.is_finite() || cells <= 0.0 {
            return 0;
        }
        let q = match self {
            Self::Floor => cells.floor(),
            Self::Round => cells.round(),
        };
        if q >= usize::MAX as f64 {
            usize::MAX
        } else {
            q as usize
        }
    }
}

/// Provider configuration options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Pixel to cell quantization for hit-testing.
    pub quantization: PointQuantization,
    /// Element name reported to the automation client.
    pub name: String,
    /// Automation id reported to the automation client.
    pub automation_id: String,
    /// Human-readable provider description.
    pub description: String,
    /// Maximum ranges a single aggregate query may build.
    pub max_batch: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            quantization: PointQuantization::Floor,
            name: "Text Area".to_string(),
            automation_id: "Text Area".to_string(),
            description: "Screen Information Text Area".to_string(),
            max_batch: usize::from(u16::MAX),
        }
    }
}

impl ProviderConfig {
    /// Use a different point quantization policy.
    #[must_use]
    pub fn with_quantization(mut self, quantization: PointQuantization) -> Self {
        self.quantization = quantization;
        self
    }

    /// Cap the number of ranges an aggregate query may build.
    #[must_use]
    pub fn with_max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.quantization, PointQuantization::Floor);
        assert_eq!(config.name, "Text Area");
        assert_eq!(config.max_batch, 65_535);
    }

    #[test]
    fn test_builder_methods() {
        let config = ProviderConfig::default()
            .with_quantization(PointQuantization::Round)
            .with_max_batch(3);
        assert_eq!(config.quantization, PointQuantization::Round);
        assert_eq!(config.max_batch, 3);
    }

    #[test]
    fn test_floor_on_edge() {
        assert_eq!(PointQuantization::Floor.apply(2.0), 2);
        assert_eq!(PointQuantization::Floor.apply(2.99), 2);
    }

    #[test]
    fn test_round_past_middle() {
        assert_eq!(PointQuantization::Round.apply(2.49), 2);
        assert_eq!(PointQuantization::Round.apply(2.5), 3);
    }

    #[test]
    fn test_degenerate_inputs() {
        for q in [PointQuantization::Floor, PointQuantization::Round] {
            assert_eq!(q.apply(-4.0), 0);
            assert_eq!(q.apply(f64::NAN), 0);
            assert_eq!(q.apply(f64::INFINITY), 0);
        }
    }
}
