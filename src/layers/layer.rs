use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{PerceptronError, Result},
    init::UniformSource,
    math::vector::ensure_len,
    neuron::unit::Unit,
    train::{LayerTraining, TrainConfig, TrainReport},
};

/// A fixed number of independent units reading the same input.
///
/// Units never share state; the layer only decides which target column each
/// one is trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayerParts")]
pub struct Layer {
    size: usize,
    input_dim: usize,
    units: Vec<Unit>,
}

/// Unchecked wire form of a `Layer`; converted through `check_shape`.
#[derive(Deserialize)]
struct LayerParts {
    size: usize,
    input_dim: usize,
    units: Vec<Unit>,
}

impl TryFrom<LayerParts> for Layer {
    type Error = PerceptronError;

    fn try_from(parts: LayerParts) -> Result<Layer> {
        let layer = Layer {
            size: parts.size,
            input_dim: parts.input_dim,
            units: parts.units,
        };
        layer.check_shape()?;
        Ok(layer)
    }
}

impl Layer {
    /// Builds `size` units, each drawing its weights and then its bias from `rng`.
    pub fn new<S: UniformSource + ?Sized>(size: usize, input_dim: usize, rng: &mut S) -> Layer {
        let units = (0..size).map(|_| Unit::random(input_dim, &mut *rng)).collect();
        Layer { size, input_dim, units }
    }

    /// Same as `new`, seeded from the thread-local generator.
    pub fn random(size: usize, input_dim: usize) -> Layer {
        Layer::new(size, input_dim, &mut rand::thread_rng())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    /// One potential per unit, in construction order.
    pub fn output(&self, input: &[f64]) -> Result<Vec<f64>> {
        ensure_len("layer input", input, self.input_dim)?;
        self.units.iter().map(|unit| unit.output(input)).collect()
    }

    /// Trains the units against columns of `targets`.
    ///
    /// With `LayerTraining::AllColumns`, for each column `i` in order, every
    /// unit is trained once against column `i`. Training is in place, so
    /// every unit sees every column and the last one dominates.
    /// `LayerTraining::ColumnPerUnit` trains unit `i` against column `i` only.
    ///
    /// Returns one report per `Unit::train` call, in call order. Shapes are
    /// validated up front; on error no unit has been modified.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        config: &TrainConfig,
        mode: LayerTraining,
    ) -> Result<Vec<TrainReport>> {
        config.validate()?;
        if targets.len() != inputs.len() {
            return Err(PerceptronError::mismatch("target rows", inputs.len(), targets.len()));
        }
        for input in inputs {
            ensure_len("training row", input, self.input_dim)?;
        }
        for row in targets {
            if row.len() < self.size {
                return Err(PerceptronError::mismatch("target row", self.size, row.len()));
            }
        }

        info!(
            size = self.size,
            rows = inputs.len(),
            ?mode,
            "training layer"
        );

        let mut reports = Vec::new();
        match mode {
            LayerTraining::AllColumns => {
                for i in 0..self.size {
                    let column = target_column(targets, i);
                    for unit in &mut self.units {
                        reports.push(unit.train(inputs, &column, config)?);
                    }
                }
            }
            LayerTraining::ColumnPerUnit => {
                for (i, unit) in self.units.iter_mut().enumerate() {
                    let column = target_column(targets, i);
                    reports.push(unit.train(inputs, &column, config)?);
                }
            }
        }
        Ok(reports)
    }

    /// Serializes the layer to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a layer written by `save_json`. Files whose units disagree
    /// with the recorded shape are rejected.
    pub fn load_json(path: &str) -> std::io::Result<Layer> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    fn check_shape(&self) -> Result<()> {
        if self.units.len() != self.size {
            return Err(PerceptronError::mismatch("layer units", self.size, self.units.len()));
        }
        for unit in &self.units {
            ensure_len("unit weights", unit.weights(), self.input_dim)?;
        }
        Ok(())
    }
}

// Rows are already known to hold at least `index + 1` entries.
fn target_column(targets: &[Vec<f64>], index: usize) -> Vec<f64> {
    targets.iter().map(|row| row[index]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::seeded;

    fn dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let inputs = vec![
            vec![0.2, 1.5],
            vec![2.0, 0.5],
            vec![1.0, 1.0],
            vec![3.0, 2.5],
        ];
        let targets = vec![
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
        ];
        (inputs, targets)
    }

    #[test]
    fn construction_draws_each_unit_in_turn() {
        let layer = Layer::new(3, 2, &mut seeded(5));
        assert_eq!(layer.size(), 3);
        assert_eq!(layer.input_dim(), 2);
        assert_eq!(layer.units().len(), 3);

        let mut rng = seeded(5);
        for unit in layer.units() {
            assert_eq!(unit, &Unit::random(2, &mut rng));
        }
        assert!(layer.unit(3).is_none());
    }

    #[test]
    fn output_has_one_entry_per_unit() {
        let layer = Layer::new(3, 2, &mut seeded(1));
        let out = layer.output(&[0.5, -1.0]).unwrap();
        let expected: Vec<f64> = layer
            .units()
            .iter()
            .map(|u| u.output(&[0.5, -1.0]).unwrap())
            .collect();
        assert_eq!(out, expected);
        assert!(layer.output(&[0.5]).is_err());
    }

    #[test]
    fn all_columns_retrains_every_unit_on_every_column() {
        let (inputs, targets) = dataset();
        let config = TrainConfig::new(5, 0.05, 0.0);
        let mut layer = Layer::new(2, 2, &mut seeded(9));

        let mut expected: Vec<Unit> = layer.units().to_vec();
        let c0: Vec<f64> = targets.iter().map(|r| r[0]).collect();
        let c1: Vec<f64> = targets.iter().map(|r| r[1]).collect();
        for unit in &mut expected {
            unit.train(&inputs, &c0, &config).unwrap();
            unit.train(&inputs, &c1, &config).unwrap();
        }

        let reports = layer
            .train(&inputs, &targets, &config, LayerTraining::AllColumns)
            .unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(layer.units(), expected.as_slice());
    }

    #[test]
    fn column_per_unit_pairs_unit_and_column() {
        let (inputs, targets) = dataset();
        let config = TrainConfig::new(5, 0.05, 0.0);
        let mut layer = Layer::new(2, 2, &mut seeded(9));

        let mut expected: Vec<Unit> = layer.units().to_vec();
        for (i, unit) in expected.iter_mut().enumerate() {
            let column: Vec<f64> = targets.iter().map(|r| r[i]).collect();
            unit.train(&inputs, &column, &config).unwrap();
        }

        let reports = layer
            .train(&inputs, &targets, &config, LayerTraining::ColumnPerUnit)
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(layer.units(), expected.as_slice());
    }

    #[test]
    fn extra_target_columns_are_ignored() {
        let inputs = vec![vec![1.0], vec![2.0]];
        let targets = vec![vec![1.0, 9.0], vec![0.0, 9.0]];
        let mut layer = Layer::new(1, 1, &mut seeded(2));
        assert!(layer
            .train(&inputs, &targets, &TrainConfig::default(), LayerTraining::AllColumns)
            .is_ok());
    }

    #[test]
    fn short_target_rows_fail_before_any_update() {
        let (inputs, mut targets) = dataset();
        targets[3] = vec![1.0];
        let mut layer = Layer::new(2, 2, &mut seeded(4));
        let before = layer.clone();
        let err = layer.train(&inputs, &targets, &TrainConfig::default(), LayerTraining::AllColumns);
        assert_eq!(
            err,
            Err(PerceptronError::DimensionMismatch {
                context: "target row",
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(layer, before);
    }

    #[test]
    fn wrong_input_width_fails_before_any_update() {
        let (mut inputs, targets) = dataset();
        inputs[1].push(0.0);
        let mut layer = Layer::new(2, 2, &mut seeded(4));
        let before = layer.clone();
        assert!(layer
            .train(&inputs, &targets, &TrainConfig::default(), LayerTraining::AllColumns)
            .is_err());
        assert_eq!(layer, before);
    }

    #[test]
    fn load_rejects_inconsistent_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let json = r#"{ "size": 2, "input_dim": 1, "units": [ { "weights": [0.5], "bias": 0.1 } ] }"#;
        std::fs::write(&path, json).unwrap();
        let err = Layer::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch in layer units"), "{err}");
    }

    #[test]
    fn deserializing_rejects_extra_units() {
        // two units recorded for a layer of size 1
        let json = r#"{ "size": 1, "input_dim": 1, "units": [
            { "weights": [0.5], "bias": 0.1 },
            { "weights": [0.2], "bias": 0.3 } ] }"#;
        let err = serde_json::from_str::<Layer>(json).unwrap_err();
        assert!(err.to_string().contains("layer units"), "{err}");
    }

    #[test]
    fn deserializing_rejects_a_unit_of_the_wrong_width() {
        // unit 1 reads two features while the layer takes one
        let json = r#"{ "size": 2, "input_dim": 1, "units": [
            { "weights": [0.5], "bias": 0.1 },
            { "weights": [0.2, 0.4], "bias": 0.3 } ] }"#;
        let err = serde_json::from_str::<Layer>(json).unwrap_err();
        assert!(err.to_string().contains("unit weights"), "{err}");
    }

    #[test]
    fn deserialized_layers_train_like_constructed_ones() {
        let original = Layer::new(2, 2, &mut seeded(6));
        let mut restored: Layer =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        let (inputs, targets) = dataset();
        let config = TrainConfig::new(3, 0.05, 0.0);
        let mut expected = original.clone();
        expected
            .train(&inputs, &targets, &config, LayerTraining::ColumnPerUnit)
            .unwrap();
        restored
            .train(&inputs, &targets, &config, LayerTraining::ColumnPerUnit)
            .unwrap();
        assert_eq!(restored, expected);
    }
}
