// Small demo: trains one layer on two clusters and logs what it learned.
// Pass a ModelConfig JSON path as the first argument to override defaults:
//   cargo run -- model.json
// RUST_LOG=ferrite_perceptron=debug shows per-row training detail.
use ferrite_perceptron::{accuracy, ModelConfig, Unit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ferrite_perceptron=info".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ModelConfig::load_json(&path)?,
        None => ModelConfig::default(),
    };
    tracing::info!(name = %config.name, size = config.size, input_dim = config.input_dim, "loaded config");

    let (inputs, labels) = clusters(config.input_dim);

    // A single unit started from zero on the same data, as a baseline.
    let mut unit = Unit::zeros(config.input_dim);
    let report = unit.train(&inputs, &labels, &config.training)?;
    tracing::info!(
        accuracy = accuracy(&unit, &inputs, &labels, 0.5)?,
        mean_abs_error = report.mean_abs_error(),
        bias = unit.bias(),
        "zero-initialized unit"
    );

    // Column 0 is the cluster label, column k the complementary label.
    let targets: Vec<Vec<f64>> = labels
        .iter()
        .map(|&l| (0..config.size).map(|k| if k % 2 == 0 { l } else { 1.0 - l }).collect())
        .collect();

    let mut layer = config.build_layer();
    let reports = layer.train(&inputs, &targets, &config.training, config.mode)?;
    let updates: usize = reports.iter().map(|r| r.total_updates()).sum();
    tracing::info!(calls = reports.len(), updates, "layer trained");

    for i in 0..layer.size() {
        let Some(unit) = layer.unit(i) else { break };
        let column: Vec<f64> = targets.iter().map(|row| row[i]).collect();
        tracing::info!(
            unit = i,
            accuracy = accuracy(unit, &inputs, &column, 0.5)?,
            weights = ?unit.weights(),
            bias = unit.bias(),
            "unit result"
        );
    }

    let out_path = format!("{}.json", config.name);
    layer.save_json(&out_path)?;
    tracing::info!(path = %out_path, "saved layer");
    Ok(())
}

/// Far cluster labelled 1 followed by a cluster at the origin labelled 0.
fn clusters(dim: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut inputs = Vec::new();
    let mut labels = Vec::new();
    for (offset, label) in [(8.0, 1.0), (0.0, 0.0)] {
        for k in 0..9 {
            let row = (0..dim).map(|d| offset + 0.1 * ((k + d) % 3) as f64).collect();
            inputs.push(row);
            labels.push(label);
        }
    }
    (inputs, labels)
}
