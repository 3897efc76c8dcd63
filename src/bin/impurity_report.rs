use csv::ReaderBuilder;
use rusty_trees::data::dataset::CategoricalDataset;
use rusty_trees::trees::classifier::DecisionTreeClassifier;
use rusty_trees::trees::impurity::category_weights;
use std::env;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads a headed CSV whose last column is the target. Every cell is kept as a
/// string category.
fn read_file_categorical(
    file_path: &str,
) -> Result<(Vec<String>, CategoricalDataset<String, String>), Box<dyn Error>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(file_path)?;

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err("Expected at least one feature column and a target column".into());
    }
    let dimension = headers.len() - 1;
    let names = headers
        .iter()
        .take(dimension)
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut columns = vec![Vec::new(); dimension];
    let mut labels = Vec::new();

    for result in reader.records() {
        let record = result?;

        for (column, feature) in columns.iter_mut().zip(record.iter().take(dimension)) {
            column.push(feature.to_string());
        }

        let label = record.get(dimension).ok_or("Missing label")?;
        labels.push(label.to_string());
    }

    let dataset = CategoricalDataset::from_columns(&columns, labels)?;
    Ok((names, dataset))
}

fn demo_dataset() -> Result<(Vec<String>, CategoricalDataset<String, String>), Box<dyn Error>> {
    fn to_strings(values: &[u8]) -> Vec<String> {
        values.iter().map(u8::to_string).collect()
    }

    let columns = vec![
        to_strings(&[1, 1, 1, 1, 2, 2, 2, 2]),
        to_strings(&[1, 1, 1, 0, 1, 0, 0, 0]),
    ];
    let labels = to_strings(&[1, 1, 0, 0, 1, 0, 0, 1]);

    let dataset = CategoricalDataset::from_columns(&columns, labels)?;
    Ok((vec!["a".to_string(), "b".to_string()], dataset))
}

fn report(
    names: &[String],
    dataset: &CategoricalDataset<String, String>,
) -> Result<String, Box<dyn Error>> {
    let classifier = DecisionTreeClassifier::with_params(Some("gini"), None, None, None)?;
    let scores = classifier.feature_impurities(dataset)?;

    let mut lines = Vec::with_capacity(names.len());
    for (index, (name, score)) in names.iter().zip(scores.iter()).enumerate() {
        let column = dataset
            .column(index)
            .ok_or_else(|| format!("Missing feature column {index}"))?;
        let categories = category_weights(&column).len();
        lines.push(format!("{name}\t{categories}\t{score:.6}"));
    }
    Ok(lines.join("\n"))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (names, dataset) = match env::args().nth(1) {
        Some(path) => {
            let loaded = read_file_categorical(&path)?;
            info!("Loaded dataset from {path}");
            loaded
        }
        None => {
            info!("No dataset given, scoring the built-in table");
            demo_dataset()?
        }
    };
    info!(
        samples = dataset.nrows(),
        features = dataset.ncols(),
        classes = category_weights(dataset.target()).len(),
        "scoring features"
    );

    println!("{}", report(&names, &dataset)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_demo_dataset() {
        let (names, dataset) = demo_dataset().unwrap();
        let output = report(&names, &dataset).unwrap();
        assert_eq!(output, "a\t2\t0.500000\nb\t2\t0.375000");
    }
}
