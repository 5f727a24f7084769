use anyhow::Result;
use palindromic_fuel::app::export::CsvExporter;
use palindromic_fuel::{batch, forward_search, LocalStorage, PalindromeMatch, PriceResults, VolumeKind};
use tempfile::TempDir;

const HEADER: &str =
    "Price per Unit (minor units),Volume,Cost (major units),Volume is Palindrome,Type";

fn found(volume: f64, cost: &str, palindromic: bool, kind: VolumeKind) -> PalindromeMatch {
    PalindromeMatch {
        volume,
        cost_major_units: cost.to_string(),
        volume_is_palindromic: palindromic,
        kind,
    }
}

#[tokio::test]
async fn test_export_single_price() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = CsvExporter::new(LocalStorage::new(temp_dir.path()));

    let results = vec![
        found(25.0, "32.23", false, VolumeKind::Whole),
        found(38.83, "50.05", true, VolumeKind::PalindromicDecimal),
    ];
    exporter.export("results.csv", 128.9, &results).await?;

    let content = std::fs::read_to_string(temp_dir.path().join("results.csv"))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER,
            "128.9,25,32.23,No,whole",
            "128.9,38.83,50.05,Yes,palindromic_decimal",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_export_batch_keeps_price_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = CsvExporter::new(LocalStorage::new(temp_dir.path()));

    let batch_results = vec![
        PriceResults {
            price: 128.9,
            results: vec![found(25.0, "32.23", false, VolumeKind::Whole)],
        },
        PriceResults {
            price: 135.7,
            results: vec![found(20.0, "27.14", false, VolumeKind::Whole)],
        },
    ];
    exporter.export_batch("out/batch.csv", &batch_results).await?;

    let content = std::fs::read_to_string(temp_dir.path().join("out/batch.csv"))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "128.9,25,32.23,No,whole");
    assert_eq!(lines[2], "135.7,20,27.14,No,whole");
    Ok(())
}

#[tokio::test]
async fn test_export_empty_results_writes_header() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = CsvExporter::new(LocalStorage::new(temp_dir.path()));

    exporter.export("empty.csv", 128.9, &[]).await?;

    let content = std::fs::read_to_string(temp_dir.path().join("empty.csv"))?;
    assert_eq!(content.trim_end(), HEADER);
    Ok(())
}

#[tokio::test]
async fn test_export_real_search_round_trips_through_csv_reader() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = CsvExporter::new(LocalStorage::new(temp_dir.path()));

    let searched = batch(&[128.9, 135.7], 50);
    exporter.export_batch("batch.csv", &searched).await?;

    let mut reader = csv::Reader::from_path(temp_dir.path().join("batch.csv"))?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    let expected_rows = forward_search(128.9, 50).len() + forward_search(135.7, 50).len();
    assert_eq!(rows.len(), expected_rows);
    assert_eq!(&rows[0][0], "128.9");
    assert_eq!(&rows[0][2], "32.23");
    assert_eq!(&rows[rows.len() - 1][0], "135.7");
    Ok(())
}
