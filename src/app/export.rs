use crate::core::{PalindromeMatch, PriceResults, Storage};
use crate::utils::error::{FuelError, Result};

pub const CSV_HEADER: [&str; 5] = [
    "Price per Unit (minor units)",
    "Volume",
    "Cost (major units)",
    "Volume is Palindrome",
    "Type",
];

/// Writes result sets as CSV through a [`Storage`] backend.
pub struct CsvExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> CsvExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn export(&self, path: &str, price: f64, results: &[PalindromeMatch]) -> Result<()> {
        let data = to_csv_bytes(std::iter::once((price, results)))?;
        self.storage.write_file(path, &data).await?;
        tracing::info!(path, rows = results.len(), "exported CSV");
        Ok(())
    }

    /// All prices go into one file, in batch order.
    pub async fn export_batch(&self, path: &str, batch: &[PriceResults]) -> Result<()> {
        let data = to_csv_bytes(
            batch
                .iter()
                .map(|entry| (entry.price, entry.results.as_slice())),
        )?;
        self.storage.write_file(path, &data).await?;
        tracing::info!(
            path,
            prices = batch.len(),
            rows = batch.iter().map(|entry| entry.results.len()).sum::<usize>(),
            "exported batch CSV"
        );
        Ok(())
    }
}

pub fn csv_row(price: f64, found: &PalindromeMatch) -> [String; 5] {
    [
        format!("{:.1}", price),
        found.formatted_volume(),
        found.cost_major_units.clone(),
        if found.volume_is_palindromic { "Yes" } else { "No" }.to_string(),
        found.kind.as_str().to_string(),
    ]
}

/// Header plus one row per match. The header is written even with no matches.
pub fn to_csv_bytes<'a, I>(groups: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (f64, &'a [PalindromeMatch])>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (price, results) in groups {
        for found in results {
            writer.write_record(csv_row(price, found))?;
        }
    }

    writer.into_inner().map_err(|e| FuelError::IoError(e.into_error()))
}
