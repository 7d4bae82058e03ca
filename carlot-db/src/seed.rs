use std::path::Path;

use anyhow::{Context, Result};
use carlot_api_types::SaleRecordForm;
use serde::Deserialize;
use tracing::info;

use crate::SalesDb;

/// Row shape of the car sales sample csv.
#[derive(Debug, Deserialize)]
struct CsvSale {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Salesperson")]
    salesperson: String,
    #[serde(rename = "Customer Name")]
    customer_name: String,
    #[serde(rename = "Car Make")]
    car_make: String,
    #[serde(rename = "Car Model")]
    car_model: String,
    #[serde(rename = "Car Year")]
    car_year: i32,
    #[serde(rename = "Sale Price")]
    sale_price: String,
    #[serde(rename = "Commission Rate")]
    commission_rate: f64,
    #[serde(rename = "Commission Earned")]
    commission_earned: f64,
}

impl From<CsvSale> for SaleRecordForm {
    fn from(row: CsvSale) -> Self {
        let CsvSale {
            date,
            salesperson,
            customer_name,
            car_make,
            car_model,
            car_year,
            sale_price,
            commission_rate,
            commission_earned,
        } = row;
        SaleRecordForm {
            date,
            salesperson,
            customer_name,
            car_make,
            car_model,
            car_year,
            sale_price,
            commission_rate,
            commission_earned,
        }
    }
}

impl SalesDb {
    /// Loads the sample dataset into an empty store. A populated table is
    /// left alone so restarts do not duplicate rows.
    pub async fn seed_from_csv(&self, path: &Path) -> Result<u64> {
        let existing = self.sale_count().await?;
        if existing > 0 {
            info!("skipping csv seed, {existing} rows already stored");
            return Ok(0);
        }
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("opening seed csv {}", path.display()))?;
        let mut inserted = 0;
        for row in reader.deserialize() {
            let row: CsvSale = row?;
            self.insert_sale(row.into()).await?;
            inserted += 1;
        }
        info!("seeded {inserted} sale records from {}", path.display());
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,Salesperson,Customer Name,Car Make,Car Model,Car Year,Sale Price,Commission Rate,Commission Earned
2023-03-01,Alice,Pat,Toyota,Corolla,2020,18500,0.1,1850
2023-03-02,Bob,Sam,Honda,Civic,2021,21000.50,0.08,1680.04
2023-03-03,Alice,Kim,Honda,Accord,2019,not listed,0.1,0
";

    fn sample_path(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("carlot-seed-{}-{name}.csv", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[tokio::test]
    async fn seeds_an_empty_store() {
        let db = SalesDb::connect("sqlite::memory:").await.unwrap();
        let path = sample_path("empty");
        let inserted = db.seed_from_csv(&path).await.unwrap();
        assert_eq!(inserted, 3);
        let all = db.all_sales().await.unwrap();
        assert_eq!(all.len(), 3);
        // free-form prices survive ingest untouched
        assert_eq!(all[2].sale_price, "not listed");
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn seed_skips_a_populated_store() {
        let db = SalesDb::connect("sqlite::memory:").await.unwrap();
        let path = sample_path("populated");
        db.seed_from_csv(&path).await.unwrap();
        let inserted = db.seed_from_csv(&path).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(db.sale_count().await.unwrap(), 3);
        std::fs::remove_file(path).ok();
    }
}
