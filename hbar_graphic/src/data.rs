// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV loading into a validated [`Dataset`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hbar_charts::{Dataset, Record, parse_percent};

use crate::config::GraphicConfig;
use crate::error::{GraphicError, Result};

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    label: usize,
    value: usize,
    bounds: Option<(usize, usize)>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord, config: &GraphicConfig) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| GraphicError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let label = find(&config.label_column)?;
        let value = find(&config.value_column)?;
        let bounds = if config.variant.needs_bounds() {
            Some((find(&config.lower_column)?, find(&config.upper_column)?))
        } else {
            None
        };
        Ok(Self {
            label,
            value,
            bounds,
        })
    }
}

/// Reads CSV rows into a dataset, validating every value before any layout sees it.
///
/// Interval rows are reordered so the first row stays on top and the rest are sorted by
/// descending value. Bound cells may both be empty (the row has no interval); otherwise
/// both must parse and satisfy `lower <= value <= upper`.
///
/// # Errors
/// - [`GraphicError::Csv`] for malformed CSV.
/// - [`GraphicError::MissingColumn`] when a configured header is absent.
/// - [`GraphicError::DataFormat`] for non-numeric values or out-of-order bounds.
pub fn load_dataset<R: Read>(reader: R, config: &GraphicConfig) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let columns = Columns::resolve(rdr.headers()?, config)?;

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let row_number = index + 1;
        let row = row?;
        let cell = |i: usize| row.get(i).unwrap_or("");
        let percent = |i: usize, column: &str| {
            parse_percent(cell(i)).ok_or_else(|| GraphicError::DataFormat {
                row: row_number,
                column: column.to_string(),
                value: cell(i).to_string(),
            })
        };

        let value = percent(columns.value, &config.value_column)?;
        let mut record = Record::new(cell(columns.label).trim(), value);

        if let Some((lo, hi)) = columns.bounds
            && !(cell(lo).trim().is_empty() && cell(hi).trim().is_empty())
        {
            let lower = percent(lo, &config.lower_column)?;
            let upper = percent(hi, &config.upper_column)?;
            if lower > value {
                return Err(GraphicError::DataFormat {
                    row: row_number,
                    column: config.lower_column.clone(),
                    value: cell(lo).to_string(),
                });
            }
            if upper < value {
                return Err(GraphicError::DataFormat {
                    row: row_number,
                    column: config.upper_column.clone(),
                    value: cell(hi).to_string(),
                });
            }
            record = record.with_bounds(lower, upper);
        }
        records.push(record);
    }

    let dataset = Dataset::new(records);
    Ok(if config.variant.needs_bounds() {
        dataset.with_reference_first()
    } else {
        dataset
    })
}

/// Opens `path` and loads it with [`load_dataset`].
///
/// # Errors
/// Returns [`GraphicError::DataLoad`] if the file cannot be opened, plus every error
/// [`load_dataset`] can return.
pub fn load_dataset_path(path: &Path, config: &GraphicConfig) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| GraphicError::DataLoad {
        path: path.to_path_buf(),
        source,
    })?;
    load_dataset(file, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Variant;

    fn interval_config() -> GraphicConfig {
        GraphicConfig {
            variant: Variant::Interval,
            ..GraphicConfig::default()
        }
    }

    fn labels(data: &Dataset) -> Vec<&str> {
        data.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn bar_rows_keep_file_order() {
        let csv = "state,pct\nAlabama,-5%\nAlaska, 10.5% \nArizona,3\n";
        let data = load_dataset(csv.as_bytes(), &GraphicConfig::default()).unwrap();
        assert_eq!(labels(&data), ["Alabama", "Alaska", "Arizona"]);
        let values: Vec<f64> = data.iter().map(|r| r.value).collect();
        assert_eq!(values, [-5.0, 10.5, 3.0]);
        assert!(data.iter().all(|r| r.bounds().is_none()));
    }

    #[test]
    fn extra_columns_and_header_padding_are_ignored() {
        let csv = "fips, state , pct ,note\n01,Alabama,4%,x\n";
        let data = load_dataset(csv.as_bytes(), &GraphicConfig::default()).unwrap();
        assert_eq!(labels(&data), ["Alabama"]);
        assert_eq!(data.records()[0].value, 4.0);
    }

    #[test]
    fn interval_rows_put_reference_first_then_descending() {
        let csv = "state,pct,pct_lower,pct_upper\n\
                   United States,8%,7.9%,8.1%\n\
                   Texas,5%,4%,6%\n\
                   Alaska,9%,8%,10%\n\
                   Maine,1%,0.5%,1.5%\n";
        let data = load_dataset(csv.as_bytes(), &interval_config()).unwrap();
        assert_eq!(labels(&data), ["United States", "Alaska", "Texas", "Maine"]);
        assert_eq!(data.records()[1].bounds(), Some((8.0, 10.0)));
    }

    #[test]
    fn empty_bounds_mean_no_interval() {
        let csv = "state,pct,pct_lower,pct_upper\nUS,8%,,\n";
        let data = load_dataset(csv.as_bytes(), &interval_config()).unwrap();
        assert_eq!(data.records()[0].bounds(), None);
    }

    #[test]
    fn missing_column_is_named() {
        let csv = "state,percent\nAlabama,4%\n";
        let err = load_dataset(csv.as_bytes(), &GraphicConfig::default()).unwrap_err();
        assert!(matches!(err, GraphicError::MissingColumn { column } if column == "pct"));

        let csv = "state,pct,pct_lower\nUS,8%,7%\n";
        let err = load_dataset(csv.as_bytes(), &interval_config()).unwrap_err();
        assert!(matches!(err, GraphicError::MissingColumn { column } if column == "pct_upper"));
    }

    #[test]
    fn malformed_percent_reports_row_and_column() {
        let csv = "state,pct\nAlabama,4%\nAlaska,n/a\n";
        let err = load_dataset(csv.as_bytes(), &GraphicConfig::default()).unwrap_err();
        match err {
            GraphicError::DataFormat { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "pct");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn one_sided_or_inverted_bounds_are_rejected() {
        let csv = "state,pct,pct_lower,pct_upper\nUS,8%,7%,\n";
        let err = load_dataset(csv.as_bytes(), &interval_config()).unwrap_err();
        assert!(matches!(err, GraphicError::DataFormat { column, .. } if column == "pct_upper"));

        let csv = "state,pct,pct_lower,pct_upper\nUS,8%,9%,10%\n";
        let err = load_dataset(csv.as_bytes(), &interval_config()).unwrap_err();
        assert!(matches!(err, GraphicError::DataFormat { column, .. } if column == "pct_lower"));

        let csv = "state,pct,pct_lower,pct_upper\nUS,8%,7%,7.5%\n";
        let err = load_dataset(csv.as_bytes(), &interval_config()).unwrap_err();
        assert!(matches!(err, GraphicError::DataFormat { column, .. } if column == "pct_upper"));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let csv = "state,pct\nAlabama,4%,extra\n";
        let err = load_dataset(csv.as_bytes(), &GraphicConfig::default()).unwrap_err();
        assert!(matches!(err, GraphicError::Csv(_)));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_dataset_path(Path::new("/nonexistent/data.csv"), &GraphicConfig::default())
            .unwrap_err();
        assert!(matches!(err, GraphicError::DataLoad { .. }));
    }
}
