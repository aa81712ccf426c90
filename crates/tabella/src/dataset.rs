//! The tabular data model.
//!
//! [`Dataset`] is an ordered collection of named columns of equal length: a
//! 2D table with a header row. Column order and row order are preserved
//! exactly as constructed; nothing in this crate ever re-sorts them
//! (client-side sorting in the embedded document does not touch the source).
//!
//! Cell values are strings and are treated as trusted, pre-formatted markup:
//! they are spliced into the generated table verbatim, without escaping, so
//! embedders can pass styled fragments through. Do not feed untrusted input
//! into a `Dataset`.
//!
//! # Construction
//!
//! Column-oriented via the builder:
//!
//! ```rust
//! use tabella::Dataset;
//!
//! let dataset = Dataset::builder()
//!     .column("Region", ["North", "South"])
//!     .column("Revenue", ["1,200", "980"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dataset.num_rows(), 2);
//! ```
//!
//! Row-oriented via [`Dataset::from_rows`]:
//!
//! ```rust
//! use tabella::Dataset;
//!
//! let dataset = Dataset::from_rows(
//!     ["Region", "Revenue"],
//!     vec![
//!         vec!["North".to_string(), "1,200".to_string()],
//!         vec!["South".to_string(), "980".to_string()],
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(dataset.num_columns(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// A single named column and its cell values, in row order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<String>,
}

impl Column {
    /// Create a column from a name and its values.
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Column {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The column name (header cell text).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cell values, in row order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values in this column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered, column-major table with a header row.
///
/// Invariant: every column holds the same number of values. All construction
/// paths enforce this and return [`RenderError::DatasetError`] on ragged
/// input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create a dataset with no columns.
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Create a dataset builder for fluent column-oriented construction.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Create a dataset from pre-built columns.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DatasetError`] if the columns differ in length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, RenderError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(RenderError::DatasetError(format!(
                        "column '{}' has {} values, expected {}",
                        column.name(),
                        column.len(),
                        expected
                    )));
                }
            }
        }
        Ok(Dataset { columns })
    }

    /// Create a dataset from a header and row-oriented data.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DatasetError`] if any row's arity differs from
    /// the header's.
    pub fn from_rows(
        names: impl IntoIterator<Item = impl Into<String>>,
        rows: impl IntoIterator<Item = Vec<String>>,
    ) -> Result<Self, RenderError> {
        let mut dataset = Dataset {
            columns: names
                .into_iter()
                .map(|name| Column {
                    name: name.into(),
                    values: Vec::new(),
                })
                .collect(),
        };
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Append one row of cell values, one per column.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DatasetError`] if the row's arity differs from
    /// the number of columns (a dataset with no columns accepts no rows).
    pub fn push_row(
        &mut self,
        row: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), RenderError> {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(RenderError::DatasetError(format!(
                "row has {} values, expected {}",
                row.len(),
                self.columns.len()
            )));
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        Ok(())
    }

    /// The columns, in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names, in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns true if there is nothing to render: no columns, or no rows.
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Iterate over rows in row order; each row is one cell per column, in
    /// column order.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            dataset: self,
            index: 0,
        }
    }
}

/// Iterator over a dataset's rows. See [`Dataset::rows`].
#[derive(Debug)]
pub struct Rows<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.dataset.num_rows() {
            return None;
        }
        let row = self
            .dataset
            .columns
            .iter()
            .map(|column| column.values[self.index].as_str())
            .collect();
        self.index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.num_rows() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

/// Builder for constructing `Dataset` instances column by column.
#[derive(Clone, Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
}

impl DatasetBuilder {
    /// Add a named column with its values.
    pub fn column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.columns.push(Column::new(name, values));
        self
    }

    /// Build the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DatasetError`] if the columns differ in length.
    pub fn build(self) -> Result<Dataset, RenderError> {
        Dataset::from_columns(self.columns)
    }
}
