//! Eager tabular values: `Scalar` cells, typed `Column`s and the `Table`.
//!
//! A `Table` is always rectangular and every non-null value matches its
//! column's declared `DataType`; both are checked at construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{DataType, Field, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
}

impl Scalar {
    /// Type of a non-null value; `None` for `Null`.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(_) => Some(DataType::Boolean),
            Scalar::I32(_) => Some(DataType::Int32),
            Scalar::I64(_) => Some(DataType::Int64),
            Scalar::F32(_) => Some(DataType::Float32),
            Scalar::F64(_) => Some(DataType::Float64),
            Scalar::Str(_) => Some(DataType::Utf8),
            Scalar::Bin(_) => Some(DataType::Binary),
        }
    }

    /// Numeric view used for plotting. Booleans map to 0/1 and nulls to NaN;
    /// strings and binaries have no numeric view.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Null => Some(f64::NAN),
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::I32(i) => Some(*i as f64),
            Scalar::I64(i) => Some(*i as f64),
            Scalar::F32(f) => Some(*f as f64),
            Scalar::F64(f) => Some(*f),
            Scalar::Str(_) | Scalar::Bin(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub field: Field,
    pub values: Vec<Scalar>,
}

impl Column {
    /// Nullable column of the given type.
    pub fn new(name: impl Into<String>, data_type: DataType, values: Vec<Scalar>) -> Self {
        Self {
            field: Field::new(name, data_type, true),
            values,
        }
    }

    pub fn boolean(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
        Self::new(name, DataType::Boolean, values.into_iter().map(Scalar::Bool).collect())
    }

    pub fn int32(name: impl Into<String>, values: impl IntoIterator<Item = i32>) -> Self {
        Self::new(name, DataType::Int32, values.into_iter().map(Scalar::I32).collect())
    }

    pub fn int64(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(name, DataType::Int64, values.into_iter().map(Scalar::I64).collect())
    }

    pub fn float64(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, DataType::Float64, values.into_iter().map(Scalar::F64).collect())
    }

    pub fn utf8<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            name,
            DataType::Utf8,
            values.into_iter().map(|s| Scalar::Str(s.into())).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.field.name
    }

    pub fn data_type(&self) -> DataType {
        self.field.data_type
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check(&self) -> Result<()> {
        for (row, value) in self.values.iter().enumerate() {
            match value.data_type() {
                None if !self.field.nullable => {
                    return Err(Error::Schema(format!(
                        "null at row {} in non-nullable column '{}'",
                        row, self.field.name
                    )));
                }
                Some(dt) if dt != self.field.data_type => {
                    return Err(Error::Schema(format!(
                        "column '{}' expects {:?}, got {:?} at row {}",
                        self.field.name, self.field.data_type, dt, row
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Eager, fully materialized tabular dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, validating names, lengths and value types.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.name()) {
                return Err(Error::Schema(format!("duplicate column '{}'", col.name())));
            }
            col.check()?;
        }
        if let Some(first) = columns.first() {
            if let Some(bad) = columns.iter().find(|c| c.len() != first.len()) {
                return Err(Error::Schema(format!(
                    "column '{}' has {} rows but '{}' has {}",
                    bad.name(),
                    bad.len(),
                    first.name(),
                    first.len()
                )));
            }
        }
        Ok(Self { columns })
    }

    /// A zero-row table with the given schema.
    pub fn empty(schema: &Schema) -> Self {
        let columns = schema
            .fields
            .iter()
            .map(|field| Column {
                field: field.clone(),
                values: Vec::new(),
            })
            .collect();
        Self { columns }
    }

    pub fn schema(&self) -> Schema {
        Schema::new(self.columns.iter().map(|c| c.field.clone()).collect())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Append the rows of `other`; both tables must share the same schema.
    pub fn append(&mut self, other: Table) -> Result<()> {
        if self.schema() != other.schema() {
            return Err(Error::Schema(format!(
                "cannot append table with columns {:?} to table with columns {:?}",
                other.column_names(),
                self.column_names()
            )));
        }
        for (dst, src) in self.columns.iter_mut().zip(other.columns) {
            dst.values.extend(src.values);
        }
        Ok(())
    }
}
