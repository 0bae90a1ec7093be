//! Plotly chart documents from a `Table` (enabled with `--features plotly`).
//!
//! Each column becomes a scatter trace over the row index. The layout is
//! fixed. The table is only borrowed; nothing is written back into it.

use dataslot_core::schema::DataType;
use dataslot_core::types::{Column, Scalar, Table};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CHART_TITLE: &str = "Simulation Results";
pub const X_AXIS_TITLE: &str = "time";
pub const TRACE_KIND: &str = "scatter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted series. Field order matches the serialized Plotly shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: Vec<usize>,
    pub y: TraceValues,
    pub name: String,
}

/// Plotted values. Integer and boolean columns without nulls stay integral;
/// everything else is widened to floats, with nulls as NaN (JSON `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl TraceValues {
    pub fn len(&self) -> usize {
        match self {
            TraceValues::Int(v) => v.len(),
            TraceValues::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            xaxis: Axis {
                title: X_AXIS_TITLE.to_string(),
            },
        }
    }
}

/// Coordinate-format vector: only non-zero entries are stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseArray {
    len: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseArray {
    pub fn from_dense(dense: &[f64]) -> Self {
        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, v)| (i, *v))
            .unzip();
        Self {
            len: dense.len(),
            indices,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        match self.indices.binary_search(&index) {
            Ok(pos) => Some(self.values[pos]),
            Err(_) => Some(0.0),
        }
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.len];
        for (&i, &v) in self.indices.iter().zip(&self.values) {
            dense[i] = v;
        }
        dense
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    Dense(Vec<f64>),
    Sparse(SparseArray),
}

impl NumericArray {
    pub fn len(&self) -> usize {
        match self {
            NumericArray::Dense(v) => v.len(),
            NumericArray::Sparse(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_dense(&self) -> Vec<f64> {
        match self {
            NumericArray::Dense(v) => v.clone(),
            NumericArray::Sparse(s) => s.to_dense(),
        }
    }
}

fn column_values(column: &Column) -> Result<Vec<f64>> {
    if !column.data_type().is_numeric() {
        return Err(Error::Schema(format!(
            "column '{}' of type {:?} is not numeric",
            column.name(),
            column.data_type()
        )));
    }
    Ok(column
        .values
        .iter()
        .map(|v| v.as_f64().unwrap_or(f64::NAN))
        .collect())
}

/// Exact integer values, if the column is integral (or boolean) with no nulls.
fn integer_values(column: &Column) -> Option<Vec<i64>> {
    if !matches!(
        column.data_type(),
        DataType::Boolean | DataType::Int32 | DataType::Int64
    ) {
        return None;
    }
    column
        .values
        .iter()
        .map(|v| match v {
            Scalar::Bool(b) => Some(i64::from(*b)),
            Scalar::I32(i) => Some(i64::from(*i)),
            Scalar::I64(i) => Some(*i),
            _ => None,
        })
        .collect()
}

/// Map each column name to its values as a numeric array, in column order.
pub fn table_to_arrays(table: &Table, sparse: bool) -> Result<IndexMap<String, NumericArray>> {
    table
        .columns()
        .iter()
        .map(|column| {
            let dense = column_values(column)?;
            let array = if sparse {
                NumericArray::Sparse(SparseArray::from_dense(&dense))
            } else {
                NumericArray::Dense(dense)
            };
            Ok((column.name().to_string(), array))
        })
        .collect()
}

/// Build the Plotly figure document for `table`.
pub fn to_plotly_json(table: &Table) -> Result<ChartDocument> {
    let data = table_to_arrays(table, true)?
        .into_iter()
        .zip(table.columns())
        .map(|((name, array), column)| {
            let y = match integer_values(column) {
                Some(ints) => TraceValues::Int(ints),
                None => TraceValues::Float(array.to_dense()),
            };
            Trace {
                kind: TRACE_KIND.to_string(),
                x: (0..array.len()).collect(),
                y,
                name,
            }
        })
        .collect();

    Ok(ChartDocument {
        data,
        layout: Layout::default(),
    })
}
