//! Arrow conversion utilities for the Parquet I/O boundary.
//!
//! Converts between Arrow `RecordBatch` and the core `Table`.
//! This is feature-gated and only compiled when `--features parquet` is enabled.

use std::sync::Arc;

use arrow_array::builder::{
    BinaryBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int32Builder, Int64Builder,
    StringBuilder,
};
use arrow_array::{
    Array, ArrayRef, BinaryArray, BooleanArray, Float32Array, Float64Array, Int32Array,
    Int64Array, RecordBatch, StringArray,
};
use arrow_schema::{
    DataType as ArrowDataType, Field as ArrowField, Schema as ArrowSchema, SchemaRef,
};

use dataslot_core::schema::{DataType, Field, Schema};
use dataslot_core::types::{Column, Scalar, Table};

use crate::error::{Error, Result};

/// Convert an Arrow RecordBatch to a Table.
///
/// Handles all supported Scalar types and nullable fields.
pub fn record_batch_to_table(batch: &RecordBatch) -> Result<Table> {
    let schema = arrow_to_core_schema(batch.schema().as_ref())?;
    let num_rows = batch.num_rows();

    let mut columns = Vec::with_capacity(schema.fields.len());
    for (col_idx, field) in schema.fields.into_iter().enumerate() {
        let array = batch.column(col_idx);
        let mut values = Vec::with_capacity(num_rows);
        for row_idx in 0..num_rows {
            if array.is_null(row_idx) {
                values.push(Scalar::Null);
            } else {
                values.push(arrow_value_to_scalar(array, row_idx)?);
            }
        }
        columns.push(Column { field, values });
    }

    Ok(Table::new(columns)?)
}

/// Convert a Table to an Arrow RecordBatch using the table's own schema.
pub fn table_to_record_batch(table: &Table) -> Result<RecordBatch> {
    let schema: SchemaRef = Arc::new(core_to_arrow_schema(&table.schema()));
    if table.num_columns() == 0 {
        return Ok(RecordBatch::new_empty(schema));
    }

    let arrays = table
        .columns()
        .iter()
        .map(scalar_column_to_arrow_array)
        .collect::<Result<Vec<ArrayRef>>>()?;

    Ok(RecordBatch::try_new(schema, arrays)?)
}

macro_rules! downcast {
    ($array:expr, $ty:ty) => {
        $array.as_any().downcast_ref::<$ty>().ok_or_else(|| {
            Error::Other(format!("Failed to cast to {}", stringify!($ty)))
        })?
    };
}

/// Convert a single Arrow array value to a Scalar.
fn arrow_value_to_scalar(array: &ArrayRef, row_idx: usize) -> Result<Scalar> {
    let scalar = match array.data_type() {
        ArrowDataType::Boolean => Scalar::Bool(downcast!(array, BooleanArray).value(row_idx)),
        ArrowDataType::Int32 => Scalar::I32(downcast!(array, Int32Array).value(row_idx)),
        ArrowDataType::Int64 => Scalar::I64(downcast!(array, Int64Array).value(row_idx)),
        ArrowDataType::Float32 => Scalar::F32(downcast!(array, Float32Array).value(row_idx)),
        ArrowDataType::Float64 => Scalar::F64(downcast!(array, Float64Array).value(row_idx)),
        ArrowDataType::Utf8 => {
            Scalar::Str(downcast!(array, StringArray).value(row_idx).to_string())
        }
        ArrowDataType::Binary => Scalar::Bin(downcast!(array, BinaryArray).value(row_idx).to_vec()),
        other => {
            return Err(Error::Schema(format!(
                "Unsupported Arrow data type: {:?}",
                other
            )))
        }
    };
    Ok(scalar)
}

fn type_mismatch(column: &Column, val: &Scalar) -> Error {
    Error::Schema(format!(
        "Type mismatch in column '{}': expected {:?}, got {:?}",
        column.name(),
        column.data_type(),
        val
    ))
}

/// Convert a column of Scalar values to an Arrow array.
fn scalar_column_to_arrow_array(column: &Column) -> Result<ArrayRef> {
    let values = &column.values;
    macro_rules! build {
        ($builder:expr, $variant:ident) => {{
            let mut builder = $builder;
            for val in values {
                match val {
                    Scalar::Null => builder.append_null(),
                    Scalar::$variant(v) => builder.append_value(v.clone()),
                    _ => return Err(type_mismatch(column, val)),
                }
            }
            Arc::new(builder.finish()) as ArrayRef
        }};
    }

    let array = match column.data_type() {
        DataType::Boolean => build!(BooleanBuilder::with_capacity(values.len()), Bool),
        DataType::Int32 => build!(Int32Builder::with_capacity(values.len()), I32),
        DataType::Int64 => build!(Int64Builder::with_capacity(values.len()), I64),
        DataType::Float32 => build!(Float32Builder::with_capacity(values.len()), F32),
        DataType::Float64 => build!(Float64Builder::with_capacity(values.len()), F64),
        DataType::Utf8 => build!(StringBuilder::with_capacity(values.len(), 0), Str),
        DataType::Binary => build!(BinaryBuilder::with_capacity(values.len(), 0), Bin),
    };
    Ok(array)
}

/// Convert core DataType to Arrow DataType.
pub fn core_to_arrow_data_type(dtype: DataType) -> ArrowDataType {
    match dtype {
        DataType::Boolean => ArrowDataType::Boolean,
        DataType::Int32 => ArrowDataType::Int32,
        DataType::Int64 => ArrowDataType::Int64,
        DataType::Float32 => ArrowDataType::Float32,
        DataType::Float64 => ArrowDataType::Float64,
        DataType::Utf8 => ArrowDataType::Utf8,
        DataType::Binary => ArrowDataType::Binary,
    }
}

/// Convert Arrow DataType to core DataType; only the types `Scalar` can hold.
pub fn arrow_to_core_data_type(dtype: &ArrowDataType) -> Result<DataType> {
    let dt = match dtype {
        ArrowDataType::Boolean => DataType::Boolean,
        ArrowDataType::Int32 => DataType::Int32,
        ArrowDataType::Int64 => DataType::Int64,
        ArrowDataType::Float32 => DataType::Float32,
        ArrowDataType::Float64 => DataType::Float64,
        ArrowDataType::Utf8 => DataType::Utf8,
        ArrowDataType::Binary => DataType::Binary,
        other => {
            return Err(Error::Schema(format!(
                "Unsupported Arrow data type: {:?}",
                other
            )))
        }
    };
    Ok(dt)
}

/// Convert core Schema to Arrow Schema.
pub fn core_to_arrow_schema(schema: &Schema) -> ArrowSchema {
    let fields: Vec<ArrowField> = schema
        .fields
        .iter()
        .map(|field| {
            ArrowField::new(
                field.name.clone(),
                core_to_arrow_data_type(field.data_type),
                field.nullable,
            )
        })
        .collect();
    ArrowSchema::new(fields)
}

/// Convert Arrow Schema to core Schema.
pub fn arrow_to_core_schema(schema: &ArrowSchema) -> Result<Schema> {
    let fields = schema
        .fields()
        .iter()
        .map(|f| {
            Ok(Field::new(
                f.name().clone(),
                arrow_to_core_data_type(f.data_type())?,
                f.is_nullable(),
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Schema::new(fields))
}

#[cfg(not(feature = "parquet"))]
compile_error!("arrow_convert.rs was compiled without the `parquet` feature; enable `--features parquet` or exclude this module.");
