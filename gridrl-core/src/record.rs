//! Types and traits for recording training metrics.
//!
//! The [`Trainer`](crate::Trainer) produces one [`Record`] per episode and
//! hands it to a [`Recorder`], which decides where the data ends up:
//!
//! * [`CsvRecorder`] - writes scalar values as CSV rows, one per record
//! * [`BufferedRecorder`] - keeps records in memory, used in tests
//! * [`NullRecorder`] - discards all records
//!
//! ```rust
//! use gridrl_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("episode", RecordValue::Scalar(1.0));
//! record.insert("inv_moves", RecordValue::Scalar(0.25));
//! ```
mod base;
mod buffered_recorder;
mod csv_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use csv_recorder::CsvRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
