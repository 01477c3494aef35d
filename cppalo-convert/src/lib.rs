//! Check Point object export conversion to Palo Alto set commands.
//!
//! This library turns address, network, and service objects exported from
//! Check Point SmartConsole (tabular CSV form) into PAN-OS `set`
//! configuration statements. Rows the converter cannot safely normalize
//! are diverted to per-category review files rather than guessed at.
//!
//! # Architecture
//!
//! The conversion is a one-way batch pipeline over an in-memory table:
//!
//! - [`classify`] — Partition raw rows into host, network, and service
//!   subsets by field presence
//! - [`masks`] — Dotted-decimal subnet mask to CIDR suffix translation
//! - [`convert`] — Per-category normalization and directive emission
//! - [`channels`] — Accepted-output and review file routing
//! - [`inspect`] — Classification census over a single export table
//! - [`summary`] — Post-conversion summary statistics
//! - [`report`] — Terminal-friendly colored rendering
//!
//! # Workflow
//!
//! 1. **Parse** each export into an immutable table (`csv-table-core`)
//! 2. **Classify** rows into disjoint object subsets
//! 3. **Convert** each subset, diverting unsafe rows for review
//! 4. **Write** one accepted file and one review file per category
//! 5. **Summarize** what was converted and what needs a human
//!
//! # Built on csv-table-core
//!
//! This library uses `csv-table-core` for generic CSV parsing and
//! column-addressable row access. All firewall-specific logic is
//! contained in this crate.

pub mod channels;
pub mod classify;
pub mod convert;
pub mod inspect;
pub mod masks;
pub mod report;
pub mod summary;
