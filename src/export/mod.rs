//! Attribute export pipeline.
//!
//! - [`type_map`] - attribute kind to channel type, with per-format overrides
//! - [`rename`] - source attribute name to channel name
//! - [`marshal`] - per-kind value conversion into channel rows
//! - [`driver`] - one point cloud to one record set plus diagnostics
//! - [`profile`] - the fixed tables of each output format
//! - [`exporter`] - target dispatch, output paths, handoff to the sink

pub mod diagnostic;
pub mod driver;
pub mod exporter;
pub mod marshal;
pub mod profile;
pub mod rename;
pub mod selection;
pub mod type_map;

pub use diagnostic::Diagnostic;
pub use driver::{export_attributes, export_primitive, AttributeExport};
pub use exporter::{child_output_path, split_extension, ExportRequest, ExportSummary, Exporter, WrittenFile};
pub use marshal::{store_attribute, StoreRaw};
pub use profile::ExportProfile;
pub use rename::RenameTable;
pub use selection::Selection;
pub use type_map::{default_mapping, TypeMap};
