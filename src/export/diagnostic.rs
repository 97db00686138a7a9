//! Non-fatal per-attribute export findings.

use std::fmt;

use crate::host::DataKind;

/// Why an attribute did not make it into the record set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The attribute's kind has no channel mapping.
    UnsupportedDataKind { attribute: String, kind: DataKind },
    /// A selection list was given and did not name the attribute.
    NotSelected { attribute: String },
    /// The renamed channel already exists in the record set.
    ChannelCollision { attribute: String, channel: String },
    /// Values could not be read into the allocated channel.
    MarshalFailed { attribute: String, reason: String },
}

impl Diagnostic {
    /// Source attribute the finding is about.
    pub fn attribute(&self) -> &str {
        match self {
            Self::UnsupportedDataKind { attribute, .. }
            | Self::NotSelected { attribute }
            | Self::ChannelCollision { attribute, .. }
            | Self::MarshalFailed { attribute, .. } => attribute,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDataKind { attribute, kind } => {
                write!(f, "Skipping attribute \"{attribute}\" due to unsupported data type: {kind}")
            }
            Self::NotSelected { attribute } => {
                write!(f, "Skipping attribute \"{attribute}\" because it was not selected for export")
            }
            Self::ChannelCollision { attribute, channel } => write!(
                f,
                "Skipping attribute \"{attribute}\" because channel \"{channel}\" already exists"
            ),
            Self::MarshalFailed { attribute, reason } => {
                write!(f, "Skipping attribute \"{attribute}\": {reason}")
            }
        }
    }
}
