//! Box inventory: folds `box list` records into [`VagrantBox`] entries.

use serde::Serialize;

use crate::domain::record::ProtocolRecord;

/// One locally cached box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VagrantBox {
    pub name: String,
    pub provider: String,
    pub version: String,
}

/// Record kinds the inventory fold understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxField {
    Name,
    Provider,
    Version,
}

impl BoxField {
    fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "box-name" => Some(Self::Name),
            "box-provider" => Some(Self::Provider),
            "box-version" => Some(Self::Version),
            _ => None,
        }
    }
}

/// Fold records into boxes, in input order.
///
/// A `box-name` record closes the box in progress and opens a new one.
/// Provider and version records before the first name are dropped.
#[must_use]
pub fn aggregate_boxes(records: &[ProtocolRecord]) -> Vec<VagrantBox> {
    let mut boxes = Vec::new();
    let mut current: Option<VagrantBox> = None;

    for record in records {
        let Some(field) = BoxField::from_kind(&record.kind) else {
            continue;
        };
        let value = record.first().to_string();
        match field {
            BoxField::Name => {
                if let Some(done) = current.take().filter(|b| !b.name.is_empty()) {
                    boxes.push(done);
                }
                current = Some(VagrantBox {
                    name: value,
                    ..VagrantBox::default()
                });
            }
            BoxField::Provider => {
                if let Some(b) = current.as_mut() {
                    b.provider = value;
                }
            }
            BoxField::Version => {
                if let Some(b) = current.as_mut() {
                    b.version = value;
                }
            }
        }
    }

    if let Some(last) = current.filter(|b| !b.name.is_empty()) {
        boxes.push(last);
    }
    boxes
}
