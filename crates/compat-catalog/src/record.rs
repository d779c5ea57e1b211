//! Compatibility record type and row identity.

use serde::{Deserialize, Serialize};

/// One motherboard's descriptive and compatibility data.
///
/// Records are immutable after catalog construction. All descriptive
/// fields are display strings with no semantic validation; the catalog
/// only enforces the structural invariants (unique board name, non-empty
/// CPU list, at least one RAM slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    /// Board display name, unique within the catalog (rendering key).
    pub board: String,
    /// Manufacturer name (ASUS, MSI, Gigabyte, ASRock, ...).
    pub manufacturer: String,
    /// CPU socket, e.g. "LGA1151".
    pub socket: String,
    /// Chipset name, e.g. "H110".
    pub chipset: String,
    /// Supported CPU models, in the vendor's listed order. Never empty.
    pub supported_cpus: Vec<String>,
    /// Maximum supported RAM, e.g. "32GB".
    pub max_ram: String,
    /// Number of RAM slots. Always >= 1.
    pub ram_slots: u8,
    /// Form factor, e.g. "Micro-ATX".
    pub form_factor: String,
    /// Approximate price as a display string, if known.
    pub price: Option<String>,
    /// Notable board features. May be empty.
    pub features: Vec<String>,
}

/// Identity of a catalog row.
///
/// Assigned by the catalog in record order at construction time, so two
/// distinct rows can never share an id. Used as the expand/collapse key
/// instead of comparing board-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub(crate) usize);

impl BoardId {
    /// Index of this row in catalog order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_json() {
        let json = r#"{
            "board": "ASUS H110M-K",
            "manufacturer": "ASUS",
            "socket": "LGA1151",
            "chipset": "H110",
            "supported_cpus": ["Intel Core i3-6100"],
            "max_ram": "32GB",
            "ram_slots": 2,
            "form_factor": "Micro-ATX",
            "price": null,
            "features": []
        }"#;
        let record: CompatibilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.board, "ASUS H110M-K");
        assert_eq!(record.price, None);
        assert!(record.features.is_empty());
    }
}
