//! Built-in H110 board data.
//!
//! The record contents (board names, CPU support lists, prices, feature
//! strings) are the published vendor data for the four boards this
//! application ships with.

use crate::record::CompatibilityRecord;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_string()).collect()
}

/// The four built-in H110 compatibility records, in display order.
pub(crate) fn h110_records() -> Vec<CompatibilityRecord> {
    vec![
        CompatibilityRecord {
            board: "ASUS H110M-K".to_string(),
            manufacturer: "ASUS".to_string(),
            socket: "LGA1151".to_string(),
            chipset: "H110".to_string(),
            supported_cpus: strings(&[
                "Intel Core i3-6100",
                "Intel Core i5-6400",
                "Intel Core i5-6500",
                "Intel Core i7-6700",
            ]),
            max_ram: "32GB".to_string(),
            ram_slots: 2,
            form_factor: "Micro-ATX".to_string(),
            price: Some("~3500₽".to_string()),
            features: strings(&["USB 3.0", "SATA 6Gb/s", "PCIe 3.0"]),
        },
        CompatibilityRecord {
            board: "MSI H110M PRO-VD".to_string(),
            manufacturer: "MSI".to_string(),
            socket: "LGA1151".to_string(),
            chipset: "H110".to_string(),
            supported_cpus: strings(&[
                "Intel Core i3-6100",
                "Intel Core i5-6400",
                "Intel Core i5-6500",
                "Intel Core i7-6700",
                "Intel Pentium G4400",
            ]),
            max_ram: "32GB".to_string(),
            ram_slots: 2,
            form_factor: "Micro-ATX".to_string(),
            price: Some("~3200₽".to_string()),
            features: strings(&["USB 3.0", "SATA 6Gb/s", "DDR4-2133"]),
        },
        CompatibilityRecord {
            board: "Gigabyte GA-H110M-S2H".to_string(),
            manufacturer: "Gigabyte".to_string(),
            socket: "LGA1151".to_string(),
            chipset: "H110".to_string(),
            supported_cpus: strings(&[
                "Intel Core i3-6100",
                "Intel Core i5-6400",
                "Intel Core i5-6500",
                "Intel Core i7-6700K",
                "Intel Pentium G4500",
            ]),
            max_ram: "32GB".to_string(),
            ram_slots: 2,
            form_factor: "Micro-ATX".to_string(),
            price: Some("~3800₽".to_string()),
            features: strings(&["USB 3.0", "HDMI", "DVI-D", "VGA"]),
        },
        CompatibilityRecord {
            board: "ASRock H110M-DGS".to_string(),
            manufacturer: "ASRock".to_string(),
            socket: "LGA1151".to_string(),
            chipset: "H110".to_string(),
            supported_cpus: strings(&[
                "Intel Core i3-6300",
                "Intel Core i5-6600",
                "Intel Core i7-6700",
                "Intel Celeron G3900",
            ]),
            max_ram: "32GB".to_string(),
            ram_slots: 2,
            form_factor: "Micro-ATX".to_string(),
            price: Some("~2900₽".to_string()),
            features: strings(&["USB 3.0", "SATA 6Gb/s", "Full Spike Protection"]),
        },
    ]
}
