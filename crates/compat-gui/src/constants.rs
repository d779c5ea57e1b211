//! Application identity and static display strings.
//!
//! Centralized constants for application metadata and the fixed UI text.
//! The display strings are the Russian-market copy of the data set the
//! application ships with; they are not part of any translation layer.

/// Application display name.
pub const APP_NAME: &str = "Board Compat Browser";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// PAGE HEADER
// =============================================================================

/// Page title.
pub const PAGE_TITLE: &str = "Таблица совместимости";

/// Page subtitle.
pub const PAGE_SUBTITLE: &str = "Материнские платы и процессоры для чипсета H110";

// =============================================================================
// FILTER BAR
// =============================================================================

/// Filter card heading.
pub const FILTER_CARD_TITLE: &str = "Поиск и фильтры";

/// Search input placeholder.
pub const SEARCH_PLACEHOLDER: &str = "Поиск по названию материнской платы или процессора...";

// =============================================================================
// COMPATIBILITY TABLE
// =============================================================================

/// Table card heading.
pub const TABLE_CARD_TITLE: &str = "Совместимость H110 чипсета";

/// Column headers, in display order.
pub const COLUMN_HEADERS: [&str; 7] = [
    "Материнская плата",
    "Производитель",
    "Сокет",
    "Макс. ОЗУ",
    "Форм-фактор",
    "Цена",
    "Детали",
];

/// Toggle label while a row is collapsed.
pub const DETAILS_SHOW: &str = "Показать";

/// Toggle label while a row is expanded.
pub const DETAILS_HIDE: &str = "Скрыть";

/// Detail block: supported CPUs heading.
pub const DETAIL_CPUS: &str = "Поддерживаемые процессоры:";

/// Detail block: features heading.
pub const DETAIL_FEATURES: &str = "Особенности:";

/// Detail block: RAM slots field label.
pub const DETAIL_RAM_SLOTS: &str = "Слоты ОЗУ:";

/// Detail block: chipset field label.
pub const DETAIL_CHIPSET: &str = "Чипсет:";

/// Hint shown instead of the table body when no record matches.
pub const NO_MATCHES: &str = "Ничего не найдено";

// =============================================================================
// CHIPSET INFO PANEL
// =============================================================================

/// Info card heading.
pub const INFO_CARD_TITLE: &str = "Информация о чипсете H110";

/// Left info column heading.
pub const INFO_SPECS_TITLE: &str = "Основные характеристики:";

/// Chipset facts, left column.
pub const INFO_SPECS: [&str; 4] = [
    "Сокет: LGA1151",
    "Поддержка DDR4-2133",
    "PCIe 3.0 поддержка",
    "USB 3.0 контроллер",
];

/// Right info column heading.
pub const INFO_GENERATIONS_TITLE: &str = "Совместимые поколения:";

/// Chipset facts, right column.
pub const INFO_GENERATIONS: [&str; 3] = [
    "Intel 6th Gen (Skylake)",
    "Intel Core i3/i5/i7",
    "Intel Pentium/Celeron",
];
