//! Static table fixtures used across harnesses.
//!
//! The panel fixtures mirror the shape of a country/year dataset whose
//! `gdp_pcapita` column mixes `"12k"`-style text with plain numbers.

/// A panel in CSV form. `gdp_pcapita` mixes marked and plain values, so the
/// reader types it as text throughout.
pub const PANEL_CSV: &str = "\
country,year,gdp_pcapita
FR,2019,12k
DE,2019,45000
IT,2019,3.5K
ES,2019,
";

/// The same panel as JSON Lines. Here `gdp_pcapita` keeps per-cell JSON
/// types, so `42000` is already an integer.
pub const PANEL_JSONL: &str = r#"{"country":"FR","year":2019,"gdp_pcapita":"12k"}
{"country":"DE","year":2019,"gdp_pcapita":42000}
{"country":"IT","year":2019,"gdp_pcapita":"3.5K"}
{"country":"ES","year":2019,"gdp_pcapita":null}
"#;

/// A panel with one value that cannot be expanded.
pub const PANEL_CSV_MALFORMED: &str = "\
country,gdp_pcapita
FR,12k
DE,abk
IT,2k
";

/// Marked inputs and the float each one must expand to.
pub const MARKED_CASES: &[(&str, f64)] = &[
    ("12k", 12_000.0),
    ("3.5K", 3_500.0),
    ("0k", 0.0),
    ("1K", 1_000.0),
    ("-4k", -4_000.0),
    ("0.001k", 1.0),
    ("250k", 250_000.0),
];

/// Marked inputs whose remainder is not a number.
pub const UNPARSEABLE_CASES: &[&str] = &["abk", "$5k", "k", "KK", "12 k 3 x", "1,5k"];
