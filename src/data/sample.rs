//! Bundled example datasets
//!
//! Small multi-element assay tables for trying out each control type without
//! a lab export at hand. Also used by the integration tests.

/// CRM standards: ten gold/copper/silver determinations of the same standard
pub const CRM_STANDARDS: &str = "\
Sample_ID,Au_ppm,Cu_pct,Ag_ppm
CRM-001,1.24,0.51,12.5
CRM-002,1.18,0.48,11.9
CRM-003,1.31,0.53,13.2
CRM-004,1.22,0.49,12.1
CRM-005,1.19,0.50,12.4
CRM-006,1.35,0.54,12.8
CRM-007,1.26,0.52,12.3
CRM-008,1.20,0.49,11.8
CRM-009,1.28,0.51,12.6
CRM-010,1.17,0.47,11.7
";

/// Blank samples: trace-level readings for contamination monitoring
pub const BLANKS: &str = "\
Sample_ID,Gold_ppb,Copper_ppm,Silver_ppm
BLK-001,1.2,0.8,0.12
BLK-002,0.9,0.6,0.09
BLK-003,1.5,1.1,0.18
BLK-004,0.8,0.5,0.10
BLK-005,1.3,0.9,0.15
BLK-006,1.1,0.7,0.13
BLK-007,1.4,1.0,0.17
BLK-008,0.7,0.4,0.08
BLK-009,1.6,1.2,0.19
BLK-010,1.0,0.6,0.11
";

/// Duplicate pairs: original and re-assayed gold/copper values
pub const DUPLICATES: &str = "\
Original_Sample,Duplicate_Sample,Au_Original,Au_Duplicate,Cu_Original,Cu_Duplicate
S-100,DUP-100,2.45,2.38,0.82,0.79
S-101,DUP-101,3.18,3.26,1.05,1.09
S-102,DUP-102,1.76,1.70,0.58,0.55
S-103,DUP-103,4.21,4.35,1.38,1.42
S-104,DUP-104,2.93,2.85,0.96,0.93
S-105,DUP-105,3.57,3.68,1.17,1.20
S-106,DUP-106,1.98,1.92,0.65,0.63
S-107,DUP-107,3.82,3.75,1.26,1.22
S-108,DUP-108,2.14,2.20,0.70,0.72
S-109,DUP-109,2.67,2.60,0.88,0.85
";
