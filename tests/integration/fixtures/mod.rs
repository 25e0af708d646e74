// Test fixtures with known abstract texts and their expected sentence lines

#![allow(dead_code)]

/// Short abstract with clear sentence boundaries
pub const SIMPLE_ABSTRACT: &str =
    "Cisplatin-induced nephrotoxicity limits treatment efficacy in solid tumors. \
     We evaluated renal outcomes in 120 patients receiving high-dose therapy. \
     Serum creatinine increased significantly (P < 0.05). \
     These findings suggest that hydration protocols require revision.";

/// Expected output lines for SIMPLE_ABSTRACT
pub const SIMPLE_EXPECTED: &[&str] = &[
    "Cisplatin-induced nephrotoxicity limits treatment efficacy in solid tumors.",
    "We evaluated renal outcomes in 120 patients receiving high-dose therapy.",
    "Serum creatinine increased significantly (P < 0.05).",
    "These findings suggest that hydration protocols require revision.",
];

/// Abstract exercising titles, Latin abbreviations, decimals, and figures
pub const ABBREVIATION_ABSTRACT: &str =
    "The protocol of Smith et al. was adapted for murine tissue. \
     Dr. Jones supervised histology and reviewed representative sections (Fig. 2). \
     Mice received 3.5 mg per kilogram daily. \
     Samples were fixed in formalin.";

/// Expected output lines for ABBREVIATION_ABSTRACT
pub const ABBREVIATION_EXPECTED: &[&str] = &[
    "The protocol of Smith et al. was adapted for murine tissue.",
    "Dr. Jones supervised histology and reviewed representative sections (Fig. 2).",
    "Mice received 3.5 mg per kilogram daily.",
    "Samples were fixed in formalin.",
];

/// Abstract whose final sentence carries no terminal punctuation
pub const TRAILING_ABSTRACT: &str =
    "Enrollment closed early. Data were collected over 12 months";

/// Expected output lines for TRAILING_ABSTRACT
pub const TRAILING_EXPECTED: &[&str] = &[
    "Enrollment closed early.",
    "Data were collected over 12 months",
];
