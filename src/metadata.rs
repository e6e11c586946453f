//! Static company metadata
//!
//! Display names and sectors for the tracked ASX tickers.

use crate::types::{Category, CompanyMeta};

/// (symbol, display name, category)
const COMPANIES: &[(&str, &str, Category)] = &[
    ("AGL.AX", "AGL Energy", Category::Energy),
    ("ANZ.AX", "ANZ Banking Group", Category::Finance),
    ("BHP.AX", "BHP Group", Category::Mining),
    ("CBA.AX", "Commonwealth Bank", Category::Finance),
    ("FMG.AX", "Fortescue Metals Group", Category::Mining),
    ("NAB.AX", "National Australia Bank", Category::Finance),
    ("ORG.AX", "Origin Energy", Category::Energy),
    ("RIO.AX", "Rio Tinto", Category::Mining),
    ("WBC.AX", "Westpac Banking Corp", Category::Finance),
];

/// Metadata for `symbol`, or `{name: symbol, category: Other}` if untracked
pub fn lookup(symbol: &str) -> CompanyMeta {
    COMPANIES
        .iter()
        .find(|(s, _, _)| *s == symbol)
        .map_or_else(
            || CompanyMeta {
                symbol: symbol.to_string(),
                name: symbol.to_string(),
                category: Category::Other,
            },
            |(s, name, category)| CompanyMeta {
                symbol: (*s).to_string(),
                name: (*name).to_string(),
                category: *category,
            },
        )
}

/// Whether the symbol is in the static table
pub fn is_tracked(symbol: &str) -> bool {
    COMPANIES.iter().any(|(s, _, _)| *s == symbol)
}
