use serde::{Deserialize, Serialize};

/// Text layout of the price/PLU pair being searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FragmentStyle {
    /// `price: 0, plu: "999",` as written in the menu source file.
    #[default]
    Menu,
    /// `"plu":"999","price":0,` as written in JSON menu exports.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub old: String,
    pub new: String,
}

fn render(style: FragmentStyle, plu: &str, price: &str) -> String {
    match style {
        FragmentStyle::Menu => format!("price: {price}, plu: \"{plu}\","),
        FragmentStyle::Json => format!("\"plu\":\"{plu}\",\"price\":{price},"),
    }
}

/// Build the search and replacement fragments for one item. Both use the
/// same PLU; only the price differs.
pub fn build_fragments(style: FragmentStyle, plu: &str, price_before: &str, price_after: &str) -> Fragments {
    Fragments {
        old: render(style, plu, price_before),
        new: render(style, plu, price_after),
    }
}
