use health_core::model::{Tip, TipCatalog};

pub const NO_TIPS_MESSAGE: &str = "No tips match your search.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipVm {
    pub text: &'static str,
    pub tags_label: String,
}

impl From<&Tip> for TipVm {
    fn from(tip: &Tip) -> Self {
        let tags = tip
            .tags()
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text: tip.text(),
            tags_label: format!("Tags: {tags}"),
        }
    }
}

#[must_use]
pub fn search_tips(catalog: &TipCatalog, query: &str) -> Vec<TipVm> {
    catalog.search(query).iter().map(TipVm::from).collect()
}
