//! Static gift suggestions shown on the last wizard screen.
//!
//! The list is fixed: it is never filtered or ranked by the collected
//! profile.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionItem {
    pub title: &'static str,
    pub price: &'static str,
    pub source_label: &'static str,
    pub link: &'static str,
}

const SUGGESTIONS: [SuggestionItem; 3] = [
    SuggestionItem {
        title: "Kit de Pintura Acrílica",
        price: "R$89",
        source_label: "Amazon",
        link: "https://www.amazon.com/kit-pintura",
    },
    SuggestionItem {
        title: "Assinatura de Caixa Criativa",
        price: "R$59",
        source_label: "UauBox",
        link: "https://www.uaubox.com",
    },
    SuggestionItem {
        title: "Curso Online de Aquarela",
        price: "R$120",
        source_label: "Hotmart",
        link: "https://www.hotmart.com",
    },
];

pub fn suggestions() -> &'static [SuggestionItem] {
    &SUGGESTIONS
}

impl SuggestionItem {
    /// `R$89 – Amazon`
    pub fn price_line(&self) -> String {
        format!("{} – {}", self.price, self.source_label)
    }
}
