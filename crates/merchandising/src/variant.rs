use serde::{Deserialize, Serialize};

/// Display variant of a product card.
///
/// Exactly one variant applies per record per evaluation; nothing is stored,
/// the classifier recomputes it from the record's current fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Badge copy shown on the card, if the variant carries one.
    pub fn badge_text(self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just Released!"),
            Variant::Default => None,
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
