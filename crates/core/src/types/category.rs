//! Product category enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Product categories carried by the storefront.
///
/// The remote catalog encodes categories as numeric ids;
/// [`Category::from_external_id`] maps them through a fixed table. Ids outside
/// the table are handled at the call site - the catalog normalizer falls back
/// to [`Category::Accessories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Physical accessories (headphones, watches, wallets).
    Accessories,
    /// Digital collectibles.
    Nft,
    /// Clothing.
    Wear,
}

impl Category {
    /// Map an external numeric category id onto a category.
    ///
    /// Returns `None` for ids outside the fixed `{1, 2, 3}` table.
    #[must_use]
    pub const fn from_external_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Accessories),
            2 => Some(Self::Nft),
            3 => Some(Self::Wear),
            _ => None,
        }
    }

    /// The lowercase name used in URLs and serialized payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accessories => "accessories",
            Self::Nft => "nft",
            Self::Wear => "wear",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
