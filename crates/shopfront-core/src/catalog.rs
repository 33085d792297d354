//! Catalog tokens and product metadata
//!
//! The option lists here are the full enumerations the storefront offers;
//! filter state and the clause builder only ever see these typed tokens.

use crate::ShopError;
use serde::{Deserialize, Serialize};

/// Product color token
///
/// Note: "biege" is the token stored in the product index, so the
/// misspelling is load-bearing and must not be corrected on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Biege,
    Blue,
    Purple,
    Green,
}

impl Color {
    /// All colors, in the order the storefront lists them
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Biege,
        Color::Blue,
        Color::Purple,
        Color::Green,
    ];

    /// Wire token for this color
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Biege => "biege",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "biege" => Ok(Self::Biege),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            "green" => Ok(Self::Green),
            _ => Err(ShopError::ValidationError(format!("unknown color: {s}"))),
        }
    }
}

/// Product size token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    /// All sizes, smallest first
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    /// Wire token for this size
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Size {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            _ => Err(ShopError::ValidationError(format!("unknown size: {s}"))),
        }
    }
}

/// Result ordering requested by the shopper
///
/// Sorting is applied over returned matches, downstream of the vector
/// search; the clause builder does not consume it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            _ => Err(ShopError::ValidationError(format!(
                "unknown sort order: {s}"
            ))),
        }
    }
}

/// Product metadata as stored in the vector index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Image identifier used by the presentation layer
    pub image_id: String,

    /// Display name
    pub name: String,

    pub size: Size,

    pub color: Color,

    /// Unit price
    pub price: f64,
}

/// A named preset price range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: [f64; 2],
}

/// Preset price ranges offered by the price widget
pub const PRICE_PRESETS: [PricePreset; 3] = [
    PricePreset {
        label: "Any Price",
        range: [0.0, 100.0],
    },
    PricePreset {
        label: "Under 20 $",
        range: [0.0, 20.0],
    },
    PricePreset {
        label: "Under 40 $",
        range: [0.0, 40.0],
    },
];

/// Default price range on page load (also the custom slider's span)
pub const DEFAULT_PRICE_RANGE: [f64; 2] = [0.0, 100.0];

/// Fixed result cap per catalog query
pub const RESULT_CAP: usize = 12;
