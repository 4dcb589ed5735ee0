//! Product type enumeration for supported vehicle categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The four supported personal electric vehicle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "ebike")]
    EBike,
    #[serde(rename = "escooter")]
    EScooter,
    #[serde(rename = "hoverboard")]
    Hoverboard,
    #[serde(rename = "eskateboard")]
    ESkateboard,
}

impl ProductType {
    /// All product types, in display order.
    pub const ALL: [ProductType; 4] = [
        ProductType::EBike,
        ProductType::EScooter,
        ProductType::Hoverboard,
        ProductType::ESkateboard,
    ];

    /// Returns the canonical string form used in spec trees and configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::EBike => "ebike",
            ProductType::EScooter => "escooter",
            ProductType::Hoverboard => "hoverboard",
            ProductType::ESkateboard => "eskateboard",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::EBike => "Electric Bike",
            ProductType::EScooter => "Electric Scooter",
            ProductType::Hoverboard => "Hoverboard",
            ProductType::ESkateboard => "Electric Skateboard",
        }
    }

    /// Returns the spec-tree namespace prefix tried by the value resolver.
    ///
    /// Scraped spec sheets sometimes nest category-specific fields under
    /// a short namespace (e.g. `eskate.deck_material`).
    pub fn namespace(&self) -> &'static str {
        match self {
            ProductType::EBike => "ebike",
            ProductType::EScooter => "escooter",
            ProductType::Hoverboard => "hoverboard",
            ProductType::ESkateboard => "eskate",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ebike" | "e-bike" | "electric-bike" => Ok(ProductType::EBike),
            "escooter" | "e-scooter" | "electric-scooter" => Ok(ProductType::EScooter),
            "hoverboard" => Ok(ProductType::Hoverboard),
            "eskateboard" | "eskate" | "e-skateboard" | "electric-skateboard" => {
                Ok(ProductType::ESkateboard)
            }
            other => Err(ValidationError::invalid_format(
                "product_type",
                format!("unknown product type '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_round_trips_through_from_str() {
        for pt in ProductType::ALL {
            assert_eq!(pt.as_str().parse::<ProductType>().unwrap(), pt);
        }
    }

    #[test]
    fn from_str_accepts_hyphenated_aliases() {
        assert_eq!("e-bike".parse::<ProductType>().unwrap(), ProductType::EBike);
        assert_eq!(
            "electric-scooter".parse::<ProductType>().unwrap(),
            ProductType::EScooter
        );
        assert_eq!(
            "e-skateboard".parse::<ProductType>().unwrap(),
            ProductType::ESkateboard
        );
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("unicycle".parse::<ProductType>().is_err());
    }

    #[test]
    fn namespace_differs_from_canonical_for_skateboards() {
        assert_eq!(ProductType::ESkateboard.namespace(), "eskate");
        assert_eq!(ProductType::EBike.namespace(), "ebike");
    }

    #[test]
    fn serializes_to_canonical_string() {
        let json = serde_json::to_string(&ProductType::ESkateboard).unwrap();
        assert_eq!(json, "\"eskateboard\"");
    }
}
