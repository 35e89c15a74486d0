//! Nice Classification table
//!
//! The WIPO Nice Classification has 45 classes: 1-34 cover goods and
//! 35-45 cover services. Headings here are the common short titles; they are
//! used for display and as a compact reference list inside the prompt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest valid Nice class number
pub const MIN_CLASS: u8 = 1;
/// Highest valid Nice class number
pub const MAX_CLASS: u8 = 45;
/// Last class covering goods; everything above is services
const LAST_GOODS_CLASS: u8 = 34;

const HEADINGS: [&str; MAX_CLASS as usize] = [
    "Chemicals",
    "Paints",
    "Cosmetics and cleaning preparations",
    "Lubricants and fuels",
    "Pharmaceuticals",
    "Metal goods",
    "Machinery",
    "Hand tools",
    "Computers and scientific devices",
    "Medical supplies",
    "Appliances",
    "Vehicles",
    "Firearms",
    "Jewelry",
    "Musical instruments",
    "Paper goods and printed matter",
    "Rubber goods",
    "Leather goods",
    "Non-metallic building materials",
    "Furniture",
    "Housewares and glass",
    "Cordage and fibers",
    "Yarns and threads",
    "Fabrics",
    "Clothing",
    "Lace and embroidery",
    "Floor coverings",
    "Toys and sporting goods",
    "Meats and processed foods",
    "Staple foods",
    "Natural agricultural products",
    "Light beverages",
    "Wines and spirits",
    "Smokers' articles",
    "Advertising and business",
    "Insurance and financial",
    "Building construction and repair",
    "Telecommunications",
    "Transportation and storage",
    "Treatment of materials",
    "Education and entertainment",
    "Computer and scientific services",
    "Hotels and restaurants",
    "Medical, beauty and agricultural services",
    "Personal and legal services",
];

/// Whether a class covers goods or services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Goods,
    Services,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Goods => "goods",
            ClassKind::Services => "services",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A valid Nice class number (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NiceClass(u8);

impl NiceClass {
    /// Returns `None` outside 1-45. Out-of-range numbers are never clamped.
    pub fn new(number: u8) -> Option<Self> {
        is_valid(u32::from(number)).then_some(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn heading(&self) -> &'static str {
        HEADINGS[usize::from(self.0 - MIN_CLASS)]
    }

    pub fn kind(&self) -> ClassKind {
        if self.0 <= LAST_GOODS_CLASS {
            ClassKind::Goods
        } else {
            ClassKind::Services
        }
    }

    /// All 45 classes in ascending order
    pub fn all() -> impl Iterator<Item = NiceClass> {
        (MIN_CLASS..=MAX_CLASS).map(NiceClass)
    }
}

impl TryFrom<u8> for NiceClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NiceClass::new(value).ok_or_else(|| format!("{} is not a Nice class (1-45)", value))
    }
}

impl From<NiceClass> for u8 {
    fn from(class: NiceClass) -> Self {
        class.0
    }
}

impl fmt::Display for NiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {}", self.0)
    }
}

/// Check whether a scanned integer is a Nice class number
pub fn is_valid(number: u32) -> bool {
    (u32::from(MIN_CLASS)..=u32::from(MAX_CLASS)).contains(&number)
}

/// One `N. Heading` line per class, for embedding in prompts
pub fn reference_list() -> String {
    NiceClass::all()
        .map(|c| format!("{}. {} ({})", c.number(), c.heading(), c.kind()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert!(NiceClass::new(0).is_none());
        assert!(NiceClass::new(1).is_some());
        assert!(NiceClass::new(45).is_some());
        assert!(NiceClass::new(46).is_none());
    }

    #[test]
    fn test_kind_split() {
        assert_eq!(NiceClass::new(34).unwrap().kind(), ClassKind::Goods);
        assert_eq!(NiceClass::new(35).unwrap().kind(), ClassKind::Services);
    }

    #[test]
    fn test_headings() {
        assert_eq!(NiceClass::new(25).unwrap().heading(), "Clothing");
        assert_eq!(NiceClass::new(45).unwrap().heading(), "Personal and legal services");
    }

    #[test]
    fn test_all_has_45_classes() {
        assert_eq!(NiceClass::all().count(), 45);
    }

    #[test]
    fn test_reference_list_lines() {
        let list = reference_list();
        assert_eq!(list.lines().count(), 45);
        assert!(list.starts_with("1. Chemicals (goods)"));
        assert!(list.ends_with("45. Personal and legal services (services)"));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<NiceClass>("46").is_err());
        assert_eq!(serde_json::from_str::<NiceClass>("9").unwrap().number(), 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(NiceClass::new(9).unwrap().to_string(), "Class 9");
    }
}
