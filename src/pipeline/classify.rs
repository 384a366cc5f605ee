//! Keyword-based classification of vendors by name.
//!
//! Matching is a case-insensitive substring test against the vendor name.

use crate::constants::GENERAL_CONSTRUCTION;
use crate::domain::VendorType;

const SUPPLIER_TERMS: &[&str] = &["supply", "supplier", "materials"];
const SUBCONTRACTOR_TERMS: &[&str] = &["contractor", "construction", "builders"];
const SERVICE_TERMS: &[&str] = &["service", "rental", "transport"];

/// Keyword to specialty tags, checked in this order
pub const SPECIALTY_KEYWORDS: &[(&str, &[&str])] = &[
    ("concrete", &["Concrete", "Ready Mix"]),
    ("lumber", &["Lumber", "Framing"]),
    ("supply", &["General Supplies", "Building Materials"]),
    ("steel", &["Steel", "Metal Fabrication"]),
    ("masonry", &["Masonry", "Stone Work"]),
    ("roofing", &["Roofing", "Waterproofing"]),
    ("electric", &["Electrical", "Lighting"]),
    ("plumb", &["Plumbing", "HVAC"]),
    ("paint", &["Painting", "Coatings"]),
    ("glass", &["Glazing", "Windows"]),
    ("tile", &["Tile", "Flooring"]),
    ("insul", &["Insulation", "Thermal Protection"]),
    ("excavat", &["Excavation", "Earthwork"]),
    ("transport", &["Transportation", "Delivery"]),
    ("rental", &["Equipment Rental"]),
    ("demo", &["Demolition"]),
];

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

/// Supplier terms win over contractor terms, which win over service terms.
pub fn determine_vendor_type(vendor_name: &str) -> VendorType {
    let name_lower = vendor_name.to_lowercase();

    if contains_any(&name_lower, SUPPLIER_TERMS) {
        VendorType::Supplier
    } else if contains_any(&name_lower, SUBCONTRACTOR_TERMS) {
        VendorType::Subcontractor
    } else if contains_any(&name_lower, SERVICE_TERMS) {
        VendorType::Service
    } else {
        VendorType::default()
    }
}

/// Every matching keyword contributes its tags; `General Construction` when none match.
pub fn determine_specialties(vendor_name: &str) -> Vec<String> {
    let name_lower = vendor_name.to_lowercase();

    let specialties: Vec<String> = SPECIALTY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| name_lower.contains(keyword))
        .flat_map(|(_, tags)| tags.iter().map(|tag| tag.to_string()))
        .collect();

    if specialties.is_empty() {
        vec![GENERAL_CONSTRUCTION.to_string()]
    } else {
        specialties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_type_by_keyword() {
        assert_eq!(determine_vendor_type("ABC Builders Construction"), VendorType::Subcontractor);
        assert_eq!(determine_vendor_type("XYZ Supply Co"), VendorType::Supplier);
        assert_eq!(determine_vendor_type("Northwest Materials"), VendorType::Supplier);
        assert_eq!(determine_vendor_type("Sunbelt Rental"), VendorType::Service);
        assert_eq!(determine_vendor_type("Acme Transport LLC"), VendorType::Service);
    }

    #[test]
    fn test_vendor_type_defaults_to_supplier() {
        assert_eq!(determine_vendor_type("Johnson & Sons"), VendorType::Supplier);
        assert_eq!(determine_vendor_type(""), VendorType::Supplier);
    }

    #[test]
    fn test_vendor_type_precedence() {
        // Supplier terms are checked before contractor and service terms
        assert_eq!(determine_vendor_type("Contractor Supply Service"), VendorType::Supplier);
        assert_eq!(determine_vendor_type("Construction Rental Services"), VendorType::Subcontractor);
    }

    #[test]
    fn test_vendor_type_is_case_insensitive() {
        assert_eq!(determine_vendor_type("BIG CONSTRUCTION INC"), VendorType::Subcontractor);
        assert_eq!(determine_vendor_type("smith SERVICE co"), VendorType::Service);
    }

    #[test]
    fn test_specialties_combine_in_table_order() {
        let specialties = determine_specialties("Concrete Supply Co");
        assert_eq!(
            specialties,
            vec!["Concrete", "Ready Mix", "General Supplies", "Building Materials"]
        );
    }

    #[test]
    fn test_specialties_order_ignores_name_order() {
        // "supply" appears first in the name but after "concrete" in the table
        let specialties = determine_specialties("Supply of Concrete");
        assert_eq!(specialties[0], "Concrete");
        assert_eq!(specialties[2], "General Supplies");
    }

    #[test]
    fn test_specialties_partial_keywords() {
        assert_eq!(determine_specialties("Joe's Plumbing"), vec!["Plumbing", "HVAC"]);
        assert_eq!(determine_specialties("Excavators Inc"), vec!["Excavation", "Earthwork"]);
        assert_eq!(
            determine_specialties("Seattle Electric & Insulation"),
            vec!["Electrical", "Lighting", "Insulation", "Thermal Protection"]
        );
        assert_eq!(
            determine_specialties("Demo & Rental Partners"),
            vec!["Equipment Rental", "Demolition"]
        );
    }

    #[test]
    fn test_specialties_default() {
        assert_eq!(determine_specialties("Johnson & Sons"), vec!["General Construction"]);
        assert_eq!(determine_specialties(""), vec!["General Construction"]);
    }

    #[test]
    fn test_keyword_table_size() {
        assert_eq!(SPECIALTY_KEYWORDS.len(), 16);
    }
}
