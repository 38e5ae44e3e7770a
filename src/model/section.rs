use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ExportError;

/// The closed set of exportable document sections.
///
/// Declaration order is the canonical section order; the selection list a
/// caller sends is rendered in the caller's order, and both output targets
/// walk that order identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Overview,
    EventSummary,
    GuestList,
    AttendanceMatrix,
    MealSelections,
    BarOrders,
    Furniture,
    Repurposing,
    Staffing,
    Transportation,
    Stationery,
    BeautyServices,
    Accommodation,
    ShoppingList,
    BudgetSummary,
    VendorContacts,
    Timeline,
}

impl SectionId {
    pub const ALL: [SectionId; 17] = [
        SectionId::Overview,
        SectionId::EventSummary,
        SectionId::GuestList,
        SectionId::AttendanceMatrix,
        SectionId::MealSelections,
        SectionId::BarOrders,
        SectionId::Furniture,
        SectionId::Repurposing,
        SectionId::Staffing,
        SectionId::Transportation,
        SectionId::Stationery,
        SectionId::BeautyServices,
        SectionId::Accommodation,
        SectionId::ShoppingList,
        SectionId::BudgetSummary,
        SectionId::VendorContacts,
        SectionId::Timeline,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::EventSummary => "event_summary",
            SectionId::GuestList => "guest_list",
            SectionId::AttendanceMatrix => "attendance_matrix",
            SectionId::MealSelections => "meal_selections",
            SectionId::BarOrders => "bar_orders",
            SectionId::Furniture => "furniture",
            SectionId::Repurposing => "repurposing",
            SectionId::Staffing => "staffing",
            SectionId::Transportation => "transportation",
            SectionId::Stationery => "stationery",
            SectionId::BeautyServices => "beauty_services",
            SectionId::Accommodation => "accommodation",
            SectionId::ShoppingList => "shopping_list",
            SectionId::BudgetSummary => "budget_summary",
            SectionId::VendorContacts => "vendor_contacts",
            SectionId::Timeline => "timeline",
        }
    }

    /// Heading printed above the section in both output targets.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::EventSummary => "Event Summary",
            SectionId::GuestList => "Guest List",
            SectionId::AttendanceMatrix => "Attendance Matrix",
            SectionId::MealSelections => "Meal Selections",
            SectionId::BarOrders => "Bar Orders",
            SectionId::Furniture => "Furniture & Equipment",
            SectionId::Repurposing => "Repurposing",
            SectionId::Staffing => "Staffing",
            SectionId::Transportation => "Transportation",
            SectionId::Stationery => "Stationery",
            SectionId::BeautyServices => "Beauty Services",
            SectionId::Accommodation => "Accommodation",
            SectionId::ShoppingList => "Shopping List",
            SectionId::BudgetSummary => "Budget Summary",
            SectionId::VendorContacts => "Vendor Contacts",
            SectionId::Timeline => "Timeline",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| ExportError::InvalidSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_parses_back_from_its_wire_name() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_section_name_is_rejected() {
        let err = "cake_tasting".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, ExportError::InvalidSection(_)));
    }

    #[test]
    fn wire_names_match_serde_representation() {
        for id in SectionId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }
}
