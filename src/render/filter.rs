use crate::model::{SectionId, WeddingDocument};

/// The section emptiness rule, shared by both orchestrators and applied
/// lazily at render time: an unrequested section (`None`) is excluded, a
/// requested vector is excluded only when empty, and a requested
/// composite is excluded only when every nested collection is empty.
pub fn has_content(doc: &WeddingDocument, section: SectionId) -> bool {
    match section {
        // The overview record is required for the model to exist at all.
        SectionId::Overview => true,
        SectionId::EventSummary => non_empty(&doc.events),
        SectionId::GuestList => non_empty(&doc.guests),
        SectionId::AttendanceMatrix => {
            doc.attendance.as_ref().is_some_and(|p| !p.is_empty())
        }
        SectionId::MealSelections => doc.meals.as_ref().is_some_and(|m| !m.is_empty()),
        SectionId::BarOrders => non_empty(&doc.bar_orders),
        SectionId::Furniture => non_empty(&doc.furniture),
        SectionId::Repurposing => non_empty(&doc.repurposing),
        SectionId::Staffing => non_empty(&doc.staffing),
        SectionId::Transportation => non_empty(&doc.transportation),
        SectionId::Stationery => non_empty(&doc.stationery),
        SectionId::BeautyServices => non_empty(&doc.beauty),
        SectionId::Accommodation => doc
            .accommodation
            .as_ref()
            .is_some_and(|a| !a.properties.is_empty() || !a.rooms.is_empty()),
        SectionId::ShoppingList => non_empty(&doc.shopping),
        SectionId::BudgetSummary => doc
            .budget
            .as_ref()
            .is_some_and(|b| !b.categories.is_empty()),
        SectionId::VendorContacts => doc
            .vendors
            .as_ref()
            .is_some_and(|v| !v.vendors.is_empty() || !v.payments.is_empty()),
        SectionId::Timeline => non_empty(&doc.timeline),
    }
}

fn non_empty<T>(field: &Option<Vec<T>>) -> bool {
    field.as_ref().is_some_and(|rows| !rows.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccommodationData, LodgingRow, WeddingOverview};
    use uuid::Uuid;

    fn bare_document() -> WeddingDocument {
        WeddingDocument::new(
            Uuid::new_v4(),
            WeddingOverview {
                id: Uuid::new_v4(),
                partner_one: "Iris".to_string(),
                partner_two: "Theo".to_string(),
                wedding_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                venue: "Oakfield Barn".to_string(),
                city: None,
                expected_guests: None,
                planner_name: None,
            },
        )
    }

    #[test]
    fn unrequested_section_is_excluded() {
        let doc = bare_document();
        assert!(!has_content(&doc, SectionId::GuestList));
    }

    #[test]
    fn requested_but_empty_array_is_excluded() {
        let mut doc = bare_document();
        doc.guests = Some(Vec::new());
        assert!(!has_content(&doc, SectionId::GuestList));
    }

    #[test]
    fn composite_with_one_nonempty_nested_array_is_included() {
        let mut doc = bare_document();
        doc.accommodation = Some(AccommodationData {
            properties: vec![LodgingRow {
                name: "The Swan Inn".to_string(),
                address: None,
                check_in: None,
                check_out: None,
            }],
            rooms: Vec::new(),
        });
        assert!(has_content(&doc, SectionId::Accommodation));
    }

    #[test]
    fn composite_with_all_empty_nested_arrays_is_excluded() {
        let mut doc = bare_document();
        doc.accommodation = Some(AccommodationData {
            properties: Vec::new(),
            rooms: Vec::new(),
        });
        assert!(!has_content(&doc, SectionId::Accommodation));
    }

    #[test]
    fn overview_is_always_included() {
        let doc = bare_document();
        assert!(has_content(&doc, SectionId::Overview));
    }
}
