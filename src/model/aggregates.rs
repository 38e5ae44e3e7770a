use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::{AttendanceTuple, BudgetCategoryRow, BudgetData, EventRow, GuestRow};

/// Per-course meal choice counts plus dietary-restriction token counts.
///
/// Guests with no choice for a course contribute to no bucket for that
/// course, so each course's bucket sum is at most the guest count.
/// BTreeMap keeps bucket order deterministic across both output targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealTally {
    pub guest_count: usize,
    pub starters: BTreeMap<String, u32>,
    pub mains: BTreeMap<String, u32>,
    pub desserts: BTreeMap<String, u32>,
    pub dietary: BTreeMap<String, u32>,
}

impl MealTally {
    pub fn from_guests(guests: &[GuestRow]) -> Self {
        let mut tally = MealTally {
            guest_count: guests.len(),
            ..MealTally::default()
        };

        for guest in guests {
            bump(&mut tally.starters, guest.starter_choice.as_deref());
            bump(&mut tally.mains, guest.main_choice.as_deref());
            bump(&mut tally.desserts, guest.dessert_choice.as_deref());

            if let Some(notes) = guest.dietary_notes.as_deref() {
                for token in notes.split(',') {
                    let token = token.trim();
                    if !token.is_empty() {
                        *tally.dietary.entry(token.to_string()).or_insert(0) += 1;
                    }
                }
            }
        }

        tally
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
            && self.mains.is_empty()
            && self.desserts.is_empty()
            && self.dietary.is_empty()
    }
}

fn bump(bucket: &mut BTreeMap<String, u32>, choice: Option<&str>) {
    if let Some(label) = choice {
        let label = label.trim();
        if !label.is_empty() {
            *bucket.entry(label.to_string()).or_insert(0) += 1;
        }
    }
}

/// Guest x event attendance matrix, grouped from flat attendance tuples.
///
/// Carries its own event header list and guest names so it renders without
/// the guest-list or event-summary sections being requested. A pair absent
/// from the source tuples is simply "not attending".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendancePivot {
    /// Event names, in event order; one matrix column each.
    pub events: Vec<String>,
    pub rows: Vec<PivotRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PivotRow {
    pub guest_name: String,
    /// One flag per event, parallel to `AttendancePivot::events`.
    pub attending: Vec<bool>,
}

impl AttendancePivot {
    pub fn build(guests: &[GuestRow], events: &[EventRow], tuples: &[AttendanceTuple]) -> Self {
        let attending: HashSet<(Uuid, Uuid)> = tuples
            .iter()
            .filter(|t| t.attending)
            .map(|t| (t.guest_id, t.event_id))
            .collect();

        let event_ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
        let rows = guests
            .iter()
            .map(|guest| PivotRow {
                guest_name: guest.full_name.clone(),
                attending: event_ids
                    .iter()
                    .map(|event_id| attending.contains(&(guest.id, *event_id)))
                    .collect(),
            })
            .collect();

        AttendancePivot {
            events: events.iter().map(|e| e.name.clone()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.rows.is_empty()
    }
}

/// Grand-total figures summed from the category rows at the moment of use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub projected: f64,
    pub actual: f64,
    pub variance: f64,
}

impl BudgetData {
    /// Recomputed from the categories array every call; there is no cached
    /// total to drift out of sync.
    pub fn totals(&self) -> BudgetTotals {
        let projected: f64 = self.categories.iter().map(|c| c.projected_amount).sum();
        let actual: f64 = self.categories.iter().map(|c| c.actual_amount).sum();
        BudgetTotals {
            projected,
            actual,
            variance: projected - actual,
        }
    }
}

impl BudgetCategoryRow {
    pub fn variance(&self) -> f64 {
        self.projected_amount - self.actual_amount
    }
}

/// Per-section row counts for the export preview; built in one batched
/// round of count queries and discarded after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCounts {
    pub wedding_id: Uuid,
    pub counts: Vec<SectionCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCount {
    pub section: super::SectionId,
    pub rows: i64,
}

impl SectionCounts {
    pub fn rows_for(&self, section: super::SectionId) -> Option<i64> {
        self.counts
            .iter()
            .find(|c| c.section == section)
            .map(|c| c.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str, starter: Option<&str>, diet: Option<&str>) -> GuestRow {
        GuestRow {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            party: None,
            rsvp_status: "attending".to_string(),
            starter_choice: starter.map(String::from),
            main_choice: None,
            dessert_choice: None,
            dietary_notes: diet.map(String::from),
            email: None,
            phone: None,
        }
    }

    fn event(name: &str) -> EventRow {
        EventRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            event_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            start_time: None,
            end_time: None,
            venue: None,
            notes: None,
        }
    }

    #[test]
    fn starter_buckets_sum_to_guests_with_a_choice() {
        let guests = vec![
            guest("Ada", Some("Soup"), None),
            guest("Ben", Some("Soup"), None),
            guest("Cleo", Some("Salad"), None),
            guest("Dan", None, None),
        ];
        let tally = MealTally::from_guests(&guests);

        let sum: u32 = tally.starters.values().sum();
        assert_eq!(sum, 3);
        assert_eq!(tally.starters["Soup"], 2);
        assert_eq!(tally.starters["Salad"], 1);
        assert!(tally.mains.is_empty());
    }

    #[test]
    fn dietary_tokens_are_split_trimmed_and_empty_filtered() {
        let guests = vec![
            guest("Ada", None, Some("vegan, gluten-free")),
            guest("Ben", None, Some(" vegan ,, ")),
        ];
        let tally = MealTally::from_guests(&guests);

        assert_eq!(tally.dietary["vegan"], 2);
        assert_eq!(tally.dietary["gluten-free"], 1);
        assert_eq!(tally.dietary.len(), 2);
    }

    #[test]
    fn pivot_reports_absent_pairs_as_not_attending() {
        let guests = vec![guest("Ada", None, None), guest("Ben", None, None)];
        let events = vec![event("Ceremony"), event("Reception")];
        let tuples = vec![AttendanceTuple {
            guest_id: guests[0].id,
            event_id: events[1].id,
            attending: true,
        }];

        let pivot = AttendancePivot::build(&guests, &events, &tuples);

        assert_eq!(pivot.events, vec!["Ceremony", "Reception"]);
        assert_eq!(pivot.rows.len(), 2);
        assert_eq!(pivot.rows[0].attending, vec![false, true]);
        // Ben has no tuples at all; both cells still resolve.
        assert_eq!(pivot.rows[1].attending, vec![false, false]);
    }

    #[test]
    fn explicit_not_attending_tuple_stays_false() {
        let guests = vec![guest("Ada", None, None)];
        let events = vec![event("Ceremony")];
        let tuples = vec![AttendanceTuple {
            guest_id: guests[0].id,
            event_id: events[0].id,
            attending: false,
        }];

        let pivot = AttendancePivot::build(&guests, &events, &tuples);
        assert_eq!(pivot.rows[0].attending, vec![false]);
    }

    #[test]
    fn budget_totals_are_recomputed_from_categories() {
        let mut budget = BudgetData {
            categories: vec![
                BudgetCategoryRow {
                    name: "Catering".to_string(),
                    projected_amount: 8000.0,
                    actual_amount: 7500.0,
                },
                BudgetCategoryRow {
                    name: "Flowers".to_string(),
                    projected_amount: 1200.0,
                    actual_amount: 1350.0,
                },
            ],
        };

        let totals = budget.totals();
        assert_eq!(totals.projected, 9200.0);
        assert_eq!(totals.actual, 8850.0);
        assert_eq!(totals.variance, 350.0);

        // Mutating a category must move the grand total; nothing is cached.
        budget.categories[0].projected_amount = 9000.0;
        assert_eq!(budget.totals().projected, 10200.0);
    }
}
