//! End-to-end pipeline tests over an in-memory store: selection-driven
//! aggregation, shared-fetch dedup, error attribution, and rendering to
//! both output targets from the same composed content.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use wedding_exporter::model::{
    AttendanceTuple, BarOrderRow, BeautyRow, Branding, BudgetCategoryRow, EventRow, FurnitureRow,
    GuestRow, LodgingRow, PaymentRow, RepurposingRow, RoomRow, ShoppingRow, StaffingRow,
    StationeryRow, TaskRow, TransportRow, VendorRow, WeddingOverview,
};
use wedding_exporter::render::{compose_selected, Block};
use wedding_exporter::{
    assemble_document, section_counts, DocxRenderer, ExportError, PdfRenderer, SectionId,
    WeddingStore,
};

#[derive(Default)]
struct MockStore {
    overview: Option<WeddingOverview>,
    guests: Vec<GuestRow>,
    events: Vec<EventRow>,
    attendance: Vec<AttendanceTuple>,
    budget: Vec<BudgetCategoryRow>,
    fail_method: Option<&'static str>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl MockStore {
    fn hit(&self, method: &'static str) -> Result<(), sqlx::Error> {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
        if self.fail_method == Some(method) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }

    fn calls_to(&self, method: &'static str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl WeddingStore for MockStore {
    async fn overview(&self, _: Uuid) -> Result<Option<WeddingOverview>, sqlx::Error> {
        self.hit("overview")?;
        Ok(self.overview.clone())
    }

    async fn events(&self, _: Uuid) -> Result<Vec<EventRow>, sqlx::Error> {
        self.hit("events")?;
        Ok(self.events.clone())
    }

    async fn guests(&self, _: Uuid) -> Result<Vec<GuestRow>, sqlx::Error> {
        self.hit("guests")?;
        Ok(self.guests.clone())
    }

    async fn attendance(&self, _: Uuid) -> Result<Vec<AttendanceTuple>, sqlx::Error> {
        self.hit("attendance")?;
        Ok(self.attendance.clone())
    }

    async fn bar_orders(&self, _: Uuid) -> Result<Vec<BarOrderRow>, sqlx::Error> {
        self.hit("bar_orders")?;
        Ok(Vec::new())
    }

    async fn furniture(&self, _: Uuid) -> Result<Vec<FurnitureRow>, sqlx::Error> {
        self.hit("furniture")?;
        Ok(Vec::new())
    }

    async fn repurposing(&self, _: Uuid) -> Result<Vec<RepurposingRow>, sqlx::Error> {
        self.hit("repurposing")?;
        Ok(Vec::new())
    }

    async fn staffing(&self, _: Uuid) -> Result<Vec<StaffingRow>, sqlx::Error> {
        self.hit("staffing")?;
        Ok(Vec::new())
    }

    async fn transportation(&self, _: Uuid) -> Result<Vec<TransportRow>, sqlx::Error> {
        self.hit("transportation")?;
        Ok(Vec::new())
    }

    async fn stationery(&self, _: Uuid) -> Result<Vec<StationeryRow>, sqlx::Error> {
        self.hit("stationery")?;
        Ok(Vec::new())
    }

    async fn beauty(&self, _: Uuid) -> Result<Vec<BeautyRow>, sqlx::Error> {
        self.hit("beauty")?;
        Ok(Vec::new())
    }

    async fn lodgings(&self, _: Uuid) -> Result<Vec<LodgingRow>, sqlx::Error> {
        self.hit("lodgings")?;
        Ok(Vec::new())
    }

    async fn rooms(&self, _: Uuid) -> Result<Vec<RoomRow>, sqlx::Error> {
        self.hit("rooms")?;
        Ok(Vec::new())
    }

    async fn shopping(&self, _: Uuid) -> Result<Vec<ShoppingRow>, sqlx::Error> {
        self.hit("shopping")?;
        Ok(Vec::new())
    }

    async fn budget_categories(&self, _: Uuid) -> Result<Vec<BudgetCategoryRow>, sqlx::Error> {
        self.hit("budget_categories")?;
        Ok(self.budget.clone())
    }

    async fn vendors(&self, _: Uuid) -> Result<Vec<VendorRow>, sqlx::Error> {
        self.hit("vendors")?;
        Ok(Vec::new())
    }

    async fn payments(&self, _: Uuid) -> Result<Vec<PaymentRow>, sqlx::Error> {
        self.hit("payments")?;
        Ok(Vec::new())
    }

    async fn tasks(&self, _: Uuid) -> Result<Vec<TaskRow>, sqlx::Error> {
        self.hit("tasks")?;
        Ok(Vec::new())
    }

    async fn count_section(&self, _: Uuid, section: SectionId) -> Result<i64, sqlx::Error> {
        self.hit("count_section")?;
        Ok(match section {
            SectionId::Overview => 1,
            SectionId::EventSummary => self.events.len() as i64,
            SectionId::GuestList => self.guests.len() as i64,
            SectionId::AttendanceMatrix => self.attendance.len() as i64,
            SectionId::BudgetSummary => self.budget.len() as i64,
            _ => 0,
        })
    }
}

fn overview() -> WeddingOverview {
    WeddingOverview {
        id: Uuid::new_v4(),
        partner_one: "Iris".to_string(),
        partner_two: "Theo".to_string(),
        wedding_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        venue: "Oakfield Barn".to_string(),
        city: Some("Norwich".to_string()),
        expected_guests: Some(120),
        planner_name: Some("M. Hale".to_string()),
    }
}

fn guest(
    name: &str,
    rsvp: &str,
    starter: Option<&str>,
    main: Option<&str>,
    dessert: Option<&str>,
) -> GuestRow {
    GuestRow {
        id: Uuid::new_v4(),
        full_name: name.to_string(),
        party: None,
        rsvp_status: rsvp.to_string(),
        starter_choice: starter.map(String::from),
        main_choice: main.map(String::from),
        dessert_choice: dessert.map(String::from),
        dietary_notes: None,
        email: None,
        phone: None,
    }
}

fn event(name: &str, day: u32) -> EventRow {
    EventRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        event_date: NaiveDate::from_ymd_opt(2026, 9, day).unwrap(),
        start_time: None,
        end_time: None,
        venue: None,
        notes: None,
    }
}

/// The worked scenario: two events, three guests — one declined (with
/// choices but no attendance tuples), one with no meal choices, one fully
/// specified.
fn worked_example_store() -> MockStore {
    let events = vec![event("Ceremony", 12), event("Reception", 12)];
    let guests = vec![
        guest("Ada Price", "declined", Some("Soup"), Some("Beef"), Some("Tart")),
        guest("Ben Osei", "attending", None, None, None),
        guest("Cleo Vance", "attending", Some("Salad"), Some("Salmon"), Some("Sorbet")),
    ];
    // Only Cleo has tuples; Ben attends nothing on record, Ada none at all.
    let attendance = vec![
        AttendanceTuple {
            guest_id: guests[2].id,
            event_id: events[0].id,
            attending: true,
        },
        AttendanceTuple {
            guest_id: guests[2].id,
            event_id: events[1].id,
            attending: true,
        },
    ];

    MockStore {
        overview: Some(overview()),
        guests,
        events,
        attendance,
        ..MockStore::default()
    }
}

#[tokio::test]
async fn fields_are_populated_iff_requested() {
    let store = MockStore {
        overview: Some(overview()),
        guests: vec![guest("Ada Price", "attending", None, None, None)],
        ..MockStore::default()
    };

    let selection = [SectionId::GuestList, SectionId::Stationery];
    let doc = assemble_document(&store, Uuid::new_v4(), &selection)
        .await
        .unwrap();

    assert!(doc.guests.is_some());
    // Requested but empty stays Some; not requested stays None.
    assert_eq!(doc.stationery.as_ref().map(Vec::len), Some(0));
    assert!(doc.events.is_none());
    assert!(doc.budget.is_none());
    assert!(doc.meals.is_none());
    assert!(doc.timeline.is_none());
}

#[tokio::test]
async fn unrequested_sections_issue_zero_queries() {
    let store = MockStore {
        overview: Some(overview()),
        ..MockStore::default()
    };

    assemble_document(&store, Uuid::new_v4(), &[SectionId::ShoppingList])
        .await
        .unwrap();

    assert_eq!(store.calls_to("shopping"), 1);
    assert_eq!(store.calls_to("guests"), 0);
    assert_eq!(store.calls_to("bar_orders"), 0);
    // overview + shopping and nothing else
    assert_eq!(store.total_calls(), 2);
}

#[tokio::test]
async fn guest_fetch_is_deduplicated_across_dependent_sections() {
    let store = worked_example_store();

    let selection = [
        SectionId::GuestList,
        SectionId::MealSelections,
        SectionId::AttendanceMatrix,
    ];
    let doc = assemble_document(&store, Uuid::new_v4(), &selection)
        .await
        .unwrap();

    // Three sections lean on the guest table; it is read once.
    assert_eq!(store.calls_to("guests"), 1);
    assert_eq!(store.calls_to("events"), 1);
    assert_eq!(store.calls_to("attendance"), 1);
    assert!(doc.guests.is_some());
    assert!(doc.meals.is_some());
    assert!(doc.attendance.is_some());
}

#[tokio::test]
async fn missing_wedding_is_not_found() {
    let store = MockStore::default();

    let err = assemble_document(&store, Uuid::new_v4(), &[SectionId::GuestList])
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::NotFound(_)));
    // No section fetch once the overview is missing.
    assert_eq!(store.total_calls(), 1);
}

#[tokio::test]
async fn failed_section_fetch_names_the_section() {
    let store = MockStore {
        overview: Some(overview()),
        fail_method: Some("stationery"),
        ..MockStore::default()
    };

    let err = assemble_document(
        &store,
        Uuid::new_v4(),
        &[SectionId::GuestList, SectionId::Stationery],
    )
    .await
    .unwrap_err();

    match err {
        ExportError::FetchFailed { section, .. } => {
            assert_eq!(section, SectionId::Stationery)
        }
        other => panic!("expected FetchFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn worked_example_matches_expected_shapes() {
    let store = worked_example_store();
    let selection = [
        SectionId::GuestList,
        SectionId::MealSelections,
        SectionId::AttendanceMatrix,
    ];
    let doc = assemble_document(&store, Uuid::new_v4(), &selection)
        .await
        .unwrap();

    assert_eq!(doc.guests.as_ref().unwrap().len(), 3);

    // Ben has no choices; starter tally covers the other two.
    let tally = doc.meals.as_ref().unwrap();
    let starter_sum: u32 = tally.starters.values().sum();
    assert_eq!(starter_sum, 2);

    // 3 guests x 2 events, every cell a boolean, declined guest included.
    let pivot = doc.attendance.as_ref().unwrap();
    assert_eq!(pivot.events.len(), 2);
    assert_eq!(pivot.rows.len(), 3);
    let cells: usize = pivot.rows.iter().map(|r| r.attending.len()).sum();
    assert_eq!(cells, 6);
    let ada = pivot
        .rows
        .iter()
        .find(|r| r.guest_name == "Ada Price")
        .unwrap();
    assert_eq!(ada.attending, vec![false, false]);
}

#[tokio::test]
async fn both_targets_render_the_same_composed_content() {
    let store = worked_example_store();
    let selection = [
        SectionId::Overview,
        SectionId::GuestList,
        SectionId::AttendanceMatrix,
    ];
    let doc = assemble_document(&store, Uuid::new_v4(), &selection)
        .await
        .unwrap();

    // Both back-ends consume this exact composition; checking it once
    // checks the content of both artifacts.
    let irs = compose_selected(&doc, &selection);
    let titles: Vec<&str> = irs.iter().map(|ir| ir.title.as_str()).collect();
    assert_eq!(titles, vec!["Overview", "Guest List", "Attendance Matrix"]);

    let guest_table = irs[1]
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
        .unwrap();
    assert_eq!(guest_table.rows.len(), 3);

    let branding = Branding::default();
    let pdf = PdfRenderer::new()
        .render(&doc, &branding, &selection)
        .unwrap();
    let docx = DocxRenderer::new()
        .render(&doc, &branding, &selection)
        .unwrap();

    assert!(pdf.starts_with(b"%PDF"));
    // DOCX is a zip container.
    assert!(docx.starts_with(b"PK"));
}

#[tokio::test]
async fn empty_sections_are_elided_from_render_but_kept_in_model() {
    let store = MockStore {
        overview: Some(overview()),
        ..MockStore::default()
    };
    let selection = [SectionId::Overview, SectionId::BarOrders];
    let doc = assemble_document(&store, Uuid::new_v4(), &selection)
        .await
        .unwrap();

    assert!(doc.bar_orders.is_some());
    let irs = compose_selected(&doc, &selection);
    assert_eq!(irs.len(), 1);
    assert_eq!(irs[0].id, SectionId::Overview);
}

#[tokio::test]
async fn preview_counts_cover_every_section_in_one_round() {
    let store = worked_example_store();

    let counts = section_counts(&store, Uuid::new_v4()).await.unwrap();

    assert_eq!(counts.counts.len(), SectionId::ALL.len());
    assert_eq!(counts.rows_for(SectionId::GuestList), Some(3));
    assert_eq!(counts.rows_for(SectionId::EventSummary), Some(2));
    assert_eq!(counts.rows_for(SectionId::BarOrders), Some(0));
    assert_eq!(store.calls_to("count_section"), SectionId::ALL.len());
}

#[tokio::test]
async fn preview_for_missing_wedding_is_not_found() {
    let store = MockStore::default();
    let err = section_counts(&store, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ExportError::NotFound(_)));
}

#[tokio::test]
async fn corrupt_logo_does_not_fail_the_export() {
    let store = worked_example_store();
    let selection = [SectionId::Overview];
    let doc = assemble_document(&store, Uuid::new_v4(), &selection)
        .await
        .unwrap();

    let branding = Branding {
        logo: Some(vec![0xde, 0xad, 0xbe, 0xef]),
        ..Branding::default()
    };

    let pdf = PdfRenderer::new()
        .render(&doc, &branding, &selection)
        .unwrap();
    let docx = DocxRenderer::new()
        .render(&doc, &branding, &selection)
        .unwrap();

    assert!(pdf.starts_with(b"%PDF"));
    assert!(docx.starts_with(b"PK"));
}
