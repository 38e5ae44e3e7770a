use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::aggregates::{AttendancePivot, MealTally};

/// The unified in-memory document model: everything the renderers need for
/// one export, fetched once and never mutated afterwards.
///
/// Every optional field is `Some` if and only if its section was requested.
/// `None` means "not requested"; `Some` with empty contents means
/// "requested but empty" and is elided later by the emptiness filter. The
/// overview record is always present since every other fetch depends on
/// the wedding existing.
#[derive(Debug, Clone)]
pub struct WeddingDocument {
    pub wedding_id: Uuid,
    pub overview: WeddingOverview,
    pub events: Option<Vec<EventRow>>,
    pub guests: Option<Vec<GuestRow>>,
    pub attendance: Option<AttendancePivot>,
    pub meals: Option<MealTally>,
    pub bar_orders: Option<Vec<BarOrderRow>>,
    pub furniture: Option<Vec<FurnitureRow>>,
    pub repurposing: Option<Vec<RepurposingRow>>,
    pub staffing: Option<Vec<StaffingRow>>,
    pub transportation: Option<Vec<TransportRow>>,
    pub stationery: Option<Vec<StationeryRow>>,
    pub beauty: Option<Vec<BeautyRow>>,
    pub accommodation: Option<AccommodationData>,
    pub shopping: Option<Vec<ShoppingRow>>,
    pub budget: Option<BudgetData>,
    pub vendors: Option<VendorData>,
    pub timeline: Option<Vec<TaskRow>>,
}

impl WeddingDocument {
    pub fn new(wedding_id: Uuid, overview: WeddingOverview) -> Self {
        WeddingDocument {
            wedding_id,
            overview,
            events: None,
            guests: None,
            attendance: None,
            meals: None,
            bar_orders: None,
            furniture: None,
            repurposing: None,
            staffing: None,
            transportation: None,
            stationery: None,
            beauty: None,
            accommodation: None,
            shopping: None,
            budget: None,
            vendors: None,
            timeline: None,
        }
    }

    pub fn couple(&self) -> String {
        format!("{} & {}", self.overview.partner_one, self.overview.partner_two)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WeddingOverview {
    pub id: Uuid,
    pub partner_one: String,
    pub partner_two: String,
    pub wedding_date: NaiveDate,
    pub venue: String,
    pub city: Option<String>,
    pub expected_guests: Option<i32>,
    pub planner_name: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventRow {
    pub id: Uuid,
    pub name: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GuestRow {
    pub id: Uuid,
    pub full_name: String,
    pub party: Option<String>,
    pub rsvp_status: String,
    pub starter_choice: Option<String>,
    pub main_choice: Option<String>,
    pub dessert_choice: Option<String>,
    pub dietary_notes: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One flat (guest, event) attendance tuple as stored; pairs absent from
/// the table mean "not attending".
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AttendanceTuple {
    pub guest_id: Uuid,
    pub event_id: Uuid,
    pub attending: bool,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BarOrderRow {
    pub beverage: String,
    pub category: Option<String>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub event_name: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FurnitureRow {
    pub item: String,
    pub category: Option<String>,
    pub source: Option<String>,
    pub event_name: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RepurposingRow {
    pub item: String,
    pub from_event: String,
    pub to_event: String,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StaffingRow {
    pub role: String,
    pub headcount: i32,
    pub event_name: Option<String>,
    pub shift_start: Option<NaiveTime>,
    pub shift_end: Option<NaiveTime>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TransportRow {
    pub route: String,
    pub departs_at: Option<DateTime<Utc>>,
    pub vehicle: Option<String>,
    pub seats: Option<i32>,
    pub passenger_group: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StationeryRow {
    pub item: String,
    pub quantity: i32,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BeautyRow {
    pub person: String,
    pub service: String,
    pub provider: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LodgingRow {
    pub name: String,
    pub address: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RoomRow {
    pub lodging_name: String,
    pub room_type: Option<String>,
    pub occupant: Option<String>,
    pub nights: Option<i32>,
    pub rate: Option<f64>,
}

/// Lodging properties plus the room assignments within them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationData {
    pub properties: Vec<LodgingRow>,
    pub rooms: Vec<RoomRow>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ShoppingRow {
    pub item: String,
    pub quantity: i32,
    pub store: Option<String>,
    pub estimated_price: Option<f64>,
    pub purchased: bool,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BudgetCategoryRow {
    pub name: String,
    pub projected_amount: f64,
    pub actual_amount: f64,
}

/// Per-category budget figures. Grand totals are derived through
/// [`BudgetData::totals`] on demand and deliberately never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetData {
    pub categories: Vec<BudgetCategoryRow>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VendorRow {
    pub name: String,
    pub service: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PaymentRow {
    pub vendor_name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub amount: f64,
    pub paid: bool,
}

/// Vendor records plus their payment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorData {
    pub vendors: Vec<VendorRow>,
    pub payments: Vec<PaymentRow>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TaskRow {
    pub title: String,
    pub phase: String,
    pub due_date: Option<NaiveDate>,
    pub owner: Option<String>,
    pub completed: bool,
}
