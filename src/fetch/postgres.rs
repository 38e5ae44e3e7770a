use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::model::{
    AttendanceTuple, BarOrderRow, BeautyRow, BudgetCategoryRow, EventRow, FurnitureRow, GuestRow,
    LodgingRow, PaymentRow, RepurposingRow, RoomRow, SectionId, ShoppingRow, StaffingRow,
    StationeryRow, TaskRow, TransportRow, VendorRow, WeddingOverview,
};

use super::store::WeddingStore;

/// `WeddingStore` over the PostgreSQL schema. Every query is filtered by
/// wedding id and ordered so the output is deterministic run to run.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl WeddingStore for PgStore {
    async fn overview(&self, wedding_id: Uuid) -> Result<Option<WeddingOverview>, sqlx::Error> {
        sqlx::query_as::<_, WeddingOverview>(
            "SELECT id, partner_one, partner_two, wedding_date, venue, city,
                    expected_guests, planner_name
             FROM weddings
             WHERE id = $1",
        )
        .bind(wedding_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn events(&self, wedding_id: Uuid) -> Result<Vec<EventRow>, sqlx::Error> {
        sqlx::query_as::<_, EventRow>(
            "SELECT id, name, event_date, start_time, end_time, venue, notes
             FROM wedding_events
             WHERE wedding_id = $1
             ORDER BY event_date, start_time, name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn guests(&self, wedding_id: Uuid) -> Result<Vec<GuestRow>, sqlx::Error> {
        sqlx::query_as::<_, GuestRow>(
            "SELECT id, full_name, party, rsvp_status, starter_choice, main_choice,
                    dessert_choice, dietary_notes, email, phone
             FROM guests
             WHERE wedding_id = $1
             ORDER BY full_name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn attendance(&self, wedding_id: Uuid) -> Result<Vec<AttendanceTuple>, sqlx::Error> {
        sqlx::query_as::<_, AttendanceTuple>(
            "SELECT a.guest_id, a.event_id, a.attending
             FROM guest_attendance a
             JOIN guests g ON g.id = a.guest_id
             WHERE g.wedding_id = $1",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn bar_orders(&self, wedding_id: Uuid) -> Result<Vec<BarOrderRow>, sqlx::Error> {
        sqlx::query_as::<_, BarOrderRow>(
            "SELECT i.beverage, i.category, i.quantity, i.unit, o.supplier, e.name AS event_name
             FROM bar_order_items i
             JOIN bar_orders o ON o.id = i.order_id
             LEFT JOIN wedding_events e ON e.id = o.event_id
             WHERE o.wedding_id = $1
             ORDER BY e.name NULLS FIRST, i.category, i.beverage",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn furniture(&self, wedding_id: Uuid) -> Result<Vec<FurnitureRow>, sqlx::Error> {
        sqlx::query_as::<_, FurnitureRow>(
            "SELECT it.name AS item, it.category, it.source, e.name AS event_name, q.quantity
             FROM inventory_event_quantities q
             JOIN inventory_items it ON it.id = q.item_id
             LEFT JOIN wedding_events e ON e.id = q.event_id
             WHERE it.wedding_id = $1
             ORDER BY it.category, it.name, e.name NULLS FIRST",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn repurposing(&self, wedding_id: Uuid) -> Result<Vec<RepurposingRow>, sqlx::Error> {
        sqlx::query_as::<_, RepurposingRow>(
            "SELECT it.name AS item, ef.name AS from_event, et.name AS to_event, r.instructions
             FROM repurposing_instructions r
             JOIN inventory_items it ON it.id = r.item_id
             JOIN wedding_events ef ON ef.id = r.from_event_id
             JOIN wedding_events et ON et.id = r.to_event_id
             WHERE r.wedding_id = $1
             ORDER BY ef.event_date, it.name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn staffing(&self, wedding_id: Uuid) -> Result<Vec<StaffingRow>, sqlx::Error> {
        sqlx::query_as::<_, StaffingRow>(
            "SELECT s.role, s.headcount, e.name AS event_name, s.shift_start, s.shift_end, s.notes
             FROM staffing_requirements s
             LEFT JOIN wedding_events e ON e.id = s.event_id
             WHERE s.wedding_id = $1
             ORDER BY e.name NULLS FIRST, s.role",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn transportation(&self, wedding_id: Uuid) -> Result<Vec<TransportRow>, sqlx::Error> {
        sqlx::query_as::<_, TransportRow>(
            "SELECT route, departs_at, vehicle, seats, passenger_group
             FROM transport_shuttles
             WHERE wedding_id = $1
             ORDER BY departs_at NULLS LAST, route",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn stationery(&self, wedding_id: Uuid) -> Result<Vec<StationeryRow>, sqlx::Error> {
        sqlx::query_as::<_, StationeryRow>(
            "SELECT item, quantity, status, notes
             FROM stationery_items
             WHERE wedding_id = $1
             ORDER BY item",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn beauty(&self, wedding_id: Uuid) -> Result<Vec<BeautyRow>, sqlx::Error> {
        sqlx::query_as::<_, BeautyRow>(
            "SELECT person, service, provider, scheduled_at, location
             FROM beauty_appointments
             WHERE wedding_id = $1
             ORDER BY scheduled_at NULLS LAST, person",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn lodgings(&self, wedding_id: Uuid) -> Result<Vec<LodgingRow>, sqlx::Error> {
        sqlx::query_as::<_, LodgingRow>(
            "SELECT name, address, check_in, check_out
             FROM lodgings
             WHERE wedding_id = $1
             ORDER BY name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn rooms(&self, wedding_id: Uuid) -> Result<Vec<RoomRow>, sqlx::Error> {
        sqlx::query_as::<_, RoomRow>(
            "SELECT l.name AS lodging_name, r.room_type, r.occupant, r.nights, r.rate::float8 AS rate
             FROM lodging_rooms r
             JOIN lodgings l ON l.id = r.lodging_id
             WHERE l.wedding_id = $1
             ORDER BY l.name, r.room_type, r.occupant",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn shopping(&self, wedding_id: Uuid) -> Result<Vec<ShoppingRow>, sqlx::Error> {
        sqlx::query_as::<_, ShoppingRow>(
            "SELECT item, quantity, store, estimated_price::float8 AS estimated_price, purchased
             FROM shopping_items
             WHERE wedding_id = $1
             ORDER BY purchased, store NULLS LAST, item",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn budget_categories(
        &self,
        wedding_id: Uuid,
    ) -> Result<Vec<BudgetCategoryRow>, sqlx::Error> {
        // Actuals are the sum of line items booked against the category.
        sqlx::query_as::<_, BudgetCategoryRow>(
            "SELECT c.name,
                    c.projected_amount::float8 AS projected_amount,
                    COALESCE(SUM(li.amount), 0)::float8 AS actual_amount
             FROM budget_categories c
             LEFT JOIN budget_line_items li ON li.category_id = c.id
             WHERE c.wedding_id = $1
             GROUP BY c.id, c.name, c.projected_amount
             ORDER BY c.name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn vendors(&self, wedding_id: Uuid) -> Result<Vec<VendorRow>, sqlx::Error> {
        sqlx::query_as::<_, VendorRow>(
            "SELECT name, service, contact_name, phone, email
             FROM vendors
             WHERE wedding_id = $1
             ORDER BY name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn payments(&self, wedding_id: Uuid) -> Result<Vec<PaymentRow>, sqlx::Error> {
        sqlx::query_as::<_, PaymentRow>(
            "SELECT v.name AS vendor_name, p.description, p.due_date,
                    p.amount::float8 AS amount, p.paid
             FROM vendor_payments p
             JOIN vendors v ON v.id = p.vendor_id
             WHERE v.wedding_id = $1
             ORDER BY p.due_date NULLS LAST, v.name",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn tasks(&self, wedding_id: Uuid) -> Result<Vec<TaskRow>, sqlx::Error> {
        sqlx::query_as::<_, TaskRow>(
            "SELECT title, phase, due_date, owner, completed
             FROM wedding_tasks
             WHERE wedding_id = $1
             ORDER BY due_date NULLS LAST, title",
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_section(
        &self,
        wedding_id: Uuid,
        section: SectionId,
    ) -> Result<i64, sqlx::Error> {
        let sql = match section {
            SectionId::Overview => "SELECT COUNT(*) FROM weddings WHERE id = $1",
            SectionId::EventSummary => {
                "SELECT COUNT(*) FROM wedding_events WHERE wedding_id = $1"
            }
            SectionId::GuestList => "SELECT COUNT(*) FROM guests WHERE wedding_id = $1",
            SectionId::AttendanceMatrix => {
                "SELECT COUNT(*) FROM guest_attendance a
                 JOIN guests g ON g.id = a.guest_id
                 WHERE g.wedding_id = $1"
            }
            SectionId::MealSelections => {
                "SELECT COUNT(*) FROM guests
                 WHERE wedding_id = $1
                   AND (starter_choice IS NOT NULL
                     OR main_choice IS NOT NULL
                     OR dessert_choice IS NOT NULL)"
            }
            SectionId::BarOrders => {
                "SELECT COUNT(*) FROM bar_order_items i
                 JOIN bar_orders o ON o.id = i.order_id
                 WHERE o.wedding_id = $1"
            }
            SectionId::Furniture => {
                "SELECT COUNT(*) FROM inventory_event_quantities q
                 JOIN inventory_items it ON it.id = q.item_id
                 WHERE it.wedding_id = $1"
            }
            SectionId::Repurposing => {
                "SELECT COUNT(*) FROM repurposing_instructions WHERE wedding_id = $1"
            }
            SectionId::Staffing => {
                "SELECT COUNT(*) FROM staffing_requirements WHERE wedding_id = $1"
            }
            SectionId::Transportation => {
                "SELECT COUNT(*) FROM transport_shuttles WHERE wedding_id = $1"
            }
            SectionId::Stationery => {
                "SELECT COUNT(*) FROM stationery_items WHERE wedding_id = $1"
            }
            SectionId::BeautyServices => {
                "SELECT COUNT(*) FROM beauty_appointments WHERE wedding_id = $1"
            }
            SectionId::Accommodation => {
                "SELECT COUNT(*) FROM lodging_rooms r
                 JOIN lodgings l ON l.id = r.lodging_id
                 WHERE l.wedding_id = $1"
            }
            SectionId::ShoppingList => {
                "SELECT COUNT(*) FROM shopping_items WHERE wedding_id = $1"
            }
            SectionId::BudgetSummary => {
                "SELECT COUNT(*) FROM budget_categories WHERE wedding_id = $1"
            }
            SectionId::VendorContacts => "SELECT COUNT(*) FROM vendors WHERE wedding_id = $1",
            SectionId::Timeline => "SELECT COUNT(*) FROM wedding_tasks WHERE wedding_id = $1",
        };

        sqlx::query_scalar::<_, i64>(sql)
            .bind(wedding_id)
            .fetch_one(&self.pool)
            .await
    }
}
