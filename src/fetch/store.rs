use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{
    AttendanceTuple, BarOrderRow, BeautyRow, BudgetCategoryRow, EventRow, FurnitureRow, GuestRow,
    LodgingRow, PaymentRow, RepurposingRow, RoomRow, SectionId, ShoppingRow, StaffingRow,
    StationeryRow, TaskRow, TransportRow, VendorRow, WeddingOverview,
};

/// Read-only access to the relational wedding store, one method per
/// logical table group. The aggregator decides which of these to call for
/// a given selection; an unrequested section issues zero queries.
///
/// Implementations must not mutate anything. Errors are raw `sqlx` errors;
/// the aggregator attaches the originating section.
#[async_trait]
pub trait WeddingStore: Send + Sync {
    async fn overview(&self, wedding_id: Uuid) -> Result<Option<WeddingOverview>, sqlx::Error>;

    async fn events(&self, wedding_id: Uuid) -> Result<Vec<EventRow>, sqlx::Error>;

    async fn guests(&self, wedding_id: Uuid) -> Result<Vec<GuestRow>, sqlx::Error>;

    async fn attendance(&self, wedding_id: Uuid) -> Result<Vec<AttendanceTuple>, sqlx::Error>;

    async fn bar_orders(&self, wedding_id: Uuid) -> Result<Vec<BarOrderRow>, sqlx::Error>;

    async fn furniture(&self, wedding_id: Uuid) -> Result<Vec<FurnitureRow>, sqlx::Error>;

    async fn repurposing(&self, wedding_id: Uuid) -> Result<Vec<RepurposingRow>, sqlx::Error>;

    async fn staffing(&self, wedding_id: Uuid) -> Result<Vec<StaffingRow>, sqlx::Error>;

    async fn transportation(&self, wedding_id: Uuid) -> Result<Vec<TransportRow>, sqlx::Error>;

    async fn stationery(&self, wedding_id: Uuid) -> Result<Vec<StationeryRow>, sqlx::Error>;

    async fn beauty(&self, wedding_id: Uuid) -> Result<Vec<BeautyRow>, sqlx::Error>;

    async fn lodgings(&self, wedding_id: Uuid) -> Result<Vec<LodgingRow>, sqlx::Error>;

    async fn rooms(&self, wedding_id: Uuid) -> Result<Vec<RoomRow>, sqlx::Error>;

    async fn shopping(&self, wedding_id: Uuid) -> Result<Vec<ShoppingRow>, sqlx::Error>;

    async fn budget_categories(
        &self,
        wedding_id: Uuid,
    ) -> Result<Vec<BudgetCategoryRow>, sqlx::Error>;

    async fn vendors(&self, wedding_id: Uuid) -> Result<Vec<VendorRow>, sqlx::Error>;

    async fn payments(&self, wedding_id: Uuid) -> Result<Vec<PaymentRow>, sqlx::Error>;

    async fn tasks(&self, wedding_id: Uuid) -> Result<Vec<TaskRow>, sqlx::Error>;

    /// Row count for one section, used by the export-size preview. Counts
    /// the same rows the full fetch for that section would return.
    async fn count_section(
        &self,
        wedding_id: Uuid,
        section: SectionId,
    ) -> Result<i64, sqlx::Error>;
}
