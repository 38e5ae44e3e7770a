pub mod aggregates;
pub mod branding;
pub mod document;
pub mod section;

pub use aggregates::{
    AttendancePivot, BudgetTotals, MealTally, PivotRow, SectionCount, SectionCounts,
};
pub use branding::{Branding, RgbColor};
pub use document::{
    AccommodationData, AttendanceTuple, BarOrderRow, BeautyRow, BudgetCategoryRow, BudgetData,
    EventRow, FurnitureRow, GuestRow, LodgingRow, PaymentRow, RepurposingRow, RoomRow,
    ShoppingRow, StaffingRow, StationeryRow, TaskRow, TransportRow, VendorData, VendorRow,
    WeddingDocument, WeddingOverview,
};
pub use section::SectionId;
