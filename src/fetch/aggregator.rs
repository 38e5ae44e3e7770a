use futures::future::try_join_all;
use uuid::Uuid;

use crate::core::{ExportError, ExportResult};
use crate::model::{
    AccommodationData, AttendancePivot, BudgetData, MealTally, SectionCount, SectionCounts,
    SectionId, VendorData, WeddingDocument,
};

use super::store::WeddingStore;

/// Builds the unified document model for one export request.
///
/// The overview is fetched first since every other query depends on the
/// wedding existing; a missing wedding is `NotFound`. All other requested
/// sections are then fetched concurrently and joined with a first-failure
/// barrier. Fetches with a shared upstream (the guest table feeds the
/// guest list, the meal tally and the attendance pivot; the event table
/// feeds the event summary and the pivot) are issued once and fanned out.
/// Any query error fails the whole aggregation; no partial document is
/// ever returned.
pub async fn assemble_document<S>(
    store: &S,
    wedding_id: Uuid,
    sections: &[SectionId],
) -> ExportResult<WeddingDocument>
where
    S: WeddingStore + ?Sized,
{
    let overview = store
        .overview(wedding_id)
        .await
        .map_err(|e| ExportError::fetch(SectionId::Overview, e))?
        .ok_or(ExportError::NotFound(wedding_id))?;

    let wants = |s: SectionId| sections.contains(&s);

    let need_guests = wants(SectionId::GuestList)
        || wants(SectionId::MealSelections)
        || wants(SectionId::AttendanceMatrix);
    let need_events = wants(SectionId::EventSummary) || wants(SectionId::AttendanceMatrix);

    // Error attribution for shared fetches: blame the first section in
    // canonical order that asked for the data.
    let guests_blame = if wants(SectionId::GuestList) {
        SectionId::GuestList
    } else if wants(SectionId::AttendanceMatrix) {
        SectionId::AttendanceMatrix
    } else {
        SectionId::MealSelections
    };
    let events_blame = if wants(SectionId::EventSummary) {
        SectionId::EventSummary
    } else {
        SectionId::AttendanceMatrix
    };

    tracing::debug!(%wedding_id, requested = sections.len(), "assembling export document");

    let guests_fut = async {
        if need_guests {
            store
                .guests(wedding_id)
                .await
                .map(Some)
                .map_err(|e| ExportError::fetch(guests_blame, e))
        } else {
            Ok(None)
        }
    };
    let events_fut = async {
        if need_events {
            store
                .events(wedding_id)
                .await
                .map(Some)
                .map_err(|e| ExportError::fetch(events_blame, e))
        } else {
            Ok(None)
        }
    };
    let attendance_fut = async {
        if wants(SectionId::AttendanceMatrix) {
            store
                .attendance(wedding_id)
                .await
                .map(Some)
                .map_err(|e| ExportError::fetch(SectionId::AttendanceMatrix, e))
        } else {
            Ok(None)
        }
    };
    let bar_fut = section_fetch(wants(SectionId::BarOrders), SectionId::BarOrders, || {
        store.bar_orders(wedding_id)
    });
    let furniture_fut = section_fetch(wants(SectionId::Furniture), SectionId::Furniture, || {
        store.furniture(wedding_id)
    });
    let repurposing_fut =
        section_fetch(wants(SectionId::Repurposing), SectionId::Repurposing, || {
            store.repurposing(wedding_id)
        });
    let staffing_fut = section_fetch(wants(SectionId::Staffing), SectionId::Staffing, || {
        store.staffing(wedding_id)
    });
    let transport_fut = section_fetch(
        wants(SectionId::Transportation),
        SectionId::Transportation,
        || store.transportation(wedding_id),
    );
    let stationery_fut = section_fetch(wants(SectionId::Stationery), SectionId::Stationery, || {
        store.stationery(wedding_id)
    });
    let beauty_fut = section_fetch(
        wants(SectionId::BeautyServices),
        SectionId::BeautyServices,
        || store.beauty(wedding_id),
    );
    let lodgings_fut = section_fetch(
        wants(SectionId::Accommodation),
        SectionId::Accommodation,
        || store.lodgings(wedding_id),
    );
    let rooms_fut = section_fetch(
        wants(SectionId::Accommodation),
        SectionId::Accommodation,
        || store.rooms(wedding_id),
    );
    let shopping_fut = section_fetch(
        wants(SectionId::ShoppingList),
        SectionId::ShoppingList,
        || store.shopping(wedding_id),
    );
    let budget_fut = section_fetch(
        wants(SectionId::BudgetSummary),
        SectionId::BudgetSummary,
        || store.budget_categories(wedding_id),
    );
    let vendors_fut = section_fetch(
        wants(SectionId::VendorContacts),
        SectionId::VendorContacts,
        || store.vendors(wedding_id),
    );
    let payments_fut = section_fetch(
        wants(SectionId::VendorContacts),
        SectionId::VendorContacts,
        || store.payments(wedding_id),
    );
    let tasks_fut = section_fetch(wants(SectionId::Timeline), SectionId::Timeline, || {
        store.tasks(wedding_id)
    });

    let (
        guests,
        events,
        attendance,
        bar_orders,
        furniture,
        repurposing,
        staffing,
        transportation,
        stationery,
        beauty,
        lodgings,
        rooms,
        shopping,
        budget_categories,
        vendors,
        payments,
        tasks,
    ) = futures::try_join!(
        guests_fut,
        events_fut,
        attendance_fut,
        bar_fut,
        furniture_fut,
        repurposing_fut,
        staffing_fut,
        transport_fut,
        stationery_fut,
        beauty_fut,
        lodgings_fut,
        rooms_fut,
        shopping_fut,
        budget_fut,
        vendors_fut,
        payments_fut,
        tasks_fut,
    )?;

    let mut doc = WeddingDocument::new(wedding_id, overview);

    // Derived aggregates come off the shared fetches before those move
    // into the model.
    if wants(SectionId::MealSelections) {
        doc.meals = Some(MealTally::from_guests(guests.as_deref().unwrap_or(&[])));
    }
    if wants(SectionId::AttendanceMatrix) {
        doc.attendance = Some(AttendancePivot::build(
            guests.as_deref().unwrap_or(&[]),
            events.as_deref().unwrap_or(&[]),
            attendance.as_deref().unwrap_or(&[]),
        ));
    }
    if wants(SectionId::GuestList) {
        doc.guests = guests;
    }
    if wants(SectionId::EventSummary) {
        doc.events = events;
    }
    doc.bar_orders = bar_orders;
    doc.furniture = furniture;
    doc.repurposing = repurposing;
    doc.staffing = staffing;
    doc.transportation = transportation;
    doc.stationery = stationery;
    doc.beauty = beauty;
    if wants(SectionId::Accommodation) {
        doc.accommodation = Some(AccommodationData {
            properties: lodgings.unwrap_or_default(),
            rooms: rooms.unwrap_or_default(),
        });
    }
    doc.shopping = shopping;
    if wants(SectionId::BudgetSummary) {
        doc.budget = Some(BudgetData {
            categories: budget_categories.unwrap_or_default(),
        });
    }
    if wants(SectionId::VendorContacts) {
        doc.vendors = Some(VendorData {
            vendors: vendors.unwrap_or_default(),
            payments: payments.unwrap_or_default(),
        });
    }
    doc.timeline = tasks;

    Ok(doc)
}

/// Wraps one optional section fetch: skipped sections resolve to `None`
/// without touching the store, failures carry the owning section.
async fn section_fetch<T, F, Fut>(
    requested: bool,
    section: SectionId,
    fetch: F,
) -> ExportResult<Option<Vec<T>>>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<Vec<T>, sqlx::Error>>,
{
    if requested {
        fetch()
            .await
            .map(Some)
            .map_err(|e| ExportError::fetch(section, e))
    } else {
        Ok(None)
    }
}

/// The export-size preview: row counts for every section in one batched
/// round of independent count queries. Fresh per request, never cached.
pub async fn section_counts<S>(store: &S, wedding_id: Uuid) -> ExportResult<SectionCounts>
where
    S: WeddingStore + ?Sized,
{
    store
        .overview(wedding_id)
        .await
        .map_err(|e| ExportError::fetch(SectionId::Overview, e))?
        .ok_or(ExportError::NotFound(wedding_id))?;

    let counts = try_join_all(SectionId::ALL.iter().map(|&section| async move {
        store
            .count_section(wedding_id, section)
            .await
            .map(|rows| SectionCount { section, rows })
            .map_err(|e| ExportError::fetch(section, e))
    }))
    .await?;

    Ok(SectionCounts { wedding_id, counts })
}
