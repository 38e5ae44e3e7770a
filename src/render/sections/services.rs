use crate::model::{SectionId, WeddingDocument};
use crate::render::ir::{SectionIr, TableBlock};

use super::util;

pub fn staffing(doc: &WeddingDocument) -> Option<SectionIr> {
    let requirements = doc.staffing.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Role", 2.6),
        ("Headcount", 1.4),
        ("Event", 2.2),
        ("Shift Start", 1.6),
        ("Shift End", 1.6),
        ("Notes", 2.6),
    ]);
    for req in requirements {
        table.row(vec![
            req.role.clone(),
            req.headcount.to_string(),
            util::opt(&req.event_name),
            util::opt_time(&req.shift_start),
            util::opt_time(&req.shift_end),
            util::opt(&req.notes),
        ]);
    }

    Some(SectionIr::new(SectionId::Staffing).table(table))
}

pub fn stationery(doc: &WeddingDocument) -> Option<SectionIr> {
    let items = doc.stationery.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Item", 3.0),
        ("Qty", 1.0),
        ("Status", 1.8),
        ("Notes", 3.2),
    ]);
    for item in items {
        table.row(vec![
            item.item.clone(),
            item.quantity.to_string(),
            util::opt(&item.status),
            util::opt(&item.notes),
        ]);
    }

    Some(SectionIr::new(SectionId::Stationery).table(table))
}

pub fn beauty_services(doc: &WeddingDocument) -> Option<SectionIr> {
    let appointments = doc.beauty.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Person", 2.4),
        ("Service", 2.4),
        ("Provider", 2.2),
        ("When", 2.2),
        ("Location", 2.2),
    ]);
    for appt in appointments {
        table.row(vec![
            appt.person.clone(),
            appt.service.clone(),
            util::opt(&appt.provider),
            util::opt_datetime(&appt.scheduled_at),
            util::opt(&appt.location),
        ]);
    }

    Some(SectionIr::new(SectionId::BeautyServices).table(table))
}
