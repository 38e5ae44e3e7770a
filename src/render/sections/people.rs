use std::collections::BTreeMap;

use crate::model::{SectionId, WeddingDocument};
use crate::render::ir::{SectionIr, TableBlock};

use super::util;

pub fn guest_list(doc: &WeddingDocument) -> Option<SectionIr> {
    let guests = doc.guests.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Guest", 2.8),
        ("Party", 1.6),
        ("RSVP", 1.4),
        ("Dietary Notes", 2.6),
        ("Contact", 2.6),
    ]);
    for guest in guests {
        let contact = match (&guest.email, &guest.phone) {
            (Some(email), _) => email.clone(),
            (None, Some(phone)) => phone.clone(),
            (None, None) => util::BLANK.to_string(),
        };
        table.row(vec![
            guest.full_name.clone(),
            util::opt(&guest.party),
            guest.rsvp_status.clone(),
            util::opt(&guest.dietary_notes),
            contact,
        ]);
    }

    let ir = SectionIr::new(SectionId::GuestList)
        .paragraph(format!("{} guests on the list.", guests.len()))
        .table(table);
    Some(ir)
}

pub fn attendance_matrix(doc: &WeddingDocument) -> Option<SectionIr> {
    let pivot = doc.attendance.as_ref()?;

    let mut columns = vec![("Guest", 2.8)];
    for event in &pivot.events {
        columns.push((event.as_str(), 1.5));
    }
    let mut table = TableBlock::new(columns);

    for row in &pivot.rows {
        let mut cells = vec![row.guest_name.clone()];
        cells.extend(row.attending.iter().map(|&a| util::yes_no(a)));
        table.row(cells);
    }

    Some(SectionIr::new(SectionId::AttendanceMatrix).table(table))
}

pub fn meal_selections(doc: &WeddingDocument) -> Option<SectionIr> {
    let tally = doc.meals.as_ref()?;
    let mut ir = SectionIr::new(SectionId::MealSelections).paragraph(format!(
        "Choices tallied across {} guests.",
        tally.guest_count
    ));

    for (label, bucket) in [
        ("Starters", &tally.starters),
        ("Mains", &tally.mains),
        ("Desserts", &tally.desserts),
    ] {
        if !bucket.is_empty() {
            ir = ir.subheading(label).table(tally_table("Choice", bucket));
        }
    }

    if !tally.dietary.is_empty() {
        ir = ir
            .subheading("Dietary Restrictions")
            .table(tally_table("Restriction", &tally.dietary));
    }

    Some(ir)
}

fn tally_table(label: &str, bucket: &BTreeMap<String, u32>) -> TableBlock {
    let mut table = TableBlock::new(vec![(label, 4.0), ("Guests", 1.2)]);
    for (choice, count) in bucket {
        table.row(vec![choice.clone(), count.to_string()]);
    }
    table
}
