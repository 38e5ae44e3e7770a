use crate::model::{SectionId, WeddingDocument};
use crate::render::ir::{SectionIr, TableBlock};

use super::util;

pub fn overview(doc: &WeddingDocument) -> SectionIr {
    let o = &doc.overview;
    let mut pairs = vec![
        ("Couple".to_string(), doc.couple()),
        ("Date".to_string(), util::date(o.wedding_date)),
        ("Venue".to_string(), o.venue.clone()),
    ];
    if let Some(city) = &o.city {
        pairs.push(("City".to_string(), city.clone()));
    }
    if let Some(expected) = o.expected_guests {
        pairs.push(("Expected guests".to_string(), expected.to_string()));
    }
    if let Some(planner) = &o.planner_name {
        pairs.push(("Planner".to_string(), planner.clone()));
    }

    SectionIr::new(SectionId::Overview).key_values(pairs)
}

pub fn event_summary(doc: &WeddingDocument) -> Option<SectionIr> {
    let events = doc.events.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Event", 3.0),
        ("Date", 2.0),
        ("Start", 1.2),
        ("End", 1.2),
        ("Venue", 2.6),
        ("Notes", 3.0),
    ]);
    for event in events {
        table.row(vec![
            event.name.clone(),
            util::date(event.event_date),
            util::opt_time(&event.start_time),
            util::opt_time(&event.end_time),
            util::opt(&event.venue),
            util::opt(&event.notes),
        ]);
    }

    Some(SectionIr::new(SectionId::EventSummary).table(table))
}

pub fn budget_summary(doc: &WeddingDocument) -> Option<SectionIr> {
    let budget = doc.budget.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Category", 3.0),
        ("Projected", 1.6),
        ("Actual", 1.6),
        ("Variance", 1.6),
    ]);
    for category in &budget.categories {
        table.row(vec![
            category.name.clone(),
            util::money(category.projected_amount),
            util::money(category.actual_amount),
            util::money(category.variance()),
        ]);
    }

    // The grand total row is re-derived from the category rows at compose
    // time; it is never carried as its own fetched or cached figure.
    let totals = budget.totals();
    table.row(vec![
        "Total".to_string(),
        util::money(totals.projected),
        util::money(totals.actual),
        util::money(totals.variance),
    ]);

    Some(SectionIr::new(SectionId::BudgetSummary).table(table))
}

pub fn vendor_contacts(doc: &WeddingDocument) -> Option<SectionIr> {
    let data = doc.vendors.as_ref()?;
    let mut ir = SectionIr::new(SectionId::VendorContacts);

    if !data.vendors.is_empty() {
        let mut table = TableBlock::new(vec![
            ("Vendor", 2.6),
            ("Service", 2.2),
            ("Contact", 2.2),
            ("Phone", 1.8),
            ("Email", 2.6),
        ]);
        for vendor in &data.vendors {
            table.row(vec![
                vendor.name.clone(),
                util::opt(&vendor.service),
                util::opt(&vendor.contact_name),
                util::opt(&vendor.phone),
                util::opt(&vendor.email),
            ]);
        }
        ir = ir.table(table);
    }

    if !data.payments.is_empty() {
        let mut table = TableBlock::new(vec![
            ("Vendor", 2.6),
            ("Payment", 3.0),
            ("Due", 1.8),
            ("Amount", 1.6),
            ("Paid", 1.0),
        ]);
        for payment in &data.payments {
            table.row(vec![
                payment.vendor_name.clone(),
                util::opt(&payment.description),
                util::opt_date(&payment.due_date),
                util::money(payment.amount),
                util::yes_no(payment.paid),
            ]);
        }
        ir = ir.subheading("Payment Schedule").table(table);
    }

    Some(ir)
}

pub fn timeline(doc: &WeddingDocument) -> Option<SectionIr> {
    let tasks = doc.timeline.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Task", 3.6),
        ("Phase", 1.4),
        ("Due", 1.8),
        ("Owner", 2.0),
        ("Done", 1.0),
    ]);
    for task in tasks {
        table.row(vec![
            task.title.clone(),
            task.phase.clone(),
            util::opt_date(&task.due_date),
            util::opt(&task.owner),
            util::yes_no(task.completed),
        ]);
    }

    Some(SectionIr::new(SectionId::Timeline).table(table))
}
