use crate::model::{SectionId, WeddingDocument};
use crate::render::ir::{SectionIr, TableBlock};

use super::util;

pub fn bar_orders(doc: &WeddingDocument) -> Option<SectionIr> {
    let orders = doc.bar_orders.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Beverage", 2.8),
        ("Category", 1.8),
        ("Qty", 1.0),
        ("Unit", 1.2),
        ("Supplier", 2.2),
        ("Event", 2.0),
    ]);
    for order in orders {
        table.row(vec![
            order.beverage.clone(),
            util::opt(&order.category),
            order.quantity.to_string(),
            util::opt(&order.unit),
            util::opt(&order.supplier),
            util::opt(&order.event_name),
        ]);
    }

    Some(SectionIr::new(SectionId::BarOrders).table(table))
}

pub fn furniture(doc: &WeddingDocument) -> Option<SectionIr> {
    let items = doc.furniture.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Item", 3.0),
        ("Category", 2.0),
        ("Source", 2.0),
        ("Event", 2.0),
        ("Qty", 1.0),
    ]);
    for item in items {
        table.row(vec![
            item.item.clone(),
            util::opt(&item.category),
            util::opt(&item.source),
            util::opt(&item.event_name),
            item.quantity.to_string(),
        ]);
    }

    Some(SectionIr::new(SectionId::Furniture).table(table))
}

pub fn repurposing(doc: &WeddingDocument) -> Option<SectionIr> {
    let moves = doc.repurposing.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Item", 2.6),
        ("From", 2.0),
        ("To", 2.0),
        ("Instructions", 3.6),
    ]);
    for mv in moves {
        table.row(vec![
            mv.item.clone(),
            mv.from_event.clone(),
            mv.to_event.clone(),
            util::opt(&mv.instructions),
        ]);
    }

    Some(SectionIr::new(SectionId::Repurposing).table(table))
}

pub fn transportation(doc: &WeddingDocument) -> Option<SectionIr> {
    let shuttles = doc.transportation.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Route", 3.0),
        ("Departs", 2.2),
        ("Vehicle", 2.0),
        ("Seats", 1.0),
        ("Passengers", 2.4),
    ]);
    for shuttle in shuttles {
        table.row(vec![
            shuttle.route.clone(),
            util::opt_datetime(&shuttle.departs_at),
            util::opt(&shuttle.vehicle),
            util::opt_i32(&shuttle.seats),
            util::opt(&shuttle.passenger_group),
        ]);
    }

    Some(SectionIr::new(SectionId::Transportation).table(table))
}

pub fn accommodation(doc: &WeddingDocument) -> Option<SectionIr> {
    let data = doc.accommodation.as_ref()?;
    let mut ir = SectionIr::new(SectionId::Accommodation);

    if !data.properties.is_empty() {
        let mut table = TableBlock::new(vec![
            ("Property", 2.8),
            ("Address", 3.4),
            ("Check-in", 1.8),
            ("Check-out", 1.8),
        ]);
        for lodging in &data.properties {
            table.row(vec![
                lodging.name.clone(),
                util::opt(&lodging.address),
                util::opt_date(&lodging.check_in),
                util::opt_date(&lodging.check_out),
            ]);
        }
        ir = ir.table(table);
    }

    if !data.rooms.is_empty() {
        let mut table = TableBlock::new(vec![
            ("Property", 2.6),
            ("Room", 2.0),
            ("Occupant", 2.4),
            ("Nights", 1.2),
            ("Rate", 1.4),
        ]);
        for room in &data.rooms {
            table.row(vec![
                room.lodging_name.clone(),
                util::opt(&room.room_type),
                util::opt(&room.occupant),
                util::opt_i32(&room.nights),
                util::opt_money(&room.rate),
            ]);
        }
        ir = ir.subheading("Room Assignments").table(table);
    }

    Some(ir)
}

pub fn shopping_list(doc: &WeddingDocument) -> Option<SectionIr> {
    let items = doc.shopping.as_ref()?;

    let mut table = TableBlock::new(vec![
        ("Item", 3.2),
        ("Qty", 1.0),
        ("Store", 2.2),
        ("Est. Price", 1.6),
        ("Purchased", 1.4),
    ]);
    for item in items {
        table.row(vec![
            item.item.clone(),
            item.quantity.to_string(),
            util::opt(&item.store),
            util::opt_money(&item.estimated_price),
            util::yes_no(item.purchased),
        ]);
    }

    Some(SectionIr::new(SectionId::ShoppingList).table(table))
}
