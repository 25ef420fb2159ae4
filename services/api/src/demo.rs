use clap::Args;
use std::sync::Arc;

use housing_desk::error::AppError;
use housing_desk::portal::{
    ApplicationLedger, MemoryStore, RoomDraft, RoomRegistry, RoomType, UserId,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Stop after intake and skip the review portion of the demo.
    #[arg(long)]
    pub(crate) skip_review: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { skip_review } = args;

    println!("Student housing desk demo");

    let store = Arc::new(MemoryStore::default());
    let registry = Arc::new(RoomRegistry::new(store.clone()));
    let ledger = Arc::new(ApplicationLedger::new(store));

    println!("\nRoom inventory");
    let aspen = registry.create(demo_room("Aspen Suite", RoomType::Double, 2))?;
    let birch = registry.create(demo_room("Birch Hall", RoomType::Single, 1))?;
    let cedar = registry.create(demo_room("Cedar Court", RoomType::Quad, 4))?;
    for room in registry.list()? {
        println!(
            "- {} [{}] {} ({} seats)",
            room.id.0,
            room.room_type.label(),
            room.name,
            room.capacity
        );
    }

    println!("\nIntake");
    let novak = ledger.submit(UserId("stu-novak".to_string()), birch.id.clone())?;
    println!("- {} applied for {}", novak.user_id.0, birch.name);
    let osei = ledger.submit(UserId("stu-osei".to_string()), aspen.id.clone())?;
    println!("- {} applied for {}", osei.user_id.0, aspen.name);
    let ito = ledger.submit(UserId("stu-ito".to_string()), birch.id.clone())?;
    println!("- {} applied for {}", ito.user_id.0, birch.name);

    if skip_review {
        println!(
            "\nReview skipped; {} applications left pending",
            ledger.list()?.len()
        );
        return Ok(());
    }

    println!("\nReview");
    let approved = ledger.update_status(&novak.id, "approved", Some("1A".to_string()))?;
    println!(
        "- {} approved for {} (room {})",
        approved.user_id.0,
        birch.name,
        approved.room_number.as_deref().unwrap_or("unassigned")
    );

    match ledger.update_status(&ito.id, "approved", Some("1B".to_string())) {
        Ok(_) => println!("- {} approved unexpectedly", ito.user_id.0),
        Err(err) => println!("- {} stays pending: {}", ito.user_id.0, err),
    }

    let moved = ledger.submit(UserId("stu-ito".to_string()), cedar.id.clone())?;
    println!("- {} resubmitted for {}", moved.user_id.0, cedar.name);
    let moved = ledger.update_status(&moved.id, "accepted", Some("C-2".to_string()))?;
    println!(
        "- {} approved for {} (room {})",
        moved.user_id.0,
        cedar.name,
        moved.room_number.as_deref().unwrap_or("unassigned")
    );

    let osei = ledger.update_status(&osei.id, "approved", Some("A-12".to_string()))?;
    println!(
        "- {} approved for {} (room {})",
        osei.user_id.0,
        aspen.name,
        osei.room_number.as_deref().unwrap_or("unassigned")
    );
    ledger.delete(&osei.id)?;
    println!("- {} withdrew; the seat reopened", osei.user_id.0);

    println!("\nOccupancy");
    for room in registry.list()? {
        println!(
            "- {}: {}/{} seats taken ({} open)",
            room.name,
            room.occupancy,
            room.capacity,
            room.remaining()
        );
    }

    println!("\nLedger");
    for view in ledger.list()? {
        println!(
            "- {} | {} | {} | {} | room {}",
            view.id.0,
            view.user_id.0,
            view.room.name,
            view.status.label(),
            view.room_number.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

fn demo_room(name: &str, room_type: RoomType, capacity: u32) -> RoomDraft {
    let slug = name.to_ascii_lowercase().replace(' ', "-");
    RoomDraft {
        name: name.to_string(),
        description: format!("{name} demo listing"),
        image_url: format!("https://assets.housing.example/rooms/{slug}.jpg"),
        room_type,
        capacity,
    }
}
