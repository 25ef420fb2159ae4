use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use housing_desk::portal::{HousingStore, PortalError, Room, RoomDraft, RoomRegistry, RoomType};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Starter inventory loaded by `serve --seed` so a fresh process has rooms to
/// apply for.
pub(crate) fn seed_rooms<S>(registry: &RoomRegistry<S>) -> Result<Vec<Room>, PortalError>
where
    S: HousingStore + 'static,
{
    let drafts = [
        (
            "Aspen Suite",
            RoomType::Double,
            2,
            "South wing double with a shared study",
        ),
        (
            "Birch Hall",
            RoomType::Single,
            1,
            "Quiet single near the library",
        ),
        (
            "Cedar Court",
            RoomType::Quad,
            4,
            "Ground floor quad with courtyard access",
        ),
    ];

    drafts
        .into_iter()
        .map(|(name, room_type, capacity, description)| {
            let slug = name.to_ascii_lowercase().replace(' ', "-");
            registry.create(RoomDraft {
                name: name.to_string(),
                description: description.to_string(),
                image_url: format!("https://assets.housing.example/rooms/{slug}.jpg"),
                room_type,
                capacity,
            })
        })
        .collect()
}
