use serde_json::json;

/// One event type entry for a test catalog document.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTypeFixture {
    pub event_id: String,
    pub event_type: String,
    pub points_per_minute: f64,
}

impl EventTypeFixture {
    pub fn new(event_id: &str, event_type: &str, points_per_minute: f64) -> Self {
        Self {
            event_id: event_id.to_string(),
            event_type: event_type.to_string(),
            points_per_minute,
        }
    }
}

/// Trivia Night at 2 points per minute.
pub fn trivia() -> EventTypeFixture {
    EventTypeFixture::new("trivia", "Trivia Night", 2.0)
}

/// Raid at 1.5 points per minute.
pub fn raid() -> EventTypeFixture {
    EventTypeFixture::new("raid", "Raid", 1.5)
}

/// Renders event types as a catalog document in the `{"events": [...]}` form.
pub fn catalog_json(event_types: &[EventTypeFixture]) -> String {
    let events: Vec<serde_json::Value> = event_types
        .iter()
        .map(|event_type| {
            json!({
                "event_id": event_type.event_id,
                "event_type": event_type.event_type,
                "points_per_minute": event_type.points_per_minute,
            })
        })
        .collect();

    json!({ "events": events }).to_string()
}
