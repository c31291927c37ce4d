use std::sync::Arc;
use serde_json::{json, Value};

use shared_config::{AppConfig, MatchPolicy, SlotPolicy};

pub struct TestConfig {
    pub slot_step_minutes: i32,
    pub min_id_digits: usize,
    pub max_id_digits: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            slot_step_minutes: 15,
            min_id_digits: 10,
            max_id_digits: 13,
        }
    }
}

impl TestConfig {
    pub fn with_step(step_minutes: i32) -> Self {
        Self {
            slot_step_minutes: step_minutes,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            slot_policy: SlotPolicy {
                step_minutes: self.slot_step_minutes,
            },
            match_policy: MatchPolicy {
                min_id_digits: self.min_id_digits,
                max_id_digits: self.max_id_digits,
                ..MatchPolicy::default()
            },
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Documents shaped like the ones the client, staff and appointment stores hand back.
pub struct MockDocuments;

impl MockDocuments {
    pub fn client(id: &str, first_name: &str, last_name: &str) -> Value {
        json!({
            "id": id,
            "firstName": first_name,
            "lastName": last_name,
            "email": format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase()),
            "phone": "+27 82 000 0000"
        })
    }

    pub fn client_with_id_number(id: &str, first_name: &str, last_name: &str, id_number: &str) -> Value {
        let mut client = Self::client(id, first_name, last_name);
        client["idNumber"] = json!(id_number);
        client
    }

    pub fn window(start: &str, end: &str) -> Value {
        json!({
            "isAvailable": true,
            "start": start,
            "end": end
        })
    }

    pub fn closed_window(start: &str, end: &str) -> Value {
        json!({
            "isAvailable": false,
            "start": start,
            "end": end
        })
    }

    pub fn booking(staff_id: &str, date: &str, start_minute: i32, duration_minutes: i32) -> Value {
        json!({
            "staffId": staff_id,
            "date": date,
            "startMinute": start_minute,
            "durationMinutes": duration_minutes
        })
    }

    /// A Monday-to-Friday 09:00-17:00 schedule with a 12:00-13:00 lunch gap.
    pub fn weekday_availability() -> Value {
        let day = json!([
            Self::window("09:00", "12:00"),
            Self::window("13:00", "17:00")
        ]);

        json!({
            "monday": day.clone(),
            "tuesday": day.clone(),
            "wednesday": day.clone(),
            "thursday": day.clone(),
            "friday": day,
            "saturday": [],
            "sunday": []
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({
            "error": message
        })
    }
}
