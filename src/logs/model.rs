use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::dates::iso_date;
use crate::nutrition::Macros;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    pub servings: f64,
    pub est_kcal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualFoodLog {
    pub name: String,
    pub est_kcal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub ml: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementLog {
    pub name: String,
    pub taken: bool,
}

/// Payload of a log entry, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum EntryDetails {
    Meal(MealLog),
    ManualFood(ManualFoodLog),
    Water(WaterLog),
    Supplement(SupplementLog),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(flatten)]
    pub details: EntryDetails,
}

impl LogEntry {
    pub fn meal(meal: MealLog, now: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: now,
            details: EntryDetails::Meal(meal),
        }
    }

    pub fn as_meal(&self) -> Option<&MealLog> {
        match &self.details {
            EntryDetails::Meal(m) => Some(m),
            _ => None,
        }
    }
}

/// Everything consumed on one calendar day plus its running macro totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub entries: Vec<LogEntry>,
    pub totals: Macros,
}

impl DailyLog {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            entries: Vec::new(),
            totals: Macros::default(),
        }
    }

    pub fn has_meal(&self, recipe_id: &str) -> bool {
        self.entries
            .iter()
            .filter_map(LogEntry::as_meal)
            .any(|m| m.recipe_id == recipe_id)
    }
}

pub fn find_day(logs: &[DailyLog], date: Date) -> Option<&DailyLog> {
    logs.iter().find(|l| l.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn entry_serializes_with_type_and_details() {
        let entry = LogEntry::meal(
            MealLog {
                recipe_id: "r1".into(),
                servings: 2.0,
                est_kcal: 600.0,
            },
            datetime!(2024-01-01 12:30 UTC),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "meal");
        assert_eq!(json["details"]["recipeId"], "r1");
        assert_eq!(json["details"]["est_kcal"], 600.0);
        assert_eq!(json["timestamp"], "2024-01-01T12:30:00Z");
        assert!(json["id"].is_string());
    }

    #[test]
    fn non_meal_entries_parse() {
        let water: LogEntry = serde_json::from_str(
            r#"{"id":"6f1c1f5e-8a44-4d3b-9d0e-0c0f4ad2a2b1","timestamp":"2024-01-01T08:00:00Z","type":"water","details":{"ml":250}}"#,
        )
        .unwrap();
        assert_eq!(water.details, EntryDetails::Water(WaterLog { ml: 250 }));
        assert!(water.as_meal().is_none());
    }

    #[test]
    fn has_meal_ignores_other_entry_kinds() {
        let mut log = DailyLog::empty(date!(2024 - 01 - 01));
        log.entries.push(LogEntry {
            id: Uuid::new_v4(),
            timestamp: datetime!(2024-01-01 08:00 UTC),
            details: EntryDetails::ManualFood(ManualFoodLog {
                name: "r1".into(),
                est_kcal: 90.0,
            }),
        });
        assert!(!log.has_meal("r1"));
    }
}
