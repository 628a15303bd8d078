use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::iso_date;
use crate::error::ValidationError;

/// Meal slots in canonical display order; the derived `Ord` is the slot rank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanScope {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meal_slot: MealSlot,
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    pub servings: f64,
    #[serde(default)]
    pub lock: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanTargets {
    pub daily_kcal: u32,
    pub meals_per_day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub scope: PlanScope,
    #[serde(with = "iso_date")]
    pub date_start: Date,
    #[serde(with = "iso_date")]
    pub date_end: Date,
    pub targets: PlanTargets,
    pub items: Vec<PlanItem>,
}

impl PlanItem {
    /// Canonical ordering key: date first, then slot rank.
    pub fn sort_key(&self) -> (Date, MealSlot) {
        (self.date, self.meal_slot)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.servings.is_finite() && self.servings > 0.0) {
            return Err(ValidationError::Servings(self.servings));
        }
        Ok(())
    }
}

impl Plan {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date_start > self.date_end {
            return Err(ValidationError::DateRange {
                start: self.date_start.to_string(),
                end: self.date_end.to_string(),
            });
        }
        self.items.iter().try_for_each(PlanItem::validate)
    }

    pub fn items_on(&self, date: Date) -> impl Iterator<Item = &PlanItem> {
        self.items.iter().filter(move |i| i.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn slot_rank_follows_day_order() {
        assert!(MealSlot::Breakfast < MealSlot::Lunch);
        assert!(MealSlot::Lunch < MealSlot::Dinner);
        assert!(MealSlot::Dinner < MealSlot::Snack);
    }

    #[test]
    fn plan_item_wire_names() {
        let item = PlanItem {
            date: date!(2024 - 01 - 01),
            meal_slot: MealSlot::Snack,
            recipe_id: "r1".into(),
            servings: 1.0,
            lock: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["recipeId"], "r1");
        assert_eq!(json["meal_slot"], "snack");
        assert_eq!(json["date"], "2024-01-01");
    }

    #[test]
    fn lock_defaults_to_false() {
        let item: PlanItem = serde_json::from_str(
            r#"{"date":"2024-03-02","meal_slot":"lunch","recipeId":"x","servings":2}"#,
        )
        .unwrap();
        assert!(!item.lock);
        assert_eq!(item.servings, 2.0);
    }

    #[test]
    fn validate_rejects_non_positive_servings() {
        let item = PlanItem {
            date: date!(2024 - 01 - 01),
            meal_slot: MealSlot::Lunch,
            recipe_id: "r1".into(),
            servings: 0.0,
            lock: false,
        };
        assert_eq!(item.validate(), Err(ValidationError::Servings(0.0)));
    }
}
