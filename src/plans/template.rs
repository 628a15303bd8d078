use time::Date;

use crate::plans::model::{MealSlot, Plan, PlanItem, PlanScope, PlanTargets};

const TEMPLATE_PLAN_ID: &str = "mock_plan_1";
const TEMPLATE_USER_ID: &str = "user_1";

// (slot, recipe, servings)
const TEMPLATE_DAY: [(MealSlot, &str, f64); 4] = [
    (MealSlot::Breakfast, "sys_recipe_4", 1.0),
    (MealSlot::Lunch, "sys_recipe_2", 2.0),
    (MealSlot::Dinner, "sys_recipe_1", 1.0),
    (MealSlot::Snack, "sys_recipe_5", 1.0),
];

/// Single-day starter plan handed out at the end of onboarding.
pub fn starter_plan(day: Date) -> Plan {
    Plan {
        id: TEMPLATE_PLAN_ID.into(),
        user_id: TEMPLATE_USER_ID.into(),
        scope: PlanScope::Daily,
        date_start: day,
        date_end: day,
        targets: PlanTargets {
            daily_kcal: 1800,
            meals_per_day: TEMPLATE_DAY.len() as u32,
        },
        items: TEMPLATE_DAY
            .iter()
            .map(|(slot, recipe_id, servings)| PlanItem {
                date: day,
                meal_slot: *slot,
                recipe_id: (*recipe_id).into(),
                servings: *servings,
                lock: false,
            })
            .collect(),
    }
}
