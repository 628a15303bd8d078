use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use time::Date;
use tracing::debug;
use uuid::Uuid;

use crate::coach::dto::{ChatMessage, Sender};
use crate::dates::today_utc;
use crate::nutrition::Nutrition;
use crate::plans::model::{MealSlot, Plan, PlanItem, PlanScope, PlanTargets};
use crate::recipes::catalog::Recipe;
use crate::users::model::User;

/// Conversational coach. Replies may propose a plan and/or recipes.
#[async_trait]
pub trait CoachClient: Send + Sync {
    async fn respond(
        &self,
        prompt: &str,
        user: &User,
        history: &[ChatMessage],
    ) -> anyhow::Result<ChatMessage>;
}

/// Keyword-driven stand-in for a language-model coach.
#[derive(Clone)]
pub struct MockCoach {
    delay: Duration,
}

impl MockCoach {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

lazy_static! {
    static ref PLAN_MY_DAY: Regex = Regex::new(r"(?i)plan my day").unwrap();
    static ref SWAP: Regex = Regex::new(r"(?i)swap").unwrap();
}

const GENERATED_NUTRITION: Nutrition = Nutrition {
    kcal: 500.0,
    protein_g: 15.0,
    carbs_g: 90.0,
    fat_g: 10.0,
    fiber_g: 12.0,
    potassium_mg: None,
    vitamin_c_mg: None,
};

// (slot, title, kcal, minutes)
const DAY_MENU: [(MealSlot, &str, f64, u32); 4] = [
    (MealSlot::Breakfast, "AI Breakfast Hash", 450.0, 20),
    (MealSlot::Lunch, "AI Lunch Bowl", 650.0, 30),
    (MealSlot::Dinner, "AI Dinner Plate", 600.0, 40),
    (MealSlot::Snack, "AI Quick Snack", 100.0, 10),
];

fn fresh_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

fn generated_recipe(user: &User, title: &str, kcal: f64, time_minutes: u32, description: &str) -> Recipe {
    Recipe {
        id: fresh_id("recipe"),
        owner_id: None,
        title: title.into(),
        description: description.into(),
        appliances: user.preferences.appliances.clone(),
        ingredients: Vec::new(),
        steps: Vec::new(),
        tags: Vec::new(),
        est_nutrition: Nutrition {
            kcal,
            ..GENERATED_NUTRITION
        },
        time_minutes,
        servings_default: 1,
        is_system: false,
    }
}

fn plan_my_day(user: &User, today: Date) -> ChatMessage {
    let recipes: Vec<Recipe> = DAY_MENU
        .iter()
        .map(|(_, title, kcal, minutes)| {
            generated_recipe(user, title, *kcal, *minutes, "Generated for you.")
        })
        .collect();
    let items = DAY_MENU
        .iter()
        .zip(&recipes)
        .map(|((slot, ..), recipe)| PlanItem {
            date: today,
            meal_slot: *slot,
            recipe_id: recipe.id.clone(),
            servings: 1.0,
            lock: false,
        })
        .collect();
    let plan = Plan {
        id: fresh_id("plan"),
        user_id: "user_1".into(),
        scope: PlanScope::Daily,
        date_start: today,
        date_end: today,
        targets: PlanTargets {
            daily_kcal: user.preferences.kcal_target,
            meals_per_day: DAY_MENU.len() as u32,
        },
        items,
    };
    ChatMessage {
        plan: Some(plan),
        recipes: Some(recipes),
        cta: Some(vec!["Save Plan".into(), "Swap Lunch".into(), "Log Breakfast".into()]),
        ..ChatMessage::text(
            fresh_id("ai"),
            Sender::Ai,
            format!(
                "I've created a new daily plan for you with {} kcal, using your preferred appliances. Here are some new recipe ideas.",
                user.preferences.kcal_target
            ),
        )
    }
}

fn swap_meal(user: &User) -> ChatMessage {
    let recipe = generated_recipe(
        user,
        "AI Swapped Meal",
        GENERATED_NUTRITION.kcal,
        30,
        "A great alternative.",
    );
    ChatMessage {
        recipes: Some(vec![recipe]),
        cta: Some(vec!["Accept Swap".into(), "Log Meal".into()]),
        ..ChatMessage::text(fresh_id("ai"), Sender::Ai, "Sure, here is a swap suggestion for you.")
    }
}

fn help() -> ChatMessage {
    ChatMessage::text(
        fresh_id("ai"),
        Sender::Ai,
        "I'm your Potato Diet Coach! How can I help you today? You can ask me to plan your day, suggest a recipe, or swap a meal.",
    )
}

#[async_trait]
impl CoachClient for MockCoach {
    async fn respond(
        &self,
        prompt: &str,
        user: &User,
        history: &[ChatMessage],
    ) -> anyhow::Result<ChatMessage> {
        debug!(prompt, history = history.len(), "coach prompt");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reply = if PLAN_MY_DAY.is_match(prompt) {
            plan_my_day(user, today_utc())
        } else if SWAP.is_match(prompt) {
            swap_meal(user)
        } else {
            help()
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::model::sample_user;

    fn coach() -> MockCoach {
        MockCoach::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn plan_my_day_binds_items_to_new_recipes() {
        let user = sample_user(Some(80.0));
        let reply = coach().respond("Please PLAN my day", &user, &[]).await.unwrap();

        let plan = reply.plan.expect("plan proposed");
        let recipes = reply.recipes.expect("recipes proposed");
        assert_eq!(plan.items.len(), 4);
        assert_eq!(recipes.len(), 4);
        for (item, recipe) in plan.items.iter().zip(&recipes) {
            assert_eq!(item.recipe_id, recipe.id);
            assert_eq!(item.date, plan.date_start);
            assert!(!recipe.is_system);
            assert_eq!(recipe.appliances, user.preferences.appliances);
        }
        assert_eq!(plan.targets.daily_kcal, 1800);
        assert_eq!(recipes[1].est_nutrition.kcal, 650.0);
        assert_eq!(recipes[1].est_nutrition.protein_g, 15.0);
        assert!(reply.text.contains("1800 kcal"));
        assert_eq!(reply.sender, Sender::Ai);
    }

    #[tokio::test]
    async fn swap_returns_single_recipe() {
        let reply = coach()
            .respond("can you swap lunch?", &sample_user(None), &[])
            .await
            .unwrap();
        assert!(reply.plan.is_none());
        assert_eq!(reply.recipes.map(|r| r.len()), Some(1));
        assert_eq!(reply.cta.unwrap(), vec!["Accept Swap", "Log Meal"]);
    }

    #[tokio::test]
    async fn plan_keyword_needs_exact_spacing() {
        let reply = coach()
            .respond("plan  my\tday", &sample_user(None), &[])
            .await
            .unwrap();
        assert!(reply.plan.is_none());
    }

    #[tokio::test]
    async fn other_prompts_get_help_text() {
        let reply = coach().respond("hi", &sample_user(None), &[]).await.unwrap();
        assert!(reply.plan.is_none());
        assert!(reply.recipes.is_none());
        assert!(reply.text.contains("plan your day"));
    }

    #[tokio::test]
    async fn generated_ids_are_unique() {
        let user = sample_user(None);
        let a = coach().respond("swap", &user, &[]).await.unwrap();
        let b = coach().respond("swap", &user, &[]).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a.recipes.unwrap()[0].id, b.recipes.unwrap()[0].id);
    }
}
