use std::borrow::Cow;
use std::collections::HashSet;

use time::Date;
use tracing::{debug, info};

use crate::plans::model::{MealSlot, Plan, PlanItem};
use crate::recipes::catalog::RecipeCatalog;
use crate::users::model::Profile;

/// Daily protein requirement per kilogram of body weight.
pub const PROTEIN_G_PER_KG: f64 = 0.8;

/// Which catalog recipe fills a protein gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinPolicy {
    pub supplement_recipe_id: String,
}

impl ProteinPolicy {
    pub fn new(supplement_recipe_id: impl Into<String>) -> Self {
        Self {
            supplement_recipe_id: supplement_recipe_id.into(),
        }
    }

    /// Grams per day, or `None` when the profile carries no usable weight.
    pub fn target_for(&self, profile: &Profile) -> Option<f64> {
        profile
            .weight_kg
            .filter(|w| *w > 0.0)
            .map(|w| w * PROTEIN_G_PER_KG)
    }

    fn supplement_on(&self, date: Date) -> PlanItem {
        PlanItem {
            date,
            meal_slot: MealSlot::Snack,
            recipe_id: self.supplement_recipe_id.clone(),
            servings: 1.0,
            lock: false,
        }
    }
}

/// Protein scheduled on `date`; items with unknown recipes count as zero.
pub fn day_protein<C: RecipeCatalog + ?Sized>(plan: &Plan, date: Date, catalog: &C) -> f64 {
    plan.items_on(date)
        .filter_map(|item| {
            catalog
                .lookup(&item.recipe_id)
                .map(|r| r.est_nutrition.protein_g * item.servings)
        })
        .sum()
}

/// Adds one supplement snack to every plan day whose protein falls short of
/// the profile's target.
///
/// Returns the input borrowed when nothing was inserted, so callers can tell a
/// no-op apart from a rewrite. Otherwise the returned plan holds the original
/// items plus the inserted ones, stably sorted by date and slot.
pub fn augment<'a, C: RecipeCatalog + ?Sized>(
    plan: &'a Plan,
    profile: &Profile,
    catalog: &C,
    policy: &ProteinPolicy,
) -> Cow<'a, Plan> {
    let Some(target) = policy.target_for(profile) else {
        debug!(plan_id = %plan.id, "no body weight on profile; skipping augmentation");
        return Cow::Borrowed(plan);
    };

    let mut seen = HashSet::new();
    let dates: Vec<Date> = plan
        .items
        .iter()
        .map(|i| i.date)
        .filter(|d| seen.insert(*d))
        .collect();

    let mut inserted = Vec::new();
    for date in dates {
        let has_supplement = plan
            .items_on(date)
            .any(|i| i.recipe_id == policy.supplement_recipe_id);
        if has_supplement {
            continue;
        }

        let protein = day_protein(plan, date, catalog);
        if protein < target {
            debug!(%date, protein, target, "day below protein target");
            inserted.push(policy.supplement_on(date));
        }
    }

    if inserted.is_empty() {
        return Cow::Borrowed(plan);
    }

    info!(plan_id = %plan.id, inserted = inserted.len(), target, "plan augmented");
    let mut items = plan.items.clone();
    items.extend(inserted);
    items.sort_by_key(PlanItem::sort_key);
    Cow::Owned(Plan {
        items,
        ..plan.clone()
    })
}

/// Owned-input form of [`augment`] for callers that adopt the result.
pub fn augment_owned<C: RecipeCatalog + ?Sized>(
    plan: Plan,
    profile: &Profile,
    catalog: &C,
    policy: &ProteinPolicy,
) -> Plan {
    let augmented = match augment(&plan, profile, catalog, policy) {
        Cow::Owned(p) => Some(p),
        Cow::Borrowed(_) => None,
    };
    augmented.unwrap_or(plan)
}
