use std::borrow::Cow;

use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::logs::model::{DailyLog, LogEntry, MealLog};
use crate::plans::model::PlanItem;
use crate::recipes::catalog::RecipeCatalog;

/// What a `log_meal` call did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOutcome {
    Logged,
    AlreadyLogged,
    UnknownRecipe,
}

/// Records `item` as eaten on `today`.
///
/// The input is never mutated. When nothing changes (unknown recipe, or the
/// recipe is already logged that day) the same slice comes back borrowed.
pub fn log_meal<'a, C: RecipeCatalog + ?Sized>(
    logs: &'a [DailyLog],
    item: &PlanItem,
    catalog: &C,
    today: Date,
    now: OffsetDateTime,
) -> (Cow<'a, [DailyLog]>, LogOutcome) {
    let Some(recipe) = catalog.lookup(&item.recipe_id) else {
        warn!(recipe_id = %item.recipe_id, "log_meal: unknown recipe");
        return (Cow::Borrowed(logs), LogOutcome::UnknownRecipe);
    };

    let macros = recipe.est_nutrition.scaled(item.servings);
    let entry = LogEntry::meal(
        MealLog {
            recipe_id: item.recipe_id.clone(),
            servings: item.servings,
            est_kcal: macros.kcal,
        },
        now,
    );

    let Some(idx) = logs.iter().position(|l| l.date == today) else {
        let mut out = logs.to_vec();
        out.push(DailyLog {
            date: today,
            entries: vec![entry],
            totals: macros,
        });
        info!(%today, recipe_id = %item.recipe_id, kcal = macros.kcal, "meal logged; day opened");
        return (Cow::Owned(out), LogOutcome::Logged);
    };

    if logs[idx].has_meal(&item.recipe_id) {
        debug!(%today, recipe_id = %item.recipe_id, "meal already logged today");
        return (Cow::Borrowed(logs), LogOutcome::AlreadyLogged);
    }

    let mut out = logs.to_vec();
    let day = &mut out[idx];
    day.entries.push(entry);
    day.totals += macros;
    info!(%today, recipe_id = %item.recipe_id, kcal = macros.kcal, total_kcal = day.totals.kcal, "meal logged");
    (Cow::Owned(out), LogOutcome::Logged)
}

/// Materializes an empty log for `today` if the collection has none yet.
pub fn ensure_day(logs: &[DailyLog], today: Date) -> Cow<'_, [DailyLog]> {
    if logs.iter().any(|l| l.date == today) {
        return Cow::Borrowed(logs);
    }
    let mut out = logs.to_vec();
    out.push(DailyLog::empty(today));
    Cow::Owned(out)
}
