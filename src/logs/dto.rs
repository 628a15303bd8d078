use serde::Serialize;
use time::Date;

use crate::dates::iso_date;
use crate::logs::model::DailyLog;
use crate::logs::services::LogOutcome;
use crate::nutrition::Macros;
use crate::plans::model::PlanItem;

#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub outcome: LogOutcome,
    pub log: DailyLog,
}

/// One planned item for today, joined with its recipe title and logged state.
#[derive(Debug, Serialize)]
pub struct TodayItem {
    #[serde(flatten)]
    pub item: PlanItem,
    pub recipe_title: Option<String>,
    pub logged: bool,
}

#[derive(Debug, Serialize)]
pub struct TodayView {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub kcal_target: u32,
    pub totals: Macros,
    pub items: Vec<TodayItem>,
}
