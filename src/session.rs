use std::borrow::Cow;

use time::{Date, OffsetDateTime};
use tracing::info;

use crate::coach::dto::ChatMessage;
use crate::logs::model::{find_day, DailyLog};
use crate::logs::services::{ensure_day, log_meal, LogOutcome};
use crate::plans::model::{Plan, PlanItem};
use crate::plans::services::{augment_owned, ProteinPolicy};
use crate::plans::template::starter_plan;
use crate::recipes::catalog::{Catalog, Recipe};
use crate::users::model::User;

/// Everything one user's session holds in memory.
///
/// Each mutation replaces a field wholesale with the snapshot returned by the
/// plan or log engine.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: Option<User>,
    pub catalog: Catalog,
    pub plan: Option<Plan>,
    pub logs: Vec<DailyLog>,
    pub chat: Vec<ChatMessage>,
    policy: ProteinPolicy,
}

impl Session {
    pub fn new(policy: ProteinPolicy) -> Self {
        Self {
            user: None,
            catalog: Catalog::with_system_recipes(),
            plan: None,
            logs: Vec::new(),
            chat: vec![ChatMessage::greeting()],
            policy,
        }
    }

    /// Stores the user, hands out the augmented starter plan and opens today's log.
    pub fn onboard(&mut self, user: User, today: Date) -> &Plan {
        let start = user.diet_window.start_date.unwrap_or(today);
        let plan = augment_owned(starter_plan(start), &user.profile, &self.catalog, &self.policy);
        info!(plan_id = %plan.id, %start, items = plan.items.len(), "onboarding completed");
        self.user = Some(user);
        self.open_day(today);
        self.plan.insert(plan)
    }

    /// Adopts a plan. It is augmented against the current user when there is one.
    pub fn save_plan(&mut self, plan: Plan) -> &Plan {
        let plan = match &self.user {
            Some(user) => augment_owned(plan, &user.profile, &self.catalog, &self.policy),
            None => plan,
        };
        info!(plan_id = %plan.id, items = plan.items.len(), "plan saved");
        self.plan.insert(plan)
    }

    pub fn add_recipes(&mut self, recipes: &[Recipe]) -> usize {
        self.catalog.merge(recipes)
    }

    pub fn log_meal(&mut self, item: &PlanItem, today: Date, now: OffsetDateTime) -> LogOutcome {
        let (logs, outcome) = log_meal(&self.logs, item, &self.catalog, today, now);
        if let Cow::Owned(logs) = logs {
            self.logs = logs;
        }
        outcome
    }

    /// Eagerly materializes today's empty log once onboarding is done.
    pub fn open_day(&mut self, today: Date) {
        if self.user.is_none() {
            return;
        }
        let logs = ensure_day(&self.logs, today);
        if let Cow::Owned(logs) = logs {
            self.logs = logs;
        }
    }

    pub fn day(&self, date: Date) -> Option<&DailyLog> {
        find_day(&self.logs, date)
    }
}
