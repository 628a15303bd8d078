use serde::{Deserialize, Serialize};

use crate::logs::model::DailyLog;
use crate::plans::model::Plan;
use crate::users::model::{suggested_kcal_target, DietWindow, Preferences, Profile, User};

#[derive(Debug, Deserialize)]
pub struct OnboardingPreferences {
    #[serde(default)]
    pub appliances: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub kcal_target: Option<u32>,
}

/// Onboarding payload. A missing `kcal_target` is derived from the profile.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub profile: Profile,
    pub preferences: OnboardingPreferences,
    pub diet_window: DietWindow,
}

impl OnboardingRequest {
    pub fn into_user(self) -> User {
        let kcal_target = self
            .preferences
            .kcal_target
            .unwrap_or_else(|| suggested_kcal_target(&self.profile));
        User {
            profile: self.profile,
            preferences: Preferences {
                appliances: self.preferences.appliances,
                exclusions: self.preferences.exclusions,
                kcal_target,
            },
            diet_window: self.diet_window,
        }
    }
}

/// Response returned after onboarding.
#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub user: User,
    pub plan: Plan,
    pub today: DailyLog,
}
