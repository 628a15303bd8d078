use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::iso_date;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    High,
}

/// Body metrics collected during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub height_cm: f64,
    // Absent or zero weight disables plan augmentation.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub appliances: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    pub kcal_target: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietWindow {
    #[serde(with = "iso_date::option", default)]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option", default)]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub profile: Profile,
    pub preferences: Preferences,
    pub diet_window: DietWindow,
}

impl User {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [self.profile.weight_kg, self.profile.target_weight_kg];
        if weights.iter().flatten().any(|w| !(*w >= 0.0)) {
            return Err(ValidationError::Weight);
        }
        if let (Some(start), Some(end)) = (self.diet_window.start_date, self.diet_window.end_date) {
            if start > end {
                return Err(ValidationError::DateRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Calorie target used when onboarding omits one.
pub const DEFAULT_KCAL_TARGET: u32 = 2000;

impl Sex {
    fn bmr_offset(self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

impl ActivityLevel {
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
        }
    }
}

/// Mifflin-St Jeor basal metabolic rate, or `None` without usable metrics.
pub fn basal_metabolic_rate(profile: &Profile) -> Option<f64> {
    let weight = profile.weight_kg.filter(|w| *w > 0.0)?;
    if profile.age == 0 || !(profile.height_cm > 0.0) {
        return None;
    }
    Some(10.0 * weight + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age) + profile.sex.bmr_offset())
}

/// Daily energy estimate (BMR times activity factor), rounded to the nearest 50 kcal.
pub fn suggested_kcal_target(profile: &Profile) -> u32 {
    match basal_metabolic_rate(profile) {
        Some(bmr) if bmr > 0.0 => round_to_50((bmr * profile.activity_level.factor()).round()),
        _ => DEFAULT_KCAL_TARGET,
    }
}

fn round_to_50(kcal: f64) -> u32 {
    ((kcal / 50.0).round() * 50.0) as u32
}

#[cfg(test)]
pub(crate) fn sample_user(weight_kg: Option<f64>) -> User {
    User {
        profile: Profile {
            age: 34,
            height_cm: 178.0,
            weight_kg,
            sex: Sex::Female,
            activity_level: ActivityLevel::Moderate,
            target_weight_kg: None,
        },
        preferences: Preferences {
            appliances: vec!["Oven".into(), "Air Fryer".into()],
            exclusions: vec![],
            kcal_target: 1800,
        },
        diet_window: DietWindow {
            start_date: None,
            end_date: None,
            paused: false,
        },
    }
}
