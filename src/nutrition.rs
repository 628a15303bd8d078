use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Per-serving nutrition estimate of a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub kcal: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium_mg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c_mg: Option<f64>,
}

/// Macro totals kept on a daily log. Micronutrients are not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

impl Nutrition {
    /// Macros for `servings` portions.
    pub fn scaled(&self, servings: f64) -> Macros {
        Macros {
            kcal: self.kcal * servings,
            protein_g: self.protein_g * servings,
            carbs_g: self.carbs_g * servings,
            fat_g: self.fat_g * servings,
            fiber_g: self.fiber_g * servings,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("kcal", Some(self.kcal)),
            ("protein_g", Some(self.protein_g)),
            ("carbs_g", Some(self.carbs_g)),
            ("fat_g", Some(self.fat_g)),
            ("fiber_g", Some(self.fiber_g)),
            ("potassium_mg", self.potassium_mg),
            ("vitamin_c_mg", self.vitamin_c_mg),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !(v.is_finite() && v >= 0.0) {
                    return Err(ValidationError::Nutrition(name));
                }
            }
        }
        Ok(())
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

impl std::ops::AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}
