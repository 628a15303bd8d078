use serde::{Deserialize, Serialize};

use crate::nutrition::Nutrition;

/// Catalog key of the built-in protein shake.
pub const PROTEIN_SHAKE_ID: &str = "sys_recipe_protein_shake";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub qty: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    #[serde(rename = "ownerId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub appliances: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub est_nutrition: Nutrition,
    #[serde(default)]
    pub time_minutes: u32,
    #[serde(default = "default_servings")]
    pub servings_default: u32,
    #[serde(default)]
    pub is_system: bool,
}

fn default_servings() -> u32 {
    1
}

/// Read-only recipe lookup used by the plan and log engines.
pub trait RecipeCatalog {
    fn lookup(&self, id: &str) -> Option<&Recipe>;
}

/// Ordered recipe collection held by the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog for Catalog {
    fn lookup(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn with_system_recipes() -> Self {
        Self::new(system_recipes())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// User-authored recipes go to the front of the list.
    pub fn prepend(&mut self, recipe: Recipe) {
        self.recipes.insert(0, recipe);
    }

    /// Appends recipes whose ids are not yet known. Returns how many were added.
    pub fn merge(&mut self, incoming: &[Recipe]) -> usize {
        let mut added = 0;
        for recipe in incoming {
            if !self.contains(&recipe.id) {
                self.recipes.push(recipe.clone());
                added += 1;
            }
        }
        added
    }
}

const POTATO_BASE: Nutrition = Nutrition {
    kcal: 450.0,
    protein_g: 10.0,
    carbs_g: 80.0,
    fat_g: 8.0,
    fiber_g: 9.0,
    potassium_mg: Some(1500.0),
    vitamin_c_mg: Some(40.0),
};

fn ingredient(name: &str, qty: f64, unit: &str) -> Ingredient {
    Ingredient {
        name: name.into(),
        qty,
        unit: unit.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn system_recipe(
    id: &str,
    title: &str,
    description: &str,
    appliances: &[&str],
    ingredients: Vec<Ingredient>,
    steps: &[&str],
    tags: &[&str],
    est_nutrition: Nutrition,
    time_minutes: u32,
    servings_default: u32,
) -> Recipe {
    Recipe {
        id: id.into(),
        owner_id: None,
        title: title.into(),
        description: description.into(),
        appliances: strings(appliances),
        ingredients,
        steps: strings(steps),
        tags: strings(tags),
        est_nutrition,
        time_minutes,
        servings_default,
        is_system: true,
    }
}

/// Built-in recipes shipped with every session.
pub fn system_recipes() -> Vec<Recipe> {
    vec![
        system_recipe(
            "sys_recipe_1",
            "Crispy Air Fryer Potato Wedges",
            "Perfectly crispy on the outside, fluffy on the inside.",
            &["Air Fryer"],
            vec![
                ingredient("Russet Potatoes", 2.0, "large"),
                ingredient("Paprika", 1.0, "tsp"),
                ingredient("Garlic Powder", 1.0, "tsp"),
                ingredient("Salt", 0.5, "tsp"),
            ],
            &[
                "Wash and cut potatoes into wedges.",
                "Toss with spices.",
                "Air fry at 200°C for 15-20 minutes, shaking halfway through.",
                "Serve immediately.",
            ],
            &["crispy", "quick", "low_oil"],
            Nutrition { kcal: 350.0, fat_g: 2.0, ..POTATO_BASE },
            25,
            2,
        ),
        system_recipe(
            "sys_recipe_2",
            "Classic Oven-Baked Potatoes",
            "The perfect fluffy baked potato, ready for your favorite toppings.",
            &["Oven"],
            vec![
                ingredient("Baking Potatoes", 4.0, "medium"),
                ingredient("Salt", 1.0, "tsp"),
            ],
            &[
                "Preheat oven to 220°C.",
                "Scrub potatoes and pierce several times with a fork.",
                "Rub with a pinch of salt.",
                "Bake for 45-60 minutes, until tender.",
            ],
            &["classic", "simple"],
            Nutrition { kcal: 280.0, fat_g: 1.0, ..POTATO_BASE },
            60,
            4,
        ),
        system_recipe(
            "sys_recipe_3",
            "Quick Microwave Mash",
            "Creamy mashed potatoes in minutes, no boiling required.",
            &["Microwave"],
            vec![
                ingredient("Yukon Gold Potatoes", 4.0, "medium"),
                ingredient("Milk or alternative", 0.25, "cup"),
                ingredient("Salt and Pepper", 1.0, "to taste"),
            ],
            &[
                "Peel and cube potatoes.",
                "Place in a microwave-safe bowl with 2 tbsp of water, cover.",
                "Microwave on high for 8-10 minutes until soft.",
                "Drain, then mash with milk, salt, and pepper.",
            ],
            &["quick", "mash"],
            Nutrition { kcal: 320.0, fat_g: 5.0, ..POTATO_BASE },
            15,
            2,
        ),
        system_recipe(
            "sys_recipe_4",
            "Potato & Veggie Hash",
            "A hearty and versatile hash, great for any meal of the day.",
            &["Stovetop"],
            vec![
                ingredient("Potatoes, diced", 2.0, "cups"),
                ingredient("Bell Pepper, diced", 1.0, "cup"),
                ingredient("Onion, diced", 0.5, "cup"),
                ingredient("Smoked Paprika", 1.0, "tsp"),
            ],
            &[
                "Par-boil diced potatoes for 5 minutes. Drain well.",
                "In a non-stick skillet, cook onions and peppers until softened.",
                "Add potatoes and paprika.",
                "Cook for 15-20 minutes until potatoes are golden and crispy.",
            ],
            &["hearty", "veggie"],
            Nutrition { kcal: 410.0, protein_g: 12.0, fat_g: 6.0, ..POTATO_BASE },
            30,
            2,
        ),
        system_recipe(
            "sys_recipe_5",
            "Crispy Potato Skins",
            "A delicious snack or light meal using the whole potato.",
            &["Oven", "Air Fryer"],
            vec![
                ingredient("Baked Potatoes", 4.0, "medium"),
                ingredient("Chives, chopped", 2.0, "tbsp"),
                ingredient("Salt", 0.5, "tsp"),
            ],
            &[
                "Cut baked potatoes in half and scoop out most of the flesh.",
                "Brush the inside of the skins lightly.",
                "Bake at 220°C for 10 minutes or air fry for 5 minutes until crisp.",
                "Sprinkle with salt and chives.",
            ],
            &["snack", "crispy"],
            Nutrition { kcal: 250.0, fat_g: 1.0, ..POTATO_BASE },
            20,
            4,
        ),
        system_recipe(
            PROTEIN_SHAKE_ID,
            "Protein Supplement Shake",
            "A simple protein shake to help meet your daily protein needs.",
            &[],
            vec![
                ingredient("Protein Powder", 1.0, "scoop"),
                ingredient("Water", 250.0, "ml"),
            ],
            &[
                "Add protein powder to a shaker bottle.",
                "Add water or milk alternative.",
                "Shake well until smooth and enjoy.",
            ],
            &["supplement", "high_protein", "quick"],
            Nutrition {
                kcal: 120.0,
                protein_g: 25.0,
                carbs_g: 3.0,
                fat_g: 1.0,
                fiber_g: 1.0,
                potassium_mg: None,
                vitamin_c_mg: None,
            },
            2,
            1,
        ),
    ]
}
