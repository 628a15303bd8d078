use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
}

/// Educational supplement card. Never dosing advice.
#[derive(Debug, Clone, Serialize)]
pub struct Supplement {
    pub id: &'static str,
    pub name: &'static str,
    pub guidance: &'static str,
    pub default_frequency: Frequency,
}

const DISCLAIMER: &str = "This is not medical advice.";

const CATALOG: [(&str, &str, &str); 5] = [
    (
        "supp_1",
        "Vitamin B12",
        "Important for nerve function and blood cell formation. Often recommended in plant-centric diets.",
    ),
    (
        "supp_2",
        "Iodized Salt",
        "Iodine is crucial for thyroid health. Using iodized salt is a simple way to ensure intake.",
    ),
    (
        "supp_3",
        "Omega-3 (ALA)",
        "Found in flax, chia, and walnuts. Supports brain health. The body converts ALA to EPA/DHA, though inefficiently.",
    ),
    (
        "supp_4",
        "Vitamin D",
        "Vital for bone health and immune function. Supplementation is often suggested in winter.",
    ),
    (
        "supp_5",
        "Protein Powder",
        "Can help meet protein targets when whole food sources fall short. Pea, soy, or hemp are plant-based options.",
    ),
];

pub fn catalog() -> Vec<Supplement> {
    CATALOG
        .iter()
        .map(|&(id, name, guidance)| Supplement {
            id,
            name,
            guidance,
            default_frequency: Frequency::Daily,
        })
        .collect()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/supplements", get(list_supplements))
}

#[derive(Debug, Serialize)]
struct SupplementsResponse {
    disclaimer: &'static str,
    supplements: Vec<Supplement>,
}

async fn list_supplements() -> Json<SupplementsResponse> {
    Json(SupplementsResponse {
        disclaimer: DISCLAIMER,
        supplements: catalog(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_app;
    use crate::test_support::send;
    use axum::http::{Method, StatusCode};

    #[test]
    fn catalog_has_five_daily_entries() {
        let all = catalog();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|s| s.default_frequency == Frequency::Daily));
        assert_eq!(all[1].name, "Iodized Salt");
    }

    #[tokio::test]
    async fn lists_supplements_with_disclaimer() {
        let app = build_app(AppState::fake());
        let (status, body) = send(&app, Method::GET, "/api/v1/supplements", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["disclaimer"], DISCLAIMER);
        assert_eq!(body["supplements"][4]["name"], "Protein Powder");
        assert_eq!(body["supplements"][0]["default_frequency"], "daily");
    }
}
