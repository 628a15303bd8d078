use crate::coach::client::{CoachClient, MockCoach};
use crate::config::AppConfig;
use crate::plans::services::ProteinPolicy;
use crate::session::Session;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: Arc<RwLock<Session>>,
    pub coach: Arc<dyn CoachClient>,
    // Held while a coach prompt is being answered.
    pub coach_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let coach = Arc::new(MockCoach::new(Duration::from_millis(config.coach.delay_ms)))
            as Arc<dyn CoachClient>;

        Ok(Self::from_parts(config, coach))
    }

    pub fn from_parts(config: Arc<AppConfig>, coach: Arc<dyn CoachClient>) -> Self {
        let session = Session::new(ProteinPolicy::new(config.supplement_recipe_id.clone()));
        Self {
            config,
            session: Arc::new(RwLock::new(session)),
            coach,
            coach_gate: Arc::new(Mutex::new(())),
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::with_coach(Arc::new(MockCoach::new(Duration::ZERO)))
    }

    #[cfg(test)]
    pub fn with_coach(coach: Arc<dyn CoachClient>) -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            supplement_recipe_id: crate::recipes::catalog::PROTEIN_SHAKE_ID.into(),
            coach: crate::config::CoachConfig { delay_ms: 0 },
        });
        Self::from_parts(config, coach)
    }
}
