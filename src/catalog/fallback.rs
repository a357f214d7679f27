use super::{CatalogError, ExerciseSource};
use crate::models::Exercise;

const GIF_BASE: &str = "https://raw.githubusercontent.com/ArseniyKhodakov/exercise-gifs/main";

/// Fixed exercise list served when the remote catalog is unavailable.
///
/// Returns the same list for every target.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn exercises(&self) -> Vec<Exercise> {
        [
            ("Push-Up", "pushup.gif", "Bodyweight"),
            ("Squat", "squat.gif", "Bodyweight"),
            ("Plank", "plank.gif", "Bodyweight"),
            ("Bicep Curl", "bicep.gif", "Dumbbell"),
        ]
        .into_iter()
        .map(|(name, gif, equipment)| {
            Exercise::new(name, format!("{}/{}", GIF_BASE, gif), equipment)
        })
        .collect()
    }
}

impl ExerciseSource for StaticCatalog {
    async fn fetch_by_target(&self, _target: &str) -> Result<Vec<Exercise>, CatalogError> {
        Ok(self.exercises())
    }
}
