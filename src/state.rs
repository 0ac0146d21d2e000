use crate::insights::InsightGenerator;
use crate::store::HabitStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HabitStore>,
    pub insights: Arc<dyn InsightGenerator>,
}

impl AppState {
    pub fn new(store: Arc<HabitStore>, insights: Arc<dyn InsightGenerator>) -> Self {
        Self { store, insights }
    }
}
