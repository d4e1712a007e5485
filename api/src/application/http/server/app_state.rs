use std::sync::Arc;

use curetrackr_core::application::CureTrackrService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CureTrackrService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CureTrackrService) -> Self {
        Self { args, service }
    }
}
