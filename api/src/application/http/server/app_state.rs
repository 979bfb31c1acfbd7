use std::sync::Arc;

use hairsphere_core::application::HairsphereService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HairsphereService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HairsphereService) -> Self {
        Self { args, service }
    }
}
