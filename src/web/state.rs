use std::sync::Arc;

use crate::lessons::LessonResolver;
use crate::model::ModelManager;
use crate::utils::clock::Clock;

#[derive(Debug, Clone)]
pub struct AppState {
    mm: ModelManager,
    resolver: LessonResolver,
    clock: Arc<dyn Clock>,
    demo_user: Arc<str>,
}

impl AppState {
    pub fn new<S: Into<Arc<str>>>(
        mm: ModelManager,
        resolver: LessonResolver,
        clock: Arc<dyn Clock>,
        demo_user: S,
    ) -> Self {
        Self {
            mm,
            resolver,
            clock,
            demo_user: demo_user.into(),
        }
    }

    pub fn mm(&self) -> &ModelManager {
        &self.mm
    }

    pub fn resolver(&self) -> &LessonResolver {
        &self.resolver
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn demo_user(&self) -> &str {
        &self.demo_user
    }
}
