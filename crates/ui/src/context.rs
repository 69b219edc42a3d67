use std::sync::Arc;

use health_core::model::{HealthCollection, TipCatalog, UserId};
use services::{ActivityLogService, AppServices, BmiService, QuizService, Subscription};

pub trait UiApp: Send + Sync {
    fn user(&self) -> UserId;

    fn quiz(&self) -> Arc<QuizService>;
    fn activity(&self) -> Arc<ActivityLogService>;
    fn bmi(&self) -> Arc<BmiService>;
    fn tips(&self) -> Arc<TipCatalog>;

    fn subscribe(&self, collection: HealthCollection) -> Subscription;
}

impl UiApp for AppServices {
    fn user(&self) -> UserId {
        AppServices::user(self).clone()
    }

    fn quiz(&self) -> Arc<QuizService> {
        AppServices::quiz(self)
    }

    fn activity(&self) -> Arc<ActivityLogService> {
        AppServices::activity(self)
    }

    fn bmi(&self) -> Arc<BmiService> {
        AppServices::bmi(self)
    }

    fn tips(&self) -> Arc<TipCatalog> {
        AppServices::tips(self)
    }

    fn subscribe(&self, collection: HealthCollection) -> Subscription {
        AppServices::subscribe(self, collection)
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    user: UserId,

    quiz: Arc<QuizService>,
    activity: Arc<ActivityLogService>,
    bmi: Arc<BmiService>,
    tips: Arc<TipCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            user: app.user(),
            quiz: app.quiz(),
            activity: app.activity(),
            bmi: app.bmi(),
            tips: app.tips(),
        }
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn activity(&self) -> Arc<ActivityLogService> {
        Arc::clone(&self.activity)
    }

    #[must_use]
    pub fn bmi(&self) -> Arc<BmiService> {
        Arc::clone(&self.bmi)
    }

    #[must_use]
    pub fn tips(&self) -> Arc<TipCatalog> {
        Arc::clone(&self.tips)
    }

    /// Fresh subscription; each view holds its own so dropping the view unsubscribes.
    #[must_use]
    pub fn subscribe(&self, collection: HealthCollection) -> Subscription {
        self.app.subscribe(collection)
    }
}

/// Build the `AppContext` the binary hands to the Dioxus launcher.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
