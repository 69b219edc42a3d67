use dioxus::prelude::*;
use health_core::model::HealthCollection;

use crate::context::AppContext;

/// Counter bumped whenever `collection` changes; read it inside a resource to reload on appends.
pub fn use_collection_refresh(collection: HealthCollection) -> Signal<u64> {
    let ctx = use_context::<AppContext>();
    let mut refresh = use_signal(|| 0_u64);
    use_future(move || {
        let mut subscription = ctx.subscribe(collection);
        async move {
            while subscription.changed().await {
                refresh += 1;
            }
        }
    });
    refresh
}
