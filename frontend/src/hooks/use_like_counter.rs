use portfolio_shared::{LikeOutcome, LikeSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::likes::{persist_like_flag, stored_like_flag, LikeClient};
use crate::services::logging::Logger;

const COMPONENT: &str = "likes";

pub struct UseLikeCounterResult {
    /// False when no counter service is configured
    pub enabled: bool,
    pub liked: bool,
    pub count: u64,
    /// Register this visitor's like; ignored after the first one
    pub on_like: Callback<()>,
}

/// Hook tying the like button to the remote counter.
///
/// The session lives in a mutable ref so that async responses always apply to
/// the latest state instead of the one captured at render time. Without a
/// client the counter is inert: nothing is fetched and likes are ignored.
#[hook]
pub fn use_like_counter(client: Option<LikeClient>) -> UseLikeCounterResult {
    let session = use_mut_ref({
        let online = client.is_some();
        move || {
            let stored = stored_like_flag();
            if online {
                LikeSession::restore(stored.as_deref())
            } else {
                LikeSession::offline(stored.as_deref())
            }
        }
    });
    let trigger = use_force_update();

    // Load the current count on mount
    use_effect_with((), {
        let client = client.clone();
        let session = session.clone();
        let trigger = trigger.clone();

        move |_| {
            if let Some(client) = client {
                spawn_local(async move {
                    match client.fetch_count().await {
                        Ok(count) => {
                            session.borrow_mut().apply_fetched(count);
                            trigger.force_update();
                        }
                        Err(e) => {
                            Logger::error_with_component(COMPONENT, &format!("fetch failed: {}", e));
                        }
                    }
                });
            }

            || ()
        }
    });

    let on_like = {
        let client = client.clone();
        let session = session.clone();
        let trigger = trigger.clone();

        Callback::from(move |_: ()| {
            let outcome = session.borrow_mut().like();
            let LikeOutcome::Registered { .. } = outcome else {
                return;
            };
            let Some(client) = client.clone() else {
                return;
            };
            trigger.force_update();

            if let Err(e) = persist_like_flag() {
                Logger::warn_with_component(COMPONENT, &e);
            }

            let session = session.clone();
            let trigger = trigger.clone();
            spawn_local(async move {
                match client.increment().await {
                    Ok(count) => {
                        session.borrow_mut().apply_increment(count);
                        trigger.force_update();
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("increment failed: {}", e));
                    }
                }
            });
        })
    };

    let current = *session.borrow();
    UseLikeCounterResult {
        enabled: current.is_enabled(),
        liked: current.liked(),
        count: current.count(),
        on_like,
    }
}
