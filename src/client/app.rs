use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::{config, data::http::HttpDataSource};
use crate::client::{
    data::{mock::MockDataSource, DataHandle},
    router::Route,
    store::session::{self, SessionState},
};

#[component]
pub fn App() -> Element {
    let data = use_context_provider(build_data_source);
    let session = use_context_provider(|| Signal::new(SessionState::default()));

    use_restore_session(data, session);

    rsx!(Router::<Route> {})
}

/// Selects the backing data source once at startup: the REST backend when
/// a base URL was configured at build time, the in-memory mock otherwise.
fn build_data_source() -> DataHandle {
    #[cfg(feature = "web")]
    if let Some(base_url) = config::api_base_url() {
        tracing::info!("using REST backend at {base_url}");
        return DataHandle(Rc::new(HttpDataSource::new(base_url)));
    }

    tracing::info!("no backend configured, using mock data source");
    DataHandle(Rc::new(MockDataSource::new()))
}

/// Restores a persisted session, but only after the data source confirms
/// the token. A rejected token is removed instead of being trusted.
fn use_restore_session(data: DataHandle, mut session: Signal<SessionState>) {
    use_future(move || {
        let data = data.clone();
        async move {
            let Some(token) = session::load_token() else {
                return;
            };
            match data.validate_token(&token).await {
                Ok(identity) => session.write().begin(identity, token),
                Err(err) => {
                    tracing::info!("persisted session token rejected: {err}");
                    session::clear_token();
                }
            }
        }
    });
}
