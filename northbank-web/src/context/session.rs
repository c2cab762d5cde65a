//! Process-wide session store.
//!
//! State machine: `Loading` on mount, then `Authenticated` or `Anonymous`
//! once the bootstrap pipeline resolves. Gated pages render a spinner in
//! `Loading`, redirect in `Anonymous`, and only show content when
//! `Authenticated`.

use crate::routes::Route;
use northbank_api::{ApiError, Session, auth, session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Loading,
    Authenticated(Session),
    Anonymous,
}

impl SessionState {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub state: SessionState,
}

pub enum SessionAction {
    Resolved(Session),
    Cleared,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let state = match action {
            SessionAction::Resolved(session) => SessionState::Authenticated(session),
            SessionAction::Cleared => SessionState::Anonymous,
        };
        SessionStore { state }.into()
    }
}

/// Cloneable handle pages pull from context.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    store: UseReducerHandle<SessionStore>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(store: UseReducerHandle<SessionStore>) -> Self {
        SessionHandle { store }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.store.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.store.state.session()
    }

    /// Re-run the bootstrap pipeline. A failed bootstrap is an anonymous
    /// visitor, never a crash.
    pub fn refresh(&self) {
        let store = self.store.clone();
        spawn_local(async move {
            match session::bootstrap().await {
                Ok(session) => store.dispatch(SessionAction::Resolved(session)),
                Err(err) => {
                    log::debug!("session bootstrap failed: {err}");
                    store.dispatch(SessionAction::Cleared);
                }
            }
        });
    }

    /// Authenticate, then refresh session state from the backend so the
    /// profile merge happens on the server's view of the account.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<(), ApiError> {
        auth::login(email, password, remember).await?;
        match session::bootstrap().await {
            Ok(session) => {
                self.store.dispatch(SessionAction::Resolved(session));
                Ok(())
            }
            Err(err) => {
                self.store.dispatch(SessionAction::Cleared);
                Err(err)
            }
        }
    }

    /// Best-effort server logout; local state clears and the app returns
    /// to the login screen regardless of the API outcome.
    pub fn logout(&self, navigator: Option<Navigator>) {
        let store = self.store.clone();
        spawn_local(async move {
            if let Err(err) = auth::logout().await {
                log::warn!("logout request failed: {err}");
            }
            store.dispatch(SessionAction::Cleared);
            if let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_reducer(|| SessionStore {
        state: SessionState::Loading,
    });
    let handle = SessionHandle {
        store: store.clone(),
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |()| {
            handle.refresh();
            || {}
        });
    }

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}

/// Grab the session store; only valid under a [`SessionProvider`].
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider is mounted at the app root")
}

#[cfg(test)]
mod tests {
    use super::*;
    use northbank_api::models::user::User;
    use std::rc::Rc;

    fn session_for(name: &str) -> Session {
        Session::from_parts(
            User {
                id: 1,
                name: name.into(),
                email: "x@example.com".into(),
                role: vec!["member".into()],
                member_number: Some("100".into()),
                status: Some("active".into()),
            },
            None,
        )
    }

    #[test]
    fn resolved_and_cleared_drive_the_state_machine() {
        let store = Rc::new(SessionStore {
            state: SessionState::Loading,
        });
        let authed = store.reduce(SessionAction::Resolved(session_for("Kelly")));
        assert!(matches!(authed.state, SessionState::Authenticated(_)));
        let cleared = authed.reduce(SessionAction::Cleared);
        assert_eq!(cleared.state, SessionState::Anonymous);
        assert!(cleared.state.session().is_none());
    }
}
