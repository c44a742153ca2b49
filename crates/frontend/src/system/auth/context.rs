use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored session is being validated; the login form is held back meanwhile.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: storage::get_access_token().is_some(),
        ..Default::default()
    });

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match restore_session(access_token).await {
                Ok(state) => set_auth_state.set(state),
                Err(e) => {
                    log::info!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Validate the stored access token, falling back to the refresh token once.
async fn restore_session(access_token: String) -> Result<AuthState, String> {
    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Ok(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        });
    }

    let refresh_token = storage::get_refresh_token().ok_or("No refresh token")?;
    let response = api::refresh_token(refresh_token).await?;
    storage::save_access_token(&response.access_token);
    let user_info = api::get_current_user(&response.access_token).await?;

    Ok(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(user_info),
        restoring: false,
    })
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive view of the signed-in user.
pub fn use_current_user() -> Signal<Option<UserInfo>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.user_info.clone()))
}

/// Log in and store the session. The setter is passed in because the
/// reactive owner is gone once the request has been awaited.
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    match response.refresh_token.as_deref() {
        Some(token) => storage::save_refresh_token(token),
        None => log::debug!("Login response carried no refresh token"),
    }

    log::info!(
        "Signed in as {} ({})",
        response.user.display_name(),
        response.user.role
    );
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });

    Ok(())
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("{}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
