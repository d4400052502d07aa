//! Authentication operations and the submission pipeline.
//!
//! The page delegates to an [`AuthBackend`] supplied by the application
//! shell. [`submit`] runs validation first and only then dispatches; a
//! login waits for the backend's verdict, a signup is fire-and-forget.

use async_trait::async_trait;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::validation::{ValidationError, validate_submission};

/// Which of the two slides the form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AuthMode {
    #[display("login")]
    Login,
    #[display("signup")]
    Signup,
}

impl AuthMode {
    pub fn is_login(self) -> bool {
        matches!(self, AuthMode::Login)
    }

    /// Label on the submit control for this slide.
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup payload. The wire shape keeps the `confirmPassword` key the
/// authentication service already accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// The two operations the page delegates to the authentication service.
///
/// Implementations are constructed by the application shell and injected
/// into the page as an initialization parameter.
#[async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    /// Verify credentials. `true` means the service accepted them; no
    /// failure reason is reported.
    async fn login(&self, credentials: Credentials) -> bool;

    /// Create an account. Fire-and-forget: the result is not reported back
    /// to the caller.
    fn create_user(&self, request: SignupRequest);
}

/// What a submission attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A validation check failed; no backend operation ran
    Rejected(ValidationError),
    /// The backend accepted the credentials
    LoggedIn,
    /// The backend rejected the credentials; no reason is attached
    LoginFailed,
    /// The signup request was handed to the backend; its eventual result
    /// is not observed
    SignupSubmitted,
}

/// Run the submission pipeline for the current slide.
pub async fn submit(
    mode: AuthMode,
    email: &str,
    password: &str,
    confirm_password: &str,
    backend: &dyn AuthBackend,
) -> SubmitOutcome {
    if let Err(error) = validate_submission(mode, email, password, confirm_password) {
        return SubmitOutcome::Rejected(error);
    }

    match mode {
        AuthMode::Login => {
            let credentials = Credentials {
                email: email.to_string(),
                password: password.to_string(),
            };
            if backend.login(credentials).await {
                SubmitOutcome::LoggedIn
            } else {
                SubmitOutcome::LoginFailed
            }
        }
        AuthMode::Signup => {
            backend.create_user(SignupRequest {
                email: email.to_string(),
                password: password.to_string(),
                confirm_password: confirm_password.to_string(),
            });
            SubmitOutcome::SignupSubmitted
        }
    }
}

/// Auth operations backed by the external HTTP authentication service.
///
/// Success is the HTTP ok status; response bodies are not inspected.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    login_url: String,
    register_url: String,
}

impl HttpAuthBackend {
    pub fn new() -> Self {
        Self {
            login_url: "/api/auth/login".to_string(),
            register_url: "/api/auth/register".to_string(),
        }
    }

    /// Point the backend at non-default endpoints.
    pub fn with_endpoints(login_url: impl Into<String>, register_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
            register_url: register_url.into(),
        }
    }
}

impl Default for HttpAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: Credentials) -> bool {
        #[cfg(not(feature = "ssr"))]
        {
            let body = match serde_json::to_string(&credentials) {
                Ok(body) => body,
                Err(_) => return false,
            };
            match post_json(&self.login_url, body).await {
                Ok(accepted) => accepted,
                Err(error) => {
                    leptos::logging::warn!("login request failed: {error}");
                    false
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = credentials;
            false
        }
    }

    fn create_user(&self, request: SignupRequest) {
        #[cfg(not(feature = "ssr"))]
        {
            let url = self.register_url.clone();
            leptos::task::spawn_local(async move {
                let body = match serde_json::to_string(&request) {
                    Ok(body) => body,
                    Err(_) => return,
                };
                if let Err(error) = post_json(&url, body).await {
                    leptos::logging::warn!("signup request failed: {error}");
                }
            });
        }
        #[cfg(feature = "ssr")]
        let _ = request;
    }
}

/// POST a JSON body and report whether the response had an ok status.
#[cfg(not(feature = "ssr"))]
async fn post_json(url: &str, body: String) -> Result<bool, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&body.into());

    let req = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    Ok(resp.ok())
}
