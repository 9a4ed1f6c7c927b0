//! # REST client
//!
//! [`ApiClient`] issues one request per operation against the backend's fixed
//! endpoints, all keyed by the session's phone-shaped user id. The native
//! build carries a request timeout so an action's in-flight flag can never be
//! stuck forever; on wasm the browser's fetch stack bounds the request.

use reqwest::multipart::{Form, Part};

use store::Session;

use crate::error::{extract_error_message, ApiError};
use crate::models::{
    BasicDashboard, LoginResponseDto, Notification, NotificationDto, PendingRegistration,
    RegisterOutcome, RegisterResponseDto, StudentDashboard, StudentProfile,
};
use crate::validate::{ImageUpload, ProfileUpdate, RegistrationForm};

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Backend base URL: `PLACEMENT_API_URL` at run time (native) or build time,
/// falling back to the development default.
pub fn default_base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("PLACEMENT_API_URL") {
        return url;
    }
    option_env!("PLACEMENT_API_URL")
        .unwrap_or("http://localhost:8000/api")
        .to_string()
}

/// Client for the placement portal backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a non-2xx response to [`ApiError::Server`].
    async fn checked(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = match resp.text().await {
            Ok(body) => extract_error_message(&body),
            Err(_) => None,
        }
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        tracing::warn!(status = status.as_u16(), "server error: {message}");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    // ---- authentication -------------------------------------------------

    /// `POST /accounts/login/`.
    pub async fn login(
        &self,
        phone: &str,
        password: &str,
        role: &str,
    ) -> Result<Session, ApiError> {
        let resp = self
            .http
            .post(self.url("/accounts/login/"))
            .json(&serde_json::json!({
                "phone": phone,
                "password": password,
                "role": role,
            }))
            .send()
            .await?;
        let dto: LoginResponseDto = Self::checked(resp).await?.json().await?;
        Ok(dto.into())
    }

    /// `POST /accounts/register/` — multipart: role, account fields, the
    /// role-specific profile set, and an optional profile image.
    ///
    /// Callers must run [`RegistrationForm::validate`] first; this method
    /// only builds and sends the request.
    pub async fn register(&self, form: &RegistrationForm) -> Result<RegisterOutcome, ApiError> {
        let mut body = Form::new();
        for (name, value) in form.fields() {
            body = body.text(name, value);
        }
        if let Some(image) = &form.image {
            body = body.part("image", file_part(image)?);
        }
        let resp = self
            .http
            .post(self.url("/accounts/register/"))
            .multipart(body)
            .send()
            .await?;
        let dto: RegisterResponseDto = Self::checked(resp).await?.json().await?;
        Ok(dto.into_outcome(&form.full_name))
    }

    // ---- notifications --------------------------------------------------

    /// `GET /accounts/notifications/?phone=` — ordering is server-defined;
    /// the client renders the list as received.
    pub async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        let resp = self
            .http
            .get(self.url("/accounts/notifications/"))
            .query(&[("phone", user_id)])
            .send()
            .await?;
        let dtos: Vec<NotificationDto> = Self::checked(resp).await?.json().await?;
        Ok(dtos.into_iter().map(Notification::from).collect())
    }

    /// `DELETE /accounts/notifications/?phone=&notif_id=`.
    pub async fn delete_notification(&self, user_id: &str, notif_id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url("/accounts/notifications/"))
            .query(&[("phone", user_id.to_string()), ("notif_id", notif_id.to_string())])
            .send()
            .await?;
        Self::checked(resp).await?;
        Ok(())
    }

    /// `DELETE /accounts/notifications/?phone=` — destructive; the UI gates
    /// this behind an explicit confirmation.
    pub async fn clear_notifications(&self, user_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url("/accounts/notifications/"))
            .query(&[("phone", user_id)])
            .send()
            .await?;
        Self::checked(resp).await?;
        Ok(())
    }

    // ---- teacher approval workflow --------------------------------------

    /// `GET /teacher/registrations/pending/?phone=` (teacher only).
    pub async fn pending_registrations(
        &self,
        user_id: &str,
    ) -> Result<Vec<PendingRegistration>, ApiError> {
        let resp = self
            .http
            .get(self.url("/teacher/registrations/pending/"))
            .query(&[("phone", user_id)])
            .send()
            .await?;
        Ok(Self::checked(resp).await?.json().await?)
    }

    /// `POST /teacher/registrations/approve/` — non-idempotent: approval is
    /// expected to activate a real student account.
    pub async fn approve_registration(&self, student_id: &str) -> Result<(), ApiError> {
        self.registration_action("/teacher/registrations/approve/", student_id)
            .await
    }

    /// `POST /teacher/registrations/reject/` — irreversible; the UI gates
    /// this behind an explicit confirmation.
    pub async fn reject_registration(&self, student_id: &str) -> Result<(), ApiError> {
        self.registration_action("/teacher/registrations/reject/", student_id)
            .await
    }

    async fn registration_action(&self, path: &str, student_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(&serde_json::json!({ "student_id": student_id }))
            .send()
            .await?;
        Self::checked(resp).await?;
        Ok(())
    }

    // ---- dashboards -----------------------------------------------------

    /// `GET /student/dashboard/?phone=`.
    pub async fn student_dashboard(&self, user_id: &str) -> Result<StudentDashboard, ApiError> {
        let resp = self
            .http
            .get(self.url("/student/dashboard/"))
            .query(&[("phone", user_id)])
            .send()
            .await?;
        Ok(Self::checked(resp).await?.json().await?)
    }

    /// `GET /teacher/dashboard/`.
    pub async fn teacher_dashboard(&self) -> Result<BasicDashboard, ApiError> {
        let resp = self.http.get(self.url("/teacher/dashboard/")).send().await?;
        Ok(Self::checked(resp).await?.json().await?)
    }

    /// `GET /placement/dashboard/`.
    pub async fn placement_dashboard(&self) -> Result<BasicDashboard, ApiError> {
        let resp = self
            .http
            .get(self.url("/placement/dashboard/"))
            .send()
            .await?;
        Ok(Self::checked(resp).await?.json().await?)
    }

    // ---- student profile and applications -------------------------------

    /// `GET /student/profile/?phone=`.
    pub async fn student_profile(&self, user_id: &str) -> Result<StudentProfile, ApiError> {
        let resp = self
            .http
            .get(self.url("/student/profile/"))
            .query(&[("phone", user_id)])
            .send()
            .await?;
        Ok(Self::checked(resp).await?.json().await?)
    }

    /// `PATCH /student/profile/` — multipart; only changed fields are sent.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError> {
        let mut body = Form::new().text("phone", user_id.to_string());
        for (name, value) in update.fields() {
            body = body.text(name, value);
        }
        if let Some(image) = &update.image {
            body = body.part("image", file_part(image)?);
        }
        if let Some(resume) = &update.resume {
            body = body.part("resume", file_part(resume)?);
        }
        let resp = self
            .http
            .patch(self.url("/student/profile/"))
            .multipart(body)
            .send()
            .await?;
        Self::checked(resp).await?;
        Ok(())
    }

    /// `POST /student/apply/` — apply for a job; the backend re-checks
    /// eligibility and creates the confirmation notification.
    pub async fn apply_for_job(&self, user_id: &str, job_id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/student/apply/"))
            .json(&serde_json::json!({ "phone": user_id, "job_id": job_id }))
            .send()
            .await?;
        Self::checked(resp).await?;
        Ok(())
    }
}

fn file_part(upload: &ImageUpload) -> Result<Part, ApiError> {
    Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&upload.mime)
        .map_err(|e| ApiError::Decode(format!("invalid upload content type: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.url("/accounts/login/"),
            "http://localhost:8000/api/accounts/login/"
        );
    }
}
