use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AuthResponse, ContactRequest, ContactResponse, ErrorResponse, LoginRequest, RegisterRequest,
};

async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "unexpected server error".to_string());
        Err(format!("Server error: {} - {}", status, message))
    }
}

pub async fn login(req: &LoginRequest) -> Result<AuthResponse, String> {
    post_json("/api/auth/login", req).await
}

pub async fn register(req: &RegisterRequest) -> Result<AuthResponse, String> {
    post_json("/api/auth/register", req).await
}

pub async fn send_contact(req: &ContactRequest) -> Result<ContactResponse, String> {
    post_json("/api/contact", req).await
}
