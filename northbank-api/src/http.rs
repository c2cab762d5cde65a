//! Fetch core: every backend call funnels through here.
//!
//! Requests are credentialed (the session cookie rides along) and mirror
//! the `XSRF-TOKEN` cookie into the `X-XSRF-TOKEN` header. Non-2xx
//! responses become [`ApiError::Http`] with any validation messages the
//! body carried; a 204 reads as an empty result.

use crate::config::api_url;
use crate::error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::RequestCredentials;

const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

fn endpoint_url(path: &str) -> String {
    format!("{}{path}", api_url())
}

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include);
    match xsrf_token() {
        Some(token) => builder.header(XSRF_HEADER, &token),
        None => builder,
    }
}

pub(crate) fn get(path: &str) -> RequestBuilder {
    with_defaults(Request::get(&endpoint_url(path)))
}

pub(crate) fn post(path: &str) -> RequestBuilder {
    with_defaults(Request::post(&endpoint_url(path)))
}

pub(crate) fn put(path: &str) -> RequestBuilder {
    with_defaults(Request::put(&endpoint_url(path)))
}

pub(crate) fn delete(path: &str) -> RequestBuilder {
    with_defaults(Request::delete(&endpoint_url(path)))
}

/// Prime the CSRF cookie. Must complete before any state-changing call;
/// the backend rejects unprimed POSTs with a 419.
pub async fn init_csrf() -> Result<(), ApiError> {
    Request::get(&endpoint_url("/sanctum/csrf-cookie"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    Ok(())
}

/// Issue a bodyless request and parse the JSON response.
pub(crate) async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_json(response).await
}

/// Issue a JSON-bodied request and parse the JSON response.
pub(crate) async fn fetch_json_body<T, B>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = builder
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_json(response).await
}

/// Issue a JSON-bodied request where only success matters (login, password
/// updates). Any 2xx, including 204 No Content, is Ok.
pub(crate) async fn fetch_unit_body<B>(builder: RequestBuilder, body: &B) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
{
    fetch_json_body::<IgnoredBody, B>(builder, body).await?;
    Ok(())
}

/// Bodyless variant of [`fetch_unit_body`] (logout, picture delete).
pub(crate) async fn fetch_unit(builder: RequestBuilder) -> Result<(), ApiError> {
    fetch_json::<IgnoredBody>(builder).await?;
    Ok(())
}

/// Send a pre-built request (multipart uploads) and parse the response.
pub(crate) async fn fetch_json_request<T: DeserializeOwned>(
    request: Request,
) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(ApiError::from_status(status, &text));
    }
    let body = if status == 204 || text.is_empty() {
        "null"
    } else {
        text.as_str()
    };
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Anything-goes body for endpoints whose response content is discarded.
struct IgnoredBody;

impl<'de> serde::Deserialize<'de> for IgnoredBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(IgnoredBody)
    }
}

fn xsrf_token() -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    xsrf_token_from(&cookies)
}

/// Extract and decode the CSRF token from a cookie header string.
#[must_use]
pub fn xsrf_token_from(cookies: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(XSRF_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(percent_decode)
    })
}

/// Decode the percent escapes the browser applies to cookie values.
/// Malformed escapes pass through verbatim, as `decodeURIComponent`-strict
/// failure would only hide the token.
fn percent_decode(value: &str) -> String {
    fn hex_digit(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xsrf_token_found_among_other_cookies() {
        let cookies = "session=abc123; XSRF-TOKEN=eyJpdiI6%3D%3D; theme=dark";
        assert_eq!(xsrf_token_from(cookies).as_deref(), Some("eyJpdiI6=="));
    }

    #[test]
    fn xsrf_token_absent_yields_none() {
        assert_eq!(xsrf_token_from("session=abc123; theme=dark"), None);
        assert_eq!(xsrf_token_from(""), None);
    }

    #[test]
    fn xsrf_token_does_not_match_prefixed_names() {
        assert_eq!(xsrf_token_from("NOT-XSRF-TOKEN=nope"), None);
    }

    #[test]
    fn percent_decode_handles_plain_and_escaped() {
        assert_eq!(percent_decode("plain-token"), "plain-token");
        assert_eq!(percent_decode("a%20b%3D"), "a b=");
        // Truncated escape survives verbatim rather than vanishing.
        assert_eq!(percent_decode("abc%2"), "abc%2");
    }
}
