//! Response wrappers returned by every operation

use reqwest::header::HeaderMap;

/// A decoded response: status, headers and the typed result
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded response body, or `T::default()` when the body was empty
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Borrow the decoded result
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Take the decoded result, dropping status and headers
    pub fn into_result(self) -> T {
        self.result
    }

    /// Transform the result while keeping status and headers
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}

/// An undecoded response, kept on errors for diagnostics
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
