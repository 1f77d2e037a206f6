use serenity::http::HttpError;
use thiserror::Error;

/// HTTP status Discord returns when a request exceeds a rate limit.
const TOO_MANY_REQUESTS: u16 = 429;

/// Failure of a single call against the guild API.
///
/// Serenity errors are classified at the boundary so the mirror phases can decide
/// between retrying, skipping, and logging without inspecting transport types.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request was rejected because of a rate limit.
    ///
    /// Serenity's ratelimiter already waits out `Retry-After` on known buckets, so this
    /// only surfaces once that wait did not help.
    #[error("Rate limited by Discord")]
    RateLimited,

    /// Discord answered with an error response.
    ///
    /// `code` is Discord's JSON error code (e.g. 50013 Missing Permissions,
    /// 50028 Invalid Role).
    #[error("Discord rejected the request with status {status} (code {code}): {message}")]
    Rejected {
        status: u16,
        code: isize,
        message: String,
    },

    /// The request failed before Discord produced a usable response.
    #[error("Discord request failed: {0}")]
    Request(String),

    /// The source icon could not be downloaded.
    #[error("Failed to download guild icon: {0}")]
    Icon(String),
}

impl ApiError {
    /// Discord's JSON error code, if Discord rejected the request.
    pub fn code(&self) -> Option<isize> {
        match self {
            Self::Rejected { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

impl From<serenity::Error> for ApiError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(http_err) => classify_http(http_err).unwrap_or_else(|| Self::Request(err.to_string())),
            _ => Self::Request(err.to_string()),
        }
    }
}

fn classify_http(err: &HttpError) -> Option<ApiError> {
    match err {
        HttpError::UnsuccessfulRequest(response) => {
            let status = response.status_code.as_u16();
            if status == TOO_MANY_REQUESTS {
                return Some(ApiError::RateLimited);
            }
            Some(ApiError::Rejected {
                status,
                code: response.error.code,
                message: response.error.message.clone(),
            })
        }
        _ => None,
    }
}
