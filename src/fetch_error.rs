use reqwest::StatusCode;

/// Why a team page could not be retrieved.
#[derive(Debug)]
pub enum FetchError {
    InvalidUrl { url: String, reason: String },
    Status { url: String, status: StatusCode },
    Transport { url: String, source: reqwest::Error },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidUrl { url, reason } => {
                write!(f, "the supplied URL {url} is not valid: {reason}")
            }
            FetchError::Status { url, status } => {
                write!(f, "{url} responded with {status}")
            }
            FetchError::Transport { url, source } => {
                write!(f, "request to {url} failed: {source}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_url_once() {
        let err = FetchError::Status {
            url: "https://www.spotrac.com/nba/miami-heat/cap/_/year/2025".to_string(),
            status: StatusCode::FORBIDDEN,
        };
        let message = err.to_string();
        assert_eq!(message.matches("miami-heat").count(), 1);
        assert!(message.contains("403"));
    }
}
