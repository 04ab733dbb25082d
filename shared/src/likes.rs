use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Counter row shared by the whole site
pub const LIKE_ROW_ID: &str = "site";
/// `localStorage` key remembering that this browser already liked the site
pub const LIKED_STORAGE_KEY: &str = "site_liked";
pub const LIKED_STORAGE_VALUE: &str = "1";

pub const GET_COUNT_RPC: &str = "get_like_count";
pub const INCREMENT_RPC: &str = "increment_like";

/// Body sent to both counter RPCs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRpcRequest {
    pub p_id: String,
}

impl Default for LikeRpcRequest {
    fn default() -> Self {
        Self {
            p_id: LIKE_ROW_ID.to_string(),
        }
    }
}

/// The RPCs answer with a bare JSON number; anything else is not a count.
pub fn parse_count(body: &Value) -> Option<u64> {
    body.as_u64().or_else(|| {
        body.as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as u64)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// No counter service is configured; the widget stays inert
    Unavailable,
    /// This visitor already liked; nothing to send
    AlreadyLiked,
    /// First like: persist the flag and ask the service to increment
    Registered { optimistic_count: u64 },
}

/// Client-side like state. At most one like per browser is enforced here,
/// never by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSession {
    liked: bool,
    count: u64,
    enabled: bool,
}

impl Default for LikeSession {
    fn default() -> Self {
        Self {
            liked: false,
            count: 0,
            enabled: true,
        }
    }
}

impl LikeSession {
    /// Restore from the persisted `localStorage` flag
    pub fn restore(stored_flag: Option<&str>) -> Self {
        Self {
            liked: stored_flag == Some(LIKED_STORAGE_VALUE),
            ..Self::default()
        }
    }

    /// Session for a page without counter settings. It shows the stored flag
    /// and a zero count and ignores every like.
    pub fn offline(stored_flag: Option<&str>) -> Self {
        Self {
            enabled: false,
            ..Self::restore(stored_flag)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Apply a fetched count. A body that is not a number shows as 0.
    pub fn apply_fetched(&mut self, count: Option<u64>) {
        self.count = count.unwrap_or(0);
    }

    pub fn like(&mut self) -> LikeOutcome {
        if !self.enabled {
            return LikeOutcome::Unavailable;
        }
        if self.liked {
            return LikeOutcome::AlreadyLiked;
        }
        self.liked = true;
        self.count += 1;
        LikeOutcome::Registered {
            optimistic_count: self.count,
        }
    }

    /// Apply the increment RPC answer; a non-number keeps the optimistic count
    pub fn apply_increment(&mut self, count: Option<u64>) {
        if let Some(count) = count {
            self.count = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(&json!(12)), Some(12));
        assert_eq!(parse_count(&json!(3.0)), Some(3));
        assert_eq!(parse_count(&json!(-1)), None);
        assert_eq!(parse_count(&json!("12")), None);
        assert_eq!(parse_count(&json!({"count": 1})), None);
        assert_eq!(parse_count(&json!(null)), None);
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_string(&LikeRpcRequest::default()).unwrap();
        assert_eq!(body, r#"{"p_id":"site"}"#);
    }

    #[test]
    fn test_restore_from_storage_flag() {
        assert!(LikeSession::restore(Some("1")).liked());
        assert!(!LikeSession::restore(Some("true")).liked());
        assert!(!LikeSession::restore(None).liked());
    }

    #[test]
    fn test_one_like_per_session() {
        let mut session = LikeSession::restore(None);
        session.apply_fetched(Some(41));

        assert_eq!(
            session.like(),
            LikeOutcome::Registered {
                optimistic_count: 42
            }
        );
        assert_eq!(session.like(), LikeOutcome::AlreadyLiked);
        assert_eq!(session.count(), 42);

        // Service knows better than the optimistic guess
        session.apply_increment(Some(50));
        assert_eq!(session.count(), 50);
        session.apply_increment(None);
        assert_eq!(session.count(), 50);
    }

    #[test]
    fn test_returning_visitor_cannot_like_again() {
        let mut session = LikeSession::restore(Some(LIKED_STORAGE_VALUE));
        session.apply_fetched(Some(7));
        assert_eq!(session.like(), LikeOutcome::AlreadyLiked);
        assert_eq!(session.count(), 7);
    }

    #[test]
    fn test_offline_session_ignores_likes() {
        let mut session = LikeSession::offline(None);
        assert!(!session.is_enabled());
        assert_eq!(session.like(), LikeOutcome::Unavailable);
        assert_eq!(session.like(), LikeOutcome::Unavailable);
        assert!(!session.liked());
        assert_eq!(session.count(), 0);

        assert!(LikeSession::offline(Some(LIKED_STORAGE_VALUE)).liked());
        assert!(LikeSession::restore(None).is_enabled());
    }

    #[test]
    fn test_non_numeric_fetch_shows_zero() {
        let mut session = LikeSession::default();
        session.apply_fetched(Some(9));
        session.apply_fetched(None);
        assert_eq!(session.count(), 0);
    }
}
