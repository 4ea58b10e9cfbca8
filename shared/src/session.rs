//! 登录会话
//!
//! 会话在登录成功时创建，最长存活 8 小时；注销或过期即销毁。

use crate::date::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 会话最长存活时间
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(8 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// 服务端给出的 token 有效期（秒），仅作展示
    pub expires_in: Option<i64>,
    /// 登录所用的邮箱
    pub user: String,
    pub issued_at: Timestamp,
}

impl Session {
    pub fn expires_at(&self) -> Timestamp {
        self.issued_at + SESSION_MAX_AGE
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at()
    }

    /// 剩余有效时间，已过期时为 0
    pub fn remaining(&self, now: Timestamp) -> Duration {
        self.expires_at() - now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(ms: i64) -> Session {
        Session {
            access_token: "token".into(),
            refresh_token: None,
            expires_in: Some(3600),
            user: "a@b.c".into(),
            issued_at: Timestamp::new(ms),
        }
    }

    #[test]
    fn test_session_expires_after_eight_hours() {
        let session = session_at(0);
        let almost = Timestamp::new(SESSION_MAX_AGE.as_millis() as i64 - 1);
        let exactly = Timestamp::new(SESSION_MAX_AGE.as_millis() as i64);

        assert!(!session.is_expired(almost));
        assert!(session.is_expired(exactly));
        assert_eq!(session.remaining(exactly), Duration::ZERO);
        assert_eq!(session.remaining(almost), Duration::from_millis(1));
    }

    #[test]
    fn test_session_survives_json_round_trip() {
        let session = session_at(1_700_000_000_000);
        let text = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&text).unwrap();
        assert_eq!(back, session);
    }
}
