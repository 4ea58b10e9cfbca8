//! 认证模块
//!
//! 管理登录会话，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态；页面组件通过 prop 显式接收 `AuthContext`。

use crate::web::{FetchClient, Interval, LocalStorage, now};
use leptos::prelude::*;
use vitrine_shared::{ApiConfig, ApiError, MaestroApi, Session, Timestamp};

const STORAGE_SESSION_KEY: &str = "vitrine_session";

/// 会话过期检查周期
const EXPIRY_CHECK_INTERVAL_MS: u32 = 60_000;

/// 认证状态
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// 当前会话（仅在登录成功后存在）
    pub session: Option<Session>,
    /// 是否正在从存储恢复
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// 认证上下文
///
/// 包含读写信号，作为 prop 在页面间传递。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
    config: StoredValue<ApiConfig>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(config: ApiConfig) -> Self {
        let (state, set_state) = signal(AuthState {
            session: None,
            is_loading: true,
        });
        Self {
            state,
            set_state,
            config: StoredValue::new(config),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated()))
    }

    pub fn session(&self) -> Option<Session> {
        self.state.with_untracked(|s| s.session.clone())
    }

    /// 登录邮箱（用于界面显示）
    pub fn user(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|x| x.user.clone())))
    }

    /// 未认证的 API 客户端（仅用于登录）
    fn guest_api(&self) -> MaestroApi<FetchClient> {
        MaestroApi::new(self.config.get_value(), FetchClient)
    }

    /// 携带当前 token 的 API 客户端；未登录时为 `None`
    pub fn api(&self) -> Option<MaestroApi<FetchClient>> {
        let session = self.session()?;
        Some(self.guest_api().with_token(session.access_token))
    }
}

/// 丢弃已过期的会话
fn restore_session(stored: Option<Session>, now: Timestamp) -> Option<Session> {
    stored.filter(|session| !session.is_expired(now))
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复未过期的会话；过期的会话会被清除。
pub fn init_auth(ctx: &AuthContext) {
    let stored = LocalStorage::get_json::<Session>(STORAGE_SESSION_KEY);
    let had_stored = stored.is_some();
    let session = restore_session(stored, now());

    if had_stored && session.is_none() {
        log::info!("stored session expired, discarding");
        LocalStorage::delete(STORAGE_SESSION_KEY);
    }

    ctx.set_state.set(AuthState {
        session,
        is_loading: false,
    });
}

/// 定期检查会话是否过期，过期则注销
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn watch_session_expiry(ctx: AuthContext) {
    Interval::new(EXPIRY_CHECK_INTERVAL_MS, move || {
        let expired = ctx
            .state
            .with_untracked(|s| s.session.as_ref().is_some_and(|x| x.is_expired(now())));
        if expired {
            log::info!("session expired");
            logout(&ctx);
        }
    })
    .forget();
}

/// 登录并保存会话
///
/// 任何失败都原样返回，界面统一展示同一条错误文案。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), ApiError> {
    let session = ctx.guest_api().sign_in(&email, &password, now()).await?;

    if !LocalStorage::set_json(STORAGE_SESSION_KEY, &session) {
        log::warn!("session not persisted, it will not survive a reload");
    }

    ctx.set_state.update(|state| {
        state.session = Some(session);
        state.is_loading = false;
    });
    Ok(())
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_SESSION_KEY);
    ctx.set_state.update(|state| {
        state.session = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_shared::session::SESSION_MAX_AGE;

    fn session_at(issued_at: i64) -> Session {
        Session {
            access_token: "tok".to_string(),
            refresh_token: None,
            expires_in: Some(3600),
            user: "a@b.c".to_string(),
            issued_at: Timestamp::new(issued_at),
        }
    }

    #[test]
    fn test_restore_keeps_fresh_session() {
        let session = session_at(1_000);
        let restored = restore_session(Some(session.clone()), Timestamp::new(2_000));
        assert_eq!(restored, Some(session));
    }

    #[test]
    fn test_restore_drops_expired_session() {
        let session = session_at(0);
        let later = Timestamp::new(SESSION_MAX_AGE.as_millis() as i64);
        assert_eq!(restore_session(Some(session), later), None);
        assert_eq!(restore_session(None, later), None);
    }
}
