//! Vitrine 前端应用
//!
//! 采用 Signal 驱动、显式传递上下文的架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理，作为 prop 传给各页面
//! - `theme`: 亮/暗主题
//! - `components`: UI 组件层

mod auth;
mod config;
mod theme;
mod components {
    pub mod collections;
    pub mod editor;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod modal;
    pub mod pagination;
}

use crate::auth::{AuthContext, init_auth, watch_session_expiry};
use crate::components::collections::CollectionsPage;
use crate::components::editor::CollectionEditorPage;
use crate::components::login::LoginPage;
use crate::config::AppConfig;
use crate::theme::ThemeContext;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod clock;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use clock::now;
    pub use http::FetchClient;
    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{RouteLink, Router, RouterOutlet};

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Sayfa bulunamadı"</p>
                <RouteLink to=AppRoute::Collections class="btn btn-link mt-2">"Koleksiyonlara dön"</RouteLink>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("API base: {}", config.api.base_url());

    // 1. 创建认证上下文并从 LocalStorage 恢复会话
    let auth = AuthContext::new(config.api);
    init_auth(&auth);
    watch_session_expiry(auth);

    // 2. 主题（挂载后解析）
    let theme = ThemeContext::new();

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth.is_authenticated_signal();

    // 路由匹配：上下文显式传给页面
    let matcher = move |route: AppRoute| -> AnyView {
        match route {
            AppRoute::Login => view! { <LoginPage auth=auth /> }.into_any(),
            AppRoute::Collections => view! { <CollectionsPage auth=auth theme=theme /> }.into_any(),
            AppRoute::CollectionEdit(id) => {
                view! { <CollectionEditorPage auth=auth theme=theme collection_id=id /> }.into_any()
            }
            AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        }
    };

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=matcher />
        </Router>
    }
}
