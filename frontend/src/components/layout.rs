//! 页面外壳：侧边栏 + 顶栏
//!
//! 除注销外不包含业务逻辑。

use crate::auth::{AuthContext, logout};
use crate::components::icons::{LayoutDashboard, Layers, LogOut, Package};
use crate::theme::{ThemeContext, ThemeSwitcher};
use crate::web::route::AppRoute;
use crate::web::router::RouteLink;
use leptos::prelude::*;

#[component]
pub fn Shell(
    auth: AuthContext,
    theme: ThemeContext,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-base-200 text-base-content">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <Header auth=auth theme=theme title=title subtitle=subtitle />
                <main class="flex-1 p-4 md:p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn Header(auth: AuthContext, theme: ThemeContext, title: String, subtitle: String) -> impl IntoView {
    let user = auth.user();

    view! {
        <header class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 flex-col items-start">
                <div class="text-lg font-bold">{title}</div>
                <div class="text-sm text-base-content/60">{subtitle}</div>
            </div>
            <div class="flex-none flex items-center gap-4">
                <ThemeSwitcher theme=theme />
                <div class="h-6 w-px bg-base-300"></div>
                <span class="hidden md:inline text-sm text-base-content/70">
                    {move || user.get().unwrap_or_default()}
                </span>
                <button class="btn btn-ghost btn-sm gap-2" on:click=move |_| logout(&auth)>
                    <LogOut attr:class="h-4 w-4" /> "Çıkış"
                </button>
            </div>
        </header>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 bg-base-100 border-r border-base-300 min-h-screen p-4 hidden md:flex flex-col">
            <div class="text-2xl font-bold mb-8 ml-2 tracking-widest">"VITRINE"</div>
            <ul class="menu gap-1 p-0">
                <li class="menu-title">"Menü"</li>
                <li>
                    <a href="#"><LayoutDashboard attr:class="h-4 w-4" /> "Dashboard"</a>
                </li>
                <li>
                    <a href="#"><Package attr:class="h-4 w-4" /> "Ürünler"</a>
                </li>
                <li class="menu-title mt-4">"Satış"</li>
                <li>
                    <RouteLink to=AppRoute::Collections class="menu-active">
                        <Layers attr:class="h-4 w-4" /> "Koleksiyon"
                    </RouteLink>
                </li>
            </ul>
        </aside>
    }
}
