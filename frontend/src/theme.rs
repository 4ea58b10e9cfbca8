//! 主题切换
//!
//! 亮色 / 暗色二选一，全局生效并保存在 LocalStorage。
//! 存储中的偏好在挂载后才解析，解析前切换按钮不渲染。

use crate::components::icons::{Moon, Sun};
use crate::web::LocalStorage;
use leptos::prelude::*;

const STORAGE_THEME_KEY: &str = "vitrine_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// 主题上下文，`None` 表示尚未从存储解析
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Option<Theme>>,
}

impl ThemeContext {
    pub fn new() -> Self {
        let theme = RwSignal::new(None);

        // 挂载后解析存储的偏好
        Effect::new(move |_| {
            if theme.get_untracked().is_none() {
                let stored = LocalStorage::get(STORAGE_THEME_KEY)
                    .and_then(|v| Theme::parse(&v))
                    .unwrap_or_default();
                theme.set(Some(stored));
            }
        });

        // 应用到 <html>
        Effect::new(move |_| {
            if let Some(current) = theme.get() {
                apply_theme(current);
            }
        });

        Self { theme }
    }

    pub fn toggle(&self) {
        let Some(current) = self.theme.get_untracked() else {
            return;
        };
        let next = current.toggled();
        LocalStorage::set(STORAGE_THEME_KEY, next.as_str());
        self.theme.set(Some(next));
    }
}

fn apply_theme(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = html.set_attribute("data-theme", theme.as_str());
    let classes = html.class_list();
    let _ = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
}

#[component]
pub fn ThemeSwitcher(theme: ThemeContext) -> impl IntoView {
    move || {
        theme.theme.get().map(|current| {
            let is_dark = current == Theme::Dark;
            view! {
                <div class="flex items-center gap-2">
                    <Sun attr:class={if is_dark { "h-5 w-5 opacity-40" } else { "h-5 w-5 text-primary" }} />
                    <input
                        type="checkbox"
                        class="toggle toggle-sm"
                        prop:checked=is_dark
                        on:change=move |_| theme.toggle()
                    />
                    <Moon attr:class={if is_dark { "h-5 w-5 text-primary" } else { "h-5 w-5 opacity-40" }} />
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("system"), None);
    }

    #[test]
    fn test_toggle_is_binary() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
