use crate::auth::{AuthContext, login};
use crate::components::icons::{Eye, EyeOff, Store};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 所有登录失败共用的提示
const LOGIN_FAILED_MESSAGE: &str = "E-posta veya şifre hatalı.";

/// 登录表单的提交阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Rejected,
}

impl LoginPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Rejected => Some(LOGIN_FAILED_MESSAGE),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Giriş Yapılıyor..."
        } else {
            "Giriş Yap"
        }
    }
}

#[component]
pub fn LoginPage(auth: AuthContext) -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    // 仅界面状态，会话始终持久化
    let (remember, set_remember) = signal(false);
    let (phase, set_phase) = signal(LoginPhase::Idle);

    let is_loading = move || auth.state.with(|s| s.is_loading);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }
        set_phase.set(LoginPhase::Submitting);

        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match login(&auth, email, password).await {
                Ok(()) => {
                    set_phase.set(LoginPhase::Idle);
                    router.navigate_to(AppRoute::Collections);
                }
                Err(e) => {
                    log::warn!("sign in failed: {}", e);
                    set_phase.set(LoginPhase::Rejected);
                }
            }
        });
    };

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }>
            <div class="flex min-h-screen items-center justify-center bg-base-100">
                <form class="flex flex-col gap-6 w-full max-w-sm" on:submit=on_submit>
                    <div class="mb-8 flex flex-col items-center gap-2">
                        <Store attr:class="h-10 w-10" />
                        <span class="text-4xl font-extrabold tracking-widest font-mono">"VITRINE"</span>
                    </div>

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"E-Posta"</span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="username"
                            placeholder="johnsondoe@nomail.com"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class="input input-bordered w-full"
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Şifre"</span>
                        </label>
                        <div class="relative">
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                placeholder="****************"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered w-full pr-12"
                                required
                            />
                            <button
                                type="button"
                                tabindex="-1"
                                class="absolute right-3 top-3 text-base-content/50 hover:text-base-content"
                                aria-label=move || if show_password.get() { "Şifreyi gizle" } else { "Şifreyi göster" }
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() {
                                    view! { <EyeOff attr:class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Eye attr:class="h-5 w-5" /> }.into_any()
                                }}
                            </button>
                        </div>
                    </div>

                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            prop:checked=remember
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"Beni Hatırla"</span>
                    </label>

                    {move || phase.get().error_message().map(|msg| view! {
                        <div role="alert" class="text-error text-sm -mt-4">{msg}</div>
                    })}

                    <button
                        type="submit"
                        class="btn btn-neutral w-full"
                        disabled=move || phase.get().is_submitting()
                    >
                        {move || phase.get().button_label()}
                    </button>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_shows_fixed_message() {
        assert_eq!(LoginPhase::Idle.error_message(), None);
        assert_eq!(
            LoginPhase::Rejected.error_message(),
            Some("E-posta veya şifre hatalı.")
        );
    }

    #[test]
    fn test_button_label_follows_phase() {
        assert_eq!(LoginPhase::Idle.button_label(), "Giriş Yap");
        assert_eq!(LoginPhase::Submitting.button_label(), "Giriş Yapılıyor...");
        assert_eq!(LoginPhase::Rejected.button_label(), "Giriş Yap");
        assert!(!LoginPhase::Rejected.is_submitting());
    }
}
