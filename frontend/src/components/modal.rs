//! 通用模态框
//!
//! 基于原生 `<dialog>`，由 `open` 信号驱动 `show_modal` / `close`。

use crate::components::icons::{CircleAlert, CircleCheck};
use leptos::prelude::*;
use vitrine_shared::editor::RemovalFeedback;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let should_open = open.get();
            if should_open && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !should_open && dialog.open() {
                dialog.close();
            }
        }
    });

    let box_class = if wide {
        "modal-box w-11/12 max-w-5xl"
    } else {
        "modal-box"
    };

    view! {
        // Esc 关闭时同步外部状态
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class=box_class>
                <h3 class="font-bold text-lg mb-4">{title}</h3>
                {children()}
            </div>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        </dialog>
    }
}

/// 二次确认
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_cancel title="Uyarı!">
            <p class="py-2">{message}</p>
            <div class="modal-action">
                <button class="btn btn-ghost" on:click=move |_| on_cancel.run(())>"İptal"</button>
                <button class="btn btn-error" on:click=move |_| on_confirm.run(())>"Sil"</button>
            </div>
        </Modal>
    }
}

/// 删除结果反馈
#[component]
pub fn FeedbackModal(
    #[prop(into)] feedback: Signal<Option<RemovalFeedback>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || feedback.with(|f| f.is_some()));

    view! {
        <dialog
            class="modal"
            class=("modal-open", move || open.get())
            on:close=move |_| on_close.run(())
        >
            <div class="modal-box text-center">
                {move || feedback.get().map(|fb| view! {
                    <div class="flex flex-col items-center gap-3">
                        {if fb.is_error() {
                            view! { <CircleAlert attr:class="h-12 w-12 text-error" /> }.into_any()
                        } else {
                            view! { <CircleCheck attr:class="h-12 w-12 text-success" /> }.into_any()
                        }}
                        <h3 class="font-bold text-2xl">{fb.title()}</h3>
                        <p>{fb.message()}</p>
                    </div>
                })}
                <div class="modal-action justify-center">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>"Kapat"</button>
                </div>
            </div>
        </dialog>
    }
}
