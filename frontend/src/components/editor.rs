//! 集合固定槽位编辑器
//!
//! 页面只负责编排：状态变更都交给 `EditorState`，远端请求在这里发起，
//! 失败时记录日志并保持原状态。

mod catalog;
mod constants_panel;
mod filter_modal;

use crate::auth::AuthContext;
use crate::components::icons::{Filter, X};
use crate::components::layout::Shell;
use crate::components::modal::{ConfirmModal, FeedbackModal, Modal};
use crate::theme::ThemeContext;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use catalog::Catalog;
use constants_panel::ConstantsPanel;
use filter_modal::FilterModal;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_shared::ProductQuery;
use vitrine_shared::deletion::{DeletionPolicy, SimulatedDeletion};
use vitrine_shared::editor::{EditorState, RemovalFeedback};

/// 拉取商品目录，成功后整体替换
fn fetch_catalog(
    auth: AuthContext,
    collection_id: i64,
    query: ProductQuery,
    state: RwSignal<EditorState>,
) {
    let Some(api) = auth.api() else {
        return;
    };
    spawn_local(async move {
        match api.products_for_constants(collection_id, &query).await {
            Ok(products) => {
                log::debug!("collection {}: {} products", collection_id, products.len());
                state.update(|s| s.replace_catalog(products));
            }
            Err(e) => log::error!("failed to load products for collection {}: {}", collection_id, e),
        }
    });
}

#[component]
pub fn CollectionEditorPage(
    auth: AuthContext,
    theme: ThemeContext,
    collection_id: i64,
) -> impl IntoView {
    let router = use_router();

    let state = RwSignal::new(EditorState::new());
    let filter_open = RwSignal::new(false);
    let save_open = RwSignal::new(false);
    let feedback = RwSignal::new(None::<RemovalFeedback>);
    let applied = Memo::new(move |_| state.with(|s| s.applied.clone()));

    // 首次进入：筛选项元数据 + 未筛选的目录
    Effect::new(move |_| {
        let Some(api) = auth.api() else {
            router.navigate_to(AppRoute::Login);
            return;
        };
        spawn_local(async move {
            match api.filters_for_constants(collection_id).await {
                Ok(options) => state.update(|s| s.set_filter_options(options)),
                Err(e) => log::error!("failed to load filters for collection {}: {}", collection_id, e),
            }
        });
        fetch_catalog(auth, collection_id, ProductQuery::unfiltered(), state);
    });

    let on_apply = move |_: ()| {
        if let Some(query) = state.try_update(|s| s.apply_filters()) {
            fetch_catalog(auth, collection_id, query, state);
        }
        filter_open.set(false);
    };

    let on_clear = move |_: ()| {
        if let Some(query) = state.try_update(|s| s.clear_filters()) {
            fetch_catalog(auth, collection_id, query, state);
        }
    };

    // --- 删除确认 ---
    let confirm_open = Signal::derive(move || state.with(|s| s.pending_removal().is_some()));

    let on_confirm_removal = move |_: ()| {
        let Some(product_id) = state.try_update(|s| s.take_pending_removal()).flatten() else {
            return;
        };
        let policy = SimulatedDeletion::default();
        spawn_local(async move {
            let outcome = policy.delete_constant(collection_id, &product_id).await;
            let result = state.try_update(|s| s.resolve_removal(&product_id, outcome));
            feedback.set(result);
        });
    };

    let on_cancel_removal = move |_: ()| state.update(|s| s.cancel_removal());

    // --- 保存预览 ---
    let preview_json = move || {
        state.with(|s| match s.save_preview().to_pretty_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to render save payload: {}", e);
                String::new()
            }
        })
    };

    view! {
        <Shell auth=auth theme=theme title="Koleksiyon" subtitle="Sabitleri Düzenle">
            <div class="flex flex-col gap-4 h-full">
                <div class="flex items-center justify-between gap-2">
                    <span class="font-semibold">{format!("Koleksiyon #{}", collection_id)}</span>
                    <button class="btn btn-outline btn-sm gap-2" on:click=move |_| filter_open.set(true)>
                        <Filter attr:class="h-4 w-4" /> "Filtreler"
                    </button>
                </div>

                <Show when=move || applied.with(|a| !a.is_empty())>
                    <div class="bg-base-100 border border-base-300 rounded p-2 text-sm">
                        <span class="font-semibold">"Uygulanan Kriterler: "</span>
                        {move || applied.with(|a| a.iter().map(|chip| view! {
                            <span class="badge badge-ghost mr-2">{format!("{}: {}", chip.kind, chip.value)}</span>
                        }).collect_view())}
                    </div>
                </Show>

                <div class="flex flex-col lg:flex-row gap-4 flex-1 min-h-[400px]">
                    <Catalog state=state />
                    <ConstantsPanel state=state />
                </div>

                <div class="flex justify-end gap-4 mt-2">
                    <button class="btn btn-neutral" on:click=move |_| router.navigate_to(AppRoute::Collections)>
                        "Vazgeç"
                    </button>
                    <button class="btn btn-neutral" on:click=move |_| save_open.set(true)>
                        "Kaydet"
                    </button>
                </div>
            </div>

            <FilterModal
                state=state
                applied=applied
                open=filter_open
                on_apply=on_apply
                on_clear=on_clear
            />

            <ConfirmModal
                open=confirm_open
                message="Bu sabiti silmek istediğinize emin misiniz?"
                on_confirm=on_confirm_removal
                on_cancel=on_cancel_removal
            />

            <FeedbackModal feedback=feedback on_close=move |_: ()| feedback.set(None) />

            <Modal open=save_open on_close=move |_: ()| save_open.set(false) title="Gönderilecek Request">
                <button
                    class="btn btn-sm btn-circle btn-ghost absolute right-3 top-3"
                    on:click=move |_| save_open.set(false)
                >
                    <X attr:class="h-4 w-4" />
                </button>
                <pre class="bg-base-200 rounded p-4 text-xs overflow-x-auto max-h-96">{preview_json}</pre>
                <div class="modal-action">
                    <button class="btn btn-neutral" on:click=move |_| save_open.set(false)>"Kapat"</button>
                </div>
            </Modal>
        </Shell>
    }
}
