//! 商品目录：拖拽排序 + 加入固定槽位

use crate::components::icons::{GripVertical, Plus};
use leptos::prelude::*;
use leptos::web_sys::DragEvent;
use vitrine_shared::Product;
use vitrine_shared::editor::{CatalogEntry, EditorState};

#[component]
pub fn Catalog(state: RwSignal<EditorState>) -> impl IntoView {
    // 正在拖拽的商品下标
    let dragging = RwSignal::new(None::<usize>);

    // 筛选表单的输入不会改变这两个值，因此不触发重绘
    let entries = Memo::new(move |_| state.with(|s| s.catalog_entries()));
    let full = Memo::new(move |_| state.with(|s| s.constants.is_full()));

    let cards = move || {
        let full = full.get();
        entries
            .get()
            .into_iter()
            .map(|CatalogEntry { index, product, pinned }| {
                view! { <CatalogCard state=state dragging=dragging index=index product=product pinned=pinned full=full /> }
            })
            .collect_view()
    };

    view! {
        <div class="flex-1 card bg-base-100 border border-base-300 overflow-hidden">
            <div class="card-body p-4">
                <div class="font-semibold mb-2">"Koleksiyon Ürünleri"</div>
                <div class="flex-1 overflow-y-auto pr-2">
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">{cards}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CatalogCard(
    state: RwSignal<EditorState>,
    dragging: RwSignal<Option<usize>>,
    index: usize,
    product: Product,
    pinned: bool,
    full: bool,
) -> impl IntoView {
    let id = product.id.clone();

    let on_dragstart = {
        let id = id.clone();
        move |ev: DragEvent| {
            if pinned {
                ev.prevent_default();
                return;
            }
            if let Some(dt) = ev.data_transfer() {
                let _ = dt.set_data("text/plain", &id);
            }
            dragging.set(Some(index));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(from) = dragging.get_untracked() {
            state.update(|s| {
                s.reorder(from, index);
            });
        }
        dragging.set(None);
    };

    let card_class = move || {
        let mut class = "relative border border-base-300 rounded-lg flex flex-col items-center p-2 bg-base-200 transition-shadow".to_string();
        if pinned {
            class.push_str(" cursor-not-allowed");
        } else {
            class.push_str(" cursor-grab");
        }
        if dragging.get() == Some(index) {
            class.push_str(" shadow-lg opacity-60");
        }
        class
    };

    view! {
        <div
            class=card_class
            draggable={if pinned { "false" } else { "true" }}
            on:dragstart=on_dragstart
            on:dragover=|ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
            on:dragend=move |_| dragging.set(None)
        >
            <div class="relative">
                <img
                    src={product.image.clone()}
                    alt={product.name.clone()}
                    class={if pinned { "w-28 h-36 object-cover rounded mb-2 opacity-40" } else { "w-28 h-36 object-cover rounded mb-2" }}
                />
                {pinned.then(|| view! {
                    <div class="absolute inset-0 flex items-center justify-center">
                        <span class="badge badge-neutral badge-lg">"Eklendi"</span>
                    </div>
                })}
            </div>
            <div class="font-medium text-sm mb-1 text-center">{product.name.clone()}</div>
            <div class="text-xs text-base-content/60">{product.code.clone()}</div>
            {(!pinned).then(move || view! {
                <GripVertical attr:class="absolute top-2 left-2 h-4 w-4 text-base-content/40" />
                <button
                    class="btn btn-xs btn-circle absolute top-2 right-2"
                    title="Sabitlere Ekle"
                    disabled=full
                    on:click=move |_| {
                        state.update(|s| {
                            s.add_constant(&id);
                        });
                    }
                >
                    <Plus attr:class="h-3 w-3" />
                </button>
            })}
        </div>
    }
}
