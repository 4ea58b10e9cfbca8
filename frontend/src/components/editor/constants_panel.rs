//! 固定槽位面板：网格 / 列表两种展示，每页 6 个槽位

use crate::components::icons::{LayoutGrid, List, Package, Trash};
use crate::components::pagination::PaginationBar;
use leptos::prelude::*;
use vitrine_shared::CONSTANT_SLOT_CAPACITY;
use vitrine_shared::editor::EditorState;
use vitrine_shared::slots::{ConstantSlots, SlotView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotLayout {
    Grid,
    List,
}

#[component]
pub fn ConstantsPanel(state: RwSignal<EditorState>) -> impl IntoView {
    let layout = RwSignal::new(SlotLayout::Grid);
    let pager = RwSignal::new(ConstantSlots::pager());
    let constants = Memo::new(move |_| state.with(|s| s.constants.clone()));

    let slots = move || {
        let page = pager.with(|p| p.page());
        let current = layout.get();
        constants
            .with(|c| c.page(page))
            .into_iter()
            .map(|slot| Slot(SlotProps { state, slot, layout: current }))
            .collect_view()
    };

    let layout_button = move |target: SlotLayout| {
        move || {
            if layout.get() == target {
                "btn btn-sm btn-square btn-active"
            } else {
                "btn btn-sm btn-square btn-ghost"
            }
        }
    };

    view! {
        <div class="flex-1 card bg-base-100 border border-base-300 overflow-hidden">
            <div class="card-body p-4 flex flex-col">
                <div class="flex items-center justify-between mb-2">
                    <span class="font-semibold">
                        "Sabitler "
                        <span class="text-base-content/50 text-sm">
                            {move || constants.with(|c| format!("({}/{})", c.len(), CONSTANT_SLOT_CAPACITY))}
                        </span>
                    </span>
                    <div class="flex items-center gap-2">
                        <button class={layout_button(SlotLayout::Grid)} on:click=move |_| layout.set(SlotLayout::Grid)>
                            <LayoutGrid attr:class="h-4 w-4" />
                        </button>
                        <button class={layout_button(SlotLayout::List)} on:click=move |_| layout.set(SlotLayout::List)>
                            <List attr:class="h-4 w-4" />
                        </button>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto pr-2">
                    <div class=move || match layout.get() {
                        SlotLayout::Grid => "grid grid-cols-2 sm:grid-cols-3 gap-4",
                        SlotLayout::List => "flex flex-col gap-4",
                    }>
                        {slots}
                    </div>
                </div>

                <div class="flex justify-center mt-4 pt-2 border-t border-base-300">
                    <PaginationBar pager=pager />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Slot(state: RwSignal<EditorState>, slot: SlotView, layout: SlotLayout) -> impl IntoView {
    let Some(product) = slot.product else {
        let (class, icon) = match layout {
            SlotLayout::Grid => ("min-h-[120px]", "h-12 w-12 text-base-content/30"),
            SlotLayout::List => ("min-h-[60px]", "h-10 w-10 text-base-content/30"),
        };
        return view! {
            <div class={format!("border border-dashed border-base-300 rounded-lg flex items-center justify-center p-2 bg-base-200 {}", class)}>
                <Package attr:class=icon />
            </div>
        }
        .into_any();
    };

    let id = product.id.clone();
    let remove = view! {
        <button
            class="btn btn-xs btn-circle absolute top-2 right-2"
            title="Sabitten Çıkar"
            on:click=move |_| {
                state.update(|s| {
                    s.request_removal(&id);
                });
            }
        >
            <Trash attr:class="h-3 w-3" />
        </button>
    };

    match layout {
        SlotLayout::Grid => view! {
            <div class="relative border border-base-300 rounded-lg flex flex-col items-center justify-center p-2 min-h-[120px] bg-base-200">
                <img src={product.image} alt={product.name.clone()} class="w-20 h-28 object-cover rounded mb-2" />
                <div class="font-medium text-sm mb-1 text-center">{product.name}</div>
                <div class="text-xs text-base-content/60">{product.code}</div>
                {remove}
            </div>
        }
        .into_any(),
        SlotLayout::List => view! {
            <div class="relative border border-base-300 rounded-lg flex items-center gap-4 p-2 min-h-[60px] bg-base-200">
                <img src={product.image} alt={product.name.clone()} class="w-14 h-14 object-cover rounded" />
                <div>
                    <div class="font-medium text-sm mb-1">{product.name}</div>
                    <div class="text-xs text-base-content/60">{product.code}</div>
                </div>
                {remove}
            </div>
        }
        .into_any(),
    }
}
