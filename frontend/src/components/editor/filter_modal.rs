//! 筛选弹窗
//!
//! 表单直接读写 `EditorState::filters`；应用 / 清空的网络部分由页面处理。
//! 目录与槽位面板通过 `Memo` 读取各自的数据，表单输入不会让它们重绘。

use crate::components::icons::X;
use crate::components::modal::Modal;
use leptos::prelude::*;
use vitrine_shared::WAREHOUSE_FILTER_ID;
use vitrine_shared::editor::EditorState;
use vitrine_shared::filter::{FilterForm, SORT_OPTIONS, value_options};
use vitrine_shared::{AppliedFilter, FilterOption, FilterValue};

/// 指定字段的读取器
fn field<T: Send + Sync + 'static>(
    state: RwSignal<EditorState>,
    read: fn(&FilterForm) -> T,
) -> impl Fn() -> T + Copy + Send + Sync + 'static {
    move || state.with(|s| read(&s.filters))
}

/// 下拉选项：当前值匹配时选中
fn value_option_views(values: Vec<FilterValue>, selected: impl Fn() -> String + Copy + Send + Sync + 'static) -> impl IntoView {
    values
        .into_iter()
        .map(|v| {
            let label = v.label().to_string();
            let value = v.value;
            let is_selected = {
                let value = value.clone();
                move || selected() == value
            };
            view! { <option value=value selected=is_selected>{label}</option> }
        })
        .collect_view()
}

#[component]
pub fn FilterModal(
    state: RwSignal<EditorState>,
    applied: Memo<Vec<AppliedFilter>>,
    open: RwSignal<bool>,
    #[prop(into)] on_apply: Callback<()>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let filter_type = field(state, |f| f.filter_type.clone());
    let filter_value = field(state, |f| f.filter_value.clone());
    let depot = field(state, |f| f.depot.clone());
    let min_stock = field(state, |f| f.min_stock.clone());
    let max_stock = field(state, |f| f.max_stock.clone());
    let product_code = field(state, |f| f.product_code.clone());
    let all_sizes = field(state, |f| f.all_sizes_in_stock);
    let sort_by = field(state, |f| f.sort_by.clone());

    let type_options = move || {
        state.with(|s| {
            s.filter_options
                .iter()
                .map(|opt: &FilterOption| (opt.id.clone(), opt.title.clone()))
                .collect::<Vec<_>>()
        })
    };
    let values_for_type = move || {
        state.with(|s| value_options(&s.filter_options, &s.filters.filter_type).to_vec())
    };
    let warehouse_values = move || {
        state.with(|s| value_options(&s.filter_options, WAREHOUSE_FILTER_ID).to_vec())
    };

    view! {
        <Modal open=open on_close=move |_: ()| open.set(false) title="Filtrele" wide=true>
            <button
                class="btn btn-sm btn-circle btn-ghost absolute right-3 top-3"
                on:click=move |_| open.set(false)
            >
                <X attr:class="h-4 w-4" />
            </button>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                // 类型 + 值：唯一会发送给服务端的条件
                <div class="space-y-2">
                    <label class="font-semibold text-sm">"Filtreler"</label>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.select_type(value));
                        }
                    >
                        <option value="" selected=move || filter_type().is_empty()>"Seçiniz"</option>
                        {move || type_options().into_iter().map(|(id, title)| {
                            let is_selected = {
                                let id = id.clone();
                                move || filter_type() == id
                            };
                            view! { <option value=id selected=is_selected>{title}</option> }
                        }).collect_view()}
                    </select>
                    <select
                        class="select select-bordered w-full"
                        disabled=move || filter_type().is_empty()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.filter_value = value);
                        }
                    >
                        <option value="" selected=move || filter_value().is_empty()>"Lütfen filtre seçiniz"</option>
                        {move || value_option_views(values_for_type(), filter_value)}
                    </select>
                </div>

                <div class="space-y-2">
                    <label class="font-semibold text-sm">"Stok"</label>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.depot = value);
                        }
                    >
                        <option value="" selected=move || depot().is_empty()>"Lütfen depo seçiniz"</option>
                        {move || value_option_views(warehouse_values(), depot)}
                    </select>
                    <input
                        type="number"
                        placeholder="Minimum Stok"
                        class="input input-bordered w-full"
                        prop:value=min_stock
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.min_stock = value);
                        }
                    />
                    <input
                        type="number"
                        placeholder="Maksimum Stok"
                        class="input input-bordered w-full"
                        prop:value=max_stock
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.max_stock = value);
                        }
                    />
                </div>

                <div class="space-y-2">
                    <label class="font-semibold text-sm">"Ürün Kodu"</label>
                    <input
                        type="text"
                        placeholder="Seçiniz"
                        class="input input-bordered w-full"
                        prop:value=product_code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.product_code = value);
                        }
                    />
                    <label class="label cursor-pointer justify-start gap-2 pt-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            prop:checked=all_sizes
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                state.update(|s| s.filters.all_sizes_in_stock = checked);
                            }
                        />
                        <span class="label-text">"Tüm Bedenlerinde Stok Olanlar"</span>
                    </label>
                </div>

                <div class="space-y-2">
                    <label class="font-semibold text-sm">"Sıralamalar"</label>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.sort_by = value);
                        }
                    >
                        <option value="" selected=move || sort_by().is_empty()>"Seçiniz"</option>
                        {SORT_OPTIONS.iter().map(|&(label, value)| view! {
                            <option value=value selected=move || sort_by() == value>{label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="mt-6">
                <label class="font-semibold text-sm">"Uygulanan Kriterler"</label>
                <div class="w-full h-24 p-2 border border-base-300 rounded-md mt-2 bg-base-200 overflow-y-auto">
                    {move || applied.get().into_iter().map(|chip| {
                        let value = chip.value.clone();
                        view! {
                            <span class="badge badge-lg gap-2 mr-2 mb-2">
                                {format!("{}: {}", chip.kind, chip.value)}
                                <button on:click=move |_| state.update(|s| s.dismiss_chip(&value))>
                                    <X attr:class="h-3 w-3" />
                                </button>
                            </span>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="modal-action">
                <button class="btn btn-neutral" on:click=move |_| on_clear.run(())>"Seçimi Temizle"</button>
                <button class="btn btn-outline" on:click=move |_| on_apply.run(())>"Ara"</button>
            </div>
        </Modal>
    }
}
