use crate::components::icons::{ChevronLeft, ChevronRight};
use leptos::prelude::*;
use vitrine_shared::pagination::Pager;

/// 分页条：上一页 / 页码 / 下一页
#[component]
pub fn PaginationBar(pager: RwSignal<Pager>) -> impl IntoView {
    view! {
        <nav class="join">
            <button
                class="join-item btn btn-sm btn-ghost"
                aria-label="Önceki"
                disabled=move || !pager.with(|p| p.has_prev())
                on:click=move |_| pager.update(|p| p.prev())
            >
                <ChevronLeft attr:class="h-4 w-4" />
            </button>
            <For
                each=move || pager.with(|p| p.pages())
                key=|n| *n
                children=move |n| view! {
                    <button
                        class="join-item btn btn-sm"
                        class=("btn-primary", move || pager.with(|p| p.page() == n))
                        class=("btn-ghost", move || pager.with(|p| p.page() != n))
                        on:click=move |_| pager.update(|p| p.go_to(n))
                    >
                        {n}
                    </button>
                }
            />
            <button
                class="join-item btn btn-sm btn-ghost"
                aria-label="Sonraki"
                disabled=move || !pager.with(|p| p.has_next())
                on:click=move |_| pager.update(|p| p.next())
            >
                <ChevronRight attr:class="h-4 w-4" />
            </button>
        </nav>
    }
}
