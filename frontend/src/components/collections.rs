use crate::auth::AuthContext;
use crate::components::icons::Pencil;
use crate::components::layout::Shell;
use crate::components::pagination::PaginationBar;
use crate::theme::ThemeContext;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_shared::pagination::Pager;
use vitrine_shared::{ApiError, COLLECTIONS_PAGE_SIZE, Collection};

/// 集合列表的加载状态，表格主体只展示其中一种
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(&'static str),
    Ready,
}

/// 表格主体实际渲染的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Failed(&'static str),
    Empty,
    Rows,
}

impl LoadState {
    /// 结合已加载的条目数决定表格主体
    pub fn table_body(&self, count: usize) -> TableBody {
        match self {
            LoadState::Loading => TableBody::Loading,
            LoadState::Failed(msg) => TableBody::Failed(*msg),
            LoadState::Ready if count == 0 => TableBody::Empty,
            LoadState::Ready => TableBody::Rows,
        }
    }
}

/// 非 2xx 返回固定文案，其余错误统一为通用提示
pub fn load_error_message(err: &ApiError) -> &'static str {
    if err.is_status() {
        "Koleksiyonlar alınamadı"
    } else {
        "Bir hata oluştu"
    }
}

#[component]
pub fn CollectionsPage(auth: AuthContext, theme: ThemeContext) -> impl IntoView {
    let router = use_router();

    let collections = RwSignal::new(Vec::<Collection>::new());
    let load_state = RwSignal::new(LoadState::Loading);
    let pager = RwSignal::new(Pager::new(COLLECTIONS_PAGE_SIZE));

    // 挂载时加载一次
    Effect::new(move |_| {
        let Some(api) = auth.api() else {
            router.navigate_to(AppRoute::Login);
            return;
        };
        spawn_local(async move {
            match api.list_collections().await {
                Ok(list) => {
                    pager.update(|p| p.set_total(list.len()));
                    collections.set(list);
                    load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load collections: {}", e);
                    load_state.set(LoadState::Failed(load_error_message(&e)));
                }
            }
        });
    });

    let page_rows = move || pager.with(|p| collections.with(|list| p.slice(list).to_vec()));

    let body = move || match load_state.with(|s| s.table_body(collections.with(Vec::len))) {
        TableBody::Loading => view! {
            <tr><td colspan="4" class="text-center py-8 text-base-content/50">"Yükleniyor..."</td></tr>
        }
        .into_any(),
        TableBody::Failed(msg) => view! {
            <tr><td colspan="4" class="text-center py-8 text-error">{msg}</td></tr>
        }
        .into_any(),
        TableBody::Empty => view! {
            <tr><td colspan="4" class="text-center py-8 text-base-content/40">"Koleksiyon bulunamadı"</td></tr>
        }
        .into_any(),
        TableBody::Rows => page_rows()
            .into_iter()
            .map(|col| view! { <CollectionRow collection=col /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <Shell auth=auth theme=theme title="Koleksiyon" subtitle="Koleksiyon Listesi">
            <div class="card bg-base-100 shadow max-w-6xl mx-auto">
                <div class="card-body">
                    <div class="overflow-x-auto">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"Başlık"</th>
                                    <th>"Ürün Koşulları"</th>
                                    <th>"Satış Kanalı"</th>
                                    <th>"İşlemler"</th>
                                </tr>
                            </thead>
                            <tbody>{body}</tbody>
                        </table>
                    </div>
                    <Show when=move || pager.with(|p| p.total_pages() > 1)>
                        <div class="flex justify-end mt-6">
                            <PaginationBar pager=pager />
                        </div>
                    </Show>
                </div>
            </div>
        </Shell>
    }
}

#[component]
fn CollectionRow(collection: Collection) -> impl IntoView {
    let router = use_router();
    let id = collection.id;
    let channel = collection.sales_channel_label();

    let conditions = if collection.filters.is_empty() {
        view! { <span class="text-base-content/40 text-sm">"-"</span> }.into_any()
    } else {
        view! {
            <ul class="space-y-1">
                {collection
                    .filters
                    .iter()
                    .map(|f| view! { <li class="text-sm">{f.statement()}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <tr>
            <td class="align-top whitespace-nowrap">{collection.name}</td>
            <td class="align-top">{conditions}</td>
            <td class="align-top">{channel}</td>
            <td class="align-top text-center">
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    title="Sabitleri Düzenle"
                    on:click=move |_| router.navigate_to(AppRoute::CollectionEdit(id))
                >
                    <Pencil attr:class="h-5 w-5" />
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(load_error_message(&ApiError::Status(500)), "Koleksiyonlar alınamadı");
        assert_eq!(load_error_message(&ApiError::Status(401)), "Koleksiyonlar alınamadı");
    }

    #[test]
    fn test_other_errors_use_generic_message() {
        let err = ApiError::Network("offline".to_string());
        assert_eq!(load_error_message(&err), "Bir hata oluştu");
        assert_eq!(load_error_message(&ApiError::MissingToken), "Bir hata oluştu");
    }

    #[test]
    fn test_table_body_before_load() {
        assert_eq!(LoadState::Loading.table_body(0), TableBody::Loading);
    }

    #[test]
    fn test_table_body_failure_hides_rows() {
        let state = LoadState::Failed(load_error_message(&ApiError::Status(500)));
        assert_eq!(state.table_body(0), TableBody::Failed("Koleksiyonlar alınamadı"));
        assert_eq!(state.table_body(12), TableBody::Failed("Koleksiyonlar alınamadı"));
    }

    #[test]
    fn test_table_body_ready() {
        assert_eq!(LoadState::Ready.table_body(0), TableBody::Empty);
        assert_eq!(LoadState::Ready.table_body(1), TableBody::Rows);
        assert_eq!(LoadState::Ready.table_body(25), TableBody::Rows);
    }
}
