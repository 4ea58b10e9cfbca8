//! 集合编辑器的本地状态
//!
//! 特点：
//! 1. 纯状态机：不发起任何网络请求，查询体由 `apply_filters` / `clear_filters` 返回，
//!    调用方负责发送并在成功后调用 `replace_catalog`。
//! 2. 失败即不变：远端失败时调用方不触碰状态。
//! 3. 删除固定槽位必须先 `request_removal`，确认后由 `DeletionPolicy` 决定结果。

use crate::deletion::DeletionOutcome;
use crate::filter::FilterForm;
use crate::slots::{AddOutcome, ConstantSlots};
use crate::{AppliedFilter, FilterOption, Product, ProductQuery, SavePayload};

/// 删除流程结束后给用户的反馈
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalFeedback {
    Removed,
    Failed,
}

impl RemovalFeedback {
    pub fn title(&self) -> &'static str {
        match self {
            RemovalFeedback::Removed => "Başarılı!",
            RemovalFeedback::Failed => "Hata!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RemovalFeedback::Removed => "Sabit başarıyla silindi.",
            RemovalFeedback::Failed => "Sabit silinirken bir hata oluştu.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RemovalFeedback::Failed)
    }
}

/// 目录中一张卡片的展示数据
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub index: usize,
    pub product: Product,
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// 商品目录（工作顺序）
    pub products: Vec<Product>,
    pub constants: ConstantSlots,
    /// 筛选弹窗中尚未应用的表单
    pub filters: FilterForm,
    /// 已应用的展示标签
    pub applied: Vec<AppliedFilter>,
    pub filter_options: Vec<FilterOption>,
    pending_removal: Option<String>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- 远端数据 ---

    /// 用服务端结果整体替换商品目录
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn set_filter_options(&mut self, options: Vec<FilterOption>) {
        self.filter_options = options;
    }

    // --- 目录排序 ---

    /// 把 `from` 处的商品移动到 `to`，仅本地生效
    ///
    /// 下标越界或相同时返回 `false` 且不修改。
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.products.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.products.remove(from);
        self.products.insert(to, item);
        true
    }

    // --- 固定槽位 ---

    pub fn is_pinned(&self, product_id: &str) -> bool {
        self.constants.contains(product_id)
    }

    /// 目录卡片：只依赖商品顺序与槽位，与筛选表单无关
    pub fn catalog_entries(&self) -> Vec<CatalogEntry> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| CatalogEntry {
                index,
                product: product.clone(),
                pinned: self.is_pinned(&product.id),
            })
            .collect()
    }

    /// 从目录中按 id 添加到固定槽位
    pub fn add_constant(&mut self, product_id: &str) -> Option<AddOutcome> {
        let product = self.products.iter().find(|p| p.id == product_id)?.clone();
        Some(self.constants.add(product))
    }

    /// 发起删除，等待确认；商品不在槽位中时忽略
    pub fn request_removal(&mut self, product_id: &str) -> bool {
        if !self.constants.contains(product_id) {
            return false;
        }
        self.pending_removal = Some(product_id.to_string());
        true
    }

    pub fn pending_removal(&self) -> Option<&str> {
        self.pending_removal.as_deref()
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// 确认删除：取出待删除的 id，交由 `DeletionPolicy` 决策
    pub fn take_pending_removal(&mut self) -> Option<String> {
        self.pending_removal.take()
    }

    /// 根据决策结果完成删除，要么整体移除，要么保持不变
    pub fn resolve_removal(&mut self, product_id: &str, outcome: DeletionOutcome) -> RemovalFeedback {
        match outcome {
            DeletionOutcome::Deleted => {
                self.constants.remove(product_id);
                RemovalFeedback::Removed
            }
            DeletionOutcome::Failed => RemovalFeedback::Failed,
        }
    }

    // --- 筛选 ---

    /// 应用表单：更新展示标签并返回新的目录查询
    pub fn apply_filters(&mut self) -> ProductQuery {
        self.applied = self.filters.applied_chips(&self.filter_options);
        ProductQuery::new(self.filters.additional_filters())
    }

    /// 清空表单与标签，返回不带筛选的查询
    pub fn clear_filters(&mut self) -> ProductQuery {
        self.filters.reset();
        self.applied.clear();
        ProductQuery::unfiltered()
    }

    /// 移除展示标签（不重新查询）
    pub fn dismiss_chip(&mut self, value: &str) {
        self.applied.retain(|chip| chip.value != value);
    }

    // --- 保存 ---

    /// 组装保存请求体，仅用于预览
    pub fn save_preview(&self) -> SavePayload {
        SavePayload {
            order: self.products.iter().map(|p| p.id.clone()).collect(),
            constants: self.constants.ids(),
            filters: self.applied.clone(),
        }
    }
}
