//! 固定槽位 (Sabitler)
//!
//! 有序、按商品 id 去重、容量固定为 24。展示时每页 6 个槽位，
//! 页数与实际填充数量无关，恒为 4。

use crate::pagination::Pager;
use crate::{CONSTANT_SLOT_CAPACITY, Product, SLOTS_PER_PAGE};

/// 添加操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    Full,
}

/// 单个槽位的展示数据
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    /// 在全部槽位中的下标
    pub index: usize,
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantSlots {
    items: Vec<Product>,
}

impl ConstantSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CONSTANT_SLOT_CAPACITY
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// 追加到末尾；已存在或已满时不做任何修改
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if self.contains(&product.id) {
            return AddOutcome::AlreadyPresent;
        }
        if self.is_full() {
            return AddOutcome::Full;
        }
        self.items.push(product);
        AddOutcome::Added
    }

    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let pos = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }

    /// 槽位分页器：总数固定为容量
    pub fn pager() -> Pager {
        Pager::new(SLOTS_PER_PAGE).with_total(CONSTANT_SLOT_CAPACITY)
    }

    /// 指定页的槽位，空槽位的 `product` 为 `None`
    pub fn page(&self, page: usize) -> Vec<SlotView> {
        let mut pager = Self::pager();
        pager.go_to(page);
        pager
            .visible_range()
            .map(|index| SlotView {
                index,
                product: self.items.get(index).cloned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, None, None)
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut slots = ConstantSlots::new();
        assert_eq!(slots.add(product("A")), AddOutcome::Added);
        assert_eq!(slots.add(product("A")), AddOutcome::AlreadyPresent);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_twenty_fifth_add_is_noop() {
        let mut slots = ConstantSlots::new();
        for i in 0..CONSTANT_SLOT_CAPACITY {
            assert_eq!(slots.add(product(&format!("P{}", i))), AddOutcome::Added);
        }
        assert!(slots.is_full());
        assert_eq!(slots.add(product("extra")), AddOutcome::Full);
        assert_eq!(slots.len(), CONSTANT_SLOT_CAPACITY);
        assert!(!slots.contains("extra"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut slots = ConstantSlots::new();
        for id in ["A", "B", "C"] {
            slots.add(product(id));
        }
        assert_eq!(slots.remove("B").map(|p| p.id), Some("B".to_string()));
        assert_eq!(slots.ids(), vec!["A", "C"]);
        assert!(slots.remove("B").is_none());
    }

    #[test]
    fn test_always_four_pages() {
        assert_eq!(ConstantSlots::pager().total_pages(), 4);

        let mut slots = ConstantSlots::new();
        slots.add(product("A"));
        assert_eq!(ConstantSlots::pager().total_pages(), 4);
        assert_eq!(slots.page(4).len(), SLOTS_PER_PAGE);
    }

    #[test]
    fn test_page_views_fill_and_placeholders() {
        let mut slots = ConstantSlots::new();
        for i in 0..8 {
            slots.add(product(&format!("P{}", i)));
        }

        let first = slots.page(1);
        assert!(first.iter().all(|s| s.product.is_some()));

        let second = slots.page(2);
        assert_eq!(second[0].index, 6);
        assert_eq!(second[0].product.as_ref().map(|p| p.id.as_str()), Some("P6"));
        assert_eq!(second.iter().filter(|s| s.product.is_none()).count(), 4);

        // 越界页码收敛到最后一页
        let clamped = slots.page(10);
        assert_eq!(clamped[0].index, 18);
    }
}
