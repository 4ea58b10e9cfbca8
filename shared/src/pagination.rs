//! 客户端分页
//!
//! 页码从 1 开始，始终被限制在 `[1, max(1, total_pages)]` 内。

use std::ops::{Range, RangeInclusive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.set_total(total);
        self
    }

    /// 更新条目总数，当前页随之收敛
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.clamp(1, self.last_page());
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`，没有条目时为 0
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.last_page());
    }

    pub fn next(&mut self) {
        self.go_to(self.page + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 当前页在整体列表中的下标范围
    pub fn visible_range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// 页码按钮序列
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Pager::new(5).with_total(0).total_pages(), 0);
        assert_eq!(Pager::new(5).with_total(1).total_pages(), 1);
        assert_eq!(Pager::new(5).with_total(5).total_pages(), 1);
        assert_eq!(Pager::new(5).with_total(6).total_pages(), 2);
        assert_eq!(Pager::new(5).with_total(23).total_pages(), 5);
    }

    #[test]
    fn test_empty_list_stays_on_first_page() {
        let mut pager = Pager::new(5).with_total(0);
        pager.next();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.visible_range(), 0..0);
        assert!(pager.slice::<u8>(&[]).is_empty());
        assert!(!pager.has_next());
        assert!(!pager.has_prev());
    }

    #[test]
    fn test_page_is_clamped() {
        let mut pager = Pager::new(5).with_total(12);
        pager.go_to(99);
        assert_eq!(pager.page(), 3);
        pager.go_to(0);
        assert_eq!(pager.page(), 1);
        pager.prev();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_slice_last_page() {
        let items: Vec<u32> = (0..12).collect();
        let mut pager = Pager::new(5).with_total(items.len());
        pager.go_to(3);
        assert_eq!(pager.slice(&items), &[10, 11]);
        assert!(!pager.has_next());
        assert!(pager.has_prev());
    }

    #[test]
    fn test_shrinking_total_pulls_page_back() {
        let mut pager = Pager::new(5).with_total(20);
        pager.go_to(4);
        pager.set_total(6);
        assert_eq!(pager.page(), 2);
        pager.set_total(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pages_sequence() {
        let pager = Pager::new(6).with_total(24);
        assert_eq!(pager.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
