//! 筛选表单状态
//!
//! 表单上有多个控件，但只有 类型 + 值 这一对会转换为服务端筛选条件，
//! 并且最多生成一个展示标签。仓库、库存区间、商品编码、全尺码有货与排序
//! 字段只作为表单状态保存，不参与查询。

use crate::{AdditionalFilter, AppliedFilter, FilterOption, FilterValue};

/// 排序选项 (label, value)
pub const SORT_OPTIONS: [(&str, &str); 2] = [("A-Z", "az"), ("Z-A", "za")];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub filter_type: String,
    pub filter_value: String,
    pub depot: String,
    pub min_stock: String,
    pub max_stock: String,
    pub product_code: String,
    pub all_sizes_in_stock: bool,
    pub sort_by: String,
}

impl FilterForm {
    /// 切换筛选类型时清空已选的值
    pub fn select_type(&mut self, filter_type: impl Into<String>) {
        self.filter_type = filter_type.into();
        self.filter_value.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 类型与值都已选择
    pub fn has_selection(&self) -> bool {
        !self.filter_type.is_empty() && !self.filter_value.is_empty()
    }

    /// 转换为服务端筛选条件（至多一条）
    pub fn additional_filters(&self) -> Vec<AdditionalFilter> {
        if !self.has_selection() {
            return Vec::new();
        }
        vec![AdditionalFilter::equals(
            self.filter_type.clone(),
            self.filter_value.clone(),
        )]
    }

    /// 根据筛选项元数据生成展示标签（至多一个）
    pub fn applied_chips(&self, options: &[FilterOption]) -> Vec<AppliedFilter> {
        let Some(def) = options.iter().find(|f| f.id == self.filter_type) else {
            return Vec::new();
        };
        let Some(value) = def.find_value(&self.filter_value) else {
            return Vec::new();
        };
        vec![AppliedFilter {
            kind: def.title.clone(),
            value: value.label().to_string(),
        }]
    }
}

/// 指定筛选类型的可选值
pub fn value_options<'a>(options: &'a [FilterOption], filter_type: &str) -> &'a [FilterValue] {
    if filter_type.is_empty() {
        return &[];
    }
    options
        .iter()
        .find(|f| f.id == filter_type)
        .map(|f| f.values.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<FilterOption> {
        vec![
            FilterOption {
                id: "warehouse".into(),
                title: "Depo".into(),
                values: vec![
                    FilterValue {
                        value: "W1".into(),
                        value_name: Some("Merkez".into()),
                    },
                    FilterValue {
                        value: "W2".into(),
                        value_name: None,
                    },
                ],
            },
            FilterOption {
                id: "color".into(),
                title: "Renk".into(),
                values: vec![],
            },
        ]
    }

    #[test]
    fn test_select_type_resets_value() {
        let mut form = FilterForm::default();
        form.select_type("warehouse");
        form.filter_value = "W1".into();
        form.select_type("color");
        assert_eq!(form.filter_type, "color");
        assert!(form.filter_value.is_empty());
    }

    #[test]
    fn test_only_type_and_value_become_server_filter() {
        let form = FilterForm {
            filter_type: "warehouse".into(),
            filter_value: "W1".into(),
            depot: "W2".into(),
            min_stock: "3".into(),
            max_stock: "10".into(),
            product_code: "X".into(),
            all_sizes_in_stock: true,
            sort_by: "az".into(),
        };
        assert_eq!(
            form.additional_filters(),
            vec![AdditionalFilter::equals("warehouse", "W1")]
        );
    }

    #[test]
    fn test_incomplete_selection_yields_nothing() {
        let mut form = FilterForm::default();
        form.select_type("warehouse");
        assert!(form.additional_filters().is_empty());
        assert!(form.applied_chips(&options()).is_empty());
    }

    #[test]
    fn test_applied_chip_uses_titles() {
        let mut form = FilterForm::default();
        form.select_type("warehouse");
        form.filter_value = "W1".into();
        assert_eq!(
            form.applied_chips(&options()),
            vec![AppliedFilter {
                kind: "Depo".into(),
                value: "Merkez".into()
            }]
        );

        form.filter_value = "W2".into();
        assert_eq!(form.applied_chips(&options())[0].value, "W2");

        // 元数据中不存在的值不生成标签
        form.filter_value = "W9".into();
        assert!(form.applied_chips(&options()).is_empty());
    }

    #[test]
    fn test_value_options_lookup() {
        let opts = options();
        assert_eq!(value_options(&opts, "warehouse").len(), 2);
        assert!(value_options(&opts, "").is_empty());
        assert!(value_options(&opts, "missing").is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = FilterForm {
            filter_type: "warehouse".into(),
            all_sizes_in_stock: true,
            ..Default::default()
        };
        form.reset();
        assert_eq!(form, FilterForm::default());
    }
}
