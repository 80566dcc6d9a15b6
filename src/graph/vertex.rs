//! 顶点定义
//!
//! 按顶点索引的图中的顶点记录：标签加上独占的出边映射

use super::{Weight, CHECK_REP};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// 顶点
///
/// 只通过标签引用其他顶点，从不持有其他顶点记录。
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    /// 顶点标签
    label: L,
    /// 出边：终点 -> 权重（> 0）
    targets: IndexMap<L, Weight>,
}

impl<L> Vertex<L>
where
    L: Clone + Eq + Hash,
{
    /// 创建没有出边的顶点
    pub fn new(label: L) -> Self {
        Self {
            label,
            targets: IndexMap::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &L {
        &self.label
    }

    /// 到 `target` 的边权重
    pub fn weight_to(&self, target: &L) -> Option<Weight> {
        self.targets.get(target).copied()
    }

    /// 出边快照
    pub fn targets(&self) -> HashMap<L, Weight> {
        self.targets
            .iter()
            .map(|(target, &weight)| (target.clone(), weight))
            .collect()
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.targets.len()
    }

    pub(crate) fn iter_targets(&self) -> impl Iterator<Item = (&L, Weight)> {
        self.targets.iter().map(|(target, &weight)| (target, weight))
    }

    /// 设置到 `target` 的出边，返回之前的权重
    ///
    /// 调用方负责拒绝负权重；权重 0 删除该出边。
    pub(crate) fn set_target(&mut self, target: L, weight: Weight) -> Weight {
        debug_assert!(weight >= 0);
        let previous = if weight == 0 {
            self.targets.shift_remove(&target)
        } else {
            self.targets.insert(target, weight)
        };
        self.check_rep();
        previous.unwrap_or(0)
    }

    /// 删除到 `target` 的出边
    pub(crate) fn remove_target(&mut self, target: &L) -> Option<Weight> {
        self.targets.shift_remove(target)
    }

    fn check_rep(&self) {
        if !CHECK_REP {
            return;
        }
        for &weight in self.targets.values() {
            assert!(weight > 0, "出边权重必须为正数");
        }
    }
}

impl<L: fmt::Display> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.label)?;
        for (i, (target, weight)) in self.targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", target, weight)?;
        }
        Ok(())
    }
}
