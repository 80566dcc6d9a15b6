//! 边定义
//!
//! 不可变的带权有向边记录，由按边索引的图整体持有

use super::Weight;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// 边
///
/// 创建后不可修改；更新权重会产生一条新记录。权重恒为正数。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge<L> {
    /// 起点
    source: L,
    /// 终点
    target: L,
    /// 权重（> 0）
    weight: Weight,
}

impl<L> Edge<L> {
    /// 创建新边
    pub fn new(source: L, target: L, weight: Weight) -> Result<Self> {
        if weight < 0 {
            return Err(Error::NegativeWeight { weight });
        }
        if weight == 0 {
            return Err(Error::InvalidArgument(
                "边权重必须为正数, 权重 0 表示边不存在".to_string(),
            ));
        }
        Ok(Self::from_parts(source, target, weight))
    }

    /// 由已校验的权重直接构造
    pub(crate) fn from_parts(source: L, target: L, weight: Weight) -> Self {
        debug_assert!(weight > 0);
        Self {
            source,
            target,
            weight,
        }
    }

    /// 获取起点
    pub fn source(&self) -> &L {
        &self.source
    }

    /// 获取终点
    pub fn target(&self) -> &L {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 拆分为 (起点, 终点, 权重)
    pub fn into_parts(self) -> (L, L, Weight) {
        (self.source, self.target, self.weight)
    }
}

impl<L: PartialEq> Edge<L> {
    /// 是否为 `source -> target` 这条边
    pub fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }

    /// 是否以 `vertex` 为端点
    pub fn touches(&self, vertex: &L) -> bool {
        &self.source == vertex || &self.target == vertex
    }
}

impl<L: Clone> Edge<L> {
    /// 以新权重生成一条新边，原记录不变
    pub fn with_weight(&self, weight: Weight) -> Result<Self> {
        Self::new(self.source.clone(), self.target.clone(), weight)
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new() {
        let e = Edge::new("A", "B", 5).unwrap();

        assert_eq!(e.source(), &"A");
        assert_eq!(e.target(), &"B");
        assert_eq!(e.weight(), 5);
        assert!(e.connects(&"A", &"B"));
        assert!(!e.connects(&"B", &"A"));
        assert!(e.touches(&"B"));
        assert!(!e.touches(&"C"));
    }

    #[test]
    fn test_edge_rejects_non_positive_weight() {
        assert_eq!(
            Edge::new("A", "B", -1).unwrap_err(),
            Error::NegativeWeight { weight: -1 }
        );
        assert!(Edge::new("A", "B", 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_edge_with_weight() {
        let e = Edge::new("A", "B", 5).unwrap();
        let updated = e.with_weight(10).unwrap();

        assert_eq!(e.weight(), 5);
        assert_eq!(updated.weight(), 10);
        assert!(updated.connects(&"A", &"B"));
        assert!(e.with_weight(0).is_err());
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new("A", "B", 5).unwrap();
        assert_eq!(e.to_string(), "A -> B (5)");
    }

    #[test]
    fn test_edge_serialize() {
        let e = Edge::new("A".to_string(), "B".to_string(), 7).unwrap();
        let json = serde_json::to_value(&e).unwrap();

        assert_eq!(json["source"], "A");
        assert_eq!(json["target"], "B");
        assert_eq!(json["weight"], 7);
    }
}
