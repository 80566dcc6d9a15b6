//! 图核心模块
//!
//! 定义带权有向图的抽象契约 [`Graph`] 以及两种可互换的底层表示：
//! - [`VertexIndexedGraph`]：按顶点索引，每个顶点记录持有自己的出边映射
//! - [`EdgeIndexedGraph`]：按边索引，顶点集合加一组不可变的边记录
//!
//! 两种表示对外行为完全一致，调用方可以透明地替换。

mod edge;
mod edge_graph;
mod vertex;
mod vertex_graph;

pub use edge::Edge;
pub use edge_graph::EdgeIndexedGraph;
pub use vertex::Vertex;
pub use vertex_graph::VertexIndexedGraph;

use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// 边权重。存储的权重恒为正数，权重 0 等价于边不存在
pub type Weight = i64;

/// 是否在每次修改后执行表示不变量检查
pub(crate) const CHECK_REP: bool = cfg!(any(debug_assertions, feature = "check-rep"));

/// 可变的带权有向图
///
/// 顶点由类型为 `L` 的标签唯一标识；边是有序三元组 (source, target, weight)。
///
/// 契约保证：
/// - 同一有序顶点对之间至多存在一条边，未存储的顶点对权重视为 0
/// - 每条边的两个端点都是当前顶点集合的成员
/// - 所有返回的集合和映射都是快照，修改它们不会影响图本身
/// - 失败的操作不会修改图
///
/// 迭代顺序不属于契约的一部分。
pub trait Graph<L>
where
    L: Clone + Eq + Hash,
{
    /// 添加顶点
    ///
    /// 顶点不存在时插入并返回 `true`；已存在时不做任何修改并返回 `false`。
    fn add(&mut self, vertex: L) -> bool;

    /// 设置有向边 `source -> target` 的权重
    ///
    /// 缺失的端点会先被加入顶点集合。`weight` 为 0 时删除已有的边。
    /// 返回该边之前的权重（原先不存在时为 0）。
    ///
    /// `weight` 为负数时返回 [`Error::NegativeWeight`](crate::Error::NegativeWeight)，
    /// 图保持不变。
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// 删除顶点及所有以它为起点或终点的边
    ///
    /// 顶点存在时返回 `true`，否则返回 `false` 且不做任何修改。
    fn remove(&mut self, vertex: &L) -> bool;

    /// 所有顶点标签的快照
    fn vertices(&self) -> HashSet<L>;

    /// 指向 `target` 的所有边：起点 -> 权重
    ///
    /// `target` 不存在或没有入边时返回空映射。
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// 从 `source` 出发的所有边：终点 -> 权重
    ///
    /// `source` 不存在或没有出边时返回空映射。
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// 所有边的快照
    fn edges(&self) -> Vec<Edge<L>>;

    /// 顶点是否存在
    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }

    /// 边 `source -> target` 的权重，不存在时为 0
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// 顶点数量
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// 边数量
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// 图中是否没有任何顶点
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// 创建一个空图（默认使用按边索引的表示）
pub fn empty<L>() -> EdgeIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    EdgeIndexedGraph::new()
}
