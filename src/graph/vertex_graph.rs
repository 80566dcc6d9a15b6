//! 按顶点索引的图
//!
//! 底层存储为一组顶点记录，每个记录独占自己的出边映射

use super::vertex::Vertex;
use super::{Edge, Graph, Weight, CHECK_REP};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 按顶点索引的图
///
/// 顶点记录按插入顺序保存，删除顶点不会改变其余记录的相对顺序。
/// 查询入边需要扫描全部顶点记录。
#[derive(Debug, Clone)]
pub struct VertexIndexedGraph<L> {
    /// 标签 -> 顶点记录
    vertices: IndexMap<L, Vertex<L>>,
}

impl<L> VertexIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 创建预分配 `capacity` 个顶点记录的空图
    pub fn with_capacity(capacity: usize) -> Self {
        let graph = Self {
            vertices: IndexMap::with_capacity(capacity),
        };
        graph.check_rep();
        graph
    }

    /// 获取顶点记录的只读视图
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.get(label)
    }

    fn insert_vertex(&mut self, label: L) -> bool {
        if self.vertices.contains_key(&label) {
            return false;
        }
        self.vertices.insert(label.clone(), Vertex::new(label));
        true
    }

    // 表示不变量：
    // - 映射的键与记录自身的标签一致（因此没有重复标签）
    // - 所有出边权重为正
    // - 每条出边的终点都是现有顶点
    fn check_rep(&self) {
        if !CHECK_REP {
            return;
        }
        for (label, vertex) in &self.vertices {
            assert!(label == vertex.label(), "顶点键与记录标签不一致");
            for (target, weight) in vertex.iter_targets() {
                assert!(weight > 0, "出边权重必须为正数");
                assert!(self.vertices.contains_key(target), "出边终点不在顶点集合中");
            }
        }
    }
}

impl<L> Default for VertexIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> for VertexIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn add(&mut self, vertex: L) -> bool {
        let inserted = self.insert_vertex(vertex);
        if inserted {
            trace!(vertex_count = self.vertices.len(), "添加顶点");
        }
        self.check_rep();
        inserted
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            debug!(weight, "拒绝负权重");
            return Err(Error::NegativeWeight { weight });
        }

        // 先起点后终点，与逐个 add 的顺序一致
        let previous = self
            .vertices
            .entry(source)
            .or_insert_with_key(|label| Vertex::new(label.clone()))
            .set_target(target.clone(), weight);
        self.insert_vertex(target);

        trace!(previous, weight, "设置边权重");
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(record) = self.vertices.shift_remove(vertex) else {
            return false;
        };

        let incoming = self
            .vertices
            .values_mut()
            .filter_map(|v| v.remove_target(vertex))
            .count();

        debug!(detached_edges = record.out_degree() + incoming, "删除顶点");
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.vertices
            .values()
            .filter_map(|v| v.weight_to(target).map(|weight| (v.label().clone(), weight)))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.vertices
            .get(source)
            .map(|v| v.targets())
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.vertices
            .values()
            .flat_map(|v| {
                v.iter_targets().map(move |(target, weight)| {
                    Edge::from_parts(v.label().clone(), target.clone(), weight)
                })
            })
            .collect()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.vertices
            .get(source)
            .and_then(|v| v.weight_to(target))
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.out_degree()).sum()
    }
}

impl<L: fmt::Display> fmt::Display for VertexIndexedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_records_keep_insertion_order() {
        let mut graph = VertexIndexedGraph::new();
        graph.add("C");
        graph.set("A", "B", 1).unwrap();

        let order: Vec<_> = graph.vertices.keys().copied().collect();
        assert_eq!(order, vec!["C", "A", "B"]);

        graph.remove(&"C");
        let order: Vec<_> = graph.vertices.keys().copied().collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_target_gets_its_own_record() {
        let mut graph = VertexIndexedGraph::new();
        graph.set("A", "B", 3).unwrap();

        let b = graph.vertex(&"B").unwrap();
        assert_eq!(b.label(), &"B");
        assert_eq!(b.out_degree(), 0);
        assert_eq!(graph.vertex(&"A").unwrap().weight_to(&"B"), Some(3));
    }

    #[test]
    fn test_remove_strips_incoming_entries() {
        let mut graph = VertexIndexedGraph::new();
        graph.set("A", "C", 1).unwrap();
        graph.set("B", "C", 2).unwrap();
        graph.set("C", "A", 3).unwrap();

        assert!(graph.remove(&"C"));
        assert_eq!(graph.vertex(&"A").unwrap().out_degree(), 0);
        assert_eq!(graph.vertex(&"B").unwrap().out_degree(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = VertexIndexedGraph::new();
        assert_eq!(graph.set("A", "A", 2).unwrap(), 0);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.sources(&"A").get("A"), Some(&2));

        assert!(graph.remove(&"A"));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_display() {
        let mut graph = VertexIndexedGraph::new();
        graph.set("A", "B", 5).unwrap();
        graph.set("A", "C", 2).unwrap();

        assert_eq!(graph.to_string(), "A -> B (5), C (2)\nB -> \nC -> ");
    }
}
