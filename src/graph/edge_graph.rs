//! 按边索引的图
//!
//! 底层存储为顶点标签集合加一组不可变的边记录，顶点不持有任何边

use super::{Edge, Graph, Weight, CHECK_REP};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 按边索引的图
///
/// 入边和出边查询都通过过滤整个边集合完成。
#[derive(Debug, Clone)]
pub struct EdgeIndexedGraph<L> {
    /// 顶点标签
    vertices: IndexSet<L>,
    /// 边记录，每个有序顶点对至多一条
    edges: Vec<Edge<L>>,
}

impl<L> EdgeIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 创建预分配 `capacity` 个顶点的空图
    pub fn with_capacity(capacity: usize) -> Self {
        let graph = Self {
            vertices: IndexSet::with_capacity(capacity),
            edges: Vec::new(),
        };
        graph.check_rep();
        graph
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    // 表示不变量：
    // - 所有边权重为正
    // - 每条边的端点都在顶点集合中
    // - 同一有序顶点对至多一条边
    fn check_rep(&self) {
        if !CHECK_REP {
            return;
        }
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            assert!(edge.weight() > 0, "边权重必须为正数");
            assert!(self.vertices.contains(edge.source()), "边的起点不在顶点集合中");
            assert!(self.vertices.contains(edge.target()), "边的终点不在顶点集合中");
            assert!(pairs.insert((edge.source(), edge.target())), "存在重复边");
        }
    }
}

impl<L> Default for EdgeIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> for EdgeIndexedGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn add(&mut self, vertex: L) -> bool {
        let inserted = self.vertices.insert(vertex);
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
        // 在修改任何状态之前构造新记录
        let replacement = if weight > 0 {
            Some(Edge::new(source.clone(), target.clone(), weight)?)
        } else {
            None
        };

        let existing = self.position(&source, &target);
        self.vertices.insert(source);
        self.vertices.insert(target);

        let previous = existing.map(|i| self.edges[i].weight()).unwrap_or(0);

        match (existing, replacement) {
            (Some(i), Some(edge)) => self.edges[i] = edge,
            (Some(i), None) => {
                self.edges.swap_remove(i);
            }
            (None, Some(edge)) => self.edges.push(edge),
            (None, None) => {}
        }

        trace!(previous, weight, "设置边权重");
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));

        debug!(detached_edges = before - self.edges.len(), "删除顶点");
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.edges.clone()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.position(source, target)
            .map(|i| self.edges[i].weight())
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: fmt::Display> fmt::Display for EdgeIndexedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "]\nEdges: [")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_edge_record() {
        let mut graph = EdgeIndexedGraph::new();
        graph.set("A", "B", 5).unwrap();
        graph.set("A", "C", 1).unwrap();
        assert_eq!(graph.set("A", "B", 8).unwrap(), 5);

        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.weight(&"A", &"B"), 8);
    }

    #[test]
    fn test_zero_weight_on_missing_edge_still_adds_vertices() {
        let mut graph = EdgeIndexedGraph::new();
        assert_eq!(graph.set("A", "B", 0).unwrap(), 0);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_drops_incident_edges() {
        let mut graph = EdgeIndexedGraph::new();
        graph.set("A", "B", 1).unwrap();
        graph.set("B", "C", 2).unwrap();
        graph.set("C", "A", 3).unwrap();

        assert!(graph.remove(&"B"));
        assert_eq!(graph.edges, vec![Edge::new("C", "A", 3).unwrap()]);
    }

    #[test]
    fn test_display() {
        let mut graph = EdgeIndexedGraph::new();
        graph.add("A");
        graph.set("A", "B", 5).unwrap();

        assert_eq!(graph.to_string(), "Vertices: [A, B]\nEdges: [A -> B (5)]");
    }
}
