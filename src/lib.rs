//! weighted-digraph - 可变的带权有向图
//!
//! 提供同一契约下的两种可互换实现：
//! - [`VertexIndexedGraph`]：按顶点索引，每个顶点持有自己的出边
//! - [`EdgeIndexedGraph`]：按边索引，顶点集合加扁平的边记录集合
//!
//! 权重为非负整数，将边权重设为 0 等价于删除该边。
//!
//! ```
//! use weighted_digraph::{Graph, VertexIndexedGraph};
//!
//! let mut graph = VertexIndexedGraph::new();
//! assert_eq!(graph.set("A", "B", 5)?, 0);
//! assert_eq!(graph.set("A", "B", 10)?, 5);
//! assert_eq!(graph.weight(&"A", &"B"), 10);
//! # Ok::<(), weighted_digraph::Error>(())
//! ```

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{empty, Edge, EdgeIndexedGraph, Graph, Vertex, VertexIndexedGraph, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
