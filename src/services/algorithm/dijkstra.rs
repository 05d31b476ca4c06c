//! Dijkstra算法模块
//!
//! 单对最短路径原语，基于二叉堆实现，遍历时遵守路由图的禁用遮罩。
//! 作为路径搜索引擎的黑盒原语使用：不可达、端点缺失或起点等于
//! 终点时一律返回空路径。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::path::{Hop, Path};
use crate::graph::route_graph::RouteGraph;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, PartialEq)]
struct NodeDistance {
    slot: usize,
    distance: f64,
}

impl Eq for NodeDistance {}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较得到最小堆，距离相同时按槽位裁决保持全序
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// 查找从起点到终点的最短路径
    ///
    /// 返回的路径以代价0.0的终点跳结尾；无路径时返回空路径。
    /// 起点等于终点按"已在终点"处理，同样返回空路径。
    pub fn shortest_path(graph: &RouteGraph, from: i64, to: i64) -> Path {
        if from == to {
            return Path::default();
        }
        let (src, dst) = match (graph.get_descriptor(from), graph.get_descriptor(to)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Path::default(),
        };
        if graph.is_vertex_masked(src) || graph.is_vertex_masked(dst) {
            return Path::default();
        }

        let n = graph.vertex_count();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<(usize, f64)>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut to_visit = BinaryHeap::new();

        distances[src] = 0.0;
        to_visit.push(NodeDistance {
            slot: src,
            distance: 0.0,
        });

        while let Some(NodeDistance { slot, distance }) = to_visit.pop() {
            if slot == dst {
                return Self::reconstruct(graph, &predecessors, src, dst);
            }

            if visited[slot] {
                continue;
            }
            visited[slot] = true;

            for edge in graph.out_edges(slot) {
                let new_distance = distance + edge.cost;
                if new_distance < distances[edge.to] {
                    distances[edge.to] = new_distance;
                    predecessors[edge.to] = Some((slot, edge.cost));
                    to_visit.push(NodeDistance {
                        slot: edge.to,
                        distance: new_distance,
                    });
                }
            }
        }

        Path::default()
    }

    /// 沿前驱链重建路径
    fn reconstruct(
        graph: &RouteGraph,
        predecessors: &[Option<(usize, f64)>],
        src: usize,
        dst: usize,
    ) -> Path {
        // 反向收集 (槽位, 沿路径离开该槽位的边代价)，终点为0.0
        let mut chain = vec![(dst, 0.0)];
        let mut current = dst;
        while current != src {
            match predecessors[current] {
                Some((prev, cost)) => {
                    chain.push((prev, cost));
                    current = prev;
                }
                None => return Path::default(),
            }
        }
        chain.reverse();

        let hops = chain
            .into_iter()
            .map(|(slot, cost)| Hop::new(graph.vertex_id(slot), cost))
            .collect();
        Path::new(hops)
    }
}
