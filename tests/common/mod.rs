//! 集成测试共享工具模块
//!
//! 提供测试图构建与断言辅助函数，供所有集成测试使用

use routingdb::core::Path;
use routingdb::graph::RouteGraph;

/// 菱形测试图：1→2(1), 2→4(1), 1→3(2), 3→4(1)
pub fn diamond_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 4, 1.0);
    graph.add_edge(1, 3, 2.0);
    graph.add_edge(3, 4, 1.0);
    graph
}

/// 多路径测试图：1到8之间存在多条代价互异的路径
pub fn lattice_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(1, 3, 2.0);
    graph.add_edge(2, 4, 1.0);
    graph.add_edge(2, 5, 2.0);
    graph.add_edge(3, 5, 1.0);
    graph.add_edge(3, 6, 2.0);
    graph.add_edge(4, 7, 1.0);
    graph.add_edge(5, 7, 2.0);
    graph.add_edge(5, 8, 4.0);
    graph.add_edge(6, 8, 2.0);
    graph.add_edge(7, 8, 1.0);
    graph
}

/// 提取路径的顶点序列
pub fn vertex_sequence(path: &Path) -> Vec<i64> {
    path.hops().iter().map(|h| h.vertex).collect()
}

/// 断言路径列表按聚合代价非递减排列
pub fn assert_sorted_by_cost(paths: &[Path]) {
    for pair in paths.windows(2) {
        assert!(
            pair[0].agg_cost() <= pair[1].agg_cost(),
            "路径未按代价排序: {} 在 {} 之前",
            pair[0],
            pair[1]
        );
    }
}

/// 断言路径列表中不存在相同的顶点序列
pub fn assert_distinct_sequences(paths: &[Path]) {
    let mut seen = std::collections::HashSet::new();
    for path in paths {
        assert!(
            seen.insert(vertex_sequence(path)),
            "重复的路径序列: {}",
            path
        );
    }
}
