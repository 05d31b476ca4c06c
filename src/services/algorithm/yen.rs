//! Yen算法模块
//!
//! K条无环最短路径搜索引擎。以单对最短路径原语为基础，迭代生成
//! 偏离路径(spur path)：对当前路径的每个前缀长度，临时禁用与已
//! 确认路径重合的偏离边以及根路径上的顶点，在缩减后的图上重新
//! 搜索，把根路径与偏离路径拼接成新候选。候选池与结果集均为按
//! 路径全序去重的有序集合。
//!
//! 每次偏离计算后立即恢复图，一次搜索结束时图的拓扑与搜索前
//! 完全一致。引擎单线程同步执行，运行期间独占可变图。

use std::collections::{BTreeMap, BTreeSet};

use crate::core::path::Path;
use crate::graph::route_graph::RouteGraph;

use super::dijkstra::Dijkstra;

/// 搜索过程观察者
///
/// 只读插桩钩子：默认实现全部为空操作，实现者不得影响引擎
/// 状态或控制流。
pub trait Visitor {
    /// 首个最短路径确认时触发
    fn on_first_solution(&self, _path: &Path) {}

    /// 候选路径进入候选池时触发
    fn on_candidate_inserted(&self, _path: &Path) {}
}

/// 空操作观察者
pub struct NoopVisitor;

impl Visitor for NoopVisitor {}

static NOOP_VISITOR: NoopVisitor = NoopVisitor;

/// Yen搜索引擎
///
/// 全部状态在每次调用开始时重置，调用之间不保留任何数据。
pub struct Yen<'a> {
    visitor: &'a dyn Visitor,
    /// 已确认的最短路径集合，按路径全序排列
    result_set: BTreeSet<Path>,
    /// 尚未确认的候选路径池
    candidates: BTreeSet<Path>,
    /// 当前外层迭代的基准路径
    current: Path,
    target: i64,
    k: usize,
    keep_pending: bool,
}

impl Yen<'static> {
    pub fn new() -> Self {
        Self::with_visitor(&NOOP_VISITOR)
    }
}

impl Default for Yen<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Yen<'a> {
    /// 使用自定义观察者构造引擎；观察者在调用期间被借用
    pub fn with_visitor(visitor: &'a dyn Visitor) -> Self {
        Self {
            visitor,
            result_set: BTreeSet::new(),
            candidates: BTreeSet::new(),
            current: Path::default(),
            target: 0,
            k: 0,
            keep_pending: false,
        }
    }

    /// 查找从source到target的K条无环最短路径
    ///
    /// 起点等于终点、K为0、端点不在图中、终点不可达都属于正常的
    /// "无路径"情形，返回空序列而非错误。`keep_pending`为真时，
    /// 结果不足K条会把候选池中剩余的路径一并返回。
    pub fn find_k_shortest(
        &mut self,
        graph: &mut RouteGraph,
        source: i64,
        target: i64,
        k: usize,
        keep_pending: bool,
    ) -> Vec<Path> {
        // 无路径：已在终点
        if source == target || k == 0 {
            return Vec::new();
        }
        // 无路径：端点不在图中
        if !graph.has_vertex(source) || !graph.has_vertex(target) {
            return Vec::new();
        }

        self.clear();
        self.target = target;
        self.k = k;
        self.keep_pending = keep_pending;

        log::debug!("KSP搜索开始: {} -> {}, K={}", source, target, k);
        self.execute(graph, source);

        let paths = self.assemble();
        log::debug!(
            "KSP搜索结束: {} -> {}, 确认 {} 条, 候选池剩余 {} 条",
            source,
            target,
            self.result_set.len(),
            self.candidates.len()
        );
        paths
    }

    /// 清空上一次调用遗留的全部状态
    fn clear(&mut self) {
        self.result_set.clear();
        self.candidates.clear();
        self.current = Path::default();
    }

    /// 算法主体
    fn execute(&mut self, graph: &mut RouteGraph, source: i64) {
        let first = Dijkstra::shortest_path(graph, source, self.target);
        if first.is_empty() {
            // 终点不可达，终止且不重试
            return;
        }
        self.visitor.on_first_solution(&first);
        self.result_set.insert(first.clone());
        self.current = first;

        while self.result_set.len() < self.k {
            self.next_cycle(graph);
            // 候选池耗尽：不存在K条不同路径，正常终止
            let Some(next) = self.candidates.pop_first() else {
                break;
            };
            self.result_set.insert(next.clone());
            self.current = next;
        }
    }

    /// 对当前路径的每个偏离点做一次偏离搜索
    fn next_cycle(&mut self, graph: &mut RouteGraph) {
        for i in 0..self.current.len() {
            let spur_vertex = self.current.hop(i).vertex;
            let root = self.current.sub_path(i);

            log::trace!("偏离点 {}: 根路径长度 {}", spur_vertex, i);

            // 禁用已确认路径在此偏离点之后的那条边，避免把已
            // 确认的路径再次生成为候选
            for path in &self.result_set {
                if path.len() > i + 1
                    && path.shares_prefix(&root, i)
                    && path.hop(i).vertex == spur_vertex
                {
                    graph.disconnect_edge(path.hop(i).vertex, path.hop(i + 1).vertex);
                }
            }

            // 禁用根路径上的顶点（不含偏离点），保证偏离路径不会
            // 绕回已使用的前缀
            for hop in root.hops() {
                graph.disconnect_vertex(hop.vertex);
            }

            let spur_path = Dijkstra::shortest_path(graph, spur_vertex, self.target);

            if !spur_path.is_empty() {
                let mut candidate = root;
                candidate.append(spur_path);
                // 结构等价的重复候选由集合语义静默吸收
                self.candidates.insert(candidate.clone());
                self.visitor.on_candidate_inserted(&candidate);
            }

            graph.restore();
        }
    }

    /// 汇总搜索结果
    ///
    /// 已确认路径按全序排列；`keep_pending`为真且不足K条时合并
    /// 候选池剩余内容整体重排，不做截断。
    fn assemble(&self) -> Vec<Path> {
        if self.result_set.is_empty() {
            return Vec::new();
        }

        let mut paths: Vec<Path> = self.result_set.iter().cloned().collect();
        if self.keep_pending && !self.candidates.is_empty() {
            paths.extend(self.candidates.iter().cloned());
            paths.sort();
        }

        debug_assert!(!paths.is_empty(), "结果集非空时汇总不应为空");

        if !self.keep_pending && paths.len() > self.k {
            paths.truncate(self.k);
        }
        paths
    }
}

/// 批量KSP：对每个(起点, 终点集合)组合独立执行一次搜索
///
/// 起点按升序、同一起点的终点按升序遍历，结果按遍历顺序串接。
/// 引用了图中不存在顶点的组合被跳过而非报错；每个组合之间
/// 引擎状态完全重置。
pub fn find_k_shortest_batch(
    graph: &mut RouteGraph,
    combinations: &BTreeMap<i64, BTreeSet<i64>>,
    k: usize,
    keep_pending: bool,
) -> Vec<Path> {
    let mut paths = Vec::new();
    let mut engine = Yen::new();

    for (&source, destinations) in combinations {
        if !graph.has_vertex(source) {
            continue;
        }
        for &destination in destinations {
            if !graph.has_vertex(destination) {
                continue;
            }
            paths.extend(engine.find_k_shortest(graph, source, destination, k, keep_pending));
        }
    }

    paths
}
