//! 路由图模块
//!
//! 面向路径搜索的内存有向加权图。顶点使用调用方的64位编号，
//! 内部映射为稠密槽位下标。边与顶点的"断开"通过禁用遮罩实现：
//! 底层邻接表永不被搜索过程修改，`restore`只需清空遮罩，
//! 从根本上消除了漏恢复导致的拓扑损坏。

use std::collections::{HashMap, HashSet};

use crate::core::error::{RoutingError, RoutingResult};

/// 邻接表中的一条出边
#[derive(Debug, Clone, Copy)]
pub struct RouteEdge {
    pub to: usize,
    pub cost: f64,
}

/// 带禁用遮罩的有向加权图
#[derive(Debug, Default)]
pub struct RouteGraph {
    /// 外部顶点编号到内部槽位的映射
    slots: HashMap<i64, usize>,
    /// 槽位到外部顶点编号的反向映射
    ids: Vec<i64>,
    /// 按槽位索引的出边邻接表
    out: Vec<Vec<RouteEdge>>,
    /// 被临时禁用的顶点槽位
    masked_vertices: HashSet<usize>,
    /// 被临时禁用的边 (from槽位, to槽位)
    masked_edges: HashSet<(usize, usize)>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册顶点，返回其内部槽位；已存在时返回原槽位
    pub fn add_vertex(&mut self, id: i64) -> usize {
        if let Some(&slot) = self.slots.get(&id) {
            return slot;
        }
        let slot = self.ids.len();
        self.slots.insert(id, slot);
        self.ids.push(id);
        self.out.push(Vec::new());
        slot
    }

    /// 添加一条有向边
    ///
    /// 负代价的边视作不存在，直接跳过；两顶点间的平行边只保留
    /// 代价最小的一条。
    pub fn add_edge(&mut self, from: i64, to: i64, cost: f64) {
        if cost < 0.0 {
            return;
        }
        let from_slot = self.add_vertex(from);
        let to_slot = self.add_vertex(to);

        if let Some(edge) = self.out[from_slot].iter_mut().find(|e| e.to == to_slot) {
            if cost < edge.cost {
                edge.cost = cost;
            }
            return;
        }
        self.out[from_slot].push(RouteEdge { to: to_slot, cost });
    }

    /// 批量装载边数据，返回装载的边数
    ///
    /// NaN代价属于畸形输入，在引擎运行前拒绝。
    pub fn load_edges<I>(&mut self, edges: I) -> RoutingResult<usize>
    where
        I: IntoIterator<Item = (i64, i64, f64)>,
    {
        let mut loaded = 0usize;
        for (from, to, cost) in edges {
            if cost.is_nan() {
                return Err(RoutingError::Graph(format!(
                    "边 {} -> {} 的代价为NaN",
                    from, to
                )));
            }
            if cost < 0.0 {
                continue;
            }
            self.add_edge(from, to, cost);
            loaded += 1;
        }
        log::info!(
            "图装载完成: {} 个顶点, {} 条边",
            self.vertex_count(),
            self.edge_count()
        );
        Ok(loaded)
    }

    pub fn has_vertex(&self, id: i64) -> bool {
        self.slots.contains_key(&id)
    }

    /// 外部编号到内部槽位的查询
    pub fn get_descriptor(&self, id: i64) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// 槽位到外部编号的查询
    pub fn vertex_id(&self, slot: usize) -> i64 {
        self.ids[slot]
    }

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// 底层边总数（不含遮罩影响）
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(|v| v.len()).sum()
    }

    /// 临时禁用一条边；未知顶点时静默忽略
    pub fn disconnect_edge(&mut self, from: i64, to: i64) {
        if let (Some(f), Some(t)) = (self.get_descriptor(from), self.get_descriptor(to)) {
            self.masked_edges.insert((f, t));
        }
    }

    /// 临时禁用一个顶点及其关联边；未知顶点时静默忽略
    pub fn disconnect_vertex(&mut self, id: i64) {
        if let Some(slot) = self.get_descriptor(id) {
            self.masked_vertices.insert(slot);
        }
    }

    /// 撤销自上次恢复以来的全部禁用操作
    pub fn restore(&mut self) {
        self.masked_vertices.clear();
        self.masked_edges.clear();
    }

    /// 顶点当前是否被遮罩
    pub fn is_vertex_masked(&self, slot: usize) -> bool {
        self.masked_vertices.contains(&slot)
    }

    /// 遍历槽位的活动出边（跳过被遮罩的边与终点）
    pub fn out_edges(&self, slot: usize) -> impl Iterator<Item = RouteEdge> + '_ {
        self.out[slot].iter().copied().filter(move |e| {
            !self.masked_edges.contains(&(slot, e.to)) && !self.masked_vertices.contains(&e.to)
        })
    }

    /// 当前活动边的确定性快照 (from编号, to编号, 代价)
    ///
    /// 按槽位与邻接表顺序输出，用于对比一次搜索前后的拓扑。
    pub fn edge_list(&self) -> Vec<(i64, i64, f64)> {
        let mut edges = Vec::new();
        for slot in 0..self.out.len() {
            if self.masked_vertices.contains(&slot) {
                continue;
            }
            for edge in self.out_edges(slot) {
                edges.push((self.ids[slot], self.ids[edge.to], edge.cost));
            }
        }
        edges
    }
}
