//! 路径模型模块
//!
//! 定义路径跳(Hop)与路径(Path)，提供聚合代价计算、前缀提取、
//! 原地拼接以及结构化全序比较。
//!
//! # 排序约定
//!
//! 路径按聚合代价升序排列，代价相同时按跳序列字典序排列，
//! 保证确定性的平局裁决。两条路径在该全序下相等当且仅当
//! 代价与跳序列完全一致，这一相等关系同时作为去重键。

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 路径中的一跳：顶点与到下一跳的代价
///
/// 终点跳的代价固定为0.0，作为终止标记。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub vertex: i64,
    pub cost: f64,
}

impl Hop {
    pub fn new(vertex: i64, cost: f64) -> Self {
        Self { vertex, cost }
    }

    /// 跳的全序比较：先顶点后代价
    fn total_cmp(&self, other: &Hop) -> Ordering {
        self.vertex
            .cmp(&other.vertex)
            .then_with(|| self.cost.total_cmp(&other.cost))
    }
}

/// 有序跳序列构成的路径
///
/// 空路径表示"无路径"。聚合代价按需从跳序列重新计算，
/// 不做缓存，因此拼接等变更操作不会产生过期代价。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Path {
    hops: Vec<Hop>,
}

impl Path {
    /// 从跳序列构造路径
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// 按下标访问跳
    pub fn hop(&self, i: usize) -> &Hop {
        &self.hops[i]
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// 聚合代价：逐跳代价之和，终点跳贡献0.0
    pub fn agg_cost(&self) -> f64 {
        self.hops.iter().map(|h| h.cost).sum()
    }

    /// 返回前i跳的独立副本，与原路径无任何共享
    pub fn sub_path(&self, i: usize) -> Path {
        Path {
            hops: self.hops[..i.min(self.hops.len())].to_vec(),
        }
    }

    /// 原地拼接另一条路径
    pub fn append(&mut self, mut other: Path) {
        self.hops.append(&mut other.hops);
    }

    /// 两条路径的前i跳是否完全一致
    ///
    /// 用于检测候选路径与已确认路径共享根路径。
    pub fn shares_prefix(&self, other: &Path, i: usize) -> bool {
        if i > self.hops.len() || i > other.hops.len() {
            return false;
        }
        self.hops[..i]
            .iter()
            .zip(&other.hops[..i])
            .all(|(a, b)| a.total_cmp(b) == Ordering::Equal)
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.agg_cost()
            .total_cmp(&other.agg_cost())
            .then_with(|| {
                for (a, b) in self.hops.iter().zip(&other.hops) {
                    match a.total_cmp(b) {
                        Ordering::Equal => continue,
                        non_eq => return non_eq,
                    }
                }
                self.hops.len().cmp(&other.hops.len())
            })
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Path {}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hops.is_empty() {
            return write!(f, "(empty)");
        }
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", hop.vertex)?;
        }
        write!(f, " (agg_cost: {})", self.agg_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(hops: &[(i64, f64)]) -> Path {
        Path::new(hops.iter().map(|&(v, c)| Hop::new(v, c)).collect())
    }

    #[test]
    fn test_agg_cost_recomputed_after_append() {
        let mut path = path_of(&[(1, 1.0), (2, 1.0)]);
        assert_eq!(path.agg_cost(), 2.0);

        path.append(path_of(&[(4, 2.0), (5, 0.0)]));
        assert_eq!(path.agg_cost(), 4.0);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_sub_path_is_independent() {
        let original = path_of(&[(1, 1.0), (2, 1.0), (4, 0.0)]);
        let mut prefix = original.sub_path(2);
        assert_eq!(prefix.len(), 2);

        prefix.append(path_of(&[(9, 5.0)]));
        assert_eq!(original.len(), 3);
        assert_eq!(prefix.len(), 3);
    }

    #[test]
    fn test_order_by_cost_then_sequence() {
        let cheap = path_of(&[(1, 1.0), (4, 0.0)]);
        let costly = path_of(&[(1, 3.0), (4, 0.0)]);
        assert!(cheap < costly);

        // 代价相同时按跳序列字典序裁决
        let via_2 = path_of(&[(1, 1.0), (2, 1.0), (4, 0.0)]);
        let via_3 = path_of(&[(1, 1.0), (3, 1.0), (4, 0.0)]);
        assert!(via_2 < via_3);
    }

    #[test]
    fn test_equality_ignores_construction_history() {
        let direct = path_of(&[(1, 1.0), (2, 1.0), (4, 0.0)]);
        let mut assembled = path_of(&[(1, 1.0)]);
        assembled.append(path_of(&[(2, 1.0), (4, 0.0)]));
        assert_eq!(direct, assembled);
        assert_eq!(direct.cmp(&assembled), Ordering::Equal);
    }

    #[test]
    fn test_shares_prefix() {
        let a = path_of(&[(1, 1.0), (2, 1.0), (4, 0.0)]);
        let b = path_of(&[(1, 1.0), (2, 1.0), (5, 2.0), (4, 0.0)]);
        let c = path_of(&[(1, 2.0), (2, 1.0), (4, 0.0)]);

        assert!(a.shares_prefix(&b, 2));
        assert!(a.shares_prefix(&b, 0));
        // 顶点相同但代价不同的前缀不算共享
        assert!(!a.shares_prefix(&c, 1));
        // 超出任一路径长度的前缀不算共享
        assert!(!a.shares_prefix(&b, 4));
    }

    #[test]
    fn test_prefix_ordering_shorter_first() {
        let short = path_of(&[(1, 0.0)]);
        let long = path_of(&[(1, 0.0), (2, 0.0)]);
        assert!(short < long);
    }
}
