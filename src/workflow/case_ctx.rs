//! 用例执行上下文
//!
//! 封装"我正在跑第几个用例"这一信息

use std::fmt::Display;

/// 用例执行上下文
#[derive(Debug, Clone, Copy)]
pub struct CaseCtx {
    /// 用例编号（从1开始，对应文件名）
    pub index: usize,

    /// 本次运行的用例总数（仅用于日志显示）
    pub total: usize,
}

impl CaseCtx {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }
}

impl Display for CaseCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[用例 #{} / 共 {}]", self.index, self.total)
    }
}
