//! 错误类型定义

use crate::graph::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("无效参数: 边权重不能为负数, 实际为 {weight}")]
    NegativeWeight { weight: Weight },
}

impl Error {
    /// 是否属于无效参数类错误
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::NegativeWeight { .. })
    }
}
