use thiserror::Error;

/// 模型核心的错误类型
///
/// 闭合集合，调用方可按变体编程处理而非匹配消息文本。
/// 任何地方都不做重试：算法是确定性的，重试不会改变结果。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// 小批量容量超出允许范围（致命配置错误，训练开始前须修正）
    #[error("无效的小批量容量: {given}（允许范围为 {min}..={max}）")]
    InvalidBatchCapacity {
        given: usize,
        min: usize,
        max: usize,
    },

    /// 向量长度与模型维度不一致
    ///
    /// 模型形状固定、不随输入数据变化，因此这属于编程错误，应立即失败。
    #[error("维度不匹配: 期望 {expected}, 实际 {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// 尚未累积任何评估样本就请求 RMSE
    #[error("评估样本数为零，无法计算 RMSE")]
    EmptyEvaluation,
}
