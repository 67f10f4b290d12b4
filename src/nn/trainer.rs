/*
 * @Author       : 老董
 * @Date         : 2026-05-19 09:21:55
 * @LastEditors  : 老董
 * @LastEditTime : 2026-08-01 15:30:08
 * @Description  : 流式（在线）线性回归训练器：小批量缓冲 + ADADELTA 逐样本更新
 */

use ndarray::{Array1, ArrayView1, arr1};

use super::AdaDelta;
use crate::errors::ModelError;

/// 模型参数个数：偏置 + 1 个特征
pub const MODEL_DIM: usize = 2;

/// 小批量容量默认值
pub const DEFAULT_BATCH_CAPACITY: usize = 1000;

/// 小批量容量下限
pub const MIN_BATCH_CAPACITY: usize = 1;

/// 小批量容量上限
pub const MAX_BATCH_CAPACITY: usize = 1_000_000;

/// 流式（在线）线性回归训练器
///
/// 模型为 y = θ·X，其中 X = [1, x]。样本逐条送入内部缓冲，缓冲填满
/// （或显式 [`flush`](Self::flush)）时按 ADADELTA 逐样本原地更新 θ。
///
/// 批内更新是顺序执行的：第 i 条样本更新后的 θ 直接参与第 i+1 条样本的
/// 梯度计算。小批量容量只决定更新的触发时机（限制缓冲内存），不改变
/// 数学结果，与逐条训练（容量 1）完全一致。
///
/// 优化器的两个衰减均值由训练器持有，跨小批量持续累积，
/// 只在新建训练器时归零。
///
/// # 使用示例
/// ```ignore
/// let mut trainer = OnlineTrainer::with_batch_capacity(100)?;
/// for (x, y) in samples {
///     trainer.submit(x, y)?;
/// }
/// trainer.flush()?; // 处理末尾不满的批
/// let y_hat = trainer.predict(3.0);
/// ```
#[derive(Debug)]
pub struct OnlineTrainer {
    /// 模型参数 θ（偏置在前）
    theta: Array1<f32>,
    /// ADADELTA 状态
    optimizer: AdaDelta,
    /// 小批量缓冲
    batch: Vec<(f32, f32)>,
    /// 小批量容量
    batch_capacity: usize,
}

impl OnlineTrainer {
    /// 创建默认容量（1000）的训练器，θ 初始化为全零
    pub fn new() -> Self {
        Self {
            theta: Array1::zeros(MODEL_DIM),
            optimizer: AdaDelta::new(MODEL_DIM),
            batch: Vec::with_capacity(DEFAULT_BATCH_CAPACITY),
            batch_capacity: DEFAULT_BATCH_CAPACITY,
        }
    }

    /// 创建指定小批量容量的训练器
    ///
    /// # 参数
    /// - `capacity`: 小批量容量，须在 `1..=1_000_000` 范围内
    pub fn with_batch_capacity(capacity: usize) -> Result<Self, ModelError> {
        check_batch_capacity(capacity)?;
        Ok(Self {
            theta: Array1::zeros(MODEL_DIM),
            optimizer: AdaDelta::new(MODEL_DIM),
            batch: Vec::with_capacity(capacity),
            batch_capacity: capacity,
        })
    }

    /// 调整小批量容量
    ///
    /// 若新容量不大于当前缓冲中的样本数，会先对已缓冲样本执行一次更新，
    /// 保证「缓冲样本数 < 容量」始终成立。
    pub fn set_batch_capacity(&mut self, capacity: usize) -> Result<(), ModelError> {
        check_batch_capacity(capacity)?;
        if self.batch.len() >= capacity {
            self.train_batch()?;
        }
        self.batch_capacity = capacity;
        Ok(())
    }

    /// 送入一条训练样本
    ///
    /// 样本先进入缓冲；缓冲达到容量时同步触发一次小批量更新并清空缓冲。
    /// 对 x、y 的取值不做检查（NaN/Inf 会原样进入 θ）。
    pub fn submit(&mut self, x: f32, y: f32) -> Result<(), ModelError> {
        self.batch.push((x, y));
        if self.batch.len() == self.batch_capacity {
            self.train_batch()?;
        }
        Ok(())
    }

    /// 对当前缓冲中的样本（可能不满一批）强制执行一次更新
    ///
    /// 常用于数据流结束时处理末尾的残批；空缓冲时为无副作用的空操作。
    pub fn flush(&mut self) -> Result<(), ModelError> {
        if self.batch.is_empty() {
            return Ok(());
        }
        self.train_batch()
    }

    /// 用当前参数预测特征值 x 对应的输出：θ·[1, x]
    ///
    /// 纯读取，无副作用。
    pub fn predict(&self, x: f32) -> f32 {
        let features = arr1(&[1.0, x]);
        self.theta.dot(&features)
    }

    /// 用当前参数对完整特征向量求 θ·X
    ///
    /// # 参数
    /// - `features`: 长度须等于 [`MODEL_DIM`] 的特征向量（首位为偏置项 1）
    pub fn predict_features(&self, features: ArrayView1<f32>) -> Result<f32, ModelError> {
        if features.len() != MODEL_DIM {
            return Err(ModelError::DimensionMismatch {
                expected: MODEL_DIM,
                actual: features.len(),
            });
        }
        Ok(self.theta.dot(&features))
    }

    /// 当前模型参数 θ
    pub fn theta(&self) -> &Array1<f32> {
        &self.theta
    }

    /// 小批量容量
    pub const fn batch_capacity(&self) -> usize {
        self.batch_capacity
    }

    /// 当前缓冲中的样本数
    pub fn buffered(&self) -> usize {
        self.batch.len()
    }

    /// 优化器状态（用于调试与测试）
    pub const fn optimizer(&self) -> &AdaDelta {
        &self.optimizer
    }

    /// 按缓冲顺序对每条样本执行一次 ADADELTA 更新，然后清空缓冲
    fn train_batch(&mut self) -> Result<(), ModelError> {
        let mut features = Array1::zeros(MODEL_DIM);
        features[0] = 1.0;

        for i in 0..self.batch.len() {
            let (x, y) = self.batch[i];
            features[1] = x;

            // grad = (θ·X - y) * X
            let residual = self.theta.dot(&features) - y;
            let grad = &features * residual;

            let delta = self.optimizer.step(&grad)?;
            self.theta += &delta;
        }
        self.batch.clear();
        Ok(())
    }
}

impl Default for OnlineTrainer {
    fn default() -> Self {
        Self::new()
    }
}

fn check_batch_capacity(capacity: usize) -> Result<(), ModelError> {
    if !(MIN_BATCH_CAPACITY..=MAX_BATCH_CAPACITY).contains(&capacity) {
        return Err(ModelError::InvalidBatchCapacity {
            given: capacity,
            min: MIN_BATCH_CAPACITY,
            max: MAX_BATCH_CAPACITY,
        });
    }
    Ok(())
}
