/*
 * @Author       : 老董
 * @Date         : 2026-05-20 14:12:40
 * @LastEditTime : 2026-07-28 20:03:51
 * @Description  : RMSE 评估：对一轮数据累积残差平方和
 */

use ndarray::ArrayView1;

use super::OnlineTrainer;
use crate::errors::ModelError;

/// RMSE 评估累加器
///
/// 对一轮评估累积残差平方和与样本数，[`rmse`](Self::rmse) 给出
/// √(Σ(y - θ·X)² / n)。只读取训练器的当前参数，不会改动它们。
/// 一轮评估开始时调用 [`reset`](Self::reset)，评估结束读取 RMSE 后即可丢弃。
///
/// # 使用示例
/// ```ignore
/// let mut evaluator = RmseAccumulator::new();
/// for (x, y) in samples {
///     evaluator.accumulate(&trainer, arr1(&[1.0, x]).view(), y)?;
/// }
/// println!("RMSE = {}", evaluator.rmse()?);
/// ```
pub struct RmseAccumulator {
    /// 残差平方和
    sum_squared: f32,
    /// 已累积的样本数
    count: usize,
}

impl RmseAccumulator {
    /// 创建空的累加器（等价于 reset 过的状态）
    pub const fn new() -> Self {
        Self {
            sum_squared: 0.0,
            count: 0,
        }
    }

    /// 开始新一轮评估（清零累积量）
    pub fn reset(&mut self) {
        self.sum_squared = 0.0;
        self.count = 0;
    }

    /// 累积一条评估样本的残差平方
    ///
    /// # 参数
    /// - `model`: 提供当前参数 θ 的训练器
    /// - `features`: 完整特征向量 [1, x]，长度须等于模型维度
    /// - `y`: 真实值
    pub fn accumulate(
        &mut self,
        model: &OnlineTrainer,
        features: ArrayView1<f32>,
        y: f32,
    ) -> Result<(), ModelError> {
        let prediction = model.predict_features(features)?;
        let residual = y - prediction;
        self.sum_squared += residual * residual;
        self.count += 1;
        Ok(())
    }

    /// 计算当前累积下的 RMSE
    ///
    /// # 返回
    /// √(残差平方和 / 样本数)；未累积任何样本时返回
    /// [`ModelError::EmptyEvaluation`]，而不是让 NaN 静默向下游传播。
    pub fn rmse(&self) -> Result<f32, ModelError> {
        if self.count == 0 {
            return Err(ModelError::EmptyEvaluation);
        }
        Ok((self.sum_squared / self.count as f32).sqrt())
    }

    /// 已累积的样本数
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Default for RmseAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
