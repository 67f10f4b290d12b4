/*
 * @Author       : 老董
 * @Date         : 2026-05-18 11:03:29
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-28 19:47:12
 * @Description  : ADADELTA 优化器：按坐标自适应步长的梯度下降
 */

use ndarray::{Array1, Zip};

use crate::errors::ModelError;

/// 衰减常数 ρ 的默认值（对大小数据集都工作良好）
pub const DEFAULT_RHO: f32 = 0.9;

/// 平滑常数 ε 的默认值
pub const DEFAULT_EPSILON: f32 = 1e-6;

/// ADADELTA 优化器
///
/// ADADELTA: An Adaptive Learning Rate Method
/// - E[g²] = ρ * E[g²] + (1 - ρ) * g²
/// - Δθ = -√(E[Δθ²] + ε) / √(E[g²] + ε) * g
/// - E[Δθ²] = ρ * E[Δθ²] + (1 - ρ) * Δθ²
///
/// 以过往更新量与过往梯度的均方根之比作为每个坐标的自适应步长，
/// 因此无需手工指定全局学习率。两个衰减均值在优化器的整个生命周期内
/// 持续累积（不随小批量边界重置），这正是它对整条数据流的"记忆"。
///
/// ε 既避免了除零，也保证了全零初始状态下第一步更新非零。
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = AdaDelta::new(2);
/// let delta = optimizer.step(&grad)?;
/// theta += &delta;
/// ```
#[derive(Debug)]
pub struct AdaDelta {
    /// 衰减常数 ρ
    rho: f32,
    /// 平滑常数 ε
    epsilon: f32,
    /// E[g²]：梯度平方的衰减均值
    avg_sq_grad: Array1<f32>,
    /// E[Δθ²]：更新量平方的衰减均值
    avg_sq_delta: Array1<f32>,
}

impl AdaDelta {
    /// 创建指定维度的 ADADELTA 优化器（默认 ρ 与 ε）
    pub fn new(dim: usize) -> Self {
        Self::with_config(dim, DEFAULT_RHO, DEFAULT_EPSILON)
    }

    /// 创建带完整配置的 ADADELTA 优化器
    ///
    /// # 参数
    /// - `dim`: 参数向量的维度
    /// - `rho`: 衰减常数，越大对历史的记忆越长
    /// - `epsilon`: 平滑常数
    pub fn with_config(dim: usize, rho: f32, epsilon: f32) -> Self {
        Self {
            rho,
            epsilon,
            avg_sq_grad: Array1::zeros(dim),
            avg_sq_delta: Array1::zeros(dim),
        }
    }

    /// 依据一条梯度计算参数更新量 Δθ，并推进内部状态
    ///
    /// # 参数
    /// - `grad`: 当前样本的梯度，长度须等于 [`dim`](Self::dim)
    ///
    /// # 返回
    /// 可直接加到参数向量上的 Δθ（已含负号）
    pub fn step(&mut self, grad: &Array1<f32>) -> Result<Array1<f32>, ModelError> {
        if grad.len() != self.dim() {
            return Err(ModelError::DimensionMismatch {
                expected: self.dim(),
                actual: grad.len(),
            });
        }

        let rho = self.rho;
        let eps = self.epsilon;

        // E[g²] = ρ * E[g²] + (1 - ρ) * g²
        Zip::from(&mut self.avg_sq_grad)
            .and(grad)
            .for_each(|eg, &g| *eg = rho * *eg + (1.0 - rho) * g * g);

        // Δθ = -√(E[Δθ²] + ε) / √(E[g²] + ε) * g
        let delta = Zip::from(&self.avg_sq_delta)
            .and(&self.avg_sq_grad)
            .and(grad)
            .map_collect(|&ed, &eg, &g| -((ed + eps).sqrt() / (eg + eps).sqrt()) * g);

        // E[Δθ²] = ρ * E[Δθ²] + (1 - ρ) * Δθ²
        Zip::from(&mut self.avg_sq_delta)
            .and(&delta)
            .for_each(|ed, &d| *ed = rho * *ed + (1.0 - rho) * d * d);

        Ok(delta)
    }

    /// 清零累积状态
    ///
    /// 如需完全从头训练，通常直接新建实例。
    pub fn reset(&mut self) {
        self.avg_sq_grad.fill(0.0);
        self.avg_sq_delta.fill(0.0);
    }

    /// 参数向量的维度
    pub fn dim(&self) -> usize {
        self.avg_sq_grad.len()
    }

    /// 衰减常数 ρ
    pub const fn rho(&self) -> f32 {
        self.rho
    }

    /// 平滑常数 ε
    pub const fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// 获取梯度平方的衰减均值（用于调试与测试）
    pub fn avg_sq_grad(&self) -> &Array1<f32> {
        &self.avg_sq_grad
    }

    /// 获取更新量平方的衰减均值（用于调试与测试）
    pub fn avg_sq_delta(&self) -> &Array1<f32> {
        &self.avg_sq_delta
    }
}
