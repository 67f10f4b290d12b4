//! ADADELTA 优化器单元测试

use approx::assert_abs_diff_eq;
use ndarray::arr1;

use crate::errors::ModelError;
use crate::nn::AdaDelta;

/// 全零初始状态下首步更新必须非零（ε 的作用），且方向与梯度相反
#[test]
fn test_first_step_is_nonzero() {
    let mut optimizer = AdaDelta::new(2);
    let grad = arr1(&[1.0_f32, -2.0]);

    let delta = optimizer.step(&grad).unwrap();

    assert!(delta[0] < 0.0);
    assert!(delta[1] > 0.0);
}

/// 单步结果与手算值一致
#[test]
fn test_step_matches_hand_computation() {
    let mut optimizer = AdaDelta::new(1);
    let rho = optimizer.rho();
    let eps = optimizer.epsilon();
    let g = 0.5_f32;

    let delta = optimizer.step(&arr1(&[g])).unwrap();

    // E[g²] = ρ * 0 + (1 - ρ) * g²
    let eg2 = (1.0 - rho) * g * g;
    assert_abs_diff_eq!(optimizer.avg_sq_grad()[0], eg2, epsilon = 1e-7);

    // Δθ = -√(0 + ε) / √(E[g²] + ε) * g
    let expected_delta = -(eps.sqrt() / (eg2 + eps).sqrt()) * g;
    assert_abs_diff_eq!(delta[0], expected_delta, epsilon = 1e-7);

    // E[Δθ²] = ρ * 0 + (1 - ρ) * Δθ²
    assert_abs_diff_eq!(
        optimizer.avg_sq_delta()[0],
        (1.0 - rho) * expected_delta * expected_delta,
        epsilon = 1e-7
    );
}

/// 衰减均值跨多次 step 持续累积，不会被中途重置
#[test]
fn test_state_accumulates_across_steps() {
    let mut optimizer = AdaDelta::new(1);

    optimizer.step(&arr1(&[1.0])).unwrap();
    let eg2_after_first = optimizer.avg_sq_grad()[0];

    optimizer.step(&arr1(&[1.0])).unwrap();
    assert!(optimizer.avg_sq_grad()[0] > eg2_after_first);
}

/// 梯度维度不符须报 DimensionMismatch
#[test]
fn test_dimension_mismatch() {
    let mut optimizer = AdaDelta::new(2);

    let err = optimizer.step(&arr1(&[1.0, 2.0, 3.0])).unwrap_err();
    assert_eq!(
        err,
        ModelError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
}

/// reset 清零两个衰减均值
#[test]
fn test_reset() {
    let mut optimizer = AdaDelta::new(2);
    optimizer.step(&arr1(&[1.0, 1.0])).unwrap();

    optimizer.reset();

    assert_eq!(optimizer.avg_sq_grad()[0], 0.0);
    assert_eq!(optimizer.avg_sq_grad()[1], 0.0);
    assert_eq!(optimizer.avg_sq_delta()[0], 0.0);
    assert_eq!(optimizer.avg_sq_delta()[1], 0.0);
}

/// 自定义 ρ 与 ε 的构造
#[test]
fn test_with_config() {
    let optimizer = AdaDelta::with_config(3, 0.95, 1e-8);

    assert_eq!(optimizer.dim(), 3);
    assert_eq!(optimizer.rho(), 0.95);
    assert_eq!(optimizer.epsilon(), 1e-8);
}
