/*
 * @Author       : 老董
 * @Date         : 2026-05-18 10:42:17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-30 21:05:43
 * @Description  : 在线学习核心：ADADELTA 优化器、流式训练器与 RMSE 评估
 */

mod adadelta;
mod metrics;
mod trainer;

pub use adadelta::{AdaDelta, DEFAULT_EPSILON, DEFAULT_RHO};
pub use metrics::RmseAccumulator;
pub use trainer::{
    DEFAULT_BATCH_CAPACITY, MAX_BATCH_CAPACITY, MIN_BATCH_CAPACITY, MODEL_DIM, OnlineTrainer,
};

#[cfg(test)]
mod tests;
