//! # Adaline Stream
//!
//! `adaline_stream`实现了一个流式（在线）线性回归训练器：模型为 y = θ·X
//! （偏置 + 单特征），采用 [ADADELTA](http://arxiv.org/pdf/1212.5701v1.pdf)
//! 为每个参数自适应调整学习率，无需手工指定全局学习率。样本逐条送入、
//! 按可配置容量的小批量缓冲后逐样本原地更新参数，最后用 RMSE 评估拟合质量。
//!

pub mod data;
pub mod errors;
pub mod nn;
