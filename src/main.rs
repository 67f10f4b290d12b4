use std::env;
use std::process;

use anyhow::{Context, Result};
use log::info;
use ndarray::arr1;

use adaline_stream::data::SampleFile;
use adaline_stream::nn::{OnlineTrainer, RmseAccumulator};

/// 命令行入口：两个位置参数（数据文件路径、小批量容量）
///
/// 流程与库的分工：本层只负责读文件、喂样本、打印结果；
/// 训练与评估的全部语义在 `nn` 模块中。
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("用法: {} <数据文件> <小批量容量>", args[0]);
        process::exit(1);
    }

    let data_path = &args[1];
    let batch_capacity: usize = args[2]
        .parse()
        .with_context(|| format!("小批量容量须为正整数，实际输入: {}", args[2]))?;

    let mut trainer = OnlineTrainer::with_batch_capacity(batch_capacity)?;
    info!("小批量容量设为 {}", trainer.batch_capacity());

    // 第一遍：逐条送入训练
    let samples = SampleFile::new(data_path);
    let mut total = 0usize;
    for pair in samples.iter().context("打开训练数据失败")? {
        let (x, y) = pair?;
        trainer.submit(x, y)?;
        total += 1;
    }
    // 末尾不满一批的样本
    trainer.flush()?;
    info!("训练完成，共 {} 条样本", total);

    // 第二遍：在同一数据上计算 RMSE
    let mut evaluator = RmseAccumulator::new();
    for pair in samples.iter().context("打开评估数据失败")? {
        let (x, y) = pair?;
        let features = arr1(&[1.0, x]);
        evaluator.accumulate(&trainer, features.view(), y)?;
    }

    let theta = trainer.theta();
    println!("RMSE = {}", evaluator.rmse()?);
    println!("theta0 = {}, theta1 = {}", theta[0], theta[1]);

    Ok(())
}
