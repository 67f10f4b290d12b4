//! 样本文件读取单元测试

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::data::{DataError, SampleFile};

fn write_temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("adaline_stream_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// 逐行解析空白分隔的 (x, y)，空行跳过，两数之后的内容忽略
#[test]
fn test_parse_two_columns() {
    let path = write_temp_file("basic.txt", "0 1\n1 3\n\n2 5\n3 7 多余内容\n");
    let samples = SampleFile::new(&path);

    let pairs: Vec<(f32, f32)> = samples.iter().unwrap().map(|p| p.unwrap()).collect();
    assert_eq!(
        pairs,
        vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]
    );
}

/// 每次 iter 都从头开始，是独立的一轮遍历
#[test]
fn test_two_independent_passes() {
    let path = write_temp_file("two_pass.txt", "1 2\n2 4\n");
    let samples = SampleFile::new(&path);

    let first: Vec<(f32, f32)> = samples.iter().unwrap().map(|p| p.unwrap()).collect();
    let second: Vec<(f32, f32)> = samples.iter().unwrap().map(|p| p.unwrap()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

/// 无法解析的行报 ParseLine 且带行号
#[test]
fn test_parse_error_carries_line_number() {
    let path = write_temp_file("bad_line.txt", "1 2\nfoo bar\n");
    let samples = SampleFile::new(&path);
    let mut iter = samples.iter().unwrap();

    assert!(iter.next().unwrap().is_ok());
    match iter.next().unwrap() {
        Err(DataError::ParseLine { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "foo bar");
        }
        other => panic!("预期 ParseLine 错误，实际: {:?}", other),
    }
}

/// 只有一列的行同样无法解析
#[test]
fn test_single_column_line_fails() {
    let path = write_temp_file("one_col.txt", "1.5\n");
    let samples = SampleFile::new(&path);

    let result = samples.iter().unwrap().next().unwrap();
    assert!(matches!(result, Err(DataError::ParseLine { line: 1, .. })));
}

/// 文件不存在报 FileNotFound
#[test]
fn test_missing_file() {
    let samples = SampleFile::new("no_such_file.txt");

    match samples.iter() {
        Err(DataError::FileNotFound(path)) => {
            assert_eq!(path, PathBuf::from("no_such_file.txt"));
        }
        _ => panic!("预期 FileNotFound 错误"),
    }
}
