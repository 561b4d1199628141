use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fountain_html::{Conf, FountainParser, FountainResult, SAMPLE_SCREENPLAY};

/// 把 Fountain 剧本渲染成 HTML
#[derive(Debug, Parser)]
#[command(name = "fountain-html", version, about = "Render Fountain screenplays as HTML")]
struct Args {
    /// Fountain 剧本文件
    #[arg(required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// 使用内置的示例剧本
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// JSON 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出带样式表的完整页面
    #[arg(long)]
    standalone: bool,

    /// 输出 JSON 格式的解析结果
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> FountainResult<()> {
    let mut conf = match &args.config {
        Some(path) => Conf::from_json_file(path)?,
        None => Conf::default(),
    };
    if args.standalone {
        conf.standalone = true;
    }

    let script = match &args.input {
        Some(path) => {
            log::info!("读取文件: {}", path.display());
            fs::read_to_string(path)?
        }
        None => SAMPLE_SCREENPLAY.to_string(),
    };

    let parser = FountainParser::new(conf);
    let result = parser.parse(&script, !args.json);

    eprintln!("解析完成！");
    eprintln!("解析时间: {}ms", result.parse_time);
    eprintln!("块数量: {}", result.document.blocks.len());
    eprintln!("场景数量: {}", result.properties.scenes.len());
    eprintln!("角色数量: {}", result.properties.characters.len());
    for diagnostic in &result.diagnostics {
        eprintln!("提示 (第{}行): {}", diagnostic.line + 1, diagnostic.message);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(html) = result.script_html {
        print!("{}", html);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误: {}", e);
            ExitCode::FAILURE
        }
    }
}
