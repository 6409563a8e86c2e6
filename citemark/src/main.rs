// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    citemark::init_logging();
    let args = citemark::cli::CliArgs::parse();
    match citemark::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use clap::error::ErrorKind;

    use citemark::cli::{CliArgs, Command, Preset};

    fn render_args(argv: &[&str]) -> citemark::cli::RenderArgs {
        match CliArgs::try_parse_from(argv).unwrap().command {
            Some(Command::Render(args)) => args,
            other => panic!("expected render subcommand, got {other:?}"),
        }
    }

    // 行为：仅输入文件时能解析 inputs 且 output 为空。
    #[test]
    fn parse_inputs_only() {
        let args = render_args(&["citemark", "render", "a.md", "b.md"]);
        assert_eq!(args.inputs, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert_eq!(args.output, None);
        assert_eq!(args.preset, Preset::Mixed);
    }

    // 行为：支持 -o/--output 与 --base-path，并且允许与 inputs 混排。
    #[test]
    fn parse_output_and_base_path_mixed() {
        let args = render_args(&[
            "citemark",
            "render",
            "a.md",
            "--output",
            "out.html",
            "--base-path",
            "C:\\docs",
            "b.md",
        ]);
        assert_eq!(args.inputs, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.base_path.as_deref(), Some("C:\\docs"));
    }

    // 行为：--preset 接受 document-only。
    #[test]
    fn parse_preset() {
        let args = render_args(&["citemark", "render", "--preset", "document-only", "a.md"]);
        assert_eq!(args.preset, Preset::DocumentOnly);
    }

    // 行为：重复指定 -o 会报错。
    #[test]
    fn error_on_duplicate_output() {
        let err = CliArgs::try_parse_from([
            "citemark", "render", "-o", "a.html", "-o", "b.html", "input.md",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    // 行为：-o 缺少值会报错。
    #[test]
    fn error_on_output_missing_value() {
        let err = CliArgs::try_parse_from(["citemark", "render", "-o"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    // 行为：未知参数会报错。
    #[test]
    fn error_on_unknown_argument() {
        let err = CliArgs::try_parse_from(["citemark", "render", "--unknown"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    // 行为：read-local 解析路径与可选的 --docs-root。
    #[test]
    fn parse_read_local() {
        let args =
            CliArgs::try_parse_from(["citemark", "read-local", "x/r.pdf", "--docs-root", "x"])
                .unwrap();
        match args.command {
            Some(Command::ReadLocal(args)) => {
                assert_eq!(args.path, PathBuf::from("x/r.pdf"));
                assert_eq!(args.docs_root, Some(PathBuf::from("x")));
            }
            other => panic!("expected read-local subcommand, got {other:?}"),
        }
    }
}
