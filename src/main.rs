use clap::Parser;

use contrast_fix::patch::process_file;
use contrast_fix::rules::TARGET_FILES;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project root the three target files are resolved against.
const BASE_DIR: &str = "/srv/srs-website";

const SEPARATOR_WIDTH: usize = 50;

#[derive(Parser)]
#[command(name = "contrast-fix")]
#[command(version = VERSION)]
#[command(about = "WCAG 2.1 AA color contrast patcher for the questionnaire components")]
struct Cli {}

fn main() -> std::process::ExitCode {
    let _cli = Cli::parse();

    let root = std::path::Path::new(BASE_DIR);

    println!("WCAG 2.1 AA Color Contrast Compliance Fixer");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    let mut fixed_count = 0;
    for relative in TARGET_FILES {
        // Per-file lines print as outcomes arrive so a failing file leaves
        // the lines for files already processed on screen, with no summary.
        match process_file(root, relative) {
            Ok(outcome) => {
                if outcome.changed {
                    println!("✓ Fixed {}", relative);
                    fixed_count += 1;
                } else {
                    println!("- No changes needed in {}", relative);
                }
            }
            Err(err) => {
                eprintln!("contrast-fix: {} ({})", err, err.code.as_str());
                return std::process::ExitCode::from(exit_code_to_u8(err.code.exit_code()));
            }
        }
    }

    println!("{}", "=".repeat(SEPARATOR_WIDTH));
    println!("Fixed {} file(s)", fixed_count);

    std::process::ExitCode::SUCCESS
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
