//! tslua CLI - TypeScript to Lua transpiler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tslua::checker::CheckedProgram;
use tslua::{transpile_json_with_diagnostics, LUA_PRELUDE};

/// tslua - TypeScript to Lua transpiler
#[derive(Parser, Debug)]
#[command(name = "tslua")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate a checked TypeScript AST to Lua", long_about = None)]
struct Cli {
    /// Input checked-program JSON file (the front-end's AST dump)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Lua file (default: <INPUT>.lua)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Check only (don't generate output)
    #[arg(short, long)]
    check: bool,

    /// Prepend the Lua runtime prelude (ITE helper, bit fallback)
    #[arg(short, long)]
    prelude: bool,

    /// Dump the deserialized AST and exit
    #[arg(long)]
    dump_ast: bool,

    /// Emit JSON diagnostics to stderr (on failure only)
    #[arg(long)]
    diag_json: bool,

    /// Show debug information
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        println!("[DEBUG] Input: {:?}", cli.input);
        println!("[DEBUG] Output: {:?}", cli.output);
    }

    let json = std::fs::read_to_string(&cli.input)?;

    if cli.debug {
        println!("[DEBUG] Source length: {} bytes", json.len());
    }

    // AST dump mode
    if cli.dump_ast {
        let program: CheckedProgram = match serde_json::from_str(&json) {
            Ok(program) => program,
            Err(err) => {
                eprintln!("Invalid input: {err}");
                std::process::exit(1);
            }
        };
        println!("=== Abstract Syntax Tree ===");
        for (i, stmt) in program.source_file.statements.iter().enumerate() {
            println!("[{:03}] {:?}", i, stmt);
        }
        return Ok(());
    }

    let lua_code = match transpile_json_with_diagnostics(&json, Some(&cli.input)) {
        Ok(code) => code,
        Err(diags) => {
            print!("{}", diags.to_text());
            if cli.diag_json {
                eprintln!("{}", diags.to_json());
            }
            std::process::exit(1);
        }
    };

    if cli.debug {
        println!("[DEBUG] Generated Lua code:");
        println!("{lua_code}");
    }

    if cli.check {
        println!("✅ Translation successful!");
        return Ok(());
    }

    let output_path = cli.output.unwrap_or_else(|| {
        // Default: output to current directory with same filename.lua
        let mut p = cli.input.clone();
        p.set_extension("lua");
        if let Some(filename) = p.file_name() {
            PathBuf::from(filename)
        } else {
            p
        }
    });

    let final_code = if cli.prelude {
        format!("{LUA_PRELUDE}\n{lua_code}")
    } else {
        lua_code
    };

    std::fs::write(&output_path, &final_code)?;
    println!("✅ Transpiled to: {output_path:?}");

    Ok(())
}
