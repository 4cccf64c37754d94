use std::{env, error::Error, fs, path::Path};

#[path = "build/codegen.rs"]
mod codegen;

use codegen::RawConfig;

const CONFIG_FILE: &str = "cfg.toml";

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed=build/codegen.rs");

    let raw: RawConfig = if Path::new(CONFIG_FILE).exists() {
        let toml_str = fs::read_to_string(CONFIG_FILE)?;
        codegen::parse(&toml_str)?
    } else {
        println!(
            "cargo:warning={CONFIG_FILE} not found, building with default values (see cfg.toml.example)"
        );
        RawConfig::default()
    };

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, codegen::render(&raw))?;
    Ok(())
}
