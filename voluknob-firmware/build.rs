//! Build script for voluknob-firmware
//!
//! - Sets up linker search paths and linker scripts for memory.x
//! - Validates knob.toml and turns it into a `KnobConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use voluknob_core::KnobConfig;

/// Layout of knob.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KnobFile {
    #[serde(default)]
    knob: KnobConfig,
}

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // cortex-m-rt, embassy-rp boot2 and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate knob.toml
fn load_config() -> KnobConfig {
    // Re-run if knob.toml changes
    println!("cargo:rerun-if-changed=knob.toml");

    let config_path = Path::new("knob.toml");

    // Missing file means factory defaults
    if !config_path.exists() {
        println!("cargo:warning=knob.toml not found, using factory defaults");
        return KnobConfig::DEFAULT;
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read knob.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML and map onto KnobConfig
    let file: KnobFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid knob.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Range checks shared with the firmware
    if let Err(e) = file.knob.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [knob] configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(e.message())
        );
    }

    println!("cargo:warning=knob.toml validated successfully");
    file.knob
}

/// Emit the validated config as Rust source in OUT_DIR
fn write_config(config: &KnobConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "/// Knob configuration generated from knob.toml\n\
         pub const KNOB_CONFIG: voluknob_core::KnobConfig = voluknob_core::KnobConfig {{\n\
         \x20   initial_volume: {},\n\
         \x20   idle_timeout_ms: {},\n\
         \x20   frame_interval_ms: {},\n\
         \x20   mute_debounce_ms: {},\n\
         \x20   drop_reset_probability: {:?},\n\
         }};\n",
        config.initial_volume,
        config.idle_timeout_ms,
        config.frame_interval_ms,
        config.mute_debounce_ms,
        config.drop_reset_probability,
    );

    fs::write(out_dir.join("knob_config.rs"), source).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            // Truncate on char boundaries
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
