//! Build script for lily58-oled-core
//!
//! - Validates status.toml at compile time
//! - Compiles the validated values into `status_config.rs` constants

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Longest layer name that still fits "LAYER: <name>" in a label buffer
const MAX_LAYER_NAME_LEN: usize = 24;

/// Most layers a keymap may declare
const MAX_LAYERS: usize = 32;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StatusToml {
    layers: LayersToml,
    wpm: WpmToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayersToml {
    names: Vec<String>,
    #[serde(default = "default_unknown")]
    unknown: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WpmToml {
    max: u16,
    mid_threshold: u16,
    high_threshold: u16,
    low_color: String,
    mid_color: String,
    high_color: String,
}

fn default_unknown() -> String {
    "???".to_string()
}

fn main() {
    println!("cargo:rerun-if-changed=status.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config = load_config(Path::new("status.toml"));
    let generated = generate(&config);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("status_config.rs"), generated)
        .expect("failed to write status_config.rs");
}

/// Read, parse and validate status.toml, aborting the build on any problem
fn load_config(path: &Path) -> StatusToml {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read status.toml", &[e.to_string()]),
    };

    let config: StatusToml = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid status.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_layers(&config.layers, &mut errors);
    validate_wpm(&config.wpm, &mut errors);

    if !errors.is_empty() {
        fail("status.toml failed validation", &errors);
    }

    config
}

fn validate_layers(layers: &LayersToml, errors: &mut Vec<String>) {
    if layers.names.is_empty() {
        errors.push("[layers] names must list at least one layer".to_string());
    }
    if layers.names.len() > MAX_LAYERS {
        errors.push(format!("[layers] at most {} names are supported", MAX_LAYERS));
    }

    let all = layers
        .names
        .iter()
        .map(|n| ("names", n))
        .chain(core::iter::once(("unknown", &layers.unknown)));

    for (key, name) in all {
        if name.is_empty() {
            errors.push(format!("[layers] {} entries must not be empty", key));
        }
        if name.len() > MAX_LAYER_NAME_LEN {
            errors.push(format!(
                "[layers] '{}' is longer than {} characters",
                name, MAX_LAYER_NAME_LEN
            ));
        }
        if !name.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
            errors.push(format!("[layers] '{}' must be printable ASCII", name));
        }
    }
}

fn validate_wpm(wpm: &WpmToml, errors: &mut Vec<String>) {
    if wpm.max == 0 {
        errors.push("[wpm] max must be greater than 0".to_string());
    }
    if wpm.mid_threshold >= wpm.high_threshold {
        errors.push("[wpm] mid_threshold must be below high_threshold".to_string());
    }

    for (key, value) in [
        ("low_color", &wpm.low_color),
        ("mid_color", &wpm.mid_color),
        ("high_color", &wpm.high_color),
    ] {
        if parse_color(value).is_none() {
            errors.push(format!("[wpm] {} must look like \"#RRGGBB\", got '{}'", key, value));
        }
    }
}

/// Parse "#RRGGBB" into its components
fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Emit the Rust source included by `config::compiled`
fn generate(config: &StatusToml) -> String {
    let mut out = String::new();
    out.push_str("// @generated by build.rs from status.toml\n\n");

    out.push_str("/// Layer names in keymap order\n");
    out.push_str("pub const LAYER_NAMES: &[&str] = &[");
    for name in &config.layers.names {
        let _ = write!(out, "{:?}, ", name);
    }
    out.push_str("];\n\n");

    let _ = writeln!(out, "/// Marker for layers without a name");
    let _ = writeln!(out, "pub const UNKNOWN_LAYER: &str = {:?};\n", config.layers.unknown);

    let _ = writeln!(out, "/// Typing speed bar upper bound");
    let _ = writeln!(out, "pub const WPM_MAX: u16 = {};", config.wpm.max);
    let _ = writeln!(out, "/// First value of the mid band");
    let _ = writeln!(out, "pub const WPM_MID_THRESHOLD: u16 = {};", config.wpm.mid_threshold);
    let _ = writeln!(out, "/// First value of the high band");
    let _ = writeln!(out, "pub const WPM_HIGH_THRESHOLD: u16 = {};\n", config.wpm.high_threshold);

    for (name, value) in [
        ("WPM_LOW_COLOR", &config.wpm.low_color),
        ("WPM_MID_COLOR", &config.wpm.mid_color),
        ("WPM_HIGH_COLOR", &config.wpm.high_color),
    ] {
        // Validated above
        let (r, g, b) = parse_color(value).unwrap_or_default();
        let _ = writeln!(
            out,
            "pub const {}: Rgb888 = Rgb888::new(0x{:02X}, 0x{:02X}, 0x{:02X});",
            name, r, g, b
        );
    }

    out
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
