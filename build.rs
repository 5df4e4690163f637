use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LatexData {
    accents: HashMap<String, String>,
    symbols: HashMap<String, String>,
    transparent_commands: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/latex_data.json")?;
    let latex: LatexData = serde_json::from_str(&json)?;

    for (command, mark) in &latex.accents {
        if mark.chars().count() != 1 {
            return Err(format!("accent \\{} must map to a single combining mark", command).into());
        }
    }
    write_map(&output.join("accents.rs"), &latex.accents, |mark| {
        format!("{:?}", mark.chars().next().unwrap_or('\u{0}'))
    })?;
    write_map(&output.join("symbols.rs"), &latex.symbols, |v| format!("{:?}", v))?;
    write_set(
        &output.join("transparent_commands.rs"),
        &latex.transparent_commands,
    )?;

    // Control words that stand for a letter decide the case of the word they
    // lead, e.g. `\L{}ukasz` is capitalized and `\o` is not.
    let letter_commands = latex
        .symbols
        .iter()
        .filter(|(k, v)| {
            k.chars().all(|c| c.is_ascii_alphabetic()) && v.chars().all(char::is_alphabetic)
        })
        .filter(|(k, _)| !k.starts_with("text"))
        .map(|(k, _)| k.clone())
        .collect::<Vec<_>>();
    write_set(&output.join("letter_commands.rs"), &letter_commands)?;

    Ok(())
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
