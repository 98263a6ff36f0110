use crate::error::Result;
use serde::Serialize;

pub fn output_data<T: Serialize>(data: &T, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        "yaml" => {
            println!("{}", serde_yaml::to_string(data)?);
        }
        "pretty" | _ => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

pub fn print_warning(message: &str) {
    println!("\x1b[33m⚠️  Warning: {}\x1b[0m", message);
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", message);
}
