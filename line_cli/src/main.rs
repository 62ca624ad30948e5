//! # Line CLI
//!
//! Console front end for the transmission line parameter engine. Prompts
//! for the tower family, circuit layout, bundle, conductor, and line
//! length, builds a `LineRequest`, and renders the computed parameters or
//! the engine's error message verbatim.

use std::io::{self, BufRead, Write};

use line_core::geometry::Point2D;
use line_core::{calculate, BundleConfig, CircuitLayout, ConductorType, LineRequest, TowerType};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn tower_menu() -> String {
    let names: Vec<&str> = TowerType::ALL.iter().map(|t| t.display_name()).collect();
    names.join(", ")
}

fn conductor_menu() -> String {
    let names: Vec<&str> = ConductorType::ALL.iter().map(|c| c.display_name()).collect();
    names.join(", ")
}

fn main() {
    println!("Line CLI - Transmission Line Parameter Calculator");
    println!("=================================================");
    println!();

    let tower = prompt_line(&format!("Enter tower type ({}) [Type-1]: ", tower_menu()));
    let tower = if tower.is_empty() { "Type-1".to_string() } else { tower };

    let circuits = prompt_u32("Enter number of circuits (1 or 2) [1]: ", 1);

    let mut points = Vec::new();
    for circuit in 1..=circuits {
        for phase in 1..=3 {
            println!("For phase {} in circuit {}:", phase, circuit);
            let x_m = prompt_f64("  X coordinate (m): ", 0.0);
            let y_m = prompt_f64("  Y coordinate (m): ", 0.0);
            points.push(Point2D::new(x_m, y_m));
        }
    }

    let layout = match CircuitLayout::from_points(&points) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let conductor = prompt_line(&format!("Enter conductor type ({}) [Hawk]: ", conductor_menu()));
    let conductor = if conductor.is_empty() { "Hawk".to_string() } else { conductor };

    let count = prompt_u32("Enter number of conductors in the bundle [1]: ", 1);
    let spacing_m = if count > 1 {
        prompt_f64("Enter spacing between bundle conductors (m) [0.4]: ", 0.4)
    } else {
        0.0
    };

    let length_km = prompt_f64("Enter line length (km) [100.0]: ", 100.0);

    let request = LineRequest {
        tower,
        circuits,
        layout,
        bundle: BundleConfig {
            conductor,
            count,
            spacing_m,
        },
        length_km,
    };

    println!();
    match calculate(&request) {
        Ok(parameters) => {
            println!("═══════════════════════════════════════");
            println!("  LINE PARAMETERS ({:.1} km)", request.length_km);
            println!("═══════════════════════════════════════");
            println!();
            println!("  R        = {:.4} Ω", parameters.resistance_ohm);
            println!("  L        = {:.4} mH", parameters.inductance_mh);
            println!("  C        = {:.6} µF", parameters.capacitance_uf);
            println!("  Capacity = {:.3} MVA", parameters.capacity_mva);
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&parameters) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
