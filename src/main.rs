use std::env;
use std::process;

use colored::Colorize;
use design_patterns::catalogue;

fn print_catalogue() {
    println!("{}", "Design pattern catalogue".bold());
    for pattern in catalogue::all() {
        println!(
            "  {:<24} {:<11} {}",
            pattern.name.green(),
            format!("[{}]", pattern.category).cyan(),
            pattern.summary
        );
    }
    println!("\nUsage: patterns <name> | all");
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => print_catalogue(),
        Some("all") => {
            for pattern in catalogue::all() {
                (pattern.run)();
            }
        }
        Some(name) => match catalogue::find(name) {
            Ok(pattern) => (pattern.run)(),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        },
    }
}
