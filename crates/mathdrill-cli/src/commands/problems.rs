//! The `mathdrill problems` command.

use anyhow::Result;

use mathdrill_core::generator::generate;

use super::parse_operation;

pub fn execute(operation: String, min: i64, max: i64) -> Result<()> {
    let operation = parse_operation(&operation)?;
    let problems = generate(operation, min, max)?;

    println!(
        "{} {} problems over [{min}, {max}]:",
        problems.len(),
        operation
    );
    let width = problems.len().to_string().len();
    for (i, spec) in problems.iter().enumerate() {
        println!("  {:>width$}. {}{}", i + 1, spec.question(), spec.answer());
    }

    Ok(())
}
