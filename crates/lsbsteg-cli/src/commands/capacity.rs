use std::path::Path;

use crate::CliResult;

pub fn run(image: &Path) -> CliResult<()> {
    let capacity = lsbsteg_core::commands::capacity(image)?;
    println!("{capacity}");

    Ok(())
}
