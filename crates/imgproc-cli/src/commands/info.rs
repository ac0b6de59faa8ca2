//! Image info command.

use crate::InfoArgs;
use anyhow::Result;

/// Prints dimensions and max value for each input.
pub fn run(args: InfoArgs) -> Result<()> {
    for path in &args.input {
        let image = super::load_image(path)?;
        println!("{}", path.display());
        println!("  Resolution: {}x{}", image.width(), image.height());
        println!("  Max value:  {}", image.max_value());
        println!("  Pixels:     {}", image.pixel_count());
    }
    Ok(())
}
