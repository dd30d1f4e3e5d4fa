use crate::error::Result;
use bondlab::core::models::element::Element;

pub fn run() -> Result<()> {
    println!("{:<4} {:<10} {:>3} {:>8}", "sym", "name", "Z", "valence");
    for element in Element::palette() {
        println!(
            "{:<4} {:<10} {:>3} {:>8}",
            element.symbol, element.name, element.atomic_number, element.valence
        );
    }
    Ok(())
}
