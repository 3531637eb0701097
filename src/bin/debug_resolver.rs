use std::sync::Arc;

use t9_pinyin::{Resolver, SyllableBase};

fn main() {
    env_logger::init();

    let digits = std::env::args().nth(1).unwrap_or_else(|| "94264".to_string());
    println!("Input: {}", digits);

    let resolver = Resolver::new(Arc::new(SyllableBase::builtin()));
    let generator = resolver.generator();

    let full = generator.generate_unpruned(&digits).unwrap_or_default();
    let pruned = generator.generate(&digits).unwrap_or_default();
    println!("Unpruned: {} strings, pruned: {}", full.len(), pruned.len());

    println!("\nClassified:");
    match resolver.resolve(&digits) {
        Ok(classified) => {
            for (i, c) in classified.iter().enumerate() {
                println!("  {}: {} - {:?}", i, c.text, c.category);
            }
        }
        Err(e) => eprintln!("  error: {}", e),
    }
}
