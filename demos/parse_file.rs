//! Parse a recipe from a string and print its parts
//!
//! Run with: cargo run --example parse_file

use cooklang_parse::{attach_images, parse};

fn main() {
    let source = r#">> servings: 4
>> source: grandma

-- keep the heat low
Heat @olive oil{2%tbsp} in a #large pot{}.
Add @onion{1} and @salt.

Simmer for ~{10%minutes}, then add @stock{1%l}.
"#;

    let mut recipe = parse(source);
    attach_images(&mut recipe, "soup", ["soup.jpg", "soup.2.png", "bread.jpg"]);

    println!("=== Metadata ===");
    for (key, value) in &recipe.metadata {
        println!("{}: {}", key, value);
    }

    println!("\n=== Ingredients ===");
    for ingredient in &recipe.ingredients {
        match ingredient.quantity() {
            Some(quantity) => println!("- {} ({})", ingredient.name, quantity),
            None => println!("- {}", ingredient.name),
        }
    }

    println!("\n=== Method ===");
    for (index, step) in recipe.method.iter().enumerate() {
        let number = index + 1;
        println!("{}. {}", number, step);
        if let Some(image) = recipe.step_image(number) {
            println!("   [image: {}]", image.display());
        }
    }

    if let Some(image) = &recipe.image {
        println!("\nMain image: {}", image.display());
    }
}
