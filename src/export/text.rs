use crate::engines::flora::Tree;
use crate::engines::genetics::Genome;

/// One line per rule: identifier, then the production slots joined by
/// pipes. Empty slots render as nothing, e.g. `A -> x+ | `.
pub fn genome_as_text(genome: &Genome) -> String {
    let mut out = String::new();
    for (id, activation) in genome.iter() {
        let slots: Vec<String> = activation
            .iter()
            .map(|slot| slot.map(|symbol| symbol.to_string()).unwrap_or_default())
            .collect();
        out.push_str(&format!("{} -> {}\n", id, slots.join(" | ")));
    }
    out
}

/// Raw body tokens joined by commas.
pub fn body_as_text(tree: &Tree) -> String {
    tree.body
        .iter()
        .map(|symbol| symbol.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Translated body (gene symbols rendered as the growth mark) joined by
/// commas.
pub fn translated_body_as_text(tree: &Tree) -> String {
    tree.translated_body().join(",")
}
