//! Builds a small dictionary, queries it and prints its tree view.
//!
//! Logs every engine event at TRACE level:
//! `cargo run --example basic_usage [unicode|ascii]`

use tracing::Level;
use word_trie::{RenderStyle, Trie};

fn main() -> Result<(), word_trie::ParseRenderStyleError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .init();

    let style: RenderStyle = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => RenderStyle::default(),
    };

    let mut trie: Trie = ["hola", "hilo", "sol", "sombra"].into_iter().collect();
    trie.insert("holaquetal");

    println!("{} words", trie.len());
    println!("search(\"hola\") = {}", trie.search("hola"));
    println!("starts_with(\"so\") = {}", trie.starts_with("so"));
    println!(
        "completions of \"ho\": {:?}",
        trie.words_with_prefix("ho").collect::<Vec<_>>()
    );

    trie.delete("hola");
    trie.delete("sombra");
    println!("after deletes: {trie:?}");
    println!("{}", trie.render_with(style));

    Ok(())
}
