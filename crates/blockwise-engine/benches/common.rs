// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content\nspread over two lines.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted text\ncontinued lazily\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n    indented code\n\n---\n\n";
    base.repeat(size)
}

/// Lists and quotes nested `depth` levels deep, repeated `sections` times.
#[allow(dead_code)]
pub fn generate_nested_containers(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("Section {section}\n======\n\n"));
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{indent}- item at level {level}\n"));
            content.push_str(&format!("{indent}  > quoted at level {level}\n"));
        }
        content.push('\n');
    }
    content
}

/// Worst case for the container walk: one long line of markers.
#[allow(dead_code)]
pub fn generate_marker_run(markers: usize) -> String {
    format!("{}text\n", "> - ".repeat(markers))
}
