// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- [x] Done task\n\n> Quoted line\n> lazily continued\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "plain ***both*** __bold__ _it_ `code` ~~gone~~ ![img](a.png) [l](h) ".repeat(repeats)
}

/// A marked-up line and the text it renders to, for caret benchmarks.
#[allow(dead_code)]
pub fn generate_caret_pair(repeats: usize) -> (String, String) {
    let before = "word **bold** _it_ ".repeat(repeats);
    let after = "word bold it ".repeat(repeats);
    (before, after)
}
