// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_task_list(blocks: usize, items_per_block: usize) -> String {
    let mut content = String::new();

    for block in 0..blocks {
        content.push_str(&format!("# Block {block}\n\n"));
        for item in 0..items_per_block {
            let checked = if item % 3 == 0 { "[x] " } else { "" };
            let priority = match item % 4 {
                0 => "(a) ",
                1 => "(b) ",
                2 => "(c) ",
                _ => "",
            };
            content.push_str(&format!("- {checked}{priority}task {block}.{item}\n"));
        }
        content.push('\n');
    }

    content
}
