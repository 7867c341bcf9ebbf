//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::{Node, Palette};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print a labelled figure, indented
pub fn stat(label: &str, value: usize) {
    println!("  {:<10} {}", format!("{}:", label).green(), value);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One line per role: name, value, and a color swatch where the terminal allows.
pub fn palette_lines(palette: &Palette) -> Vec<String> {
    palette
        .roles()
        .map(|(role, color)| format!("  {:<12} {} {}", role.as_str(), color, swatch(color)))
        .collect()
}

fn swatch(color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => "  ".on_truecolor(r, g, b).to_string(),
        None => String::new(),
    }
}

/// `#rrggbb` → rgb triple.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Label shown for the role column header.
pub fn role_header() -> String {
    format!("  {:<12} {}", "role", "color")
}

/// Catalog forest as a text tree under a synthetic root.
///
/// Built bottom-up with an explicit stack, mirroring the aggregator.
pub fn catalog_tree(root_label: &str, nodes: &[Node]) -> Tree<String> {
    // (node, children already expanded)
    let mut stack: Vec<(&Node, bool)> = nodes.iter().rev().map(|n| (n, false)).collect();
    let mut built: Vec<Tree<String>> = Vec::new();

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            let children = built.split_off(built.len() - node.children.len());
            built.push(Tree::new(node.label()).with_leaves(children));
        } else {
            stack.push((node, true));
            stack.extend(node.children.iter().rev().map(|c| (c, false)));
        }
    }

    Tree::new(root_label.to_string()).with_leaves(built)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_hex_color_when_parsing_then_returns_channels() {
        assert_eq!(parse_hex("#00bcd4"), Some((0, 188, 212)));
        assert_eq!(parse_hex("00bcd4"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn given_nested_catalog_when_rendering_tree_then_preserves_order() {
        let nodes = vec![
            Node::folder("prod", vec![Node::leaf("web", "ssh"), Node::leaf("db", "rdp")]),
            Node::leaf("kiosk", "vnc"),
        ];

        let rendered = catalog_tree("catalog", &nodes).to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "catalog");
        assert!(lines[1].ends_with("prod/"));
        assert!(lines[2].ends_with("web [ssh]"));
        assert!(lines[3].ends_with("db [rdp]"));
        assert!(lines[4].ends_with("kiosk [vnc]"));
        assert_eq!(lines.len(), 5);
    }
}
