//! Question tree outline rendering

use crate::tree::Node;

/// Render a tree as an indented outline
///
/// Branch children carry `y:`/`n:` markers so the outline reads as the set of
/// question paths the game can take.
pub fn render_to_string(tree: &Node) -> String {
    let mut output = String::new();
    output.push_str(tree.text());
    output.push('\n');

    if let Node::Branch { yes, no, .. } = tree {
        render_child(yes, "y", &mut output, "", false);
        render_child(no, "n", &mut output, "", true);
    }

    output
}

fn render_child(node: &Node, answer: &str, output: &mut String, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(answer);
    output.push_str(": ");
    output.push_str(node.text());
    output.push('\n');

    if let Node::Branch { yes, no, .. } = node {
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        render_child(yes, "y", output, &child_prefix, false);
        render_child(no, "n", output, &child_prefix, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_rendering() {
        let tree = Node::branch(
            "Is it alive?",
            Node::branch("Does it bark?", Node::leaf("dog"), Node::leaf("cat")),
            Node::leaf("rock"),
        );

        let output = render_to_string(&tree);
        let expected = "\
Is it alive?
├── y: Does it bark?
│   ├── y: dog
│   └── n: cat
└── n: rock
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_leaf_rendering() {
        assert_eq!(render_to_string(&Node::leaf("computer")), "computer\n");
    }
}
