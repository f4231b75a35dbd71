//! Common test utilities

use twentyq::game::{Outcome, ScriptedIo, Session};
use twentyq::tree::Node;

/// The two-answer tree used by most round scenarios
pub fn animal_tree() -> Node {
    Node::branch("Is it alive?", Node::leaf("cat"), Node::leaf("rock"))
}

/// A deeper tree for path-integrity checks
pub fn deep_tree() -> Node {
    Node::branch(
        "Is it alive?",
        Node::branch(
            "Is it a mammal?",
            Node::branch("Does it bark?", Node::leaf("dog"), Node::leaf("cat")),
            Node::leaf("snake"),
        ),
        Node::branch("Is it heavy?", Node::leaf("rock"), Node::leaf("feather")),
    )
}

/// Play one scripted round and return the resulting tree, outcome, and the
/// transcript recorded by the scripted collaborator
pub fn play_round<const N: usize>(tree: Node, answers: [&str; N]) -> (Node, Outcome, Vec<String>) {
    let mut session = Session::new(tree);
    let mut io = ScriptedIo::new(answers);

    let outcome = session
        .play_round(&mut io)
        .expect("scripted round should not run out of input");
    assert!(io.exhausted(), "unconsumed scripted answers");

    (session.into_tree(), outcome, io.transcript().to_vec())
}
