//! Guess-and-learn round over the question tree
//!
//! A round walks from the root toward a leaf, asking the branch questions
//! along the way. At the leaf the computer guesses. A wrong guess replaces
//! that leaf with a new branch distinguishing the user's object from the old
//! answer, so the tree grows by one question per loss.

use crate::tree::Node;

use super::io::{GameIo, IoError};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The computer guessed the object
    Win,
    /// The guess was wrong and the tree gained a new question
    Learned,
}

/// Holds the current question tree and plays rounds over it
pub struct Session {
    root: Node,
}

impl Session {
    pub fn new(root: Node) -> Self {
        Session { root }
    }

    /// Start from a single-answer tree
    pub fn fresh(answer: &str) -> Self {
        Session {
            root: Node::leaf(answer),
        }
    }

    pub fn tree(&self) -> &Node {
        &self.root
    }

    pub fn into_tree(self) -> Node {
        self.root
    }

    /// Discard the current tree and play with the given one instead
    pub fn replace_tree(&mut self, root: Node) {
        self.root = root;
    }

    /// Play one round of the game
    ///
    /// All prompts go through `io`. If a prompt fails, the error propagates
    /// and the tree is left exactly as it was before the round: the only
    /// mutation happens after every answer for the round has been collected.
    pub fn play_round(&mut self, io: &mut dyn GameIo) -> Result<Outcome, IoError> {
        ask(&mut self.root, io)
    }
}

fn ask(node: &mut Node, io: &mut dyn GameIo) -> Result<Outcome, IoError> {
    match node {
        Node::Leaf { text } => {
            if io.ask_yes_no(&format!("Would your object happen to be {text}?"))? {
                io.say("Great, I got it right!")?;
                Ok(Outcome::Win)
            } else {
                let name = io.ask_text("What is the name of your object? ")?;
                io.say("Please give me a yes/no question that")?;
                io.say("distinguishes between your object")?;
                let question = io.ask_text("and mine--> ")?;
                let yes_for_new = io.ask_yes_no("And what is the answer for your object?")?;

                let old = std::mem::replace(node, Node::leaf(String::new()));
                *node = if yes_for_new {
                    Node::branch(question, Node::leaf(name), old)
                } else {
                    Node::branch(question, old, Node::leaf(name))
                };
                Ok(Outcome::Learned)
            }
        }
        Node::Branch { text, yes, no } => {
            if io.ask_yes_no(text)? {
                ask(yes, io)
            } else {
                ask(no, io)
            }
        }
    }
}
