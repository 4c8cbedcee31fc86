//! Structural feature extraction.
//!
//! One pure pass over a syntax tree. Loop depth is passed down the call by
//! value, so a sibling loop can never inherit the depth of a loop that
//! already closed; only the running maximum lives in the accumulator.

use crate::core::{FeatureSet, SyntaxNode};

#[derive(Debug, Default)]
struct FeatureAccumulator {
    max_loop_depth: u32,
    operation_count: u32,
    has_self_recursion: bool,
    function_name: Option<String>,
}

/// Derive the structural features of `node` in a single traversal.
///
/// The first function definition encountered names the traversal; nested
/// definitions keep feeding the same accumulator without stealing the name.
/// Traversing the same subtree twice yields identical features.
pub fn extract_features(node: &SyntaxNode) -> FeatureSet {
    let mut acc = FeatureAccumulator::default();
    walk(node, 0, &mut acc);

    FeatureSet {
        max_loop_depth: acc.max_loop_depth,
        operation_count: acc.operation_count,
        has_self_recursion: acc.has_self_recursion,
        function_name: acc.function_name,
    }
}

/// Every function definition in the tree, nested definitions included, in
/// source order. For callers that own traversal and score each definition
/// independently.
pub fn collect_functions(node: &SyntaxNode) -> Vec<&SyntaxNode> {
    let mut found = Vec::new();
    collect_into(node, &mut found);
    found
}

fn walk(node: &SyntaxNode, depth: u32, acc: &mut FeatureAccumulator) {
    match node {
        SyntaxNode::FunctionDef { name, body } => {
            if acc.function_name.is_none() {
                acc.function_name = Some(name.clone());
            }
            walk_children(body, depth, acc);
        }
        SyntaxNode::Loop { body } => {
            let inner = depth + 1;
            acc.max_loop_depth = acc.max_loop_depth.max(inner);
            walk_children(body, inner, acc);
        }
        SyntaxNode::Call { callee, args } => {
            acc.operation_count += 1;
            if is_self_call(callee.as_deref(), acc.function_name.as_deref()) {
                acc.has_self_recursion = true;
            }
            walk_children(args, depth, acc);
        }
        SyntaxNode::BinaryOp { operands } | SyntaxNode::Assignment { operands } => {
            acc.operation_count += 1;
            walk_children(operands, depth, acc);
        }
        SyntaxNode::Other { children } => walk_children(children, depth, acc),
    }
}

fn walk_children(children: &[SyntaxNode], depth: u32, acc: &mut FeatureAccumulator) {
    for child in children {
        walk(child, depth, acc);
    }
}

/// Only a direct, syntactic self-reference counts; indirect and mutual
/// recursion stay undetected.
fn is_self_call(callee: Option<&str>, active: Option<&str>) -> bool {
    matches!((callee, active), (Some(c), Some(a)) if c == a)
}

fn collect_into<'a>(node: &'a SyntaxNode, found: &mut Vec<&'a SyntaxNode>) {
    if node.is_function_def() {
        found.push(node);
    }
    for child in node.children() {
        collect_into(child, found);
    }
}
